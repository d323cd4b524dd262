//! Tests for trees whose expansion state is owned by the caller.

mod common;

use std::cell::RefCell;

use common::{Item, click, count, default_nodes, find, item, key};
use serde_json::{Value, json};
use treefold::prelude::*;

fn render_expanded<'a>(tree: &Treefold, nodes: &'a [Value], expanded: &'a [&str]) -> Vec<Item<'a>> {
    tree.render(
        TreeProps::new()
            .nodes(nodes)
            .is_node_expanded(move |node: &Value| expanded.contains(&node.id().as_str()))
            .on_toggle_expand(|_: &Value| {})
            .render(item),
    )
    .expect("render pass")
}

#[test]
fn test_toggle_reports_original_node() {
    for event in [click(), key(Key::Enter), key(Key::Space)] {
        let nodes = default_nodes();
        let tree = Treefold::new();
        let toggled: RefCell<Vec<Value>> = RefCell::new(Vec::new());

        let items = tree
            .render(
                TreeProps::new()
                    .nodes(&nodes)
                    .is_node_expanded(|_: &Value| false)
                    .on_toggle_expand(|node: &Value| toggled.borrow_mut().push(node.clone()))
                    .render(item),
            )
            .expect("render pass");
        assert_eq!(count(&items, |_| true), 1);

        find(&items, "html").toggle.handle(&event);

        let toggled = toggled.borrow();
        assert_eq!(toggled.len(), 1);
        assert_eq!(toggled[0]["id"], "html");
        assert_eq!(toggled[0], nodes[0]);
    }
}

#[test]
fn test_toggle_does_not_touch_engine_state() {
    let nodes = default_nodes();
    let tree = Treefold::new();
    let queries = RefCell::new(0usize);

    let pass = || {
        tree.render(
            TreeProps::new()
                .nodes(&nodes)
                .is_node_expanded(|_: &Value| {
                    *queries.borrow_mut() += 1;
                    false
                })
                .render(|view| (view.is_expanded(), view.toggle_props())),
        )
        .expect("render pass")
    };

    let first = pass();
    first[0].1.handle(&click());
    first[0].1.handle(&click());

    assert!(tree.state().is_empty());
    assert!(!tree.needs_render());

    let second = pass();
    assert!(!second[0].0);
    assert_eq!(*queries.borrow(), 2);
}

#[test]
fn test_renders_collapsed_and_expanded_nodes() {
    let nodes = default_nodes();
    let tree = Treefold::new();
    let items = render_expanded(&tree, &nodes, &["html", "body"]);

    assert_eq!(count(&items, |_| true), 7);
    assert_eq!(count(&items, |i| i.folder), 5);
    assert_eq!(count(&items, |i| i.folder && i.expanded), 2);
    assert_eq!(count(&items, |i| i.folder && !i.expanded), 3);
    assert_eq!(count(&items, |i| !i.folder), 2);
}

#[test]
fn test_renders_empty_expanded_nodes() {
    let nodes = default_nodes();
    let tree = Treefold::new();
    let items = render_expanded(&tree, &nodes, &["html", "body", "h2.subtitle"]);

    assert_eq!(count(&items, |i| i.empty), 1);
    let subtitle = find(&items, "h2.subtitle");
    assert!(subtitle.expanded);
    assert!(!subtitle.folder);
}

#[test]
fn test_empty_children_never_toggle() {
    let nodes = default_nodes();
    let tree = Treefold::new();
    let toggled = RefCell::new(0usize);

    let items = tree
        .render(
            TreeProps::new()
                .nodes(&nodes)
                .is_node_expanded(|_: &Value| true)
                .on_toggle_expand(|_: &Value| *toggled.borrow_mut() += 1)
                .render(item),
        )
        .expect("render pass");

    for id in ["h2.subtitle", "title.link", "div.footer", "meta"] {
        let leaf = find(&items, id);
        assert!(!leaf.toggle.is_active());
        assert_eq!(leaf.toggle.handle(&click()), EventResult::Ignored);
        assert_eq!(leaf.toggle.handle(&key(Key::Enter)), EventResult::Ignored);
    }
    assert_eq!(*toggled.borrow(), 0);
}

#[test]
fn test_always_expanded_renders_every_node() {
    let nodes = vec![json!({
        "id": "root",
        "children": [
            { "id": "left", "children": [{ "id": "left.1" }, { "id": "left.2" }] },
            { "id": "right", "children": [{ "id": "right.1" }, { "id": "right.2" }] },
        ],
    })];
    let tree = Treefold::new();

    let items = tree
        .render(
            TreeProps::new()
                .nodes(&nodes)
                .is_node_expanded(|_: &Value| true)
                .render(item),
        )
        .expect("render pass");

    assert_eq!(count(&items, |_| true), 7);
    assert_eq!(count(&items, |i| i.depth == 2), 4);
}

#[test]
fn test_query_wins_over_instance_state() {
    let nodes = default_nodes();
    let tree = Treefold::new();
    tree.state().expand("html");

    let items = render_expanded(&tree, &nodes, &[]);
    assert_eq!(count(&items, |_| true), 1);
}

#[test]
fn test_query_wins_over_controller() {
    let nodes = default_nodes();
    let tree = Treefold::new();
    let controller = ExpansionState::new();
    let toggled = RefCell::new(Vec::new());

    let items = tree
        .render(
            TreeProps::new()
                .nodes(&nodes)
                .controlled_by(&controller)
                .is_node_expanded(|node: &Value| node.id() == "html")
                .on_toggle_expand(|node: &Value| toggled.borrow_mut().push(node.id()))
                .render(item),
        )
        .expect("render pass");

    assert!(items[0].expanded);
    assert_eq!(count(&items, |_| true), 3);
    assert!(!controller.is_expanded("html"));

    items[0].toggle.handle(&click());

    assert_eq!(*toggled.borrow(), vec!["html".to_string()]);
    assert!(!controller.is_expanded("html"));
    assert!(controller.is_empty());
    assert!(!controller.is_dirty());
    assert!(tree.state().is_empty());
}

#[test]
fn test_controller_store_is_flipped() {
    let nodes = default_nodes();
    let tree = Treefold::new();
    let controller = ExpansionState::new();

    let pass = || {
        tree.render(
            TreeProps::new()
                .nodes(&nodes)
                .controlled_by(&controller)
                .render(item),
        )
        .expect("render pass")
    };

    let items = pass();
    assert_eq!(count(&items, |_| true), 1);
    items[0].toggle.handle(&click());

    assert!(controller.is_expanded("html"));
    assert!(controller.is_dirty());
    assert!(tree.state().is_empty());
    assert_eq!(count(&pass(), |_| true), 3);

    controller.expand("body");
    assert_eq!(count(&pass(), |_| true), 7);

    controller.collapse_all();
    assert_eq!(count(&pass(), |_| true), 1);
}

#[test]
fn test_controller_can_expand_everything() {
    let nodes = default_nodes();
    let tree = Treefold::new();
    let controller = ExpansionState::new();
    controller.expand_all(&nodes, &Accessors::default());

    let items = tree
        .render(
            TreeProps::new()
                .nodes(&nodes)
                .controlled_by(&controller)
                .render(item),
        )
        .expect("render pass");

    assert_eq!(count(&items, |_| true), 12);
    assert_eq!(count(&items, |i| i.folder && !i.expanded), 0);
}
