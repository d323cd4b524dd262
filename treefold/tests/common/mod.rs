//! Shared fixtures for treefold integration tests.

#![allow(dead_code)]

use serde_json::{Map, Value, json};
use treefold::prelude::*;

/// The document tree used across tests.
///
/// 12 nodes, 4 levels. `title.link` and `h2.subtitle` carry empty children
/// arrays, `meta`, `title`, the list items and `div.footer` carry none.
pub fn build_nodes(id_key: &str, children_key: &str) -> Vec<Value> {
    let node = |id: &str, name: &str, children: Option<Vec<Value>>| {
        let mut fields = Map::new();
        fields.insert(id_key.to_string(), json!(id));
        fields.insert("name".to_string(), json!(name));
        if let Some(children) = children {
            fields.insert(children_key.to_string(), Value::Array(children));
        }
        Value::Object(fields)
    };

    vec![node(
        "html",
        "Html document",
        Some(vec![
            node(
                "head",
                "Html head",
                Some(vec![
                    node("meta", "meta", None),
                    node("title", "title", None),
                ]),
            ),
            node(
                "body",
                "Html body",
                Some(vec![
                    node(
                        "h1.title",
                        "Page title",
                        Some(vec![node("title.link", "Title link", Some(vec![]))]),
                    ),
                    node("h2.subtitle", "Page subtitle", Some(vec![])),
                    node(
                        "ul",
                        "List of items",
                        Some(vec![
                            node("list-item-1", "Hello", None),
                            node("list-item-2", "World", None),
                        ]),
                    ),
                    node("div.footer", "Page footer", None),
                ]),
            ),
        ]),
    )]
}

pub fn default_nodes() -> Vec<Value> {
    build_nodes("id", "children")
}

/// A rendered list item, shaped like a `<li>` with an optional nested list.
#[derive(Debug)]
pub struct Item<'a> {
    pub id: String,
    pub name: String,
    pub depth: usize,
    pub folder: bool,
    pub expanded: bool,
    pub toggle: ToggleProps<'a>,
    /// Rendered children, present when the node is expanded with children.
    pub children: Vec<Item<'a>>,
    /// Expanded node without children shows an "Empty node" placeholder.
    pub empty: bool,
}

/// Render function producing [`Item`]s.
pub fn item<'a>(view: &NodeView<'a, Value, Item<'a>>) -> Item<'a> {
    let children = if view.is_expanded() && view.has_child_nodes() {
        view.render_child_nodes()
    } else {
        Vec::new()
    };
    Item {
        id: view.id().to_string(),
        name: view.node()["name"].as_str().unwrap_or_default().to_string(),
        depth: view.depth(),
        folder: view.is_folder(),
        expanded: view.is_expanded(),
        toggle: view.toggle_props(),
        children,
        empty: view.is_expanded() && !view.has_child_nodes(),
    }
}

/// All items in pre-order.
pub fn flatten<'i, 'a>(items: &'i [Item<'a>]) -> Vec<&'i Item<'a>> {
    let mut out = Vec::new();
    for item in items {
        out.push(item);
        out.extend(flatten(&item.children));
    }
    out
}

pub fn ids(items: &[Item<'_>]) -> Vec<String> {
    flatten(items).iter().map(|item| item.id.clone()).collect()
}

pub fn find<'i, 'a>(items: &'i [Item<'a>], id: &str) -> &'i Item<'a> {
    flatten(items)
        .into_iter()
        .find(|item| item.id == id)
        .unwrap_or_else(|| panic!("no rendered item '{id}'"))
}

pub fn count(items: &[Item<'_>], predicate: impl Fn(&Item<'_>) -> bool) -> usize {
    flatten(items).into_iter().filter(|item| predicate(item)).count()
}

pub fn click() -> Event {
    Event::Click(ClickEvent::primary(Position::default(), Modifiers::NONE))
}

pub fn key(key: Key) -> Event {
    Event::Key(KeyCombo::key(key))
}

/// Render function producing one outline line per visible node.
pub fn outline<'a>(view: &NodeView<'a, Value, Vec<String>>) -> Vec<String> {
    let kind = if view.is_folder() { "folder" } else { "leaf" };
    let mut lines = vec![format!("{}{} ({kind})", "  ".repeat(view.depth()), view.id())];
    if view.is_expanded() && view.has_child_nodes() {
        lines.extend(view.render_child_nodes().into_iter().flatten());
    }
    lines
}
