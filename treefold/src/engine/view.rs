//! Per-node view-model and the recursive walk behind it.

use std::rc::Rc;

use log::{debug, trace};

use crate::input::{ClickKind, Key};
use crate::node::Accessors;
use crate::state::ExpansionState;
use crate::toggle::ToggleProps;

use super::TreeId;
use super::props::{ExpandedQuery, RenderFn, ToggleCallback};

/// Where a pass reads and writes expansion state.
pub(crate) enum Expansion<'a, T> {
    /// Caller answers queries and applies toggles itself.
    Controlled(ExpandedQuery<'a, T>),
    /// Engine flips ids in a store (the instance's own or a caller's).
    Managed(ExpansionState),
}

/// Configuration shared by every level of one render pass.
pub(crate) struct Pass<'a, T, O> {
    pub(crate) tree: TreeId,
    pub(crate) render: RenderFn<'a, T, O>,
    pub(crate) accessors: Accessors<'a, T>,
    pub(crate) expansion: Expansion<'a, T>,
    pub(crate) on_toggle_expand: Option<ToggleCallback<'a, T>>,
    pub(crate) keys: Rc<[Key]>,
    pub(crate) click: ClickKind,
}

impl<'a, T: 'a, O: 'a> Pass<'a, T, O> {
    /// Render one level of siblings, in input order.
    pub(crate) fn render_level(self: &Rc<Self>, nodes: &'a [T], depth: usize) -> Vec<O> {
        trace!(
            "{}: rendering {} node(s) at depth {}",
            self.tree,
            nodes.len(),
            depth
        );
        nodes
            .iter()
            .map(|node| self.render_node(node, depth))
            .collect()
    }

    fn render_node(self: &Rc<Self>, node: &'a T, depth: usize) -> O {
        let id = self.accessors.id(node);
        let children = self.accessors.children(node);
        let is_expanded = match &self.expansion {
            Expansion::Controlled(query) => query(node),
            Expansion::Managed(state) => state.is_expanded(&id),
        };

        let view = NodeView {
            node,
            id,
            depth,
            is_expanded,
            children,
            pass: Rc::clone(self),
        };
        (self.render)(&view)
    }

    fn toggle_handler(&self, node: &'a T, id: String) -> Rc<dyn Fn() + 'a> {
        let tree = self.tree;
        let callback = self.on_toggle_expand.clone();
        let store = match &self.expansion {
            Expansion::Controlled(_) => None,
            Expansion::Managed(state) => Some(state.clone()),
        };

        Rc::new(move || {
            if let Some(callback) = &callback {
                callback(node);
            }
            match &store {
                Some(state) => {
                    let expanded = state.toggle(&id);
                    debug!("{tree}: toggled '{id}' (expanded: {expanded})");
                }
                None => debug!("{tree}: toggle requested for '{id}' (controlled)"),
            }
        })
    }
}

/// The view-model passed to the render function.
///
/// Recomputed on every pass. Children are not rendered until
/// [`render_child_nodes`](Self::render_child_nodes) is called, so a
/// collapsed subtree costs nothing.
pub struct NodeView<'a, T, O> {
    node: &'a T,
    id: String,
    depth: usize,
    is_expanded: bool,
    children: &'a [T],
    pass: Rc<Pass<'a, T, O>>,
}

impl<'a, T: 'a, O: 'a> NodeView<'a, T, O> {
    /// The original node.
    pub fn node(&self) -> &'a T {
        self.node
    }

    /// The node's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Recursion depth (root nodes are at the pass's starting depth).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether the node has a non-empty children collection.
    pub fn is_folder(&self) -> bool {
        self.has_child_nodes()
    }

    /// Whether the node is expanded.
    ///
    /// Reported as resolved even for leaves, so a renderer can draw an
    /// expanded-but-empty placeholder.
    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    pub fn has_child_nodes(&self) -> bool {
        !self.children.is_empty()
    }

    /// The node's children as returned by the children accessor.
    pub fn child_nodes(&self) -> &'a [T] {
        self.children
    }

    /// Toggle bindings for the node. Inert for leaves.
    pub fn toggle_props(&self) -> ToggleProps<'a> {
        let keys = Rc::clone(&self.pass.keys);
        if self.is_folder() {
            let toggle = self.pass.toggle_handler(self.node, self.id.clone());
            ToggleProps::new(toggle, keys, self.pass.click)
        } else {
            ToggleProps::inert(keys, self.pass.click)
        }
    }

    /// Toggle the node programmatically. No-op for leaves.
    pub fn toggle(&self) {
        if self.is_folder() {
            (self.pass.toggle_handler(self.node, self.id.clone()))();
        }
    }

    /// Render the children at `depth + 1` with the same configuration.
    ///
    /// Works for collapsed nodes too; callers usually guard it with
    /// `is_expanded() && has_child_nodes()`. A cyclic children relation
    /// recurses without bound here.
    pub fn render_child_nodes(&self) -> Vec<O> {
        self.pass.render_level(self.children, self.depth + 1)
    }
}

impl<T: std::fmt::Debug, O> std::fmt::Debug for NodeView<'_, T, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeView")
            .field("node", self.node)
            .field("id", &self.id)
            .field("depth", &self.depth)
            .field("is_folder", &!self.children.is_empty())
            .field("is_expanded", &self.is_expanded)
            .finish_non_exhaustive()
    }
}
