//! Per-pass render parameters.

use std::rc::Rc;

use crate::node::{Accessors, TreeNode};
use crate::state::ExpansionState;

use super::view::NodeView;

/// Presentation hook called once per rendered node.
pub type RenderFn<'a, T, O> = Rc<dyn Fn(&NodeView<'a, T, O>) -> O + 'a>;

/// Controlled-mode expansion query.
pub type ExpandedQuery<'a, T> = Rc<dyn Fn(&T) -> bool + 'a>;

/// Callback fired with the original node on every toggle.
pub type ToggleCallback<'a, T> = Rc<dyn Fn(&T) + 'a>;

/// Parameters of one render pass.
///
/// `nodes` and a render function are required; everything else has a
/// default. Expansion state is resolved in this order:
///
/// 1. [`is_node_expanded`](Self::is_node_expanded) (controlled, the caller
///    owns and updates the state)
/// 2. [`controlled_by`](Self::controlled_by) (a caller-owned store that the
///    engine flips on toggle)
/// 3. the rendering instance's own store (uncontrolled)
///
/// # Example
///
/// ```ignore
/// let out = tree.render(
///     TreeProps::new()
///         .nodes(&roots)
///         .get_node_children(|n: &Value| n.get("items").and_then(Value::as_array).map(Vec::as_slice))
///         .render(|view| row(view)),
/// )?;
/// ```
pub struct TreeProps<'a, T, O> {
    pub(crate) nodes: Option<&'a [T]>,
    pub(crate) render: Option<RenderFn<'a, T, O>>,
    pub(crate) slot: Option<RenderFn<'a, T, O>>,
    pub(crate) accessors: Accessors<'a, T>,
    pub(crate) is_node_expanded: Option<ExpandedQuery<'a, T>>,
    pub(crate) on_toggle_expand: Option<ToggleCallback<'a, T>>,
    pub(crate) controller: Option<ExpansionState>,
    pub(crate) depth: usize,
}

impl<'a, T: TreeNode + 'a, O: 'a> TreeProps<'a, T, O> {
    /// Create props using the [`TreeNode`] accessors.
    pub fn new() -> Self {
        Self::with_accessors(Accessors::default())
    }
}

impl<'a, T: TreeNode + 'a, O: 'a> Default for TreeProps<'a, T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: 'a, O: 'a> TreeProps<'a, T, O> {
    /// Create props with explicit accessors, for types without a
    /// [`TreeNode`] impl.
    pub fn with_accessors(accessors: Accessors<'a, T>) -> Self {
        Self {
            nodes: None,
            render: None,
            slot: None,
            accessors,
            is_node_expanded: None,
            on_toggle_expand: None,
            controller: None,
            depth: 0,
        }
    }

    /// Set the root nodes.
    pub fn nodes(mut self, nodes: &'a [T]) -> Self {
        self.nodes = Some(nodes);
        self
    }

    /// Set the render function. Takes precedence over [`children`](Self::children).
    pub fn render(mut self, render: impl Fn(&NodeView<'a, T, O>) -> O + 'a) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    /// Set the render function through the children slot.
    pub fn children(mut self, render: impl Fn(&NodeView<'a, T, O>) -> O + 'a) -> Self {
        self.slot = Some(Rc::new(render));
        self
    }

    /// Read ids with a custom accessor.
    pub fn get_node_id(mut self, id: impl Fn(&T) -> String + 'a) -> Self {
        self.accessors = self.accessors.with_id(id);
        self
    }

    /// Read children with a custom accessor.
    pub fn get_node_children(mut self, children: impl Fn(&T) -> Option<&[T]> + 'a) -> Self {
        self.accessors = self.accessors.with_children(children);
        self
    }

    /// Switch to controlled mode: expansion is answered by `query`.
    pub fn is_node_expanded(mut self, query: impl Fn(&T) -> bool + 'a) -> Self {
        self.is_node_expanded = Some(Rc::new(query));
        self
    }

    /// Report every toggle attempt.
    pub fn on_toggle_expand(mut self, callback: impl Fn(&T) + 'a) -> Self {
        self.on_toggle_expand = Some(Rc::new(callback));
        self
    }

    /// Keep expansion state in a caller-owned store.
    pub fn controlled_by(mut self, state: &ExpansionState) -> Self {
        self.controller = Some(state.clone());
        self
    }

    /// Set the depth of the root nodes.
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}
