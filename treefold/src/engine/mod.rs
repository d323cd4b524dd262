//! The recursive tree engine.
//!
//! A [`Treefold`] is one mounted tree. It owns the uncontrolled expansion
//! state and survives across render passes; dropping it discards that
//! state. Each pass is described by a [`TreeProps`] and returns one output
//! per root node.
//!
//! # Example
//!
//! ```ignore
//! use treefold::prelude::*;
//!
//! let tree = Treefold::new();
//!
//! let lines = tree.render(
//!     TreeProps::new().nodes(&roots).render(|view: &NodeView<'_, Value, String>| {
//!         let mut line = format!("{}{}", "  ".repeat(view.depth()), view.id());
//!         if view.is_expanded() && view.has_child_nodes() {
//!             for child in view.render_child_nodes() {
//!                 line.push('\n');
//!                 line.push_str(&child);
//!             }
//!         }
//!         line
//!     }),
//! )?;
//! ```

mod props;
mod view;

use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{trace, warn};

use crate::config::TreefoldConfig;
use crate::error::TreefoldError;
use crate::state::ExpansionState;

pub use props::{ExpandedQuery, RenderFn, ToggleCallback, TreeProps};
pub use view::NodeView;

use view::{Expansion, Pass};

/// Unique identifier for a tree instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(usize);

impl TreeId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TreeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__treefold_{}", self.0)
    }
}

/// A mounted tree.
///
/// Holds the instance-private expansion store used when a pass supplies
/// neither [`TreeProps::is_node_expanded`] nor
/// [`TreeProps::controlled_by`]. Toggling through that store marks it
/// dirty; hosts poll [`needs_render`](Self::needs_render) or install a
/// notifier with `self.state().on_change(..)` to schedule the next pass.
#[derive(Debug)]
pub struct Treefold {
    id: TreeId,
    config: TreefoldConfig,
    state: ExpansionState,
}

impl Treefold {
    /// Mount a tree with the default config.
    pub fn new() -> Self {
        Self::with_config(TreefoldConfig::default())
    }

    /// Mount a tree with the given config.
    pub fn with_config(config: TreefoldConfig) -> Self {
        Self {
            id: TreeId::new(),
            config,
            state: ExpansionState::new(),
        }
    }

    /// Get the unique ID.
    pub fn id(&self) -> TreeId {
        self.id
    }

    pub fn config(&self) -> &TreefoldConfig {
        &self.config
    }

    /// The instance's own expansion store.
    pub fn state(&self) -> &ExpansionState {
        &self.state
    }

    /// Whether the instance store changed since the last pass.
    pub fn needs_render(&self) -> bool {
        self.state.is_dirty()
    }

    /// Run a render pass.
    ///
    /// Fails before visiting any node when `nodes` or the render function
    /// is missing. Accessor panics propagate; ids must be unique across
    /// the forest and the children relation must be acyclic along every
    /// expanded path. Neither is checked.
    pub fn render<'a, T: 'a, O: 'a>(
        &self,
        props: TreeProps<'a, T, O>,
    ) -> Result<Vec<O>, TreefoldError> {
        let nodes = props.nodes.ok_or(TreefoldError::MissingNodes)?;
        let render = match (props.render, props.slot) {
            (Some(render), Some(_)) => {
                warn!(
                    "{} ({}): both `render` and `children` given, using `render`",
                    self.config.name, self.id
                );
                render
            }
            (Some(render), None) | (None, Some(render)) => render,
            (None, None) => return Err(TreefoldError::MissingRender),
        };

        let expansion = match (props.is_node_expanded, props.controller) {
            (Some(query), Some(_)) => {
                warn!(
                    "{} ({}): both `is_node_expanded` and `controlled_by` given, using `is_node_expanded`",
                    self.config.name, self.id
                );
                Expansion::Controlled(query)
            }
            (Some(query), None) => Expansion::Controlled(query),
            (None, Some(controller)) => Expansion::Managed(controller),
            (None, None) => {
                self.state.clear_dirty();
                Expansion::Managed(self.state.clone())
            }
        };

        trace!(
            "{} ({}): render pass over {} root node(s)",
            self.config.name,
            self.id,
            nodes.len()
        );

        let pass = Rc::new(Pass {
            tree: self.id,
            render,
            accessors: props.accessors,
            expansion,
            on_toggle_expand: props.on_toggle_expand,
            keys: self.config.activation_keys.iter().copied().collect(),
            click: self.config.activation_click,
        });
        Ok(pass.render_level(nodes, props.depth))
    }
}

impl Default for Treefold {
    fn default() -> Self {
        Self::new()
    }
}
