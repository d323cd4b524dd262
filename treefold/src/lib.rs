//! Recursive tree rendering with controlled and uncontrolled expansion.
//!
//! `treefold` walks a forest of application nodes, resolves each node's
//! expansion state and hands a [`NodeView`] to a caller-supplied render
//! function. Children are rendered on demand through
//! [`NodeView::render_child_nodes`], so only expanded subtrees are walked.

pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod node;
pub mod state;
pub mod toggle;

pub use config::TreefoldConfig;
pub use engine::{NodeView, TreeId, TreeProps, Treefold};
pub use error::TreefoldError;
pub use node::{Accessors, TreeNode};
pub use state::ExpansionState;
pub use toggle::ToggleProps;

pub mod prelude {
    pub use crate::config::TreefoldConfig;
    pub use crate::engine::{NodeView, TreeId, TreeProps, Treefold};
    pub use crate::error::TreefoldError;
    pub use crate::input::{
        ClickEvent, ClickKind, Event, EventResult, Key, KeyCombo, Modifiers, Position,
    };
    pub use crate::node::{Accessors, TreeNode};
    pub use crate::state::ExpansionState;
    pub use crate::toggle::ToggleProps;
}
