//! Tree instance configuration.

use crate::input::{ClickKind, Key};

/// Per-instance configuration.
///
/// Controls how a [`Treefold`](crate::Treefold) instance labels itself in
/// logs and which input activates a folder toggle.
#[derive(Debug, Clone)]
pub struct TreefoldConfig {
    /// Display name used in log lines.
    pub name: &'static str,

    /// Keys that toggle a folder. Modifiers are not considered.
    pub activation_keys: Vec<Key>,

    /// Click kind that toggles a folder.
    pub activation_click: ClickKind,
}

impl Default for TreefoldConfig {
    fn default() -> Self {
        Self {
            name: "Treefold",
            activation_keys: vec![Key::Enter, Key::Space],
            activation_click: ClickKind::Primary,
        }
    }
}

impl TreefoldConfig {
    /// Create a new config with the given name.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Replace the activation keys.
    pub fn activation_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.activation_keys = keys.into_iter().collect();
        self
    }

    /// Set the click kind that toggles.
    pub fn activation_click(mut self, kind: ClickKind) -> Self {
        self.activation_click = kind;
        self
    }
}
