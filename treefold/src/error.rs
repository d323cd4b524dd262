//! Error types for render passes.

use thiserror::Error;

/// Errors returned by [`Treefold::render`](crate::Treefold::render).
///
/// Both variants are caller contract violations detected before any node
/// is visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreefoldError {
    /// No root node slice was given.
    #[error("Treefold render requires `nodes`")]
    MissingNodes,

    /// Neither `render` nor the `children` slot was given.
    #[error("Treefold render requires a render function (`render` or `children`)")]
    MissingRender,
}
