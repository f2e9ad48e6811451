//! Errors surfaced by [`Tree`][crate::Tree] operations.

use thiserror::Error;

/// The ways a tree operation can fail. Almost every operation is total, so this
/// only covers queries that need at least one node to answer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The operation needs a non-empty tree but the tree has no nodes.
    #[error("operation requires a non-empty tree")]
    Empty,
}
