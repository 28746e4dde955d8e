//! Cross-cutting error types for Tasker.
//!
//! The manager itself has no failure paths for well-typed input. Errors only
//! arise at string boundaries (category names, id text) and when an id does
//! not refer to a stored task. Configuration errors live in `tasker-config`,
//! and the CLI converges everything into `anyhow`.

use thiserror::Error;

use crate::ids::TaskId;

/// Errors that can be raised by the Tasker core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A category name did not match any registered category.
    #[error("Unknown category: '{name}' (expected one of: Work, Personal)")]
    UnknownCategory { name: String },

    /// No stored task carries the given id.
    #[error("Task not found: {id}")]
    NotFound { id: TaskId },

    /// Task id text could not be parsed.
    #[error("Invalid task id: {0}")]
    InvalidId(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
