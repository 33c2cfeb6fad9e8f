//! Error types for todo operations and the backing store.

use thiserror::Error;

use crate::config::EMPTY_INPUT_MESSAGE;

/// Common result type for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Result type for key-value store access
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum TodoError {
    /// Submitted text was empty or whitespace only. Displays the
    /// user-facing message shown under the input field.
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,
    #[error("invalid todo snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Key-value store failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}
