//! Error types for the todo core.
//!
//! # Design
//! `StoreError` is what a persistence backend reports. `TodoError` is what
//! the orchestrator returns: the two caller-recoverable kinds (`NotFound`,
//! `BadIdentifier`) get dedicated variants so the boundary can map them to
//! 404 and 400; any other store failure is carried through untouched in
//! `Store`.

use thiserror::Error;

/// Failures reported by a `TodoStore` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No todo is stored under this id.
    #[error("todo not found: {0}")]
    NotFound(String),

    /// The backend could not serve the call.
    #[error("todo store unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned by `TodoOrchestrator` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// The requested todo does not exist.
    #[error("todo not found: {0}")]
    NotFound(String),

    /// The path id and the body id were both supplied and differ.
    #[error("path id `{path_id}` does not match body id `{body_id}`")]
    BadIdentifier { path_id: String, body_id: String },

    /// Any other store failure, unchanged.
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for TodoError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => TodoError::NotFound(id),
            other => TodoError::Store(other),
        }
    }
}
