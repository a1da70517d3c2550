//! Service core for the todo API.
//!
//! # Overview
//! `TodoOrchestrator` implements list, get, create, update and delete on top
//! of an abstract `TodoStore`, translating between the wire-facing
//! `TodoRepresentation` and the stored `Todo`. Nothing here does I/O beyond
//! the store call each operation makes, so the crate is fully synchronous.
//!
//! # Design
//! - Failures are values: `TodoError::NotFound` and
//!   `TodoError::BadIdentifier` for the caller-recoverable cases, anything
//!   else from the store wrapped in `TodoError::Store`.
//! - `InMemoryTodoStore` is the reference backend; durable backends
//!   implement the same trait.
//! - Length rules live in `validation` and are run by the HTTP layer before
//!   an operation is invoked.

pub mod error;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{StoreError, TodoError};
pub use service::TodoOrchestrator;
pub use store::{InMemoryTodoStore, TodoStore};
pub use types::{Todo, TodoRepresentation};
pub use validation::{validate, ValidationError};
