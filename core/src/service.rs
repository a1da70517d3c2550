//! Service layer between the HTTP handlers and the store.
//!
//! # Design
//! Each operation issues exactly one store call and converts between
//! `TodoRepresentation` and `Todo` on the way in and out. The only decision
//! made here is identity reconciliation on `update`. Input lengths are
//! checked by the caller before an operation is invoked.

use crate::error::{StoreError, TodoError};
use crate::store::TodoStore;
use crate::types::{Todo, TodoRepresentation};

/// Runs the five todo operations on top of a `TodoStore`.
pub struct TodoOrchestrator<S> {
    store: S,
}

impl<S: TodoStore> TodoOrchestrator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All todos, in the order the store returns them.
    pub fn list(&self) -> Result<Vec<TodoRepresentation>, TodoError> {
        let todos = self.store.list_all()?;
        Ok(todos.into_iter().map(TodoRepresentation::from).collect())
    }

    pub fn get_by_id(&self, id: &str) -> Result<TodoRepresentation, TodoError> {
        self.store
            .find(id)?
            .map(TodoRepresentation::from)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))
    }

    /// Saves `input` as given, including an empty id, and returns what the
    /// store persisted so a store-assigned id reaches the caller.
    pub fn create(&self, input: TodoRepresentation) -> Result<TodoRepresentation, TodoError> {
        let saved = self.store.save(Todo::from(input))?;
        Ok(saved.into())
    }

    /// Replaces the todo at `path_id` with `input`.
    ///
    /// A body id that is empty is taken to mean `path_id`; a non-empty body
    /// id that differs from `path_id` fails with `BadIdentifier` before the
    /// store is touched. The save is an upsert, so a missing `path_id` is
    /// created.
    pub fn update(
        &self,
        path_id: &str,
        input: TodoRepresentation,
    ) -> Result<TodoRepresentation, TodoError> {
        if let Some(body_id) = input.supplied_id() {
            if body_id != path_id {
                return Err(TodoError::BadIdentifier {
                    path_id: path_id.to_string(),
                    body_id: body_id.to_string(),
                });
            }
        }

        let canonical = TodoRepresentation {
            id: path_id.to_string(),
            ..input
        };
        let saved = self.store.save(canonical.into())?;
        Ok(saved.into())
    }

    /// Removes the todo at `id` and returns what was removed.
    pub fn delete(&self, id: &str) -> Result<TodoRepresentation, TodoError> {
        let removed = self.store.delete(id).map_err(|err| match err {
            StoreError::NotFound(_) => TodoError::NotFound(id.to_string()),
            other => TodoError::Store(other),
        })?;
        Ok(removed.into())
    }
}
