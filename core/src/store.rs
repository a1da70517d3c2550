//! Persistence contract for todos, plus an in-memory backend.
//!
//! # Design
//! `TodoStore` is synchronous and object safe so the orchestrator can run
//! against `Arc<dyn TodoStore>`. Implementations own their own consistency:
//! each call must return a result that matches some state of the store at
//! the time of the call. Timeouts and retries, if any, live here too.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::error::StoreError;
use crate::types::Todo;

/// Mapping from id to `Todo`.
pub trait TodoStore: Send + Sync {
    /// All stored todos. An empty store yields an empty `Vec`.
    fn list_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// The todo stored under `id`, or `None`.
    fn find(&self, id: &str) -> Result<Option<Todo>, StoreError>;

    /// Inserts or replaces `todo` by id and returns what was persisted.
    fn save(&self, todo: Todo) -> Result<Todo, StoreError>;

    /// Removes and returns the todo stored under `id`.
    ///
    /// Fails with `StoreError::NotFound` if there is none.
    fn delete(&self, id: &str) -> Result<Todo, StoreError>;
}

impl<S: TodoStore + ?Sized> TodoStore for Arc<S> {
    fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        (**self).list_all()
    }

    fn find(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        (**self).find(id)
    }

    fn save(&self, todo: Todo) -> Result<Todo, StoreError> {
        (**self).save(todo)
    }

    fn delete(&self, id: &str) -> Result<Todo, StoreError> {
        (**self).delete(id)
    }
}

#[derive(Default)]
struct Entries {
    /// Ids in first-insertion order.
    order: Vec<String>,
    by_id: HashMap<String, Todo>,
}

/// In-process `TodoStore` with no external side effects.
///
/// Listing follows first-insertion order; replacing an existing id keeps its
/// position. Saving a todo with an empty id assigns a fresh UUID v4.
#[derive(Default)]
pub struct InMemoryTodoStore {
    entries: RwLock<Entries>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("in-memory store lock poisoned".to_string())
}

impl TodoStore for InMemoryTodoStore {
    fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries
            .order
            .iter()
            .filter_map(|id| entries.by_id.get(id).cloned())
            .collect())
    }

    fn find(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.by_id.get(id).cloned())
    }

    fn save(&self, mut todo: Todo) -> Result<Todo, StoreError> {
        if todo.id.is_empty() {
            todo.id = Uuid::new_v4().to_string();
            tracing::debug!(id = %todo.id, "assigned id to new todo");
        }

        let mut entries = self.entries.write().map_err(poisoned)?;
        if entries.by_id.insert(todo.id.clone(), todo.clone()).is_none() {
            entries.order.push(todo.id.clone());
            tracing::debug!(id = %todo.id, "inserted todo");
        } else {
            tracing::debug!(id = %todo.id, "replaced todo");
        }
        Ok(todo)
    }

    fn delete(&self, id: &str) -> Result<Todo, StoreError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        let removed = entries
            .by_id
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        entries.order.retain(|existing| existing != id);
        tracing::debug!(id, "deleted todo");
        Ok(removed)
    }
}
