//! Entity and wire representation of a todo.
//!
//! # Design
//! `Todo` is what the store owns; `TodoRepresentation` is what crosses the
//! HTTP boundary. They carry the same three fields but are kept as separate
//! types so the store never sees a wire value and the boundary never sees a
//! stored entity. Conversion in both directions is a plain field copy.

use serde::{Deserialize, Deserializer, Serialize};

/// A persisted todo. Any `Todo` returned by a store has a non-empty `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// The JSON shape of a todo as seen by API clients.
///
/// On input every field may be absent or `null`, which decodes to the empty
/// string. An empty `id` means "not supplied". On output all three keys are
/// always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRepresentation {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

impl TodoRepresentation {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// A representation with no id, as sent by clients on create.
    pub fn unidentified(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(String::new(), title, content)
    }

    /// Returns the body id if the caller actually supplied one.
    pub fn supplied_id(&self) -> Option<&str> {
        if self.id.is_empty() {
            None
        } else {
            Some(&self.id)
        }
    }
}

impl From<TodoRepresentation> for Todo {
    fn from(r: TodoRepresentation) -> Self {
        Todo {
            id: r.id,
            title: r.title,
            content: r.content,
        }
    }
}

impl From<Todo> for TodoRepresentation {
    fn from(t: Todo) -> Self {
        TodoRepresentation {
            id: t.id,
            title: t.title,
            content: t.content,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
