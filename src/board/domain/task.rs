//! Task entity.

use super::EntityId;
use serde::{Deserialize, Serialize};

/// A unit of content owned by exactly one column.
///
/// `column_id` is the only ownership link: no separate membership list
/// exists, and a task's position inside its column is its relative position
/// in the board's flat task sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: EntityId,
    column_id: EntityId,
    content: String,
}

impl Task {
    /// Creates a task attached to `column_id`.
    #[must_use]
    pub fn new(id: EntityId, column_id: EntityId, content: impl Into<String>) -> Self {
        Self {
            id,
            column_id,
            content: content.into(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the identifier of the owning column.
    #[must_use]
    pub const fn column_id(&self) -> EntityId {
        self.column_id
    }

    /// Returns the task content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` when the task belongs to `column_id`.
    #[must_use]
    pub fn belongs_to(&self, column_id: EntityId) -> bool {
        self.column_id == column_id
    }

    /// Returns a copy of this task reparented under `column_id`.
    #[must_use]
    pub fn with_column(&self, column_id: EntityId) -> Self {
        Self {
            column_id,
            ..self.clone()
        }
    }

    /// Returns a copy of this task carrying new content.
    #[must_use]
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            id: self.id,
            column_id: self.column_id,
            content: content.into(),
        }
    }
}
