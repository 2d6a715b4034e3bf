//! Column entity.

use super::EntityId;
use serde::{Deserialize, Serialize};

/// An ordered bucket of tasks displayed as a titled list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: EntityId,
    title: String,
}

impl Column {
    /// Creates a column with the given identifier and title.
    #[must_use]
    pub fn new(id: EntityId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the column title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns a copy of this column carrying a new title.
    #[must_use]
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            id: self.id,
            title: title.into(),
        }
    }
}
