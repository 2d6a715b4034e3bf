//! Entity kinds taking part in a drag gesture.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared kind of a board entity.
///
/// Serialized as `"Column"` or `"Task"`, matching the `type` field of drag
/// event payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// An ordered bucket of tasks.
    Column,
    /// A unit of content owned by a column.
    Task,
}

impl EntityKind {
    /// Returns the lowercase name used in log fields and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
