//! Board behaviour configuration.

use crate::board::domain::{IndexPolicy, TaskDropPlacement};
use serde::{Deserialize, Serialize};

/// Tunable behaviour of a board store and its drag session.
///
/// Every field has a default, so a host can deserialize a partial JSON
/// object and leave the rest as shipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Prefix of generated column titles (`"{prefix} {n}"`).
    pub column_title_prefix: String,
    /// Prefix of generated task content (`"{prefix} {n}"`).
    pub task_content_prefix: String,
    /// Handling of reorder indices that are out of bounds or missing
    /// because an id lookup failed.
    pub index_policy: IndexPolicy,
    /// Flat-sequence placement of tasks dropped over a column.
    pub task_drop_placement: TaskDropPlacement,
    /// Whether a cancelled task drag restores the pre-gesture task order.
    pub rollback_cancelled_task_drag: bool,
    /// Allocation attempts before giving up on a fresh identifier.
    pub max_allocation_attempts: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            column_title_prefix: "Column".to_owned(),
            task_content_prefix: "Task".to_owned(),
            index_policy: IndexPolicy::Ignore,
            task_drop_placement: TaskDropPlacement::KeepFlatIndex,
            rollback_cancelled_task_drag: false,
            max_allocation_attempts: 16,
        }
    }
}

impl BoardConfig {
    /// Permissive behaviour and the default: skip bad indices, keep flat
    /// positions on column drops, never roll back.
    #[must_use]
    pub fn source_compatible() -> Self {
        Self::default()
    }

    /// Stricter behaviour: reject moves naming unknown ids, append column
    /// drops to the end of the target column and roll back cancelled task
    /// drags.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            index_policy: IndexPolicy::Reject,
            task_drop_placement: TaskDropPlacement::AppendToColumn,
            rollback_cancelled_task_drag: true,
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the input is not a valid
    /// configuration object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Formats a generated column title for the `ordinal`-th column.
    #[must_use]
    pub fn column_title(&self, ordinal: usize) -> String {
        format!("{} {ordinal}", self.column_title_prefix)
    }

    /// Formats generated task content for the `ordinal`-th task.
    #[must_use]
    pub fn task_content(&self, ordinal: usize) -> String {
        format!("{} {ordinal}", self.task_content_prefix)
    }
}
