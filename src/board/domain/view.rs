//! Read-only projection of a board for the presentation layer.

use super::{Board, DragOverlay, EntityId, SessionId, Task};
use serde::{Deserialize, Serialize};

/// One rendered column with its tasks in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnView {
    /// Column identifier.
    pub id: EntityId,
    /// Column title.
    pub title: String,
    /// Tasks owned by the column, in display order.
    pub tasks: Vec<Task>,
}

/// Everything a renderer needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Session the view was taken from.
    pub session: SessionId,
    /// Columns in display order.
    pub columns: Vec<ColumnView>,
    /// Snapshot of the dragged entity, if a gesture is in progress.
    pub overlay: Option<DragOverlay>,
}

impl BoardView {
    /// Projects `board` into a view.
    #[must_use]
    pub fn project(session: SessionId, board: &Board, overlay: Option<DragOverlay>) -> Self {
        let columns = board
            .columns()
            .iter()
            .map(|column| ColumnView {
                id: column.id(),
                title: column.title().to_owned(),
                tasks: board.tasks_in_column(column.id()).cloned().collect(),
            })
            .collect();
        Self {
            session,
            columns,
            overlay,
        }
    }

    /// Finds the view of one column.
    #[must_use]
    pub fn column(&self, id: EntityId) -> Option<&ColumnView> {
        self.columns.iter().find(|column| column.id == id)
    }
}
