//! Drag events and drag-session state.
//!
//! Event shapes mirror what a pointer drag-and-drop layer reports: an
//! `active` participant and, for over and end events, an optional `over`
//! participant. Each participant carries its id and a `data` payload naming
//! its kind and, optionally, a copy of the entity itself.

use super::{Column, EntityId, EntityKind, MutationOutcome, Task};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload attached to a drag participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragData {
    /// Declared kind of the participant.
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// Column copy, present when `kind` is [`EntityKind::Column`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<Column>,
    /// Task copy, present when `kind` is [`EntityKind::Task`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
}

/// One side of a drag interaction: the dragged entity or the target below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragParticipant {
    /// Identifier of the entity.
    pub id: EntityId,
    /// Kind and optional entity copy.
    pub data: DragData,
}

impl DragParticipant {
    /// Describes a column, carrying a copy of it.
    #[must_use]
    pub fn column(column: &Column) -> Self {
        Self {
            id: column.id(),
            data: DragData {
                kind: EntityKind::Column,
                column: Some(column.clone()),
                task: None,
            },
        }
    }

    /// Describes a task, carrying a copy of it.
    #[must_use]
    pub fn task(task: &Task) -> Self {
        Self {
            id: task.id(),
            data: DragData {
                kind: EntityKind::Task,
                column: None,
                task: Some(task.clone()),
            },
        }
    }

    /// Describes an entity by id and kind only.
    #[must_use]
    pub const fn bare(id: EntityId, kind: EntityKind) -> Self {
        Self {
            id,
            data: DragData {
                kind,
                column: None,
                task: None,
            },
        }
    }

    /// Returns the declared kind of the participant.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.data.kind
    }
}

impl From<&Column> for DragParticipant {
    fn from(column: &Column) -> Self {
        Self::column(column)
    }
}

impl From<&Task> for DragParticipant {
    fn from(task: &Task) -> Self {
        Self::task(task)
    }
}

/// Pointer-down on a draggable entity passed the activation threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragStartEvent {
    /// The entity being dragged.
    pub active: DragParticipant,
}

/// The dragged entity moved over a target, or off every valid target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragOverEvent {
    /// The entity being dragged.
    pub active: DragParticipant,
    /// The target currently under the pointer; `None` when invalid.
    pub over: Option<DragParticipant>,
}

/// The pointer was released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEndEvent {
    /// The entity being dragged.
    pub active: DragParticipant,
    /// The drop target; `None` cancels the gesture.
    pub over: Option<DragParticipant>,
}

/// Any event of a drag gesture, as delivered by the input layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DragEvent {
    /// Gesture started.
    Start(DragStartEvent),
    /// Pointer moved over a target.
    Over(DragOverEvent),
    /// Pointer released.
    End(DragEndEvent),
}

/// Ephemeral drag-session state.
///
/// The snapshots exist for overlay rendering only; the board store is the
/// source of truth for every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A column is being dragged.
    DraggingColumn(Column),
    /// A task is being dragged.
    DraggingTask(Task),
}

impl DragState {
    /// Returns the kind of the dragged entity, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<EntityKind> {
        match self {
            Self::Idle => None,
            Self::DraggingColumn(_) => Some(EntityKind::Column),
            Self::DraggingTask(_) => Some(EntityKind::Task),
        }
    }

    /// Returns the identifier of the dragged entity, if any.
    #[must_use]
    pub const fn active_id(&self) -> Option<EntityId> {
        match self {
            Self::Idle => None,
            Self::DraggingColumn(column) => Some(column.id()),
            Self::DraggingTask(task) => Some(task.id()),
        }
    }

    /// Returns the overlay snapshot for the dragged entity, if any.
    #[must_use]
    pub fn overlay(&self) -> Option<DragOverlay> {
        match self {
            Self::Idle => None,
            Self::DraggingColumn(column) => Some(DragOverlay::Column(column.clone())),
            Self::DraggingTask(task) => Some(DragOverlay::Task(task.clone())),
        }
    }
}

/// Snapshot of the dragged entity handed to the overlay renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "entity")]
pub enum DragOverlay {
    /// A dragged column.
    Column(Column),
    /// A dragged task.
    Task(Task),
}

/// Why a drag event produced no mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The event arrived while no gesture was in progress.
    NotDragging,
    /// The event names a different active entity than the current gesture.
    ActiveMismatch,
    /// The drag started on an entity the board does not hold.
    UnknownEntity,
    /// No valid target is under the pointer.
    NoOverTarget,
    /// The target is the dragged entity itself.
    SameTarget,
    /// Column moves are only committed when the gesture ends.
    ColumnDeferred,
    /// The same over event was already handled in this gesture.
    RepeatedOver,
}

impl IgnoreReason {
    /// Returns the reason name used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotDragging => "not_dragging",
            Self::ActiveMismatch => "active_mismatch",
            Self::UnknownEntity => "unknown_entity",
            Self::NoOverTarget => "no_over_target",
            Self::SameTarget => "same_target",
            Self::ColumnDeferred => "column_deferred",
            Self::RepeatedOver => "repeated_over",
        }
    }
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a drag-session handler did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragDispatch {
    /// A gesture started on an entity of this kind.
    Started(EntityKind),
    /// The event was consumed without touching the board.
    Ignored(IgnoreReason),
    /// A task move was dispatched to the store.
    MovedTask(MutationOutcome),
    /// A column move was dispatched to the store.
    MovedColumn(MutationOutcome),
    /// The gesture ended without a drop target.
    Cancelled {
        /// Whether task moves made during the gesture were undone.
        rolled_back: bool,
    },
    /// The gesture ended and nothing further needed committing.
    Finished,
}
