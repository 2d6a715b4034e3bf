//! Domain model for the column and task board.
//!
//! The domain holds the board aggregate, the reorder engine and the drag
//! event vocabulary. Everything here is pure: no logging and no allocation
//! policy. Timestamps come from an injected clock.

mod board;
mod column;
mod drag;
mod error;
mod ids;
mod kind;
mod reorder;
mod session;
mod task;
mod view;

pub use board::{Board, MutationOutcome, TaskDrop, TaskDropPlacement};
pub use column::Column;
pub use drag::{
    DragData, DragDispatch, DragEndEvent, DragEvent, DragOverEvent, DragOverlay,
    DragParticipant, DragStartEvent, DragState, IgnoreReason,
};
pub use error::BoardDomainError;
pub use ids::{EntityId, SessionId};
pub use kind::EntityKind;
pub use reorder::{IndexPolicy, ReorderOutcome, Reordered, move_item, reorder};
pub use session::BoardSession;
pub use task::Task;
pub use view::{BoardView, ColumnView};
