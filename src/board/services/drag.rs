//! Drag-session state machine.
//!
//! A [`DragSession`] turns the start/over/end event stream of one pointer
//! gesture into store mutations. Task moves are committed live on every
//! over event so the board tracks the pointer; column moves are committed
//! once, when the gesture ends.

use mockable::Clock;

use crate::board::{
    domain::{
        DragDispatch, DragEndEvent, DragEvent, DragOverEvent, DragOverlay, DragParticipant,
        DragStartEvent, DragState, EntityId, EntityKind, IgnoreReason, MutationOutcome, Task,
        TaskDrop,
    },
    ports::IdAllocator,
};

use super::BoardStore;

/// Ephemeral state of the gesture currently in progress, if any.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
    last_dispatched_over: Option<(EntityId, EntityKind)>,
    tasks_before_drag: Option<Vec<Task>>,
}

impl DragSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// Returns the snapshot to render in the drag overlay.
    #[must_use]
    pub fn overlay(&self) -> Option<DragOverlay> {
        self.state.overlay()
    }

    /// Routes any drag event to its handler.
    pub fn handle<A, C>(&mut self, store: &mut BoardStore<A, C>, event: &DragEvent) -> DragDispatch
    where
        A: IdAllocator,
        C: Clock,
    {
        match event {
            DragEvent::Start(start) => self.on_drag_start(store, start),
            DragEvent::Over(over) => self.on_drag_over(store, over),
            DragEvent::End(end) => self.on_drag_end(store, end),
        }
    }

    /// Begins a gesture on the entity named by `event.active`.
    ///
    /// The overlay snapshot comes from the event payload, falling back to the
    /// store's copy when the payload omits it. A start for an entity that is
    /// in neither leaves the session idle.
    pub fn on_drag_start<A, C>(
        &mut self,
        store: &BoardStore<A, C>,
        event: &DragStartEvent,
    ) -> DragDispatch
    where
        A: IdAllocator,
        C: Clock,
    {
        if let Some(previous) = self.state.active_id() {
            tracing::debug!(previous_id = %previous, "drag start replaces unfinished gesture");
        }
        self.reset();

        let active = &event.active;
        let Some(state) = snapshot(store, active) else {
            return ignored(active.id, None, IgnoreReason::UnknownEntity);
        };

        let capture_tasks = matches!(state, DragState::DraggingTask(_))
            && store.config().rollback_cancelled_task_drag;
        if capture_tasks {
            self.tasks_before_drag = Some(store.tasks().to_vec());
        }
        self.state = state;
        tracing::debug!(active_id = %active.id, kind = %active.kind(), "drag started");
        DragDispatch::Started(active.kind())
    }

    /// Handles the dragged entity moving over a target.
    ///
    /// Only task gestures mutate here. Repeating the last dispatched target
    /// is ignored, so a burst of identical events moves the task once.
    pub fn on_drag_over<A, C>(
        &mut self,
        store: &mut BoardStore<A, C>,
        event: &DragOverEvent,
    ) -> DragDispatch
    where
        A: IdAllocator,
        C: Clock,
    {
        let active_id = event.active.id;
        let over_id = event.over.as_ref().map(|over| over.id);
        let Some(kind) = self.state.kind() else {
            return ignored(active_id, over_id, IgnoreReason::NotDragging);
        };
        if self.state.active_id() != Some(active_id) {
            return ignored(active_id, over_id, IgnoreReason::ActiveMismatch);
        }

        let Some(over) = event.over.as_ref() else {
            self.last_dispatched_over = None;
            return ignored(active_id, None, IgnoreReason::NoOverTarget);
        };
        if over.id == active_id && over.kind() == kind {
            self.last_dispatched_over = None;
            return ignored(active_id, over_id, IgnoreReason::SameTarget);
        }
        if kind == EntityKind::Column {
            return ignored(active_id, over_id, IgnoreReason::ColumnDeferred);
        }

        let target = (over.id, over.kind());
        if self.last_dispatched_over == Some(target) {
            return ignored(active_id, over_id, IgnoreReason::RepeatedOver);
        }
        self.last_dispatched_over = Some(target);

        let outcome = store.move_task(active_id, over.id, TaskDrop::for_target(over.kind()));
        DragDispatch::MovedTask(outcome)
    }

    /// Ends the gesture, committing a column move if one was dropped.
    ///
    /// The session is always idle afterwards. A missing `over` target
    /// cancels the gesture; task moves made during it stay committed unless
    /// the store is configured to roll them back. A column dropped on
    /// anything but a column moves nothing: column and task ids are drawn
    /// from separate counters and may coincide.
    pub fn on_drag_end<A, C>(
        &mut self,
        store: &mut BoardStore<A, C>,
        event: &DragEndEvent,
    ) -> DragDispatch
    where
        A: IdAllocator,
        C: Clock,
    {
        let active_id = event.active.id;
        let over_id = event.over.as_ref().map(|over| over.id);
        let previous = std::mem::take(&mut self.state);
        let tasks_before_drag = self.tasks_before_drag.take();
        self.last_dispatched_over = None;

        let Some(kind) = previous.kind() else {
            return ignored(active_id, over_id, IgnoreReason::NotDragging);
        };
        if previous.active_id() != Some(active_id) {
            return ignored(active_id, over_id, IgnoreReason::ActiveMismatch);
        }

        let Some(over) = event.over.as_ref() else {
            return cancel(store, active_id, tasks_before_drag);
        };

        match kind {
            EntityKind::Column if over.id == active_id && over.kind() == kind => {
                ignored(active_id, over_id, IgnoreReason::SameTarget)
            }
            EntityKind::Column if over.kind() != EntityKind::Column => {
                tracing::debug!(
                    active_id = %active_id,
                    over_id = %over.id,
                    over_kind = %over.kind(),
                    "column dropped on a non-column target"
                );
                DragDispatch::MovedColumn(MutationOutcome::NotFound {
                    kind: EntityKind::Column,
                    id: over.id,
                })
            }
            EntityKind::Column => DragDispatch::MovedColumn(store.move_column(active_id, over.id)),
            EntityKind::Task => {
                tracing::debug!(active_id = %active_id, over_id = %over.id, "task drag finished");
                DragDispatch::Finished
            }
        }
    }

    /// Abandons the gesture in progress as if it ended with no drop target.
    pub fn on_drag_cancel<A, C>(&mut self, store: &mut BoardStore<A, C>) -> DragDispatch
    where
        A: IdAllocator,
        C: Clock,
    {
        let Some(active_id) = self.state.active_id() else {
            self.reset();
            return DragDispatch::Ignored(IgnoreReason::NotDragging);
        };
        let tasks_before_drag = self.tasks_before_drag.take();
        self.reset();
        cancel(store, active_id, tasks_before_drag)
    }

    fn reset(&mut self) {
        self.state = DragState::Idle;
        self.last_dispatched_over = None;
        self.tasks_before_drag = None;
    }
}

/// Builds the dragging state for `active`, preferring the event payload.
fn snapshot<A, C>(store: &BoardStore<A, C>, active: &DragParticipant) -> Option<DragState>
where
    A: IdAllocator,
    C: Clock,
{
    match active.kind() {
        EntityKind::Column => active
            .data
            .column
            .clone()
            .or_else(|| store.column(active.id).cloned())
            .map(DragState::DraggingColumn),
        EntityKind::Task => active
            .data
            .task
            .clone()
            .or_else(|| store.task(active.id).cloned())
            .map(DragState::DraggingTask),
    }
}

fn cancel<A, C>(
    store: &mut BoardStore<A, C>,
    active_id: EntityId,
    tasks_before_drag: Option<Vec<Task>>,
) -> DragDispatch
where
    A: IdAllocator,
    C: Clock,
{
    let rolled_back = tasks_before_drag
        .is_some_and(|tasks| store.restore_tasks(&tasks).is_applied());
    tracing::debug!(active_id = %active_id, rolled_back, "drag cancelled");
    DragDispatch::Cancelled { rolled_back }
}

fn ignored(active_id: EntityId, over_id: Option<EntityId>, reason: IgnoreReason) -> DragDispatch {
    tracing::debug!(
        active_id = %active_id,
        over_id = ?over_id.map(EntityId::value),
        reason = %reason,
        "drag event ignored"
    );
    DragDispatch::Ignored(reason)
}
