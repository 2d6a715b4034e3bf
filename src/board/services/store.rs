//! Board store: CRUD and move orchestration over the board aggregate.
//!
//! Every public mutation is total. Missing entities and skipped reorders are
//! logged and reported through [`MutationOutcome`] instead of failing, so a
//! drag gesture can never abort half way. The `try_*` variants expose the
//! underlying [`BoardDomainError`] for callers that want it.

use std::collections::HashSet;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::board::{
    adapters::memory::SequentialIdAllocator,
    domain::{
        Board, BoardDomainError, BoardSession, BoardView, Column, DragOverlay, EntityId,
        EntityKind, MutationOutcome, Task, TaskDrop,
    },
    ports::IdAllocator,
};

use super::BoardConfig;

/// In-memory owner of a board's columns and tasks.
pub struct BoardStore<A = SequentialIdAllocator, C = DefaultClock>
where
    A: IdAllocator,
    C: Clock,
{
    board: Board,
    column_ids: A,
    task_ids: A,
    config: BoardConfig,
    clock: Arc<C>,
    session: BoardSession,
}

impl BoardStore {
    /// Creates an empty store with sequential identifiers and the system
    /// clock.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            SequentialIdAllocator::new(),
            SequentialIdAllocator::new(),
            Arc::new(DefaultClock),
        )
    }
}

impl<A, C> BoardStore<A, C>
where
    A: IdAllocator,
    C: Clock,
{
    /// Creates an empty store and starts its session.
    #[must_use]
    pub fn new(column_ids: A, task_ids: A, clock: Arc<C>) -> Self {
        let session = BoardSession::start(&*clock);
        tracing::info!(session = %session.id(), "board session started");
        Self {
            board: Board::new(),
            column_ids,
            task_ids,
            config: BoardConfig::default(),
            clock,
            session,
        }
    }

    /// Replaces the store configuration.
    #[must_use]
    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the session metadata.
    #[must_use]
    pub const fn session(&self) -> &BoardSession {
        &self.session
    }

    /// Returns the underlying board aggregate.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        self.board.columns()
    }

    /// Returns the flat task sequence.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.board.tasks()
    }

    /// Finds a column by identifier.
    #[must_use]
    pub fn column(&self, id: EntityId) -> Option<&Column> {
        self.board.column(id)
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: EntityId) -> Option<&Task> {
        self.board.task(id)
    }

    /// Returns the tasks of one column in display order.
    #[must_use]
    pub fn tasks_in_column(&self, column_id: EntityId) -> Vec<&Task> {
        self.board.tasks_in_column(column_id).collect()
    }

    /// Projects the board for rendering.
    #[must_use]
    pub fn view(&self, overlay: Option<DragOverlay>) -> BoardView {
        BoardView::project(self.session.id(), &self.board, overlay)
    }

    /// Appends a column titled `"Column {n+1}"`, `n` being the column count.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::IdentifierExhausted`] when the allocator
    /// cannot produce an unused identifier.
    pub fn try_create_column(&mut self) -> Result<Column, BoardDomainError> {
        let id = fresh_id(
            &mut self.column_ids,
            &self.board,
            EntityKind::Column,
            self.config.max_allocation_attempts,
        )?;
        let column = Column::new(id, self.config.column_title(self.board.columns().len() + 1));
        self.board.push_column(column.clone());
        self.record(&MutationOutcome::Applied);
        tracing::debug!(column_id = %id, title = column.title(), "column created");
        Ok(column)
    }

    /// Appends a column, logging and returning `None` if no identifier is
    /// available.
    pub fn create_column(&mut self) -> Option<Column> {
        self.try_create_column()
            .inspect_err(|err| tracing::error!(error = %err, "column not created"))
            .ok()
    }

    /// Removes a column and every task it owns. Absent ids are ignored.
    pub fn delete_column(&mut self, id: EntityId) -> MutationOutcome {
        let (outcome, cascaded) = self.board.remove_column(id);
        if outcome.is_applied() {
            tracing::debug!(column_id = %id, cascaded, "column deleted");
        }
        self.record(&outcome);
        outcome
    }

    /// Renames a column. Absent ids are ignored.
    pub fn rename_column(&mut self, id: EntityId, title: &str) -> MutationOutcome {
        let outcome = self.board.rename_column(id, title);
        if outcome.is_applied() {
            tracing::debug!(column_id = %id, title, "column renamed");
        }
        self.record(&outcome);
        outcome
    }

    /// Appends a task to `column_id` with content `"Task {n+1}"`, `n` being
    /// the board-wide task count.
    ///
    /// `column_id` is not checked against the column sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::IdentifierExhausted`] when the allocator
    /// cannot produce an unused identifier.
    pub fn try_create_task(&mut self, column_id: EntityId) -> Result<Task, BoardDomainError> {
        let id = fresh_id(
            &mut self.task_ids,
            &self.board,
            EntityKind::Task,
            self.config.max_allocation_attempts,
        )?;
        let task = Task::new(
            id,
            column_id,
            self.config.task_content(self.board.tasks().len() + 1),
        );
        self.board.push_task(task.clone());
        self.record(&MutationOutcome::Applied);
        tracing::debug!(task_id = %id, column_id = %column_id, "task created");
        Ok(task)
    }

    /// Appends a task, logging and returning `None` if no identifier is
    /// available.
    pub fn create_task(&mut self, column_id: EntityId) -> Option<Task> {
        self.try_create_task(column_id)
            .inspect_err(|err| tracing::error!(error = %err, "task not created"))
            .ok()
    }

    /// Removes a task. Absent ids are ignored.
    pub fn delete_task(&mut self, id: EntityId) -> MutationOutcome {
        let outcome = self.board.remove_task(id);
        if outcome.is_applied() {
            tracing::debug!(task_id = %id, "task deleted");
        }
        self.record(&outcome);
        outcome
    }

    /// Replaces a task's content. Absent ids are ignored.
    pub fn edit_task_content(&mut self, id: EntityId, content: &str) -> MutationOutcome {
        let outcome = self.board.edit_task_content(id, content);
        if outcome.is_applied() {
            tracing::debug!(task_id = %id, "task content edited");
        }
        self.record(&outcome);
        outcome
    }

    /// Moves column `active_id` into the slot of column `over_id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidIndex`] when an id is unknown and
    /// the configured index policy is
    /// [`IndexPolicy::Reject`](crate::board::domain::IndexPolicy::Reject).
    pub fn try_move_column(
        &mut self,
        active_id: EntityId,
        over_id: EntityId,
    ) -> Result<MutationOutcome, BoardDomainError> {
        let outcome = self
            .board
            .move_column(active_id, over_id, self.config.index_policy)?;
        if outcome.is_applied() {
            tracing::debug!(active_id = %active_id, over_id = %over_id, "column moved");
        }
        self.record(&outcome);
        Ok(outcome)
    }

    /// Moves column `active_id` into the slot of column `over_id`, never
    /// failing. A rejected move is reported as [`MutationOutcome::Skipped`].
    pub fn move_column(&mut self, active_id: EntityId, over_id: EntityId) -> MutationOutcome {
        self.try_move_column(active_id, over_id)
            .unwrap_or_else(|err| self.absorb(err))
    }

    /// Moves task `active_id` relative to `over_id`.
    ///
    /// Over a task, the active task joins that task's column and takes its
    /// flat index. Over a column, the active task joins the column and is
    /// placed according to [`BoardConfig::task_drop_placement`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidIndex`] when an id is unknown and
    /// the configured index policy is
    /// [`IndexPolicy::Reject`](crate::board::domain::IndexPolicy::Reject).
    pub fn try_move_task(
        &mut self,
        active_id: EntityId,
        over_id: EntityId,
        over_kind: TaskDrop,
    ) -> Result<MutationOutcome, BoardDomainError> {
        let outcome = self.board.move_task(
            active_id,
            over_id,
            over_kind,
            self.config.task_drop_placement,
            self.config.index_policy,
        )?;
        if outcome.is_applied() {
            tracing::debug!(
                active_id = %active_id,
                over_id = %over_id,
                over_kind = ?over_kind,
                "task moved"
            );
        }
        self.record(&outcome);
        Ok(outcome)
    }

    /// Moves task `active_id` relative to `over_id`, never failing.
    pub fn move_task(
        &mut self,
        active_id: EntityId,
        over_id: EntityId,
        over_kind: TaskDrop,
    ) -> MutationOutcome {
        self.try_move_task(active_id, over_id, over_kind)
            .unwrap_or_else(|err| self.absorb(err))
    }

    /// Restores task order and membership from a snapshot taken earlier in
    /// the session.
    ///
    /// Tasks deleted since the snapshot stay deleted, tasks created since are
    /// kept at the end, and tasks whose snapshot column no longer exists keep
    /// their current column. Content edits made since are preserved.
    pub fn restore_tasks(&mut self, snapshot: &[Task]) -> MutationOutcome {
        let restored = self.reconcile(snapshot);
        if restored.as_slice() == self.board.tasks() {
            return MutationOutcome::Unchanged;
        }
        self.board.replace_tasks(restored);
        tracing::debug!(tasks = self.board.tasks().len(), "task order restored");
        self.record(&MutationOutcome::Applied);
        MutationOutcome::Applied
    }

    fn reconcile(&self, snapshot: &[Task]) -> Vec<Task> {
        let mut seen = HashSet::new();
        let mut restored: Vec<Task> = snapshot
            .iter()
            .filter_map(|earlier| {
                let current = self.board.task(earlier.id())?;
                if !seen.insert(earlier.id()) {
                    tracing::warn!(task_id = %earlier.id(), "duplicate task in snapshot skipped");
                    return None;
                }
                let column_id = if self.board.contains(EntityKind::Column, earlier.column_id()) {
                    earlier.column_id()
                } else {
                    current.column_id()
                };
                Some(current.with_column(column_id))
            })
            .collect();
        restored.extend(
            self.board
                .tasks()
                .iter()
                .filter(|task| !seen.contains(&task.id()))
                .cloned(),
        );
        restored
    }

    fn absorb(&self, err: BoardDomainError) -> MutationOutcome {
        tracing::warn!(
            error = %err,
            policy = ?self.config.index_policy,
            "reorder rejected; board left unchanged"
        );
        MutationOutcome::Skipped(err)
    }

    fn record(&mut self, outcome: &MutationOutcome) {
        match outcome {
            MutationOutcome::Applied => self.session.touch(&*self.clock),
            MutationOutcome::Unchanged => {}
            MutationOutcome::NotFound { kind, id } => {
                tracing::debug!(kind = %kind, id = %id, "no matching entity; mutation skipped");
            }
            MutationOutcome::Skipped(err) => {
                tracing::warn!(error = %err, "reorder skipped; board left unchanged");
            }
        }
    }
}

/// Draws identifiers until one is unused in the target collection.
fn fresh_id<A: IdAllocator>(
    allocator: &mut A,
    board: &Board,
    kind: EntityKind,
    max_attempts: usize,
) -> Result<EntityId, BoardDomainError> {
    for attempt in 1..=max_attempts {
        let id = allocator.allocate();
        if !board.contains(kind, id) {
            return Ok(id);
        }
        tracing::warn!(kind = %kind, id = %id, attempt, "allocated identifier already in use");
    }
    Err(BoardDomainError::IdentifierExhausted {
        kind,
        attempts: max_attempts,
    })
}
