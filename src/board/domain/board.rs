//! Board aggregate holding the column and task sequences.

use super::{
    BoardDomainError, Column, EntityId, EntityKind, IndexPolicy, ReorderOutcome, Task, reorder,
};
use serde::{Deserialize, Serialize};

/// Where a dragged task is being held when an over event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskDrop {
    /// Over another task; the dragged task takes that task's slot and column.
    OverTask,
    /// Over a column body; the dragged task joins that column.
    OverColumn,
}

impl TaskDrop {
    /// Returns the drop flavour for an over target of the given kind.
    #[must_use]
    pub const fn for_target(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Task => Self::OverTask,
            EntityKind::Column => Self::OverColumn,
        }
    }
}

/// Flat-sequence placement of a task dropped over a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskDropPlacement {
    /// Reparent only. The task keeps its flat index, so it renders wherever
    /// that index falls among the target column's tasks.
    #[default]
    KeepFlatIndex,
    /// Reparent and move the task right after the last task already in the
    /// target column.
    AppendToColumn,
}

/// Result of a board mutation.
///
/// The public store contract never fails; this value lets callers and tests
/// see which branch was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The board changed.
    Applied,
    /// The inputs were valid but the board already matched the request.
    Unchanged,
    /// A referenced entity does not exist.
    NotFound {
        /// Collection that was searched.
        kind: EntityKind,
        /// Identifier that did not match.
        id: EntityId,
    },
    /// The reorder engine skipped the move under the active index policy.
    Skipped(BoardDomainError),
}

impl MutationOutcome {
    /// Returns `true` when the board changed.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    const fn not_found(kind: EntityKind, id: EntityId) -> Self {
        Self::NotFound { kind, id }
    }
}

/// The two-level hierarchy of columns and tasks.
///
/// Column order is the order of `columns`. Task order inside a column is the
/// relative order of that column's tasks in the flat `tasks` sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    columns: Vec<Column>,
    tasks: Vec<Task>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the flat task sequence.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a column by identifier.
    #[must_use]
    pub fn column(&self, id: EntityId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == id)
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: EntityId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the position of a column in the column sequence.
    #[must_use]
    pub fn column_index(&self, id: EntityId) -> Option<usize> {
        self.columns.iter().position(|column| column.id() == id)
    }

    /// Returns the position of a task in the flat task sequence.
    #[must_use]
    pub fn task_index(&self, id: EntityId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// Returns `true` when an entity of `kind` with `id` exists.
    #[must_use]
    pub fn contains(&self, kind: EntityKind, id: EntityId) -> bool {
        match kind {
            EntityKind::Column => self.column_index(id).is_some(),
            EntityKind::Task => self.task_index(id).is_some(),
        }
    }

    /// Returns the tasks of one column in display order.
    pub fn tasks_in_column(&self, column_id: EntityId) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |task| task.belongs_to(column_id))
    }

    /// Appends a column. The caller guarantees the identifier is fresh.
    pub fn push_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Appends a task. The caller guarantees the identifier is fresh.
    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes a column and every task it owns.
    ///
    /// Returns the outcome and the number of tasks removed with the column.
    pub fn remove_column(&mut self, id: EntityId) -> (MutationOutcome, usize) {
        if self.column_index(id).is_none() {
            return (MutationOutcome::not_found(EntityKind::Column, id), 0);
        }
        self.columns.retain(|column| column.id() != id);
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.belongs_to(id));
        (MutationOutcome::Applied, before - self.tasks.len())
    }

    /// Replaces the title of a column.
    pub fn rename_column(&mut self, id: EntityId, title: &str) -> MutationOutcome {
        let Some(column) = self.columns.iter_mut().find(|column| column.id() == id) else {
            return MutationOutcome::not_found(EntityKind::Column, id);
        };
        if column.title() == title {
            return MutationOutcome::Unchanged;
        }
        *column = column.with_title(title);
        MutationOutcome::Applied
    }

    /// Removes a task.
    pub fn remove_task(&mut self, id: EntityId) -> MutationOutcome {
        if self.task_index(id).is_none() {
            return MutationOutcome::not_found(EntityKind::Task, id);
        }
        self.tasks.retain(|task| task.id() != id);
        MutationOutcome::Applied
    }

    /// Replaces the content of a task.
    pub fn edit_task_content(&mut self, id: EntityId, content: &str) -> MutationOutcome {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            return MutationOutcome::not_found(EntityKind::Task, id);
        };
        if task.content() == content {
            return MutationOutcome::Unchanged;
        }
        *task = task.with_content(content);
        MutationOutcome::Applied
    }

    /// Moves the `active_id` column into the slot held by `over_id`.
    ///
    /// A failed id lookup reaches the reorder engine as a missing index, so
    /// `policy` decides between rejecting the move and reporting
    /// [`MutationOutcome::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidIndex`] only under
    /// [`IndexPolicy::Reject`], when either id is unknown.
    pub fn move_column(
        &mut self,
        active_id: EntityId,
        over_id: EntityId,
        policy: IndexPolicy,
    ) -> Result<MutationOutcome, BoardDomainError> {
        if active_id == over_id {
            return Ok(MutationOutcome::Unchanged);
        }
        let from = self.column_index(active_id);
        let to = self.column_index(over_id);
        let reordered = reorder(&self.columns, from, to, policy)?;
        if from.is_none() {
            return Ok(MutationOutcome::not_found(EntityKind::Column, active_id));
        }
        if to.is_none() {
            return Ok(MutationOutcome::not_found(EntityKind::Column, over_id));
        }
        let outcome = outcome_of(reordered.outcome, false);
        self.columns = reordered.items;
        Ok(outcome)
    }

    /// Moves the `active_id` task relative to an over target.
    ///
    /// Column and task ids are allocated independently, so `over_id` is
    /// looked up in the collection named by `over_kind`.
    ///
    /// The reparented task and the new permutation are computed from the
    /// current sequence without touching it, then committed together.
    ///
    /// Unknown ids are handed to the reorder engine as missing indices, as
    /// in [`Self::move_column`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidIndex`] only under
    /// [`IndexPolicy::Reject`], when either id is unknown.
    pub fn move_task(
        &mut self,
        active_id: EntityId,
        over_id: EntityId,
        over_kind: TaskDrop,
        placement: TaskDropPlacement,
        policy: IndexPolicy,
    ) -> Result<MutationOutcome, BoardDomainError> {
        if over_kind == TaskDrop::OverTask && active_id == over_id {
            return Ok(MutationOutcome::Unchanged);
        }
        let Some(from) = self.task_index(active_id) else {
            let over_index = match over_kind {
                TaskDrop::OverTask => self.task_index(over_id),
                TaskDrop::OverColumn => None,
            };
            return self.unresolved(None, over_index, policy, EntityKind::Task, active_id);
        };

        let (target_column, to) = match over_kind {
            TaskDrop::OverTask => {
                let Some((over_index, over_task)) = self
                    .tasks
                    .iter()
                    .enumerate()
                    .find(|(_, task)| task.id() == over_id)
                else {
                    return self.unresolved(Some(from), None, policy, EntityKind::Task, over_id);
                };
                (over_task.column_id(), Some(over_index))
            }
            TaskDrop::OverColumn => {
                if self.column_index(over_id).is_none() {
                    return self.unresolved(
                        Some(from),
                        None,
                        policy,
                        EntityKind::Column,
                        over_id,
                    );
                }
                let to = match placement {
                    TaskDropPlacement::KeepFlatIndex => Some(from),
                    TaskDropPlacement::AppendToColumn => {
                        Some(self.append_slot(active_id, over_id, from))
                    }
                };
                (over_id, to)
            }
        };

        let staged = self.reparented(active_id, target_column);
        let reparented = staged.changed;
        let reordered = reorder(&staged.tasks, Some(from), to, policy)?;
        let outcome = outcome_of(reordered.outcome, reparented);
        if !matches!(outcome, MutationOutcome::Skipped(_)) {
            self.tasks = reordered.items;
        }
        Ok(outcome)
    }

    /// Replaces the flat task sequence wholesale.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Runs a task move whose lookup failed through the reorder engine.
    ///
    /// The engine either rejects the missing index or skips it; a skip is
    /// reported as the entity that could not be found.
    fn unresolved(
        &self,
        from: Option<usize>,
        to: Option<usize>,
        policy: IndexPolicy,
        kind: EntityKind,
        id: EntityId,
    ) -> Result<MutationOutcome, BoardDomainError> {
        reorder(&self.tasks, from, to, policy)?;
        Ok(MutationOutcome::not_found(kind, id))
    }

    /// Builds a copy of the task sequence with `active_id` reparented.
    fn reparented(&self, active_id: EntityId, column_id: EntityId) -> StagedTasks {
        let mut changed = false;
        let tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id() == active_id && !task.belongs_to(column_id) {
                    changed = true;
                    task.with_column(column_id)
                } else {
                    task.clone()
                }
            })
            .collect();
        StagedTasks { tasks, changed }
    }

    /// Index the active task must move to so that it sits right after the
    /// last other task of `column_id`.
    ///
    /// Falls back to `from` when the column holds no other task.
    fn append_slot(&self, active_id: EntityId, column_id: EntityId, from: usize) -> usize {
        let last_other = self
            .tasks
            .iter()
            .rposition(|task| task.belongs_to(column_id) && task.id() != active_id);
        match last_other {
            Some(last) if last < from => last + 1,
            Some(last) => last,
            None => from,
        }
    }
}

struct StagedTasks {
    tasks: Vec<Task>,
    changed: bool,
}

fn outcome_of(reorder: ReorderOutcome, reparented: bool) -> MutationOutcome {
    match reorder {
        ReorderOutcome::Moved { .. } => MutationOutcome::Applied,
        ReorderOutcome::Unchanged if reparented => MutationOutcome::Applied,
        ReorderOutcome::Unchanged => MutationOutcome::Unchanged,
        ReorderOutcome::Skipped(err) => MutationOutcome::Skipped(err),
    }
}
