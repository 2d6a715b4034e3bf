//! Shared world state for drag gesture BDD scenarios.

use dragboard::board::{
    domain::{Column, DragDispatch, DragOverlay, DragParticipant, DragStartEvent, Task},
    services::{BoardConfig, BoardStore, DragSession},
};
use rstest::fixture;

/// Scenario world for drag gesture behaviour tests.
pub struct DragWorld {
    pub store: BoardStore,
    pub session: DragSession,
    pub last_dispatch: Option<DragDispatch>,
}

impl DragWorld {
    /// Creates a world around an empty default board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: BoardStore::in_memory(),
            session: DragSession::new(),
            last_dispatch: None,
        }
    }

    /// Replaces the store with an empty one using `config`.
    pub fn reconfigure(&mut self, config: BoardConfig) {
        self.store = BoardStore::in_memory().with_config(config);
        self.session = DragSession::new();
    }

    /// Finds a column by its title.
    pub fn column(&self, title: &str) -> Result<Column, eyre::Report> {
        self.store
            .columns()
            .iter()
            .find(|column| column.title() == title)
            .cloned()
            .ok_or_else(|| eyre::eyre!("no column titled {title:?}"))
    }

    /// Finds a task by its content.
    pub fn task(&self, content: &str) -> Result<Task, eyre::Report> {
        self.store
            .tasks()
            .iter()
            .find(|task| task.content() == content)
            .cloned()
            .ok_or_else(|| eyre::eyre!("no task with content {content:?}"))
    }

    /// Starts a gesture on `active` unless it is already being dragged.
    pub fn grab(&mut self, active: &DragParticipant) {
        if self.session.state().active_id() == Some(active.id) {
            return;
        }
        let dispatch = self.session.on_drag_start(
            &self.store,
            &DragStartEvent {
                active: active.clone(),
            },
        );
        self.last_dispatch = Some(dispatch);
    }

    /// Returns the participant for the entity currently being dragged.
    pub fn active(&self) -> Result<DragParticipant, eyre::Report> {
        self.session
            .overlay()
            .map(|overlay| match overlay {
                DragOverlay::Column(column) => DragParticipant::column(&column),
                DragOverlay::Task(task) => DragParticipant::task(&task),
            })
            .ok_or_else(|| eyre::eyre!("no drag in progress"))
    }
}

impl Default for DragWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DragWorld {
    DragWorld::default()
}

/// Splits a comma separated list from a feature file.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
