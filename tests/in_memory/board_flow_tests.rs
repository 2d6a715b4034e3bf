//! In-memory integration tests for board store operations.

use dragboard::board::{
    domain::{DragOverlay, EntityId, MutationOutcome, TaskDrop},
    services::{BoardConfig, BoardStore},
};
use rstest::rstest;

use super::helpers::{Seeded, check_invariants, seeded};

#[rstest]
fn seeded_board_is_consistent(seeded: Seeded) -> Result<(), eyre::Report> {
    eyre::ensure!(seeded.columns.len() == 3);
    eyre::ensure!(seeded.tasks.len() == 3);
    check_invariants(seeded.store.board())
}

#[rstest]
fn edits_survive_moves(seeded: Seeded) -> Result<(), eyre::Report> {
    let Seeded {
        mut store,
        columns,
        tasks,
    } = seeded;
    let (first, last) = match (tasks.first(), columns.last()) {
        (Some(task), Some(column)) => (task.clone(), column.clone()),
        _ => eyre::bail!("seeded board is missing entities"),
    };

    store.edit_task_content(first.id(), "Ship it");
    store.rename_column(last.id(), "Shipped");
    let outcome = store.move_task(first.id(), last.id(), TaskDrop::OverColumn);

    eyre::ensure!(outcome == MutationOutcome::Applied);
    let shipped = store.tasks_in_column(last.id());
    eyre::ensure!(shipped.len() == 1);
    eyre::ensure!(shipped.first().map(|task| task.content()) == Some("Ship it"));
    eyre::ensure!(store.column(last.id()).map(|column| column.title()) == Some("Shipped"));
    check_invariants(store.board())
}

#[rstest]
fn deleted_ids_are_not_reissued(seeded: Seeded) -> Result<(), eyre::Report> {
    let Seeded {
        mut store, tasks, ..
    } = seeded;
    let last = tasks
        .last()
        .ok_or_else(|| eyre::eyre!("seeded board has no tasks"))?;
    store.delete_task(last.id());
    let column_id = store
        .columns()
        .first()
        .map(|column| column.id())
        .ok_or_else(|| eyre::eyre!("seeded board has no columns"))?;
    let fresh = store
        .create_task(column_id)
        .ok_or_else(|| eyre::eyre!("task was not created"))?;
    eyre::ensure!(fresh.id() > last.id(), "id {} reissued", fresh.id());
    Ok(())
}

#[rstest]
fn view_serializes_for_the_renderer(seeded: Seeded) -> Result<(), eyre::Report> {
    let task = seeded
        .tasks
        .first()
        .cloned()
        .ok_or_else(|| eyre::eyre!("seeded board has no tasks"))?;
    let view = seeded.store.view(Some(DragOverlay::Task(task)));
    let json = serde_json::to_value(&view)?;

    eyre::ensure!(json["columns"].as_array().map(Vec::len) == Some(3));
    eyre::ensure!(json["columns"][0]["title"] == "Column 1");
    eyre::ensure!(json["columns"][0]["tasks"][1]["content"] == "Task 2");
    eyre::ensure!(json["columns"][2]["tasks"].as_array().map(Vec::is_empty) == Some(true));
    eyre::ensure!(json["overlay"]["type"] == "Task");
    eyre::ensure!(json["overlay"]["entity"]["columnId"] == 1_u64);
    Ok(())
}

#[rstest]
fn clamp_policy_is_accepted_from_json() -> Result<(), eyre::Report> {
    let config = BoardConfig::from_json(r#"{"index_policy":"clamp"}"#)?;
    let mut store = BoardStore::in_memory().with_config(config);
    let column = store
        .create_column()
        .ok_or_else(|| eyre::eyre!("column was not created"))?;
    let outcome = store.move_column(column.id(), EntityId::new(column.id().value() + 1));
    eyre::ensure!(matches!(outcome, MutationOutcome::NotFound { .. }));
    Ok(())
}
