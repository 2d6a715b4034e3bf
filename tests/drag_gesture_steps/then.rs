//! Then steps for drag gesture BDD scenarios.

use super::world::{DragWorld, split_list};
use dragboard::board::domain::{DragDispatch, DragOverlay};
use rstest_bdd_macros::then;

fn column_contents(world: &DragWorld, title: &str) -> Result<Vec<String>, eyre::Report> {
    let column = world.column(title)?;
    Ok(world
        .store
        .tasks_in_column(column.id())
        .into_iter()
        .map(|task| task.content().to_owned())
        .collect())
}

#[then(r#"the column "{title}" lists "{tasks}""#)]
fn column_lists(world: &DragWorld, title: String, tasks: String) -> Result<(), eyre::Report> {
    let actual = column_contents(world, &title)?;
    let expected = split_list(&tasks);
    if actual != expected {
        return Err(eyre::eyre!(
            "column {title:?}: expected {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"the column "{title}" is empty"#)]
fn column_is_empty(world: &DragWorld, title: String) -> Result<(), eyre::Report> {
    let actual = column_contents(world, &title)?;
    if !actual.is_empty() {
        return Err(eyre::eyre!("column {title:?} still holds {actual:?}"));
    }
    Ok(())
}

#[then(r#"the columns read "{titles}""#)]
fn columns_read(world: &DragWorld, titles: String) -> Result<(), eyre::Report> {
    let actual: Vec<String> = world
        .store
        .columns()
        .iter()
        .map(|column| column.title().to_owned())
        .collect();
    let expected = split_list(&titles);
    if actual != expected {
        return Err(eyre::eyre!("expected columns {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the board holds {count:usize} tasks")]
fn board_holds_tasks(world: &DragWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.store.tasks().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}

#[then(r#"the overlay shows the task "{content}""#)]
fn overlay_shows_task(world: &DragWorld, content: String) -> Result<(), eyre::Report> {
    match world.session.overlay() {
        Some(DragOverlay::Task(task)) if task.content() == content => Ok(()),
        other => Err(eyre::eyre!(
            "expected overlay for task {content:?}, found {other:?}"
        )),
    }
}

#[then("no overlay is shown")]
fn no_overlay_is_shown(world: &DragWorld) -> Result<(), eyre::Report> {
    if let Some(overlay) = world.session.overlay() {
        return Err(eyre::eyre!("overlay still shown: {overlay:?}"));
    }
    if world.store.view(world.session.overlay()).overlay.is_some() {
        return Err(eyre::eyre!("board view still carries an overlay"));
    }
    Ok(())
}

#[then("the last drag was cancelled with rollback")]
fn cancelled_with_rollback(world: &DragWorld) -> Result<(), eyre::Report> {
    expect_cancel(world, true)
}

#[then("the last drag was cancelled without rollback")]
fn cancelled_without_rollback(world: &DragWorld) -> Result<(), eyre::Report> {
    expect_cancel(world, false)
}

fn expect_cancel(world: &DragWorld, rolled_back: bool) -> Result<(), eyre::Report> {
    let expected = DragDispatch::Cancelled { rolled_back };
    if world.last_dispatch.as_ref() != Some(&expected) {
        return Err(eyre::eyre!(
            "expected {expected:?}, found {:?}",
            world.last_dispatch
        ));
    }
    Ok(())
}
