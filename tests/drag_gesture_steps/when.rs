//! When steps for drag gesture BDD scenarios.

use super::world::DragWorld;
use dragboard::board::domain::{DragEndEvent, DragOverEvent, DragParticipant};
use rstest_bdd_macros::when;

fn drag_over(world: &mut DragWorld, active: &DragParticipant, over: DragParticipant) {
    world.grab(active);
    let dispatch = world.session.on_drag_over(
        &mut world.store,
        &DragOverEvent {
            active: active.clone(),
            over: Some(over),
        },
    );
    world.last_dispatch = Some(dispatch);
}

fn drop_on(world: &mut DragWorld, over: Option<DragParticipant>) -> Result<(), eyre::Report> {
    let active = world.active()?;
    let dispatch = world
        .session
        .on_drag_end(&mut world.store, &DragEndEvent { active, over });
    world.last_dispatch = Some(dispatch);
    Ok(())
}

#[when(r#"the task "{task}" is dragged over the column "{column}""#)]
fn task_dragged_over_column(
    world: &mut DragWorld,
    task: String,
    column: String,
) -> Result<(), eyre::Report> {
    let active = DragParticipant::task(&world.task(&task)?);
    let over = DragParticipant::column(&world.column(&column)?);
    drag_over(world, &active, over);
    Ok(())
}

#[when(r#"the task "{task}" is dragged over the task "{target}""#)]
fn task_dragged_over_task(
    world: &mut DragWorld,
    task: String,
    target: String,
) -> Result<(), eyre::Report> {
    let active = DragParticipant::task(&world.task(&task)?);
    let over = DragParticipant::task(&world.task(&target)?);
    drag_over(world, &active, over);
    Ok(())
}

#[when(r#"the task "{task}" hovers over the task "{target}" {count:usize} times"#)]
fn task_hovers_over_task(
    world: &mut DragWorld,
    task: String,
    target: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let active = DragParticipant::task(&world.task(&task)?);
    let over = DragParticipant::task(&world.task(&target)?);
    for _ in 0..count {
        drag_over(world, &active, over.clone());
    }
    Ok(())
}

#[when(r#"the column "{column}" is dragged over the column "{target}""#)]
fn column_dragged_over_column(
    world: &mut DragWorld,
    column: String,
    target: String,
) -> Result<(), eyre::Report> {
    let active = DragParticipant::column(&world.column(&column)?);
    let over = DragParticipant::column(&world.column(&target)?);
    drag_over(world, &active, over);
    Ok(())
}

#[when(r#"the column "{column}" is picked up"#)]
fn column_picked_up(world: &mut DragWorld, column: String) -> Result<(), eyre::Report> {
    let active = DragParticipant::column(&world.column(&column)?);
    world.grab(&active);
    Ok(())
}

#[when(r#"the drag ends over the column "{column}""#)]
fn drag_ends_over_column(world: &mut DragWorld, column: String) -> Result<(), eyre::Report> {
    let over = DragParticipant::column(&world.column(&column)?);
    drop_on(world, Some(over))
}

#[when(r#"the drag ends over the task "{task}""#)]
fn drag_ends_over_task(world: &mut DragWorld, task: String) -> Result<(), eyre::Report> {
    let over = DragParticipant::task(&world.task(&task)?);
    drop_on(world, Some(over))
}

#[when("the drag is released outside any target")]
fn drag_released_outside(world: &mut DragWorld) -> Result<(), eyre::Report> {
    drop_on(world, None)
}

#[when(r#"the column "{column}" is deleted"#)]
fn column_deleted(world: &mut DragWorld, column: String) -> Result<(), eyre::Report> {
    let id = world.column(&column)?.id();
    world.store.delete_column(id);
    Ok(())
}
