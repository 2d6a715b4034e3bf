//! Given steps for drag gesture BDD scenarios.

use super::world::DragWorld;
use dragboard::board::services::BoardConfig;
use rstest_bdd_macros::given;

fn add_columns(world: &mut DragWorld, titles: [&str; 2]) -> Result<(), eyre::Report> {
    for title in titles {
        let column = world
            .store
            .create_column()
            .ok_or_else(|| eyre::eyre!("column allocation failed"))?;
        world.store.rename_column(column.id(), title);
    }
    Ok(())
}

#[given(r#"a board with columns "{first}" and "{second}""#)]
fn board_with_columns(
    world: &mut DragWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    add_columns(world, [first.as_str(), second.as_str()])
}

#[given(r#"a strict board with columns "{first}" and "{second}""#)]
fn strict_board_with_columns(
    world: &mut DragWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    world.reconfigure(BoardConfig::strict());
    add_columns(world, [first.as_str(), second.as_str()])
}

#[given(r#"the column "{title}" holds tasks "{first}" and "{second}""#)]
fn column_holds_tasks(
    world: &mut DragWorld,
    title: String,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let column = world.column(&title)?;
    for content in [first, second] {
        let task = world
            .store
            .create_task(column.id())
            .ok_or_else(|| eyre::eyre!("task allocation failed"))?;
        world.store.edit_task_content(task.id(), &content);
    }
    Ok(())
}
