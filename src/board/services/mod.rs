//! Application services for the board: the store and the drag session.

mod config;
mod drag;
mod store;

pub use config::BoardConfig;
pub use drag::DragSession;
pub use store::BoardStore;
