//! Column and task board with drag-and-drop reordering.
//!
//! A board is an ordered sequence of columns, each owning an ordered
//! sequence of tasks. Users restructure it through pointer-drag gestures:
//! reordering columns, reordering tasks within a column and moving tasks
//! between columns. The module follows hexagonal architecture:
//!
//! - Domain types and the reorder engine in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The board store and drag session in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
