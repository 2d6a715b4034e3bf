//! Dragboard: an in-memory kanban board driven by drag-and-drop gestures.
//!
//! This crate owns the state behind a column/task board and the logic that
//! turns pointer-drag events into reorder and reparent operations. Rendering
//! and input capture are left to the host; it feeds drag events in and reads
//! a [`board::domain::BoardView`] back out.
//!
//! # Architecture
//!
//! Dragboard follows hexagonal architecture principles:
//!
//! - **Domain**: Board aggregate, reorder engine and drag event types
//! - **Ports**: Abstract trait interfaces, such as identifier allocation
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Board store, drag session and their domain types

pub mod board;
