//! Step definitions for drag gesture scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
