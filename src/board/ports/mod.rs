//! Port contracts for the board.
//!
//! Ports define the collaborators a board store relies on without fixing
//! their implementation.

pub mod allocator;

pub use allocator::IdAllocator;

#[cfg(test)]
pub use allocator::MockIdAllocator;
