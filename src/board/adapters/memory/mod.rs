//! In-memory adapters for the board ports.

mod allocator;

pub use allocator::SequentialIdAllocator;
