//! Identifier allocation port.

use crate::board::domain::EntityId;

/// Source of identifiers for new columns or tasks.
///
/// A board store owns one allocator per collection. Implementations should
/// never hand out the same value twice within a session; the store still
/// checks each value against its collection and asks again on collision.
#[cfg_attr(test, mockall::automock)]
pub trait IdAllocator {
    /// Returns the next identifier.
    fn allocate(&mut self) -> EntityId;
}
