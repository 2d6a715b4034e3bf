//! Counter-backed identifier allocator.

use crate::board::{domain::EntityId, ports::IdAllocator};

/// Monotonically increasing identifier allocator.
///
/// Values start at `first` and grow by one per call. The counter saturates at
/// `u64::MAX` instead of wrapping; the store's collision check then reports
/// exhaustion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIdAllocator {
    next: u64,
}

impl SequentialIdAllocator {
    /// Creates an allocator whose first identifier is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates an allocator whose first identifier is `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator for SequentialIdAllocator {
    fn allocate(&mut self) -> EntityId {
        let id = EntityId::new(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}
