//! Error types for board domain operations.

use super::{EntityId, EntityKind};
use thiserror::Error;

/// Errors raised inside the board domain.
///
/// Public store operations absorb these and degrade to no-ops; they surface
/// only through the fallible `try_*` entry points and the reorder engine
/// under [`IndexPolicy::Reject`](super::IndexPolicy::Reject).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// An operation referenced an id absent from its collection.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Collection that was searched.
        kind: EntityKind,
        /// Identifier that did not match.
        id: EntityId,
    },

    /// A reorder index fell outside the sequence bounds.
    #[error("invalid reorder index {} for sequence of length {len}", display_index(.index))]
    InvalidIndex {
        /// Offending index; `None` when an id lookup failed.
        index: Option<usize>,
        /// Length of the sequence being reordered.
        len: usize,
    },

    /// The allocator kept returning identifiers already in use.
    #[error("could not allocate a fresh {kind} identifier after {attempts} attempts")]
    IdentifierExhausted {
        /// Collection the identifier was meant for.
        kind: EntityKind,
        /// Number of allocation attempts made.
        attempts: usize,
    },
}

/// Renders a missing index the way a failed position lookup reports it.
fn display_index(index: &Option<usize>) -> String {
    index.map_or_else(|| "-1".to_owned(), |value| value.to_string())
}
