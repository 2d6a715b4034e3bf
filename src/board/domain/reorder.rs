//! Reorder engine for ordered sequences.
//!
//! The functions here know nothing about columns or tasks. They take a
//! borrowed slice and build a fresh `Vec`, so callers holding the original
//! sequence never observe a partially moved state.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};

/// Policy applied when a reorder index falls outside the sequence.
///
/// A missing index (`None`) is what a failed id lookup produces and is
/// always treated as out of bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexPolicy {
    /// Leave the sequence unchanged and report the skip.
    #[default]
    Ignore,
    /// Fail with [`BoardDomainError::InvalidIndex`].
    Reject,
    /// Pull indices past the end back to the last slot. Missing indices
    /// still leave the sequence unchanged.
    Clamp,
}

/// What a reorder call did to its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// An element changed position.
    Moved {
        /// Source index that was used.
        from: usize,
        /// Destination index that was used.
        to: usize,
    },
    /// Source and destination coincided.
    Unchanged,
    /// An index was out of bounds and the policy asked to skip.
    Skipped(BoardDomainError),
}

/// A reordered sequence paired with the outcome that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reordered<T> {
    /// The resulting sequence.
    pub items: Vec<T>,
    /// How the sequence was derived from its input.
    pub outcome: ReorderOutcome,
}

impl<T> Reordered<T> {
    /// Returns `true` when an element actually moved.
    #[must_use]
    pub const fn moved(&self) -> bool {
        matches!(self.outcome, ReorderOutcome::Moved { .. })
    }
}

/// Moves the element at `from` to `to`, shifting the elements in between.
///
/// Returns a sequence equal to the input when `from == to`.
///
/// # Errors
///
/// Returns [`BoardDomainError::InvalidIndex`] when either index is not a
/// valid position in `sequence`.
pub fn move_item<T: Clone>(
    sequence: &[T],
    from: usize,
    to: usize,
) -> Result<Vec<T>, BoardDomainError> {
    let len = sequence.len();
    for index in [from, to] {
        if index >= len {
            return Err(BoardDomainError::InvalidIndex {
                index: Some(index),
                len,
            });
        }
    }

    let mut items = sequence.to_vec();
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    Ok(items)
}

/// Moves an element between optional positions under an [`IndexPolicy`].
///
/// # Errors
///
/// Returns [`BoardDomainError::InvalidIndex`] only under
/// [`IndexPolicy::Reject`] when either index is missing or out of bounds.
pub fn reorder<T: Clone>(
    sequence: &[T],
    from: Option<usize>,
    to: Option<usize>,
    policy: IndexPolicy,
) -> Result<Reordered<T>, BoardDomainError> {
    let len = sequence.len();
    let resolved = resolve_index(from, len, policy)
        .and_then(|source| resolve_index(to, len, policy).map(|target| (source, target)));

    let (source, target) = match resolved {
        Ok(indices) => indices,
        Err(err) if policy == IndexPolicy::Reject => return Err(err),
        Err(err) => {
            return Ok(Reordered {
                items: sequence.to_vec(),
                outcome: ReorderOutcome::Skipped(err),
            });
        }
    };

    let items = move_item(sequence, source, target)?;
    let outcome = if source == target {
        ReorderOutcome::Unchanged
    } else {
        ReorderOutcome::Moved {
            from: source,
            to: target,
        }
    };
    Ok(Reordered { items, outcome })
}

fn resolve_index(
    index: Option<usize>,
    len: usize,
    policy: IndexPolicy,
) -> Result<usize, BoardDomainError> {
    let invalid = BoardDomainError::InvalidIndex { index, len };
    match (index, policy) {
        (Some(value), _) if value < len => Ok(value),
        (Some(_), IndexPolicy::Clamp) => len.checked_sub(1).ok_or(invalid),
        _ => Err(invalid),
    }
}
