//! Board session metadata.

use super::SessionId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Identity and timing of one in-memory board session.
///
/// A session begins when a store is created and ends when it is dropped.
/// Identifier allocators live exactly as long as the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSession {
    id: SessionId,
    started_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    revision: u64,
}

impl BoardSession {
    /// Starts a new session at the current clock time.
    #[must_use]
    pub fn start(clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: SessionId::new(),
            started_at: timestamp,
            updated_at: timestamp,
            revision: 0,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Returns when the session started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns when the board last changed.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the number of applied mutations so far.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Records an applied mutation.
    pub fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
        self.revision = self.revision.saturating_add(1);
    }
}
