//! Contact id generation.
//!
//! Ids are creation timestamps in milliseconds, bumped past the last
//! issued id so two inserts in the same millisecond never collide.

use chrono::Utc;

use super::{RecordError, RecordResult};

#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Start above every id already in use.
    pub fn seeded(existing: impl IntoIterator<Item = i64>) -> Self {
        Self {
            last: existing.into_iter().max().unwrap_or(0),
        }
    }

    /// Fails once `i64::MAX` has been issued or seeded.
    pub fn next_id(&mut self) -> RecordResult<i64> {
        self.next_at(Utc::now().timestamp_millis())
            .ok_or(RecordError::IdsExhausted)
    }

    fn next_at(&mut self, now_ms: i64) -> Option<i64> {
        let id = now_ms.max(self.last.checked_add(1)?);
        self.last = id;
        Some(id)
    }
}
