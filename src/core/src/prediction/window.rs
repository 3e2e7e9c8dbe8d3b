use chrono::{NaiveDateTime, TimeDelta};

/// Predictions on a fixture are accepted until shortly before kick-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionWindow {
    pub kickoff: NaiveDateTime,
    pub lock_minutes_before: i64,
}

impl PredictionWindow {
    pub fn new(kickoff: NaiveDateTime, lock_minutes_before: i64) -> Self {
        PredictionWindow {
            kickoff,
            lock_minutes_before,
        }
    }

    /// `None` when the lead time cannot be represented; such a window never opens.
    pub fn locks_at(&self) -> Option<NaiveDateTime> {
        TimeDelta::try_minutes(self.lock_minutes_before)
            .and_then(|lead| self.kickoff.checked_sub_signed(lead))
    }

    pub fn is_open(&self, now: NaiveDateTime) -> bool {
        self.locks_at().is_some_and(|locks_at| now < locks_at)
    }
}
