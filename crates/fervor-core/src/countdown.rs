//! Countdown breakdown to the event start.

use chrono::{DateTime, TimeZone};

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = SECOND_MS * 60;
const HOUR_MS: i64 = MINUTE_MS * 60;
const DAY_MS: i64 = HOUR_MS * 24;

/// Days, hours, minutes and seconds remaining until a target instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    /// The target instant has been reached.
    pub over: bool,
}

impl TimeLeft {
    /// Break a millisecond difference into whole units.
    ///
    /// Non-positive differences clamp every field to zero.
    pub fn from_millis(diff_ms: i64) -> Self {
        if diff_ms <= 0 {
            return Self {
                over: true,
                ..Self::default()
            };
        }

        Self {
            days: (diff_ms / DAY_MS) as u32,
            hours: ((diff_ms % DAY_MS) / HOUR_MS) as u32,
            minutes: ((diff_ms % HOUR_MS) / MINUTE_MS) as u32,
            seconds: ((diff_ms % MINUTE_MS) / SECOND_MS) as u32,
            over: false,
        }
    }

    /// Time left from `now` until `target`.
    pub fn between<A: TimeZone, B: TimeZone>(target: &DateTime<A>, now: &DateTime<B>) -> Self {
        Self::from_millis(target.timestamp_millis() - now.timestamp_millis())
    }

    /// Whether the target has been reached. A sub-second remainder still
    /// counts as pending even though every field reads zero.
    pub fn is_over(&self) -> bool {
        self.over
    }
}
