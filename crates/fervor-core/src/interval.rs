//! Cooperative repeating timer.

use std::time::Duration;

/// A repeating timer polled from the redraw loop.
///
/// Nothing fires until [`Interval::start`] is called, and nothing fires after
/// [`Interval::stop`]. Times are milliseconds on the caller's monotonic clock.
#[derive(Debug, Clone)]
pub struct Interval {
    period_ms: u64,
    next_due_ms: Option<u64>,
}

impl Interval {
    /// Create a stopped interval with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period_ms: period_ms(period),
            next_due_ms: None,
        }
    }

    /// Arm the timer so the first tick lands one period after `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms.saturating_add(self.period_ms));
    }

    /// Disarm the timer.
    pub fn stop(&mut self) {
        self.next_due_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Change the period. A running timer is re-armed from `now_ms`.
    pub fn set_period(&mut self, period: Duration, now_ms: u64) {
        self.period_ms = period_ms(period);
        if self.is_running() {
            self.start(now_ms);
        }
    }

    /// Number of periods that elapsed since the previous poll.
    pub fn poll(&mut self, now_ms: u64) -> u32 {
        let Some(due) = self.next_due_ms else {
            return 0;
        };
        if now_ms < due {
            return 0;
        }

        let fired = 1 + (now_ms - due) / self.period_ms;
        self.next_due_ms = Some(due.saturating_add(fired.saturating_mul(self.period_ms)));
        u32::try_from(fired).unwrap_or(u32::MAX)
    }
}

/// Whole milliseconds in `period`, at least one.
fn period_ms(period: Duration) -> u64 {
    u64::try_from(period.as_millis()).unwrap_or(u64::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_interval_never_fires() {
        let mut interval = Interval::new(Duration::from_secs(1));
        assert_eq!(interval.poll(10_000), 0);

        interval.start(0);
        interval.stop();
        assert_eq!(interval.poll(10_000), 0);
    }

    #[test]
    fn test_fires_once_per_period() {
        let mut interval = Interval::new(Duration::from_millis(500));
        interval.start(100);
        assert_eq!(interval.poll(599), 0);
        assert_eq!(interval.poll(600), 1);
        assert_eq!(interval.poll(700), 0);
        assert_eq!(interval.poll(1100), 1);
    }

    #[test]
    fn test_catches_up_after_stall() {
        let mut interval = Interval::new(Duration::from_millis(100));
        interval.start(0);
        assert_eq!(interval.poll(450), 4);
        assert_eq!(interval.poll(500), 1);
    }

    #[test]
    fn test_huge_period_never_overflows() {
        let mut interval = Interval::new(Duration::MAX);
        interval.start(1_000);
        assert!(interval.is_running());
        assert_eq!(interval.poll(u64::MAX - 1), 0);

        interval.set_period(Duration::from_secs(u64::MAX / 1000), 5_000);
        assert_eq!(interval.poll(10_000), 0);
    }

    #[test]
    fn test_set_period_rearms() {
        let mut interval = Interval::new(Duration::from_millis(100));
        interval.start(0);
        interval.set_period(Duration::from_millis(300), 50);
        assert_eq!(interval.poll(349), 0);
        assert_eq!(interval.poll(350), 1);
    }
}
