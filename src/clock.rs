//! Wall-clock source for reset arithmetic.

use chrono::Utc;

/// Source of the current Unix time.
pub trait Clock: Send + Sync {
    /// Returns the current Unix time in seconds, rounded to the nearest
    /// second.
    fn now(&self) -> i64;
}

/// Clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        let now = Utc::now();
        now.timestamp() + i64::from(now.timestamp_subsec_millis() >= 500)
    }
}
