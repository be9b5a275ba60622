//! Clock sources for the tickers

use std::sync::Mutex;

use chrono::{DateTime, Duration, Local};

/// Source of the current instant, carrying the local offset for wall-clock reads
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the host's local time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A settable clock for deterministic runs
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now: Mutex::new(now) }
    }

    /// Jump to a new instant
    pub fn set(&self, now: DateTime<Local>) {
        if let Ok(mut current) = self.now.lock() {
            *current = now;
        }
    }

    /// Move the clock forward (or backward for a negative duration)
    pub fn advance(&self, by: Duration) {
        if let Ok(mut current) = self.now.lock() {
            *current += by;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        match self.now.lock() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_advances() {
        let start = Local.with_ymd_and_hms(2025, 2, 28, 23, 59, 30).single().unwrap();
        let clock = FixedClock::new(start);
        clock.advance(Duration::seconds(45));
        assert_eq!(clock.now() - start, Duration::seconds(45));
        assert_eq!(clock.now().naive_local().to_string(), "2025-03-01 00:00:15");
    }
}
