//! Countdown to a fixed target instant

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time left before the target, split into whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Remaining {
    /// Milliseconds represented by the four fields
    pub fn as_millis(&self) -> u64 {
        self.days * MS_PER_DAY as u64
            + self.hours * MS_PER_HOUR as u64
            + self.minutes * MS_PER_MINUTE as u64
            + self.seconds * MS_PER_SECOND as u64
    }

    /// Fields as zero-padded display strings: days, hours, minutes, seconds
    pub fn padded(&self) -> [String; 4] {
        [
            pad2(self.days),
            pad2(self.hours),
            pad2(self.minutes),
            pad2(self.seconds),
        ]
    }
}

/// Outcome of one countdown evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CountdownResult {
    Arrived,
    Remaining(Remaining),
}

impl CountdownResult {
    pub fn is_arrived(&self) -> bool {
        matches!(self, Self::Arrived)
    }

    /// Display strings for the four slots; all "00" once arrived
    pub fn padded(&self) -> [String; 4] {
        match self {
            Self::Arrived => std::array::from_fn(|_| pad2(0)),
            Self::Remaining(remaining) => remaining.padded(),
        }
    }
}

/// Countdown bound to a target instant fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<Local>,
}

impl Countdown {
    pub fn new(target: DateTime<Local>) -> Self {
        Self { target }
    }

    pub fn target(&self) -> DateTime<Local> {
        self.target
    }

    pub fn compute<Tz: TimeZone>(&self, now: DateTime<Tz>) -> CountdownResult {
        compute_countdown(self.target, now)
    }
}

/// Split `target - now` into days, hours, minutes and seconds.
///
/// Both sides are absolute instants, so an offset change in between (a
/// daylight saving switch) shortens or stretches the result by that amount.
/// Anything at or past the target is `Arrived`. Sub-second remainders are
/// truncated, so the fields never overstate the time left.
pub fn compute_countdown<A: TimeZone, B: TimeZone>(target: DateTime<A>, now: DateTime<B>) -> CountdownResult {
    let diff_ms = target.timestamp_millis() - now.timestamp_millis();
    if diff_ms <= 0 {
        return CountdownResult::Arrived;
    }

    CountdownResult::Remaining(Remaining {
        days: (diff_ms / MS_PER_DAY) as u64,
        hours: ((diff_ms % MS_PER_DAY) / MS_PER_HOUR) as u64,
        minutes: ((diff_ms % MS_PER_HOUR) / MS_PER_MINUTE) as u64,
        seconds: ((diff_ms % MS_PER_MINUTE) / MS_PER_SECOND) as u64,
    })
}

/// Left-pad with zeros to a minimum width of two; wider values are kept whole
pub fn pad2(value: u64) -> String {
    format!("{:02}", value)
}
