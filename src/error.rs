//! Startup configuration errors

use chrono::NaiveDateTime;
use thiserror::Error;

/// Defects in the fixed startup values. These are rejected before any ticker
/// runs so a bad table never silently yields "no window" at runtime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("prayer window table is empty")]
    EmptyTable,

    #[error("prayer window at position {0} has an empty name")]
    EmptyName(usize),

    #[error("duplicate prayer window name: {0}")]
    DuplicateName(String),

    #[error("prayer window '{name}' threshold {minutes} is outside 0..1440 minutes")]
    ThresholdOutOfRange { name: String, minutes: u32 },

    #[error("prayer window '{name}' ({minutes}) must start after '{previous}' ({previous_minutes})")]
    NotIncreasing {
        name: String,
        minutes: u32,
        previous: String,
        previous_minutes: u32,
    },

    #[error("invalid prayer entry '{0}', expected name=HH:MM")]
    MalformedEntry(String),

    #[error("{0} period must be greater than zero")]
    ZeroPeriod(&'static str),

    #[error("invalid target '{0}', expected YYYY-MM-DDTHH:MM:SS")]
    MalformedTarget(String),

    #[error("target {0} is ambiguous or does not exist in the local time zone")]
    UnresolvedTarget(NaiveDateTime),
}
