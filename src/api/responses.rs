//! API request and response structures

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    effects::CardRect,
    schedule::{CountdownResult, PrayerWindowTable},
};

/// Countdown as shown on the page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownResponse {
    /// "counting" or "arrived"
    pub status: String,
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    /// Status label, only set once arrived
    pub label: Option<String>,
    pub target: DateTime<Local>,
}

impl CountdownResponse {
    pub fn new(result: &CountdownResult, target: DateTime<Local>, arrived_label: &str) -> Self {
        let [days, hours, minutes, seconds] = result.padded();
        let (status, label) = if result.is_arrived() {
            ("arrived", Some(arrived_label.to_string()))
        } else {
            ("counting", None)
        };

        Self {
            status: status.to_string(),
            days,
            hours,
            minutes,
            seconds,
            label,
            target,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayerWindowView {
    pub name: String,
    pub time: String,
    pub active: bool,
}

/// Prayer table with the window active right now
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayersResponse {
    pub active: Option<String>,
    pub windows: Vec<PrayerWindowView>,
}

impl PrayersResponse {
    pub fn new(table: &PrayerWindowTable, active: Option<String>) -> Self {
        let windows = table
            .windows()
            .iter()
            .map(|w| PrayerWindowView {
                name: w.name.clone(),
                time: w.start_label(),
                active: active.as_deref() == Some(w.name.as_str()),
            })
            .collect();
        Self { active, windows }
    }
}

/// Service status with tick information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub target: DateTime<Local>,
    pub countdown_period_ms: u64,
    pub prayer_period_ms: u64,
    pub last_countdown_tick: Option<DateTime<Local>>,
    pub last_prayer_tick: Option<DateTime<Local>>,
    pub reduced_motion: bool,
    pub uptime: String,
    pub port: u16,
    pub host: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Result of an input event: whether it changed anything
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectResponse {
    pub applied: bool,
    pub timestamp: DateTime<Utc>,
}

impl EffectResponse {
    pub fn new(applied: bool) -> Self {
        Self {
            applied,
            timestamp: Utc::now(),
        }
    }
}

/// Pointer position over the page
#[derive(Debug, Clone, Deserialize)]
pub struct PointerRequest {
    pub x: f64,
    pub y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

/// Pointer position over a card
#[derive(Debug, Clone, Deserialize)]
pub struct CardPointerRequest {
    pub x: f64,
    pub y: f64,
    pub rect: CardRect,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisibilityRequest {
    pub intersection_ratio: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyRequest {
    pub key: String,
}
