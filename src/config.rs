//! Configuration and CLI argument handling

use std::time::Duration;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use clap::Parser;

use crate::{
    effects::{DEFAULT_PARTICLES, DEFAULT_STARS},
    error::ConfigError,
    schedule::{Countdown, PrayerWindowTable},
};

/// Start of Ramadhan 1446 H (approximate), local midnight
pub const REFERENCE_TARGET: &str = "2025-03-01T00:00:00";

pub const DEFAULT_ARRIVED_LABEL: &str = "Ramadhan telah tiba!";

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "crescent-board")]
#[command(about = "A ticker-driven page model server for a Ramadhan countdown board")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Countdown target as local date and time
    #[arg(long, default_value = REFERENCE_TARGET)]
    pub target: NaiveDateTime,

    /// Prayer window start, repeat in day order; replaces the built-in table
    #[arg(long = "prayer", value_name = "NAME=HH:MM")]
    pub prayers: Vec<String>,

    /// Countdown refresh period in milliseconds
    #[arg(long, default_value = "1000")]
    pub countdown_period_ms: u64,

    /// Prayer highlight refresh period in milliseconds
    #[arg(long, default_value = "60000")]
    pub prayer_period_ms: u64,

    /// Number of background stars
    #[arg(long, default_value_t = DEFAULT_STARS)]
    pub stars: usize,

    /// Number of floating particles
    #[arg(long, default_value_t = DEFAULT_PARTICLES)]
    pub particles: usize,

    /// Number of feature cards on the page
    #[arg(long, default_value = "6")]
    pub feature_cards: usize,

    /// Disable motion effects and reveal everything immediately
    #[arg(long)]
    pub reduced_motion: bool,

    /// Status label shown once the target has passed
    #[arg(long, default_value = DEFAULT_ARRIVED_LABEL)]
    pub arrived_label: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Validate the startup values into board settings
    pub fn settings(&self) -> Result<BoardSettings, ConfigError> {
        let prayers = if self.prayers.is_empty() {
            PrayerWindowTable::reference()
        } else {
            PrayerWindowTable::parse_entries(&self.prayers)?
        };

        if self.countdown_period_ms == 0 {
            return Err(ConfigError::ZeroPeriod("countdown"));
        }
        if self.prayer_period_ms == 0 {
            return Err(ConfigError::ZeroPeriod("prayer"));
        }

        Ok(BoardSettings {
            countdown: Countdown::new(resolve_target(self.target)?),
            prayers,
            countdown_period: Duration::from_millis(self.countdown_period_ms),
            prayer_period: Duration::from_millis(self.prayer_period_ms),
            stars: self.stars,
            particles: self.particles,
            feature_cards: self.feature_cards,
            reduced_motion: self.reduced_motion,
            arrived_label: self.arrived_label.clone(),
        })
    }
}

/// Pin a local wall-clock date and time to one instant in the host's zone.
/// Times skipped or repeated by a daylight saving switch are rejected.
pub fn resolve_target(target: NaiveDateTime) -> Result<DateTime<Local>, ConfigError> {
    Local
        .from_local_datetime(&target)
        .single()
        .ok_or(ConfigError::UnresolvedTarget(target))
}

/// Fixed values the board runs with for the whole process lifetime
#[derive(Debug, Clone)]
pub struct BoardSettings {
    pub countdown: Countdown,
    pub prayers: PrayerWindowTable,
    pub countdown_period: Duration,
    pub prayer_period: Duration,
    pub stars: usize,
    pub particles: usize,
    pub feature_cards: usize,
    pub reduced_motion: bool,
    pub arrived_label: String,
}

impl BoardSettings {
    /// Settings matching the CLI defaults
    pub fn reference() -> Result<Self, ConfigError> {
        let target = REFERENCE_TARGET
            .parse::<NaiveDateTime>()
            .map_err(|_| ConfigError::MalformedTarget(REFERENCE_TARGET.to_string()))?;
        Ok(Self::with_target(Countdown::new(resolve_target(target)?)))
    }

    pub fn with_target(countdown: Countdown) -> Self {
        Self {
            countdown,
            prayers: PrayerWindowTable::reference(),
            countdown_period: Duration::from_secs(1),
            prayer_period: Duration::from_secs(60),
            stars: DEFAULT_STARS,
            particles: DEFAULT_PARTICLES,
            feature_cards: 6,
            reduced_motion: false,
            arrived_label: DEFAULT_ARRIVED_LABEL.to_string(),
        }
    }
}
