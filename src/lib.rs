//! Crescent Board - A ticker-driven page model for a Ramadhan countdown board
//!
//! This library keeps an in-memory model of the page, drives the countdown
//! and prayer highlight from periodic tickers, and exposes both over HTTP
//! alongside the decorative effects.

pub mod config;
pub mod error;
pub mod schedule;
pub mod surface;
pub mod render;
pub mod effects;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::{BoardSettings, Config};
pub use error::ConfigError;
pub use state::AppState;
pub use api::create_router;
pub use tasks::{spawn_tickers, Tickers};
pub use utils::signals::shutdown_signal;
