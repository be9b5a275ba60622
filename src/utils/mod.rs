//! Utility functions module
//!
//! Process-level helpers; currently only shutdown signal handling.

pub mod signals;

// Re-export main functions
pub use signals::shutdown_signal;
