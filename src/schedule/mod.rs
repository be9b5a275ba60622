//! Schedule calculations
//!
//! Pure calculators for the countdown and the prayer windows, plus the clock
//! capability that feeds them the current instant.

pub mod clock;
pub mod countdown;
pub mod prayer;

// Re-export main types
pub use clock::{Clock, FixedClock, SystemClock};
pub use countdown::{compute_countdown, Countdown, CountdownResult, Remaining};
pub use prayer::{locate_window, minutes_since_midnight, PrayerWindow, PrayerWindowTable};
