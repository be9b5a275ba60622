//! Decorative page effects
//!
//! Each effect is stateless and works only through the `Surface` capability.
//! None of them touch the countdown or prayer schedule.

pub mod navigation;
pub mod pointer;
pub mod reveal;
pub mod stars;

// Re-export main functions
pub use navigation::{activate, click, init_keyboard_nav, init_smooth_scroll, is_activation_key};
pub use pointer::{apply_glow, apply_parallax, glow_position, parallax_offset, CardRect};
pub use reveal::{begin_reveal, reveal_all, reveal_delay, should_reveal, REVEAL_THRESHOLD, VISIBLE_CLASS};
pub use stars::{
    create_particles, create_stars, generate_particles, generate_stars, DEFAULT_PARTICLES, DEFAULT_STARS,
};
