//! Render steps writing calculator results onto a surface

use tracing::debug;

use crate::{
    schedule::{CountdownResult, PrayerWindowTable},
    state::board::{
        prayer_card_id, COUNTDOWN_LABEL, DAYS_SLOT, HOURS_SLOT, MINUTES_SLOT, SECONDS_SLOT,
    },
    surface::Surface,
};

pub const ACTIVE_CLASS: &str = "active";

/// Write the countdown into the four numeric slots.
///
/// Returns `false` without touching anything when any slot is missing. Once
/// arrived, the status label switches to `arrived_label`.
pub fn render_countdown<S: Surface + ?Sized>(
    surface: &mut S,
    result: &CountdownResult,
    arrived_label: &str,
) -> bool {
    let slots = [DAYS_SLOT, HOURS_SLOT, MINUTES_SLOT, SECONDS_SLOT];
    if !slots.iter().all(|slot| surface.contains(slot)) {
        debug!("Countdown slots missing, skipping render");
        return false;
    }

    for (slot, text) in slots.iter().zip(result.padded()) {
        surface.set_text(slot, &text);
    }

    if result.is_arrived() {
        surface.set_text(COUNTDOWN_LABEL, arrived_label);
    }

    true
}

/// Flag the located window's card active and clear every other card.
///
/// With no active window all cards end up cleared. Returns how many cards
/// carry the flag afterwards (0 or 1).
pub fn mark_active_prayer<S: Surface + ?Sized>(
    surface: &mut S,
    table: &PrayerWindowTable,
    active: Option<&str>,
) -> usize {
    let mut flagged = 0;
    for name in table.names() {
        let on = Some(name) == active;
        if surface.set_class(&prayer_card_id(name), ACTIVE_CLASS, on) && on {
            flagged += 1;
        }
    }
    flagged
}
