//! Scroll reveal for feature cards

use std::time::Duration;

use crate::{state::board::FEATURE_CARD_CLASS, surface::Surface};

pub const VISIBLE_CLASS: &str = "visible";

/// Share of a card that must be on screen before it reveals
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Delay from a card's `data-delay` attribute in milliseconds.
///
/// Only the leading run of digits counts, so `"150ms"` is 150 and `"12.7"` is
/// 12. No leading digits means no delay.
pub fn reveal_delay(attribute: Option<&str>) -> Duration {
    attribute
        .map(leading_digits)
        .and_then(|digits| digits.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::ZERO)
}

fn leading_digits(value: &str) -> &str {
    let value = value.trim_start();
    let value = value.strip_prefix('+').unwrap_or(value);
    let end = value.find(|c: char| !c.is_ascii_digit()).unwrap_or(value.len());
    &value[..end]
}

/// Set once a card has been picked up for reveal; it is not observed again
const OBSERVED_ATTRIBUTE: &str = "data-observed";

/// Whether a card at `ratio` visibility should start revealing
pub fn should_reveal<S: Surface + ?Sized>(surface: &S, card_id: &str, ratio: f64) -> bool {
    surface.has_class(card_id, FEATURE_CARD_CLASS)
        && !surface.has_class(card_id, VISIBLE_CLASS)
        && surface.attribute(card_id, OBSERVED_ATTRIBUTE).is_none()
        && ratio >= REVEAL_THRESHOLD
}

/// Stop observing a card that crossed the threshold and return how long to
/// wait before showing it. `None` if the card should not reveal.
pub fn begin_reveal<S: Surface + ?Sized>(surface: &mut S, card_id: &str, ratio: f64) -> Option<Duration> {
    if !should_reveal(surface, card_id, ratio) {
        return None;
    }
    surface.set_attribute(card_id, OBSERVED_ATTRIBUTE, "true");
    Some(reveal_delay(surface.attribute(card_id, "data-delay").as_deref()))
}

/// Make every feature card visible at once. Returns how many were touched.
pub fn reveal_all<S: Surface + ?Sized>(surface: &mut S) -> usize {
    surface
        .ids_with_class(FEATURE_CARD_CLASS)
        .iter()
        .filter(|id| surface.set_class(id, VISIBLE_CLASS, true))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{schedule::PrayerWindowTable, state::board::Board};

    #[test]
    fn delay_parsing() {
        assert_eq!(reveal_delay(Some("200")), Duration::from_millis(200));
        assert_eq!(reveal_delay(Some(" 300 ")), Duration::from_millis(300));
        assert_eq!(reveal_delay(Some("150ms")), Duration::from_millis(150));
        assert_eq!(reveal_delay(Some("12.7")), Duration::from_millis(12));
        assert_eq!(reveal_delay(Some("soon")), Duration::ZERO);
        assert_eq!(reveal_delay(Some("-50")), Duration::ZERO);
        assert_eq!(reveal_delay(Some("")), Duration::ZERO);
        assert_eq!(reveal_delay(None), Duration::ZERO);
    }

    #[test]
    fn reveals_once_past_threshold() {
        let mut board = Board::page(&PrayerWindowTable::reference(), 2);
        assert!(!should_reveal(&board, "feature-card-1", 0.1));
        assert!(should_reveal(&board, "feature-card-1", 0.2));
        assert!(!should_reveal(&board, "prayer-subuh", 1.0));

        board.set_class("feature-card-1", VISIBLE_CLASS, true);
        assert!(!should_reveal(&board, "feature-card-1", 1.0));
    }

    #[test]
    fn begin_reveal_only_once() {
        let mut board = Board::page(&PrayerWindowTable::reference(), 3);
        assert_eq!(begin_reveal(&mut board, "feature-card-3", 0.1), None);
        assert_eq!(begin_reveal(&mut board, "feature-card-3", 0.5), Some(Duration::from_millis(200)));
        assert_eq!(begin_reveal(&mut board, "feature-card-3", 0.9), None);
        assert!(!board.has_class("feature-card-3", VISIBLE_CLASS));
    }

    #[test]
    fn reveal_all_marks_every_card() {
        let mut board = Board::page(&PrayerWindowTable::reference(), 4);
        assert_eq!(reveal_all(&mut board), 4);
        assert!(board.has_class("feature-card-4", VISIBLE_CLASS));
    }
}
