//! Smooth scroll and keyboard activation

use crate::{
    state::board::{FEATURES_SECTION, FEATURE_CARD_CLASS, PRAYER_CARD_CLASS, SCROLL_INDICATOR},
    surface::Surface,
};

/// Give the scroll indicator a pointer cursor when it has somewhere to go
pub fn init_smooth_scroll<S: Surface + ?Sized>(surface: &mut S) -> bool {
    if !(surface.contains(SCROLL_INDICATOR) && surface.contains(FEATURES_SECTION)) {
        return false;
    }
    surface.set_style(SCROLL_INDICATOR, "cursor", "pointer")
}

/// Make cards focusable and announce them as buttons. Returns how many.
pub fn init_keyboard_nav<S: Surface + ?Sized>(surface: &mut S) -> usize {
    let mut ids = surface.ids_with_class(FEATURE_CARD_CLASS);
    ids.extend(surface.ids_with_class(PRAYER_CARD_CLASS));

    for id in &ids {
        surface.set_attribute(id, "tabindex", "0");
        surface.set_attribute(id, "role", "button");
    }
    ids.len()
}

pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// Click an element. Returns `false` if it does not exist.
pub fn click<S: Surface + ?Sized>(surface: &mut S, id: &str) -> bool {
    if !surface.contains(id) {
        return false;
    }
    if id == SCROLL_INDICATOR {
        surface.scroll_into_view(FEATURES_SECTION);
    }
    true
}

/// Forward an activation key on a keyboard-navigable element to a click.
/// Returns whether a click happened.
pub fn activate<S: Surface + ?Sized>(surface: &mut S, id: &str, key: &str) -> bool {
    if !is_activation_key(key) || surface.attribute(id, "role").as_deref() != Some("button") {
        return false;
    }
    click(surface, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{schedule::PrayerWindowTable, state::board::Board};

    #[test]
    fn keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("enter"));
    }

    #[test]
    fn scroll_indicator_scrolls_to_features() {
        let mut board = Board::page(&PrayerWindowTable::reference(), 1);
        assert!(init_smooth_scroll(&mut board));
        assert_eq!(board.style(SCROLL_INDICATOR, "cursor"), Some("pointer"));

        assert!(click(&mut board, SCROLL_INDICATOR));
        assert_eq!(board.scrolled_to.as_deref(), Some(FEATURES_SECTION));
    }

    #[test]
    fn smooth_scroll_needs_both_ends() {
        let mut board = Board::page(&PrayerWindowTable::reference(), 1);
        board.remove(FEATURES_SECTION);
        assert!(!init_smooth_scroll(&mut board));
        assert_eq!(board.style(SCROLL_INDICATOR, "cursor"), None);
    }

    #[test]
    fn cards_activate_from_keyboard() {
        let mut board = Board::page(&PrayerWindowTable::reference(), 2);
        assert_eq!(init_keyboard_nav(&mut board), 7);
        assert_eq!(board.attribute("prayer-isya", "tabindex").as_deref(), Some("0"));

        assert!(activate(&mut board, "feature-card-1", "Enter"));
        assert!(activate(&mut board, "prayer-isya", " "));
        assert!(!activate(&mut board, "prayer-isya", "Escape"));
        // Not wired for keyboard navigation
        assert!(!activate(&mut board, "days", "Enter"));
    }
}
