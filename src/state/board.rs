//! In-memory page model

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    schedule::PrayerWindowTable,
    surface::{Decoration, Surface},
};

pub const DAYS_SLOT: &str = "days";
pub const HOURS_SLOT: &str = "hours";
pub const MINUTES_SLOT: &str = "minutes";
pub const SECONDS_SLOT: &str = "seconds";
pub const COUNTDOWN_LABEL: &str = "countdown-label";
pub const STARS_CONTAINER: &str = "stars";
pub const PARTICLES_CONTAINER: &str = "particles";
pub const MOON_CONTAINER: &str = "moon-container";
pub const SCROLL_INDICATOR: &str = "scroll-indicator";
pub const FEATURES_SECTION: &str = "features";

pub const FEATURE_CARD_CLASS: &str = "feature-card";
pub const PRAYER_CARD_CLASS: &str = "prayer-card";
pub const CARD_GLOW_CLASS: &str = "card-glow";

/// Stagger between consecutive feature card reveals
const REVEAL_STAGGER_MS: usize = 100;

/// Element id of the card for a prayer window
pub fn prayer_card_id(name: &str) -> String {
    format!("prayer-{}", name)
}

/// Element id of the glow overlay inside a card
pub fn glow_id(card_id: &str) -> String {
    format!("{}-glow", card_id)
}

/// A single page element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub text: Option<String>,
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Decoration>,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }
}

/// Page model holding every element in document order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub elements: Vec<Element>,
    /// Last element scrolled into view
    pub scrolled_to: Option<String>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard page: background layers, hero countdown, feature cards
    /// and one card per prayer window.
    pub fn page(prayers: &PrayerWindowTable, feature_cards: usize) -> Self {
        let mut board = Self::new();

        board.push(Element::new(STARS_CONTAINER));
        board.push(Element::new(PARTICLES_CONTAINER));
        board.push(Element::new(MOON_CONTAINER));

        for slot in [DAYS_SLOT, HOURS_SLOT, MINUTES_SLOT, SECONDS_SLOT] {
            board.push(Element::new(slot).with_class("countdown-value").with_text("00"));
        }
        board.push(Element::new(COUNTDOWN_LABEL).with_text("Menuju Ramadhan"));
        board.push(Element::new(SCROLL_INDICATOR));

        board.push(Element::new(FEATURES_SECTION));
        for index in 0..feature_cards {
            let id = format!("feature-card-{}", index + 1);
            board.push(Element::new(glow_id(&id)).with_class(CARD_GLOW_CLASS));
            board.push(
                Element::new(id)
                    .with_class(FEATURE_CARD_CLASS)
                    .with_attribute("data-delay", (index * REVEAL_STAGGER_MS).to_string()),
            );
        }

        for window in prayers.windows() {
            board.push(
                Element::new(prayer_card_id(&window.name))
                    .with_class(PRAYER_CARD_CLASS)
                    .with_attribute("data-prayer", window.name.clone())
                    .with_text(window.start_label()),
            );
        }

        board
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Drop an element; used to model pages that omit optional parts
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(|e| e.text.as_deref())
    }

    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.get(id)
            .and_then(|e| e.styles.get(property))
            .map(String::as_str)
    }

    /// Ids of elements with the given class, restricted to the active set
    pub fn active_ids(&self, class: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.classes.contains(class) && e.classes.contains("active"))
            .map(|e| e.id.clone())
            .collect()
    }
}

impl Surface for Board {
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.classes.contains(class))
            .map(|e| e.id.clone())
            .collect()
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.text = Some(text.to_string());
                true
            }
            None => false,
        }
    }

    fn set_class(&mut self, id: &str, class: &str, on: bool) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                if on {
                    element.classes.insert(class.to_string());
                } else {
                    element.classes.remove(class);
                }
                true
            }
            None => false,
        }
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|e| e.classes.contains(class))
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.styles.insert(property.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.attributes.insert(name.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.get(id).and_then(|e| e.attributes.get(name).cloned())
    }

    fn append_child(&mut self, container: &str, child: Decoration) -> bool {
        match self.get_mut(container) {
            Some(element) => {
                element.children.push(child);
                true
            }
            None => false,
        }
    }

    fn scroll_into_view(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.scrolled_to = Some(id.to_string());
        true
    }
}
