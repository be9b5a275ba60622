//! Display surface capability
//!
//! Render steps and effects only see elements through this trait. Every
//! mutator returns `false` and does nothing when the element does not exist,
//! so optional page elements never turn into errors.

use serde::{Deserialize, Serialize};

/// Kind of generated background decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationKind {
    Star,
    Particle,
}

impl DecorationKind {
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::Particle => "particle",
        }
    }
}

/// One generated star or particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub kind: DecorationKind,
    /// Width and height in pixels
    pub size_px: f64,
    /// Horizontal position in percent of the container
    pub left_pct: f64,
    /// Vertical position in percent; particles rise from the bottom instead
    pub top_pct: Option<f64>,
    /// Twinkle cycle in seconds
    pub duration_s: Option<f64>,
    pub delay_s: f64,
}

pub trait Surface {
    fn contains(&self, id: &str) -> bool;

    /// Ids of every element carrying `class`, in document order
    fn ids_with_class(&self, class: &str) -> Vec<String>;

    fn set_text(&mut self, id: &str, text: &str) -> bool;

    /// Add (`on == true`) or remove a class
    fn set_class(&mut self, id: &str, class: &str, on: bool) -> bool;

    fn has_class(&self, id: &str, class: &str) -> bool;

    fn set_style(&mut self, id: &str, property: &str, value: &str) -> bool;

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool;

    fn attribute(&self, id: &str, name: &str) -> Option<String>;

    fn append_child(&mut self, container: &str, child: Decoration) -> bool;

    fn scroll_into_view(&mut self, id: &str) -> bool;
}
