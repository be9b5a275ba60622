//! Pointer-driven parallax and card hover glow

use serde::{Deserialize, Serialize};

use crate::{
    state::board::{glow_id, MOON_CONTAINER},
    surface::Surface,
};

/// Maximum parallax travel in pixels, edge to edge
const PARALLAX_RANGE_PX: f64 = 20.0;

/// Bounding box of a card in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Offset of the moon for a pointer at `(x, y)` in a `width` x `height` viewport.
///
/// The centre of the viewport maps to no offset, the edges to half the range.
pub fn parallax_offset(x: f64, y: f64, width: f64, height: f64) -> Option<(f64, f64)> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some((
        (x / width - 0.5) * PARALLAX_RANGE_PX,
        (y / height - 0.5) * PARALLAX_RANGE_PX,
    ))
}

pub fn apply_parallax<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    reduced_motion: bool,
) -> bool {
    if reduced_motion {
        return false;
    }
    match parallax_offset(x, y, width, height) {
        Some((dx, dy)) => surface.set_style(
            MOON_CONTAINER,
            "transform",
            &format!("translate({}px, {}px)", dx, dy),
        ),
        None => false,
    }
}

/// Glow anchor `(left, bottom)` in pixels relative to the card
pub fn glow_position(x: f64, y: f64, rect: &CardRect) -> (f64, f64) {
    let local_x = x - rect.left;
    let local_y = y - rect.top;
    (local_x, rect.height - local_y)
}

pub fn apply_glow<S: Surface + ?Sized>(
    surface: &mut S,
    card_id: &str,
    x: f64,
    y: f64,
    rect: &CardRect,
    reduced_motion: bool,
) -> bool {
    if reduced_motion {
        return false;
    }
    let glow = glow_id(card_id);
    if !surface.contains(&glow) {
        return false;
    }
    let (left, bottom) = glow_position(x, y, rect);
    surface.set_style(&glow, "left", &format!("{}px", left));
    surface.set_style(&glow, "bottom", &format!("{}px", bottom))
}
