//! Star and particle field generation

use rand::Rng;

use crate::{
    state::board::{PARTICLES_CONTAINER, STARS_CONTAINER},
    surface::{Decoration, DecorationKind, Surface},
};

pub const DEFAULT_STARS: usize = 80;
pub const DEFAULT_PARTICLES: usize = 25;

/// Random twinkling stars scattered across the whole background
pub fn generate_stars<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Decoration> {
    (0..count)
        .map(|_| Decoration {
            kind: DecorationKind::Star,
            size_px: rng.random_range(1.0..3.0),
            left_pct: rng.random_range(0.0..100.0),
            top_pct: Some(rng.random_range(0.0..100.0)),
            duration_s: Some(rng.random_range(2.0..5.0)),
            delay_s: rng.random_range(0.0..5.0),
        })
        .collect()
}

/// Random floating particles; they rise from the bottom so only `left` is set
pub fn generate_particles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Decoration> {
    (0..count)
        .map(|_| Decoration {
            kind: DecorationKind::Particle,
            left_pct: rng.random_range(0.0..100.0),
            delay_s: rng.random_range(0.0..8.0),
            size_px: rng.random_range(2.0..5.0),
            top_pct: None,
            duration_s: None,
        })
        .collect()
}

/// Fill the stars container. Returns how many were added.
pub fn create_stars<S, R>(surface: &mut S, rng: &mut R, count: usize, reduced_motion: bool) -> usize
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    populate(surface, STARS_CONTAINER, reduced_motion, || generate_stars(rng, count))
}

/// Fill the particles container. Returns how many were added.
pub fn create_particles<S, R>(surface: &mut S, rng: &mut R, count: usize, reduced_motion: bool) -> usize
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    populate(surface, PARTICLES_CONTAINER, reduced_motion, || generate_particles(rng, count))
}

fn populate<S, F>(surface: &mut S, container: &str, reduced_motion: bool, generate: F) -> usize
where
    S: Surface + ?Sized,
    F: FnOnce() -> Vec<Decoration>,
{
    if reduced_motion || !surface.contains(container) {
        return 0;
    }

    generate()
        .into_iter()
        .filter(|decoration| surface.append_child(container, decoration.clone()))
        .count()
}
