//! Confetti celebration: a five second burst loop driven by browser timers.
//!
//! The timing and sampling math lives in [`schedule`] and is plain Rust, so it
//! can be exercised off the browser. [`trigger`] wires it to `gloo_timers` and
//! the `canvas-confetti` global.

mod confetti;
mod counter;
mod schedule;
mod trigger;

use serde::Serialize;

pub use counter::{ConfettiAction, ConfettiKey};
pub use schedule::Schedule;
pub use trigger::{Celebration, CelebrationRegistry};

/// Normalized viewport coordinates, `0.0..=1.0` on both axes.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

/// Options object handed to `confetti(...)` for a single burst.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BurstOptions {
    pub start_velocity: f64,
    pub spread: f64,
    pub ticks: u32,
    pub z_index: i32,
    /// Left fractional; the library rounds it.
    pub particle_count: f64,
    pub origin: Origin,
}

/// Per-burst settings that don't change over a celebration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstDefaults {
    pub start_velocity: f64,
    pub spread: f64,
    pub ticks: u32,
    pub z_index: i32,
}

impl Default for BurstDefaults {
    fn default() -> Self {
        Self {
            start_velocity: 30.0,
            spread: 360.0,
            ticks: 60,
            z_index: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CelebrationConfig {
    pub duration_ms: u32,
    pub tick_ms: u32,
    /// Particle count of a burst fired with the whole window still ahead.
    pub max_particles: f64,
    pub left_origin_x: (f64, f64),
    pub right_origin_x: (f64, f64),
    /// Half-open: the upper bound is never sampled.
    pub origin_y: (f64, f64),
    pub burst: BurstDefaults,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 5_000,
            tick_ms: 250,
            max_particles: 50.0,
            left_origin_x: (0.1, 0.3),
            right_origin_x: (0.7, 0.9),
            origin_y: (-0.2, 0.8),
            burst: BurstDefaults::default(),
        }
    }
}
