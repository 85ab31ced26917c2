//! Bounce Pop - a bouncing-balls popping toy
//!
//! Colored circles drift around the viewport, recoloring each other on
//! contact; the player steers a hunter ring that pops any ball it touches.
//!
//! Core modules:
//! - `sim`: simulation (motion, collisions, the entity store)
//! - `renderer`: WebGPU rendering pipeline
//! - `input`: keyboard intent flags
//! - `settings`: visual quality settings

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use input::Intent;
pub use settings::{QualityPreset, Settings};

/// Gameplay constants
pub mod consts {
    /// Number of balls spawned at startup
    pub const BALL_COUNT: usize = 25;

    /// Ball radius range (pixels)
    pub const BALL_MIN_RADIUS: f32 = 10.0;
    pub const BALL_MAX_RADIUS: f32 = 20.0;
    /// Ball start velocity range per axis (pixels per frame)
    pub const BALL_MAX_START_SPEED: f32 = 7.0;

    /// Hunter ring radius (pixels)
    pub const HUNTER_RADIUS: f32 = 10.0;
    /// Hunter speed cap per axis (pixels per frame)
    pub const HUNTER_MAX_SPEED: f32 = 20.0;
    /// Velocity change per held intent flag per frame
    pub const HUNTER_ACCEL: f32 = 1.0;
    /// Stroke width of the hunter ring (pixels)
    pub const HUNTER_STROKE: f32 = 3.0;

    /// Alpha of the per-frame dark overlay; partial erase leaves motion trails
    pub const TRAIL_FADE_ALPHA: f32 = 0.25;
}
