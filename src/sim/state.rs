//! Entity types and the world container
//!
//! The simulation owns a flat, index-addressed store of balls plus the single
//! player hunter. Balls are never removed from the store; popping clears the
//! `alive` flag and the ball is skipped from then on.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An 8-bit RGB color. Mutable only through ball/ball collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Draw a uniformly random color, one byte per channel
    pub fn random(rng: &mut Pcg32) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }

    /// Normalized RGBA for the renderer
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// A free-moving ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    /// Popped balls stay in the store but are skipped everywhere
    pub alive: bool,
}

impl Ball {
    /// Spawn a ball at a random in-bounds position
    ///
    /// Position is kept at least one radius away from every edge so the first
    /// frame already satisfies the bounds invariant.
    pub fn spawn(rng: &mut Pcg32, width: f32, height: f32) -> Self {
        let radius = rng.random_range(BALL_MIN_RADIUS..=BALL_MAX_RADIUS);
        Self {
            pos: Vec2::new(
                rng.random_range(radius..=width - radius),
                rng.random_range(radius..=height - radius),
            ),
            vel: Vec2::new(
                rng.random_range(-BALL_MAX_START_SPEED..=BALL_MAX_START_SPEED),
                rng.random_range(-BALL_MAX_START_SPEED..=BALL_MAX_START_SPEED),
            ),
            radius,
            color: Rgb::random(rng),
            alive: true,
        }
    }
}

/// The player-steered hunter ring
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hunter {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed at creation
    pub radius: f32,
    /// Per-axis velocity cap
    pub max_speed: f32,
}

impl Hunter {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: HUNTER_RADIUS,
            max_speed: HUNTER_MAX_SPEED,
        }
    }
}

impl Default for Hunter {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete world state: viewport extent, ball store, hunter, RNG
#[derive(Debug, Clone)]
pub struct World {
    pub width: f32,
    pub height: f32,
    pub balls: Vec<Ball>,
    pub hunter: Hunter,
    /// Seeded RNG; drives spawn layout and collision colors
    pub rng: Pcg32,
}

impl World {
    /// Create a world sized to the viewport, populated with `BALL_COUNT` balls
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let balls = (0..BALL_COUNT)
            .map(|_| Ball::spawn(&mut rng, width, height))
            .collect();
        Self {
            width,
            height,
            balls,
            hunter: Hunter::new(),
            rng,
        }
    }

    /// Number of balls not yet popped
    pub fn live_count(&self) -> usize {
        self.balls.iter().filter(|b| b.alive).count()
    }
}
