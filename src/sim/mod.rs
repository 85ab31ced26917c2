//! Simulation module
//!
//! All gameplay logic lives here, free of rendering and platform code. The
//! loop is intentionally naive: exhaustive pairwise collision over a small
//! fixed population, one step per repaint callback, no fixed timestep.

pub mod collision;
pub mod state;
pub mod step;

pub use collision::{circles_overlap, pop_pass, recolor_pass};
pub use state::{Ball, Hunter, Rgb, World};
pub use step::step;
