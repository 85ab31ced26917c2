//! WebGPU rendering module
//!
//! Flat-colored triangle lists: every circle is a fan, the hunter is a ring,
//! and the motion trail comes from alpha-blending a dark full-viewport quad
//! into a persistent offscreen texture that is then blitted to the surface.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
