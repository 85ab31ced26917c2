//! Triangle-list generation for 2D primitives and the per-frame scene
//!
//! Everything is emitted in viewport pixel coordinates; the pipeline maps to
//! NDC at upload time.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::consts::HUNTER_STROKE;
use crate::settings::Settings;
use crate::sim::World;

/// Generate vertices for a filled circle as a triangle fan
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        vertices.push(Vertex::from_vec2(center, color));
        vertices.push(Vertex::from_vec2(
            center + radius * Vec2::new(theta1.cos(), theta1.sin()),
            color,
        ));
        vertices.push(Vertex::from_vec2(
            center + radius * Vec2::new(theta2.cos(), theta2.sin()),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring, the stroked-circle outline
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());

        let inner1 = center + inner_radius * dir1;
        let outer1 = center + outer_radius * dir1;
        let inner2 = center + inner_radius * dir2;
        let outer2 = center + outer_radius * dir2;

        vertices.push(Vertex::from_vec2(inner1, color));
        vertices.push(Vertex::from_vec2(outer1, color));
        vertices.push(Vertex::from_vec2(inner2, color));

        vertices.push(Vertex::from_vec2(inner2, color));
        vertices.push(Vertex::from_vec2(outer1, color));
        vertices.push(Vertex::from_vec2(outer2, color));
    }

    vertices
}

/// Full-viewport dark quad; its low alpha leaves the motion trail behind
pub fn fade_rect(width: f32, height: f32, alpha: f32) -> Vec<Vertex> {
    let [r, g, b] = colors::FADE_BASE;
    let color = [r, g, b, alpha];
    vec![
        Vertex::new(0.0, 0.0, color),
        Vertex::new(width, 0.0, color),
        Vertex::new(0.0, height, color),
        Vertex::new(0.0, height, color),
        Vertex::new(width, 0.0, color),
        Vertex::new(width, height, color),
    ]
}

/// Build the full frame: fade overlay, hunter ring, then every live ball
pub fn scene(world: &World, settings: &Settings) -> Vec<Vertex> {
    let segments = settings.quality.circle_segments();
    let mut vertices = fade_rect(world.width, world.height, settings.fade_alpha());

    let hunter = &world.hunter;
    vertices.extend(ring(
        hunter.pos,
        hunter.radius - HUNTER_STROKE / 2.0,
        hunter.radius + HUNTER_STROKE / 2.0,
        colors::HUNTER,
        segments,
    ));

    for ball in world.balls.iter().filter(|b| b.alive) {
        vertices.extend(circle(
            ball.pos,
            ball.radius,
            ball.color.to_rgba(),
            segments,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BALL_COUNT;

    #[test]
    fn circle_emits_three_vertices_per_segment() {
        let verts = circle(Vec2::new(10.0, 10.0), 5.0, [1.0; 4], 24);
        assert_eq!(verts.len(), 24 * 3);
    }

    #[test]
    fn ring_emits_six_vertices_per_segment() {
        let verts = ring(Vec2::ZERO, 8.0, 12.0, [1.0; 4], 24);
        assert_eq!(verts.len(), 24 * 6);
    }

    #[test]
    fn fade_rect_covers_the_viewport_corners() {
        let verts = fade_rect(640.0, 480.0, 0.25);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().any(|v| v.position == [0.0, 0.0]));
        assert!(verts.iter().any(|v| v.position == [640.0, 480.0]));
        assert!(verts.iter().all(|v| v.color[3] == 0.25));
    }

    #[test]
    fn dead_balls_emit_no_vertices() {
        let settings = Settings::default();
        let mut world = World::new(640.0, 480.0, 11);

        let full = scene(&world, &settings).len();
        for ball in &mut world.balls {
            ball.alive = false;
        }
        let empty = scene(&world, &settings).len();

        let per_ball = settings.quality.circle_segments() as usize * 3;
        assert_eq!(full - empty, BALL_COUNT * per_ball);

        // Only the fade quad and hunter ring remain
        let ring_len = settings.quality.circle_segments() as usize * 6;
        assert_eq!(empty, 6 + ring_len);
    }
}
