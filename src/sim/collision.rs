//! Circle overlap tests and the two collision passes
//!
//! Both passes are exhaustive over the small fixed store. The recolor pass
//! runs per ball, interleaved with motion in the frame loop, so it sees a mix
//! of moved and not-yet-moved positions from the same frame. That matches the
//! toy's intent; there is no broad phase and no contact resolution.

use glam::Vec2;

use super::state::{Rgb, World};

/// Euclidean overlap test: distance between centers below the radius sum
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

/// Recolor pass for the ball at index `i`
///
/// Compares against every other live ball in the store. Each overlapping pair
/// adopts one freshly drawn shared color, so detection order cannot produce
/// diverging colors. Dead balls neither trigger nor receive recolors.
pub fn recolor_pass(world: &mut World, i: usize) {
    if !world.balls[i].alive {
        return;
    }
    for j in 0..world.balls.len() {
        if j == i || !world.balls[j].alive {
            continue;
        }
        let a = world.balls[i];
        let b = world.balls[j];
        if circles_overlap(a.pos, a.radius, b.pos, b.radius) {
            let color = Rgb::random(&mut world.rng);
            world.balls[i].color = color;
            world.balls[j].color = color;
        }
    }
}

/// Hunter pop pass: any live ball touching the hunter ring is marked dead
///
/// Removal is logical only; the store never shrinks. Returns the number of
/// balls popped this frame.
pub fn pop_pass(world: &mut World) -> usize {
    let hunter = world.hunter;
    let mut popped = 0;
    for ball in &mut world.balls {
        if ball.alive && circles_overlap(hunter.pos, hunter.radius, ball.pos, ball.radius) {
            ball.alive = false;
            popped += 1;
        }
    }
    popped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Ball, Hunter};

    fn test_world(balls: Vec<Ball>) -> World {
        let mut world = World::new(640.0, 480.0, 0);
        world.balls = balls;
        world
    }

    fn ball_at(x: f32, y: f32, radius: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius,
            color: Rgb { r: 0, g: 0, b: 0 },
            alive: true,
        }
    }

    #[test]
    fn overlap_is_strict() {
        // Touching exactly at the radius sum does not count
        assert!(!circles_overlap(
            Vec2::ZERO,
            10.0,
            Vec2::new(30.0, 0.0),
            20.0
        ));
        assert!(circles_overlap(
            Vec2::ZERO,
            10.0,
            Vec2::new(29.0, 0.0),
            20.0
        ));
    }

    #[test]
    fn overlapping_pair_shares_one_color() {
        let mut world = test_world(vec![
            ball_at(100.0, 100.0, 15.0),
            ball_at(110.0, 100.0, 15.0),
        ]);
        recolor_pass(&mut world, 0);
        assert_eq!(world.balls[0].color, world.balls[1].color);
        assert_ne!(world.balls[0].color, Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn recolor_is_commutative() {
        // Either detection order ends with the pair sharing a color
        let balls = vec![ball_at(100.0, 100.0, 15.0), ball_at(110.0, 100.0, 15.0)];

        let mut forward = test_world(balls.clone());
        recolor_pass(&mut forward, 0);
        recolor_pass(&mut forward, 1);

        let mut reverse = test_world(balls);
        recolor_pass(&mut reverse, 1);
        recolor_pass(&mut reverse, 0);

        assert_eq!(forward.balls[0].color, forward.balls[1].color);
        assert_eq!(reverse.balls[0].color, reverse.balls[1].color);
    }

    #[test]
    fn distant_balls_keep_their_colors() {
        let mut world = test_world(vec![
            ball_at(100.0, 100.0, 10.0),
            ball_at(400.0, 400.0, 10.0),
        ]);
        recolor_pass(&mut world, 0);
        assert_eq!(world.balls[0].color, Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(world.balls[1].color, Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn dead_ball_never_participates() {
        let mut world = test_world(vec![
            ball_at(100.0, 100.0, 15.0),
            ball_at(110.0, 100.0, 15.0),
        ]);
        world.balls[1].alive = false;

        // Neither as the subject...
        recolor_pass(&mut world, 1);
        assert_eq!(world.balls[0].color, Rgb { r: 0, g: 0, b: 0 });
        // ...nor as the other member of a pair
        recolor_pass(&mut world, 0);
        assert_eq!(world.balls[0].color, Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(world.balls[1].color, Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn pop_marks_touched_balls_dead() {
        let mut world = test_world(vec![
            ball_at(15.0, 0.0, 10.0),   // touching the hunter at origin
            ball_at(300.0, 300.0, 10.0), // far away
        ]);
        world.hunter = Hunter::new();

        let popped = pop_pass(&mut world);
        assert_eq!(popped, 1);
        assert!(!world.balls[0].alive);
        assert!(world.balls[1].alive);

        // A second pass over the same layout pops nothing new
        assert_eq!(pop_pass(&mut world), 0);
    }
}
