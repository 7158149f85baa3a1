//! Adversary entity implementation.
//!
//! Adversaries patrol the maze by pure reactive bouncing: no pursuit, no
//! pathfinding, no awareness of the player. Each one carries an independent
//! velocity whose components are reflected off walls component-wise.

use glam::Vec2;
use rand::Rng;

use crate::geometry::Rect;
use crate::maze::Maze;

/// A patrolling adversary.
pub struct Ghost {
    position: Vec2,
    velocity: Vec2,
    size: f32,
}

impl Ghost {
    /// Creates an adversary at `spawn` with a randomized velocity.
    ///
    /// Each axis component is independently `±speed` by a uniform sign draw,
    /// the one non-deterministic piece of state in the game. The random
    /// source is injected so sessions can be reproduced from a seed.
    pub fn new<R: Rng>(spawn: Vec2, size: f32, speed: f32, rng: &mut R) -> Self {
        let velocity = Vec2::new(
            if rng.random_bool(0.5) { speed } else { -speed },
            if rng.random_bool(0.5) { speed } else { -speed },
        );
        Ghost::with_velocity(spawn, size, velocity)
    }

    /// Creates an adversary with an explicit velocity.
    pub fn with_velocity(spawn: Vec2, size: f32, velocity: Vec2) -> Self {
        Ghost {
            position: spawn,
            velocity,
            size,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_corner(self.position, Vec2::splat(self.size))
    }

    /// Advances one tick, reflecting the velocity off any wall in the way.
    ///
    /// The candidate box one velocity step ahead is tested against every
    /// wall. For each hit, the x component is flipped to point away from the
    /// wall if the candidate's center lies strictly to one side of the wall's
    /// center on that axis, and likewise for y. The position then advances by
    /// the possibly-reflected velocity without re-validation, so a fast
    /// adversary can sit one tick's distance inside a thin wall before the
    /// next bounce carries it out.
    pub fn step(&mut self, maze: &Maze) {
        let candidate = self.bounds().translated(self.velocity);
        let center = candidate.center();

        for wall in maze.walls() {
            if !candidate.intersects(wall) {
                continue;
            }

            let wall_center = wall.center();
            if center.x < wall_center.x {
                self.velocity.x = -self.velocity.x.abs();
            } else if center.x > wall_center.x {
                self.velocity.x = self.velocity.x.abs();
            }
            if center.y < wall_center.y {
                self.velocity.y = -self.velocity.y.abs();
            } else if center.y > wall_center.y {
                self.velocity.y = self.velocity.y.abs();
            }
        }

        self.position += self.velocity;
    }
}
