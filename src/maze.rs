//! The maze: a fixed, immutable collection of axis-aligned walls.

use crate::error::ConfigError;
use crate::geometry::Rect;

/// The playable space, defined by its wall set.
///
/// Walls are defined once at construction and never mutated; the maze is
/// queried for collisions by every moving entity and by pellet generation.
#[derive(Debug, Clone)]
pub struct Maze {
    walls: Vec<Rect>,
}

impl Maze {
    /// Builds a maze from a wall set, validating it first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyMaze` for an empty wall set, or
    /// `ConfigError::DegenerateWall` if any wall has a non-positive extent.
    pub fn new(walls: Vec<Rect>) -> Result<Maze, ConfigError> {
        if walls.is_empty() {
            return Err(ConfigError::EmptyMaze);
        }

        for (index, wall) in walls.iter().enumerate() {
            if wall.size.x <= 0.0 || wall.size.y <= 0.0 {
                return Err(ConfigError::DegenerateWall {
                    index,
                    width: wall.size.x,
                    height: wall.size.y,
                });
            }
        }

        Ok(Maze { walls })
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    /// Returns true if `bounds` intersects any wall.
    pub fn blocks(&self, bounds: &Rect) -> bool {
        self.walls.iter().any(|wall| wall.intersects(bounds))
    }
}
