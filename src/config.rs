//! Session configuration and its construction-time validation.

use std::time::Duration;

use glam::Vec2;
use smallvec::{smallvec, SmallVec};

use crate::constants::{
    ARENA_SIZE, CHOMP_INTERVAL, GHOST_SIZE, GHOST_SPAWNS, GHOST_SPEED, PELLET_SCORE, PELLET_SIZE, PELLET_SPACING,
    PLAYER_SIZE, PLAYER_SPAWN, PLAYER_SPEED,
};
use crate::error::ConfigError;
use crate::geometry::Rect;
use crate::maze::Maze;

/// Tunable parameters for one session.
///
/// The defaults reproduce the classic arena. All values are validated against
/// the maze before a session is constructed; a bad configuration is a
/// construction error, never a silently unplayable session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Extent of the playable rectangle.
    pub arena_size: Vec2,
    pub player_spawn: Vec2,
    pub player_size: f32,
    /// Distance the player covers per tick on each held axis.
    pub player_speed: f32,
    pub ghost_spawns: SmallVec<[Vec2; 4]>,
    pub ghost_size: f32,
    /// Magnitude of each adversary velocity component, per tick.
    pub ghost_speed: f32,
    pub pellet_size: f32,
    /// Grid spacing (and outer margin) for pellet placement.
    pub pellet_spacing: f32,
    /// Points awarded per pellet.
    pub pellet_score: u32,
    /// Minimum time between chomp cues while movement keys are held.
    pub chomp_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            arena_size: ARENA_SIZE,
            player_spawn: PLAYER_SPAWN,
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            ghost_spawns: smallvec![GHOST_SPAWNS[0], GHOST_SPAWNS[1]],
            ghost_size: GHOST_SIZE,
            ghost_speed: GHOST_SPEED,
            pellet_size: PELLET_SIZE,
            pellet_spacing: PELLET_SPACING,
            pellet_score: PELLET_SCORE,
            chomp_interval: CHOMP_INTERVAL,
        }
    }
}

impl SessionConfig {
    /// Checks this configuration against the maze it will be used with.
    ///
    /// # Errors
    ///
    /// Returns a descriptive `ConfigError` for non-positive spacing or entity
    /// sizes, or for a spawn point whose box already intersects a wall.
    pub fn validate(&self, maze: &Maze) -> Result<(), ConfigError> {
        if self.pellet_spacing <= 0.0 {
            return Err(ConfigError::InvalidPelletSpacing(self.pellet_spacing));
        }

        for (entity, size) in [
            ("Player", self.player_size),
            ("Adversary", self.ghost_size),
            ("Pellet", self.pellet_size),
        ] {
            if size <= 0.0 {
                return Err(ConfigError::InvalidEntitySize { entity, size });
            }
        }

        let player_bounds = Rect::from_corner(self.player_spawn, Vec2::splat(self.player_size));
        if maze.blocks(&player_bounds) {
            return Err(ConfigError::BlockedSpawn {
                entity: "Player",
                x: self.player_spawn.x,
                y: self.player_spawn.y,
            });
        }

        for spawn in &self.ghost_spawns {
            let bounds = Rect::from_corner(*spawn, Vec2::splat(self.ghost_size));
            if maze.blocks(&bounds) {
                return Err(ConfigError::BlockedSpawn {
                    entity: "Adversary",
                    x: spawn.x,
                    y: spawn.y,
                });
            }
        }

        Ok(())
    }
}
