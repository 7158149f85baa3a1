//! Procedural pellet field generation.
//!
//! Pellets are laid out on a fixed grid at session start. Placement is fully
//! deterministic: for a given maze and configuration the generated set is
//! identical every run.

use crate::config::SessionConfig;
use crate::geometry::Rect;
use crate::maze::Maze;

/// A collectible pellet.
///
/// Pellets are created in bulk at session start and never removed; pickup
/// only flips `consumed`, so a consumed pellet cannot score again.
#[derive(Debug, Clone, PartialEq)]
pub struct Pellet {
    pub bounds: Rect,
    pub consumed: bool,
}

impl Pellet {
    pub fn new(bounds: Rect) -> Self {
        Pellet { bounds, consumed: false }
    }
}

/// Lays out pellets on a uniform grid over the playable rectangle.
///
/// Grid points start one spacing in from the arena edge. A candidate is
/// rejected if its box intersects a wall, or if it falls within the exclusion
/// zone around the player spawn: closer than one player size plus one spacing
/// on both axes.
pub fn generate(maze: &Maze, config: &SessionConfig) -> Vec<Pellet> {
    let spacing = config.pellet_spacing;
    let exclusion = config.player_size + spacing;
    let mut pellets = Vec::new();

    let mut x = spacing;
    while x < config.arena_size.x - spacing {
        let mut y = spacing;
        while y < config.arena_size.y - spacing {
            let bounds = Rect::new(x, y, config.pellet_size, config.pellet_size);
            let near_spawn =
                (x - config.player_spawn.x).abs() < exclusion && (y - config.player_spawn.y).abs() < exclusion;

            if !near_spawn && !maze.blocks(&bounds) {
                pellets.push(Pellet::new(bounds));
            }

            y += spacing;
        }
        x += spacing;
    }

    pellets
}
