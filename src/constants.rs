//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{UVec2, Vec2};

use crate::geometry::Rect;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the window, in pixels.
pub const WINDOW_SIZE: UVec2 = UVec2::new(600, 480);
/// The playable area, in world units (1 unit = 1 pixel).
pub const ARENA_SIZE: Vec2 = Vec2::new(600.0, 480.0);

/// Side length of the player's bounding box.
pub const PLAYER_SIZE: f32 = 20.0;
/// Distance the player covers per tick on each held axis.
pub const PLAYER_SPEED: f32 = 3.0;
/// The player's fixed spawn point (top-left corner of its box).
pub const PLAYER_SPAWN: Vec2 = Vec2::new(100.0, 100.0);

/// Side length of an adversary's bounding box.
pub const GHOST_SIZE: f32 = 20.0;
/// Magnitude of each adversary velocity component, per tick.
pub const GHOST_SPEED: f32 = 2.0;
/// Fixed adversary spawn points.
pub const GHOST_SPAWNS: [Vec2; 2] = [Vec2::new(300.0, 200.0), Vec2::new(400.0, 300.0)];

/// Side length of a pellet's bounding box.
pub const PELLET_SIZE: f32 = 5.0;
/// Grid spacing (and outer margin) for pellet placement.
pub const PELLET_SPACING: f32 = 30.0;
/// Points awarded per pellet.
pub const PELLET_SCORE: u32 = 10;

/// Number of ticks in one mouth open/close cycle.
pub const MOUTH_PERIOD: u8 = 10;
/// Minimum time between chomp cues while movement keys are held.
pub const CHOMP_INTERVAL: Duration = Duration::from_millis(100);

/// Sample rate for synthesized audio, in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// The fixed wall set: an outer frame with three interior baffles.
///
/// Defined once, identical across sessions, never mutated.
pub const MAZE_WALLS: [Rect; 7] = [
    Rect::new(50.0, 50.0, 500.0, 10.0),
    Rect::new(50.0, 420.0, 500.0, 10.0),
    Rect::new(50.0, 50.0, 10.0, 370.0),
    Rect::new(540.0, 50.0, 10.0, 370.0),
    Rect::new(150.0, 150.0, 10.0, 100.0),
    Rect::new(250.0, 250.0, 100.0, 10.0),
    Rect::new(350.0, 100.0, 10.0, 100.0),
];
