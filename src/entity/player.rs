//! Player agent implementation.
//!
//! The player owns its position, facing direction, mouth animation phase, and
//! the timestamp throttling its chomp cue. All position changes go through
//! `attempt_move`, which resolves the candidate box against the maze.

use std::time::Duration;

use glam::Vec2;

use crate::constants::MOUTH_PERIOD;
use crate::entity::direction::Direction;
use crate::geometry::Rect;
use crate::maze::Maze;

/// The player-controlled agent.
pub struct Player {
    position: Vec2,
    size: f32,
    /// Current facing, updated by the session as movement keys are held.
    pub facing: Direction,
    mouth_phase: u8,
    last_chomp: Option<Duration>,
    chomp_interval: Duration,
}

impl Player {
    pub fn new(spawn: Vec2, size: f32, chomp_interval: Duration) -> Self {
        Player {
            position: spawn,
            size,
            facing: Direction::Right,
            mouth_phase: 0,
            last_chomp: None,
            chomp_interval,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_corner(self.position, Vec2::splat(self.size))
    }

    /// Attempts to move by `delta`, vetoed by the maze.
    ///
    /// The candidate box at the offset position is tested against every wall;
    /// the move commits only if it is clear. This is the sole mutation path
    /// for the player's position.
    pub fn attempt_move(&mut self, delta: Vec2, maze: &Maze) -> bool {
        let candidate = self.bounds().translated(delta);
        if maze.blocks(&candidate) {
            return false;
        }

        self.position = candidate.min;
        true
    }

    /// Advances the mouth animation by one tick.
    ///
    /// The phase wraps at `MOUTH_PERIOD`; called once per tick, so the cycle
    /// cadence is tied to the loop's fixed rate.
    pub fn advance_animation(&mut self) {
        self.mouth_phase = (self.mouth_phase + 1) % MOUTH_PERIOD;
    }

    /// True during the first half of the animation cycle.
    pub fn mouth_open(&self) -> bool {
        self.mouth_phase < MOUTH_PERIOD / 2
    }

    /// Requests a chomp cue, throttled to at most one per interval.
    ///
    /// Returns true (and records `now`) only if more than the configured
    /// interval has elapsed since the last accepted chomp. Held movement keys
    /// call this every tick.
    pub fn try_chomp(&mut self, now: Duration) -> bool {
        let ready = match self.last_chomp {
            None => true,
            Some(last) => now.saturating_sub(last) > self.chomp_interval,
        };

        if ready {
            self.last_chomp = Some(now);
        }
        ready
    }
}
