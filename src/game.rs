//! Session state and the per-tick update pipeline.
//!
//! A session aggregates the player, the adversaries, the pellet field, the
//! score, and the terminal flag. It is exclusively owned and mutated by the
//! loop thread; all state transitions happen inside a single tick's
//! sequential processing.

use std::time::Duration;

use rand::rngs::SmallRng;
use smallvec::SmallVec;

use crate::config::SessionConfig;
use crate::entity::direction::Direction;
use crate::entity::ghost::Ghost;
use crate::entity::player::Player;
use crate::error::GameResult;
use crate::events::GameEvent;
use crate::input::Buttons;
use crate::maze::Maze;
use crate::pellets::{self, Pellet};

/// Held direction keys are resolved in this fixed order, one `attempt_move`
/// per axis entry. Diagonals arise naturally when two keys are held; opposite
/// keys apply both moves sequentially and cancel unless a wall vetoes one.
const MOVES: [(Buttons, Direction); 4] = [
    (Buttons::LEFT, Direction::Left),
    (Buttons::RIGHT, Direction::Right),
    (Buttons::UP, Direction::Up),
    (Buttons::DOWN, Direction::Down),
];

/// One playthrough from spawn to elimination or explicit reset.
pub struct Session {
    config: SessionConfig,
    maze: Maze,
    player: Player,
    ghosts: SmallVec<[Ghost; 4]>,
    pellets: Vec<Pellet>,
    score: u32,
    ended: bool,
    rng: SmallRng,
}

impl Session {
    /// Creates a session over `maze`, validating the configuration first.
    ///
    /// The random source is injected and owned by the session: adversary
    /// velocities at construction and on every reset are drawn from it, so a
    /// seeded session replays identically.
    ///
    /// # Errors
    ///
    /// Propagates `ConfigError` for a configuration that does not fit the
    /// maze (see [`SessionConfig::validate`]).
    pub fn new(maze: Maze, config: SessionConfig, rng: SmallRng) -> GameResult<Self> {
        config.validate(&maze)?;

        let player = Player::new(config.player_spawn, config.player_size, config.chomp_interval);
        let mut session = Session {
            config,
            maze,
            player,
            ghosts: SmallVec::new(),
            pellets: Vec::new(),
            score: 0,
            ended: false,
            rng,
        };
        session.reset();
        Ok(session)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn pellets(&self) -> &[Pellet] {
        &self.pellets
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// True once an adversary has caught the player. A terminal state: only
    /// [`Session::reset`] leaves it.
    pub fn ended(&self) -> bool {
        self.ended
    }

    /// Advances the session by one tick.
    ///
    /// Resolves held directions into per-axis move attempts, advances the
    /// mouth animation, steps every adversary, consumes pellets under the
    /// player, and checks for adversary contact. Returns the events the tick
    /// produced, in order. In the ended state this is a no-op that returns no
    /// events.
    ///
    /// `now` is the monotonic time used for chomp-cue throttling.
    pub fn tick(&mut self, held: Buttons, now: Duration) -> SmallVec<[GameEvent; 8]> {
        let mut events = SmallVec::new();

        if self.ended {
            return events;
        }

        for (button, direction) in MOVES {
            if !held.contains(button) {
                continue;
            }

            self.player.attempt_move(direction.offset(self.config.player_speed), &self.maze);
            self.player.facing = direction;
            if self.player.try_chomp(now) {
                events.push(GameEvent::Chomp);
            }
        }

        self.player.advance_animation();

        for ghost in &mut self.ghosts {
            ghost.step(&self.maze);
        }

        let player_bounds = self.player.bounds();
        for pellet in &mut self.pellets {
            if !pellet.consumed && player_bounds.intersects(&pellet.bounds) {
                pellet.consumed = true;
                self.score += self.config.pellet_score;
                events.push(GameEvent::PelletEaten { score: self.score });
            }
        }

        for ghost in &self.ghosts {
            if player_bounds.intersects(&ghost.bounds()) {
                events.push(GameEvent::PlayerCaught);
                self.ended = true;
            }
        }

        events
    }

    /// Rebuilds the session: player back at spawn, pellet field regenerated,
    /// adversaries reconstructed with freshly drawn velocities, score zeroed.
    ///
    /// Accepted from both the active and the ended state, but only on an
    /// explicit user action.
    pub fn reset(&mut self) {
        self.player = Player::new(self.config.player_spawn, self.config.player_size, self.config.chomp_interval);
        self.pellets = pellets::generate(&self.maze, &self.config);

        self.ghosts.clear();
        let spawns = self.config.ghost_spawns.clone();
        for spawn in spawns {
            self.ghosts
                .push(Ghost::new(spawn, self.config.ghost_size, self.config.ghost_speed, &mut self.rng));
        }

        self.score = 0;
        self.ended = false;
    }
}
