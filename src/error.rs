//! Centralized error types for the game.
//!
//! All failures happen at construction time: a running session is a closed
//! simulation whose per-tick operations are total. Invalid configuration is
//! rejected fast with a descriptive error instead of producing an unplayable
//! session.

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("SDL error: {0}")]
    Sdl(String),
}

/// Errors raised while validating session configuration at construction.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Maze has no walls")]
    EmptyMaze,

    #[error("Wall {index} has non-positive size {width}x{height}")]
    DegenerateWall { index: usize, width: f32, height: f32 },

    #[error("Pellet spacing must be positive, got {0}")]
    InvalidPelletSpacing(f32),

    #[error("{entity} size must be positive, got {size}")]
    InvalidEntitySize { entity: &'static str, size: f32 },

    #[error("{entity} spawn at ({x}, {y}) intersects a wall")]
    BlockedSpawn { entity: &'static str, x: f32, y: f32 },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
