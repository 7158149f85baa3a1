//! The moving entities of the game: the player agent and its adversaries.

pub mod direction;
pub mod ghost;
pub mod player;
