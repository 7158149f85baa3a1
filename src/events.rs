//! Events produced by a session tick.
//!
//! The session itself is backend-free; each tick returns the events it
//! produced and the application layer maps them to audio cues and logging.

/// Something that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A movement key was held and the chomp throttle allowed a cue.
    Chomp,
    /// A pellet transitioned to consumed. Carries the score after the award.
    PelletEaten { score: u32 },
    /// An adversary touched the player; the session is now ended.
    PlayerCaught,
}
