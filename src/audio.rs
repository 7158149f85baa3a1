//! Procedural audio synthesis and playback.
//!
//! No sample assets: every cue is a square wave synthesized on demand and
//! handed to SDL2_mixer as a raw PCM chunk. Playback is fire-and-forget on
//! the mixer's channels, so overlapping cues mix in the sink and the
//! simulation thread never blocks on a buffer's duration.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use sdl2::mixer::{self, Chunk, AUDIO_S16LSB};

use crate::constants::SAMPLE_RATE;

const AUDIO_CHANNELS: i32 = 4;
const DEFAULT_VOLUME: u8 = 32;
const FULL_SCALE: i16 = 32_767;

/// A short synthesized audio event tied to a specific gameplay trigger.
///
/// The three cues are acoustically distinct: movement is a very short mid
/// tone, pickup a short high tone, elimination a long low tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Movement chomp while a direction key is held (throttled).
    Chomp,
    /// Pellet pickup.
    Pickup,
    /// Adversary contact; the session ends with this one.
    Elimination,
}

impl Cue {
    pub const ALL: [Cue; 3] = [Cue::Chomp, Cue::Pickup, Cue::Elimination];

    /// Tone frequency, in Hz.
    pub fn frequency(self) -> f32 {
        match self {
            Cue::Chomp => 440.0,
            Cue::Pickup => 880.0,
            Cue::Elimination => 220.0,
        }
    }

    /// Tone length, in seconds.
    pub fn duration(self) -> f32 {
        match self {
            Cue::Chomp => 0.05,
            Cue::Pickup => 0.1,
            Cue::Elimination => 0.5,
        }
    }
}

/// Generates a naive square wave as full-scale signed 16-bit samples.
///
/// Sample `i` covers time `t = i / SAMPLE_RATE`; the value is `+32767` while
/// `(t * frequency) mod 1 < 0.5` and `-32767` otherwise. The wave is not
/// bandlimited; the aliasing is acceptable for cues this short.
pub fn synthesize_square_wave(frequency: f32, duration: f32) -> Vec<i16> {
    let sample_count = (duration * SAMPLE_RATE as f32).round() as usize;

    (0..sample_count)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            if (t * frequency).fract() < 0.5 {
                FULL_SCALE
            } else {
                -FULL_SCALE
            }
        })
        .collect()
}

/// Encodes samples as little-endian signed 16-bit mono PCM.
pub fn encode_pcm(samples: &[i16]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        buffer.extend_from_slice(&sample.to_le_bytes());
    }
    buffer
}

/// The audio system for the game.
///
/// This struct is responsible for opening the audio device, synthesizing the
/// cue chunks, and playing them. If audio fails to initialize, it will be
/// disabled and all functions will silently do nothing.
pub struct Audio {
    chunks: HashMap<Cue, Chunk>,
    state: AudioState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioState {
    Enabled { volume: u8 },
    Muted { previous_volume: u8 },
    Disabled,
}

impl Default for Audio {
    fn default() -> Self {
        Self::new()
    }
}

impl Audio {
    /// Creates a new `Audio` instance.
    ///
    /// If the device cannot be opened or any chunk fails to build, the audio
    /// system degrades to a disabled state instead of failing the game.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!("Failed to initialize audio: {}. Audio will be disabled.", e);
                Self {
                    chunks: HashMap::new(),
                    state: AudioState::Disabled,
                }
            }
        }
    }

    fn try_new() -> Result<Self> {
        // Mono signed 16-bit at the synthesis sample rate, so chunks can be
        // handed over without resampling.
        mixer::open_audio(SAMPLE_RATE as i32, AUDIO_S16LSB, 1, 256).map_err(|e| anyhow!("Failed to open audio: {}", e))?;
        mixer::allocate_channels(AUDIO_CHANNELS);

        for i in 0..AUDIO_CHANNELS {
            mixer::Channel(i).set_volume(DEFAULT_VOLUME as i32);
        }

        let chunks = Cue::ALL
            .iter()
            .map(|&cue| {
                let pcm = encode_pcm(&synthesize_square_wave(cue.frequency(), cue.duration()));
                Chunk::from_raw_buffer(pcm.into_boxed_slice())
                    .map(|chunk| (cue, chunk))
                    .map_err(|e| anyhow!("Failed to build chunk for {:?}: {}", cue, e))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        Ok(Audio {
            chunks,
            state: AudioState::Enabled { volume: DEFAULT_VOLUME },
        })
    }

    /// Plays the provided cue once, fire-and-forget.
    ///
    /// The chunk goes to the first free mixer channel; cues already playing
    /// keep going, so overlapping triggers are audible concurrently. Silently
    /// returns if audio is disabled or muted.
    pub fn play(&mut self, cue: Cue) {
        if !matches!(self.state, AudioState::Enabled { .. }) {
            return;
        }

        if let Some(chunk) = self.chunks.get(&cue) {
            match mixer::Channel::all().play(chunk, 0) {
                Ok(channel) => {
                    tracing::trace!("Playing {:?} cue on channel {:?}", cue, channel);
                }
                Err(e) => {
                    tracing::warn!("Could not play {:?} cue: {}", cue, e);
                }
            }
        }
    }

    /// Instantly mutes or unmutes all audio channels by adjusting their volume.
    pub fn set_mute(&mut self, mute: bool) {
        match (mute, self.state) {
            (true, AudioState::Enabled { volume }) => {
                self.state = AudioState::Muted { previous_volume: volume };
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(0);
                }
            }
            (false, AudioState::Muted { previous_volume }) => {
                self.state = AudioState::Enabled { volume: previous_volume };
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(previous_volume as i32);
                }
            }
            _ => {}
        }
    }

    /// Returns `true` if the audio is muted.
    pub fn is_muted(&self) -> bool {
        matches!(self.state, AudioState::Muted { .. })
    }

    /// Returns whether the audio system failed to initialize and is non-functional.
    pub fn is_disabled(&self) -> bool {
        matches!(self.state, AudioState::Disabled)
    }
}
