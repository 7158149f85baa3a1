//! Main application wrapper: SDL initialization, window lifecycle, and the
//! fixed-timestep game loop.

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use sdl2::event::Event;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::{AudioSubsystem, EventPump, Sdl};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::audio::{Audio, Cue};
use crate::config::SessionConfig;
use crate::constants::{LOOP_TIME, MAZE_WALLS, WINDOW_SIZE};
use crate::error::{GameError, GameResult};
use crate::events::GameEvent;
use crate::game::Session;
use crate::input::{self, Command};
use crate::maze::Maze;
use crate::render;

/// Owns the SDL context, the session, and the audio system for the process
/// lifetime.
pub struct App {
    session: Session,
    audio: Audio,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    started: Instant,
    // Keep SDL alive for the app lifetime so subsystems (audio) are not shut down
    _sdl_context: Sdl,
    _audio_subsystem: AudioSubsystem,
}

impl App {
    /// Initializes SDL subsystems, creates the game window, and sets up the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails, or
    /// propagates configuration errors from `Session::new()`.
    pub fn new() -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let audio_subsystem = sdl_context.audio().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        debug!(width = WINDOW_SIZE.x, height = WINDOW_SIZE.y, "Creating game window");
        let window = video_subsystem
            .window("Pellet Mania", WINDOW_SIZE.x, WINDOW_SIZE.y)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let audio = Audio::new();
        if audio.is_disabled() {
            warn!("Running without audio");
        }

        let maze = Maze::new(MAZE_WALLS.to_vec())?;
        let session = Session::new(maze, SessionConfig::default(), SmallRng::from_os_rng())?;

        info!("Application initialization completed successfully");
        Ok(App {
            session,
            audio,
            canvas,
            event_pump,
            started: Instant::now(),
            _sdl_context: sdl_context,
            _audio_subsystem: audio_subsystem,
        })
    }

    /// Executes a single frame: input polling, simulation tick, draw, and
    /// frame pacing.
    ///
    /// Sleeps off whatever remains of the 60 Hz tick interval; a tick that
    /// overruns it is logged but never corrupts state, since all transitions
    /// happen inside the sequential tick.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` on exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        let mut exit = false;
        let mut commands: SmallVec<[Command; 2]> = SmallVec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => exit = true,
                Event::KeyDown {
                    keycode: Some(keycode), ..
                } => {
                    if let Some(command) = input::command_for_key(keycode) {
                        commands.push(command);
                    }
                }
                _ => {}
            }
        }

        for command in commands {
            match command {
                Command::Exit => exit = true,
                Command::Reset => {
                    info!("Session reset requested");
                    self.session.reset();
                }
                Command::MuteAudio => {
                    let muted = self.audio.is_muted();
                    self.audio.set_mute(!muted);
                }
            }
        }

        if exit {
            info!("Exit requested. Exiting...");
            return false;
        }

        let held = input::held_buttons(&self.event_pump.keyboard_state());
        let events = self.session.tick(held, self.started.elapsed());
        for event in events {
            match event {
                GameEvent::Chomp => self.audio.play(Cue::Chomp),
                GameEvent::PelletEaten { score } => {
                    debug!(score, "Pellet consumed");
                    self.audio.play(Cue::Pickup);
                }
                GameEvent::PlayerCaught => {
                    info!(score = self.session.score(), "Player eliminated");
                    self.audio.play(Cue::Elimination);
                }
            }
        }

        if let Err(e) = render::draw(&mut self.canvas, &self.session) {
            tracing::error!("Render failure: {}", e);
        }

        if start.elapsed() < LOOP_TIME {
            let remaining = LOOP_TIME.saturating_sub(start.elapsed());
            if remaining != Duration::ZERO {
                spin_sleep::sleep(remaining);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", start.elapsed() - LOOP_TIME);
        }

        true
    }
}
