//! Keyboard input collaborator.
//!
//! The core treats input as a pure per-tick query: a snapshot of which
//! directional controls are held, plus edge-triggered commands from discrete
//! key presses. Arrow keys and WASD are both bound.

use bitflags::bitflags;
use sdl2::keyboard::{KeyboardState, Keycode, Scancode};

bitflags! {
    /// Directional controls held during the current tick.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Buttons: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

/// Commands produced by discrete key presses rather than held state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    MuteAudio,
    Exit,
}

/// Maps a pressed key to its command, if it has one.
pub fn command_for_key(keycode: Keycode) -> Option<Command> {
    match keycode {
        Keycode::R => Some(Command::Reset),
        Keycode::M => Some(Command::MuteAudio),
        Keycode::Escape | Keycode::Q => Some(Command::Exit),
        _ => None,
    }
}

/// Snapshots the held directional controls from the keyboard state.
pub fn held_buttons(keyboard: &KeyboardState) -> Buttons {
    let mut buttons = Buttons::empty();

    if keyboard.is_scancode_pressed(Scancode::Up) || keyboard.is_scancode_pressed(Scancode::W) {
        buttons |= Buttons::UP;
    }
    if keyboard.is_scancode_pressed(Scancode::Down) || keyboard.is_scancode_pressed(Scancode::S) {
        buttons |= Buttons::DOWN;
    }
    if keyboard.is_scancode_pressed(Scancode::Left) || keyboard.is_scancode_pressed(Scancode::A) {
        buttons |= Buttons::LEFT;
    }
    if keyboard.is_scancode_pressed(Scancode::Right) || keyboard.is_scancode_pressed(Scancode::D) {
        buttons |= Buttons::RIGHT;
    }

    buttons
}
