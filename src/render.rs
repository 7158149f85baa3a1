//! Renderer collaborator: draws the session onto an SDL2 canvas.
//!
//! Consumes the session read-only and holds no game logic. Shapes come from
//! the gfx primitives so no texture assets are needed.

use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect as SdlRect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants::WINDOW_SIZE;
use crate::entity::direction::Direction;
use crate::error::{GameError, GameResult};
use crate::game::Session;
use crate::geometry::Rect;

const WALL_COLOR: Color = Color::RGB(0, 0, 255);
const PELLET_COLOR: Color = Color::RGB(255, 255, 255);
const PLAYER_COLOR: Color = Color::RGB(255, 255, 0);
const GHOST_COLOR: Color = Color::RGB(255, 0, 0);
const TEXT_COLOR: Color = Color::RGB(255, 255, 255);

/// Width of a gfx builtin-font glyph, in pixels.
const GLYPH_WIDTH: i16 = 8;

fn to_sdl(rect: &Rect) -> SdlRect {
    SdlRect::new(rect.min.x as i32, rect.min.y as i32, rect.size.x as u32, rect.size.y as u32)
}

/// The mouth wedge spans 60 degrees centered on the facing direction.
fn mouth_angles(facing: Direction) -> (i16, i16) {
    let base: i16 = match facing {
        Direction::Right => 0,
        Direction::Down => 90,
        Direction::Left => 180,
        Direction::Up => 270,
    };
    ((base + 30) % 360, (base + 330) % 360)
}

/// Draws one frame of the session and presents it.
pub fn draw(canvas: &mut Canvas<Window>, session: &Session) -> GameResult<()> {
    canvas.set_draw_color(Color::RGB(0, 0, 0));
    canvas.clear();

    canvas.set_draw_color(WALL_COLOR);
    for wall in session.maze().walls() {
        canvas.fill_rect(to_sdl(wall)).map_err(GameError::Sdl)?;
    }

    for pellet in session.pellets().iter().filter(|pellet| !pellet.consumed) {
        let center = pellet.bounds.center();
        let radius = (pellet.bounds.size.x / 2.0) as i16;
        canvas
            .filled_circle(center.x as i16, center.y as i16, radius, PELLET_COLOR)
            .map_err(GameError::Sdl)?;
    }

    let player = session.player();
    let player_bounds = player.bounds();
    let center = player_bounds.center();
    let radius = (player_bounds.size.x / 2.0) as i16;
    if player.mouth_open() {
        let (start, end) = mouth_angles(player.facing);
        canvas
            .filled_pie(center.x as i16, center.y as i16, radius, start, end, PLAYER_COLOR)
            .map_err(GameError::Sdl)?;
    } else {
        canvas
            .filled_circle(center.x as i16, center.y as i16, radius, PLAYER_COLOR)
            .map_err(GameError::Sdl)?;
    }

    canvas.set_draw_color(GHOST_COLOR);
    for ghost in session.ghosts() {
        canvas.fill_rect(to_sdl(&ghost.bounds())).map_err(GameError::Sdl)?;
    }

    canvas
        .string(10, 10, &format!("Score: {}", session.score()), TEXT_COLOR)
        .map_err(GameError::Sdl)?;

    if session.ended() {
        let banner = "Game Over! Press R to restart";
        let x = (WINDOW_SIZE.x as i16 - banner.len() as i16 * GLYPH_WIDTH) / 2;
        let y = WINDOW_SIZE.y as i16 / 2;
        canvas.string(x, y, banner, TEXT_COLOR).map_err(GameError::Sdl)?;
    }

    canvas.present();
    Ok(())
}
