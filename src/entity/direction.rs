//! Facing directions for the player agent.

use glam::Vec2;

/// The four directions the player can face and move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The per-tick movement delta for this direction at the given speed.
    ///
    /// Screen coordinates: positive y is down.
    pub fn offset(self, speed: f32) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -speed),
            Direction::Down => Vec2::new(0.0, speed),
            Direction::Left => Vec2::new(-speed, 0.0),
            Direction::Right => Vec2::new(speed, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_axis_aligned() {
        for direction in Direction::DIRECTIONS {
            let offset = direction.offset(3.0);
            assert!(offset.x == 0.0 || offset.y == 0.0);
            assert_eq!(offset.length(), 3.0);
        }
    }

    #[test]
    fn test_vertical_axis_points_down() {
        assert!(Direction::Down.offset(1.0).y > 0.0);
        assert!(Direction::Up.offset(1.0).y < 0.0);
    }
}
