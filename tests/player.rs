use std::time::Duration;

use glam::Vec2;
use pellet_mania::constants::{CHOMP_INTERVAL, MAZE_WALLS, MOUTH_PERIOD, PLAYER_SIZE, PLAYER_SPAWN};
use pellet_mania::entity::direction::Direction;
use pellet_mania::entity::player::Player;
use pellet_mania::geometry::Rect;
use pellet_mania::maze::Maze;
use speculoos::prelude::*;

fn arena() -> Maze {
    Maze::new(MAZE_WALLS.to_vec()).unwrap()
}

fn player() -> Player {
    Player::new(PLAYER_SPAWN, PLAYER_SIZE, CHOMP_INTERVAL)
}

#[test]
fn test_clear_move_commits() {
    let maze = arena();
    let mut player = player();

    let applied = player.attempt_move(Vec2::new(3.0, 0.0), &maze);

    assert_that(&applied).is_true();
    assert_that(&player.position()).is_equal_to(PLAYER_SPAWN + Vec2::new(3.0, 0.0));
}

#[test]
fn test_blocked_move_is_vetoed() {
    let maze = Maze::new(vec![Rect::new(0.0, 0.0, 100.0, 10.0)]).unwrap();
    let mut player = Player::new(Vec2::new(40.0, 12.0), PLAYER_SIZE, CHOMP_INTERVAL);

    let applied = player.attempt_move(Vec2::new(0.0, -3.0), &maze);

    assert_that(&applied).is_false();
    assert_that(&player.position()).is_equal_to(Vec2::new(40.0, 12.0));
}

#[test]
fn test_position_never_enters_a_wall() {
    let maze = arena();
    let mut player = player();

    // March into every wall in turn; no committed position may overlap one.
    for direction in Direction::DIRECTIONS {
        for _ in 0..300 {
            player.attempt_move(direction.offset(3.0), &maze);
            assert!(!maze.blocks(&player.bounds()));
        }
    }
}

#[test]
fn test_mouth_cycle_cadence() {
    let mut player = player();

    // Open for the first half of the cycle, closed for the second
    let mut pattern = Vec::new();
    for _ in 0..MOUTH_PERIOD {
        pattern.push(player.mouth_open());
        player.advance_animation();
    }

    let half = (MOUTH_PERIOD / 2) as usize;
    assert!(pattern[..half].iter().all(|&open| open));
    assert!(pattern[half..].iter().all(|&open| !open));

    // Back at the start of the cycle
    assert_that(&player.mouth_open()).is_true();
}

#[test]
fn test_chomp_throttle() {
    let mut player = player();

    // First request always fires
    assert_that(&player.try_chomp(Duration::ZERO)).is_true();

    // Held keys within the interval are suppressed
    assert_that(&player.try_chomp(Duration::ZERO)).is_false();
    assert_that(&player.try_chomp(Duration::from_millis(50))).is_false();

    // The elapsed time must strictly exceed the interval
    assert_that(&player.try_chomp(Duration::from_millis(100))).is_false();
    assert_that(&player.try_chomp(Duration::from_millis(101))).is_true();

    // Throttle restarts from the accepted chomp
    assert_that(&player.try_chomp(Duration::from_millis(150))).is_false();
}
