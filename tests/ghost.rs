use glam::Vec2;
use pellet_mania::constants::{GHOST_SIZE, GHOST_SPEED};
use pellet_mania::entity::ghost::Ghost;
use pellet_mania::geometry::Rect;
use pellet_mania::maze::Maze;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use speculoos::prelude::*;

/// A single 20x20 wall centered at (110, 110).
fn single_wall() -> Maze {
    Maze::new(vec![Rect::new(100.0, 100.0, 20.0, 20.0)]).unwrap()
}

#[test]
fn test_bounce_approaching_from_left() {
    let maze = single_wall();
    let mut ghost = Ghost::with_velocity(Vec2::new(79.0, 100.0), GHOST_SIZE, Vec2::new(2.0, 0.0));

    ghost.step(&maze);

    assert_that(&(ghost.velocity().x < 0.0)).is_true();
    assert_that(&ghost.position()).is_equal_to(Vec2::new(77.0, 100.0));
}

#[test]
fn test_bounce_approaching_from_right() {
    let maze = single_wall();
    let mut ghost = Ghost::with_velocity(Vec2::new(121.0, 100.0), GHOST_SIZE, Vec2::new(-2.0, 0.0));

    ghost.step(&maze);

    assert_that(&(ghost.velocity().x > 0.0)).is_true();
    assert_that(&ghost.position()).is_equal_to(Vec2::new(123.0, 100.0));
}

#[test]
fn test_bounce_approaching_from_above() {
    let maze = single_wall();
    let mut ghost = Ghost::with_velocity(Vec2::new(100.0, 79.0), GHOST_SIZE, Vec2::new(0.0, 2.0));

    ghost.step(&maze);

    assert_that(&(ghost.velocity().y < 0.0)).is_true();
    assert_that(&ghost.position()).is_equal_to(Vec2::new(100.0, 77.0));
}

#[test]
fn test_bounce_approaching_from_below() {
    let maze = single_wall();
    let mut ghost = Ghost::with_velocity(Vec2::new(100.0, 121.0), GHOST_SIZE, Vec2::new(0.0, -2.0));

    ghost.step(&maze);

    assert_that(&(ghost.velocity().y > 0.0)).is_true();
    assert_that(&ghost.position()).is_equal_to(Vec2::new(100.0, 123.0));
}

#[test]
fn test_diagonal_bounce_reflects_both_axes() {
    let maze = single_wall();
    let mut ghost = Ghost::with_velocity(Vec2::new(79.0, 79.0), GHOST_SIZE, Vec2::new(2.0, 2.0));

    ghost.step(&maze);

    assert_that(&ghost.velocity()).is_equal_to(Vec2::new(-2.0, -2.0));
}

#[test]
fn test_free_flight_is_a_straight_line() {
    let maze = Maze::new(vec![Rect::new(500.0, 500.0, 10.0, 10.0)]).unwrap();
    let mut ghost = Ghost::with_velocity(Vec2::new(0.0, 0.0), GHOST_SIZE, Vec2::new(2.0, -2.0));

    for tick in 1..=10 {
        ghost.step(&maze);
        assert_that(&ghost.position()).is_equal_to(Vec2::new(2.0 * tick as f32, -2.0 * tick as f32));
    }
    assert_that(&ghost.velocity()).is_equal_to(Vec2::new(2.0, -2.0));
}

#[test]
fn test_randomized_velocity_components_have_fixed_magnitude() {
    let mut rng = SmallRng::seed_from_u64(42);

    for _ in 0..32 {
        let ghost = Ghost::new(Vec2::new(300.0, 200.0), GHOST_SIZE, GHOST_SPEED, &mut rng);
        assert_that(&ghost.velocity().x.abs()).is_equal_to(GHOST_SPEED);
        assert_that(&ghost.velocity().y.abs()).is_equal_to(GHOST_SPEED);
    }
}

#[test]
fn test_seeded_construction_is_reproducible() {
    let mut first = SmallRng::seed_from_u64(7);
    let mut second = SmallRng::seed_from_u64(7);

    for _ in 0..8 {
        let a = Ghost::new(Vec2::new(300.0, 200.0), GHOST_SIZE, GHOST_SPEED, &mut first);
        let b = Ghost::new(Vec2::new(300.0, 200.0), GHOST_SIZE, GHOST_SPEED, &mut second);
        assert_that(&a.velocity()).is_equal_to(b.velocity());
    }
}
