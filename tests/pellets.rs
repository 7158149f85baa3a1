use pellet_mania::config::SessionConfig;
use pellet_mania::constants::MAZE_WALLS;
use pellet_mania::maze::Maze;
use pellet_mania::pellets;
use pretty_assertions::assert_eq;

fn arena() -> Maze {
    Maze::new(MAZE_WALLS.to_vec()).unwrap()
}

#[test]
fn test_generation_is_deterministic() {
    let maze = arena();
    let config = SessionConfig::default();

    let first = pellets::generate(&maze, &config);
    let second = pellets::generate(&maze, &config);

    assert_eq!(first, second);
}

#[test]
fn test_field_is_non_empty_and_unconsumed() {
    let field = pellets::generate(&arena(), &SessionConfig::default());

    assert!(!field.is_empty());
    assert!(field.iter().all(|pellet| !pellet.consumed));
}

#[test]
fn test_no_pellet_intersects_a_wall() {
    let maze = arena();
    let field = pellets::generate(&maze, &SessionConfig::default());

    for pellet in &field {
        assert!(!maze.blocks(&pellet.bounds), "pellet at {:?} overlaps a wall", pellet.bounds.min);
    }
}

#[test]
fn test_spawn_exclusion_zone_is_empty() {
    let config = SessionConfig::default();
    let field = pellets::generate(&arena(), &config);
    let exclusion = config.player_size + config.pellet_spacing;

    for pellet in &field {
        let dx = (pellet.bounds.min.x - config.player_spawn.x).abs();
        let dy = (pellet.bounds.min.y - config.player_spawn.y).abs();
        assert!(
            dx >= exclusion || dy >= exclusion,
            "pellet at {:?} is inside the spawn exclusion zone",
            pellet.bounds.min
        );
    }
}

#[test]
fn test_pellets_sit_on_the_grid() {
    let config = SessionConfig::default();
    let spacing = config.pellet_spacing;
    let field = pellets::generate(&arena(), &config);

    for pellet in &field {
        let position = pellet.bounds.min;
        assert_eq!(position.x % spacing, 0.0);
        assert_eq!(position.y % spacing, 0.0);
        assert!(position.x >= spacing && position.x < config.arena_size.x - spacing);
        assert!(position.y >= spacing && position.y < config.arena_size.y - spacing);
    }
}
