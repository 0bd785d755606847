use tiltgrid::{tilt, Direction, GameState, Tile};

#[test]
fn new_game_starts_empty() {
    let mut s = GameState::new(4);
    assert_eq!(s.size(), 4);
    assert_eq!(s.score(), 0);
    assert_eq!(s.max_score(), 0);
    assert!(!s.game_over());
    for col in 0..4 {
        for row in 0..4 {
            assert!(s.tile(col, row).is_none());
        }
    }
}

#[test]
fn from_grid_rejects_malformed_input() {
    assert!(GameState::from_grid(&[vec![2, 0], vec![0]], 0, 0, false).is_err());
    assert!(GameState::from_grid(&[vec![5, 0], vec![0, 0]], 0, 0, false).is_err());
}

#[test]
fn clear_resets_everything_but_max_score() {
    let rows = vec![
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ];
    let mut s = GameState::from_grid(&rows, 40, 0, false).expect("valid grid");
    assert!(s.game_over());
    assert_eq!(s.max_score(), 40);

    s.clear();
    assert_eq!(s.score(), 0);
    assert!(!s.game_over());
    assert_eq!(s.max_score(), 40, "clear must not touch the high-water mark");
    for col in 0..4 {
        for row in 0..4 {
            assert!(s.tile(col, row).is_none());
        }
    }
}

#[test]
fn max_score_is_monotonic_across_operations() {
    let rows = vec![
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ];
    let mut s = GameState::from_grid(&rows, 64, 0, false).expect("valid grid");
    let mut high = s.max_score();

    assert!(s.game_over());
    assert!(s.max_score() >= high);
    high = s.max_score();

    s.clear();
    assert!(s.max_score() >= high);
    high = s.max_score();

    s.add_tile(Tile::new(2, 0, 0));
    s.add_tile(Tile::new(2, 0, 1));
    assert!(tilt(&mut s, Direction::North));
    assert!(!s.game_over());
    assert!(s.max_score() >= high);
}

#[test]
fn add_tile_then_tilt_round() {
    let mut s = GameState::new(4);
    s.add_tile(Tile::new(2, 1, 0));
    s.add_tile(Tile::new(2, 1, 2));
    assert!(tilt(&mut s, Direction::North));
    assert_eq!(s.tile(1, 3).map(Tile::value), Some(4));
    assert_eq!(s.score(), 4);
    assert!(!s.game_over());
}

#[test]
fn display_renders_grid_and_status() {
    let rows = vec![
        vec![2, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 1024],
    ];
    let s = GameState::from_grid(&rows, 12, 30, false).expect("valid grid");
    let rendered = s.to_string();
    assert!(rendered.contains("|   2|"));
    assert!(rendered.contains("|1024|"));
    assert!(rendered.contains("12 (max: 30) (game is not over)"));
    // Top row is printed first.
    let top = rendered.lines().nth(1).expect("top row line");
    assert!(top.contains("1024"));
}
