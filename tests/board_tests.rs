use tiltgrid::types::{to_logical, to_physical};
use tiltgrid::{Board, Direction, Tile};

#[test]
fn perspective_transform_round_trips() {
    for size in [2usize, 4, 5] {
        for dir in Direction::all() {
            for col in 0..size {
                for row in 0..size {
                    let (pc, pr) = to_physical(dir, size, col, row);
                    assert!(pc < size && pr < size);
                    assert_eq!(
                        to_logical(dir, size, pc, pr),
                        (col, row),
                        "round trip failed for {dir:?} at ({col}, {row}), size {size}"
                    );
                }
            }
        }
    }
}

#[test]
fn perspective_transform_is_identity_for_north() {
    for col in 0..4 {
        for row in 0..4 {
            assert_eq!(to_physical(Direction::North, 4, col, row), (col, row));
        }
    }
}

#[test]
fn set_perspective_remaps_reads_without_touching_tiles() {
    let mut board = Board::new(4);
    board.add_tile(Tile::new(2, 0, 0));
    let snapshot = board.to_rows();

    // Physical (0, 0) appears at logical (3, 0) under the East perspective.
    board.set_perspective(Direction::East);
    let seen = board.tile(3, 0).expect("tile visible under East");
    assert_eq!(seen.value(), 2);
    assert_eq!((seen.col(), seen.row()), (3, 0));

    // The physical snapshot is untouched by the remapping.
    assert_eq!(board.to_rows(), snapshot);

    board.set_perspective(Direction::North);
    let back = board.tile(0, 0).expect("tile back at identity coords");
    assert_eq!(back.value(), 2);
}

#[test]
fn move_tile_slide_and_merge_semantics() {
    let mut board = Board::new(4);
    board.add_tile(Tile::new(2, 1, 0));
    board.add_tile(Tile::new(2, 1, 3));

    // Slide: empty destination, no score, returns false.
    let tile = board.tile(1, 0).expect("tile present");
    assert!(!board.move_tile(1, 2, tile));
    assert_eq!(board.score(), 0);
    assert!(board.tile(1, 0).is_none());
    assert_eq!(board.tile(1, 2).map(Tile::value), Some(2));

    // Merge: occupied destination doubles, moving tile consumed, score +4.
    let tile = board.tile(1, 2).expect("tile present");
    assert!(board.move_tile(1, 3, tile));
    assert_eq!(board.score(), 4);
    assert!(board.tile(1, 2).is_none());
    assert_eq!(board.tile(1, 3).map(Tile::value), Some(4));
}

#[test]
#[should_panic(expected = "strictly beyond")]
fn move_tile_rejects_non_increasing_destination() {
    let mut board = Board::new(4);
    board.add_tile(Tile::new(2, 0, 2));
    let tile = board.tile(0, 2).expect("tile present");
    let _ = board.move_tile(0, 2, tile);
}

#[test]
#[should_panic(expected = "already occupied")]
fn add_tile_rejects_occupied_cell() {
    let mut board = Board::new(4);
    board.add_tile(Tile::new(2, 2, 2));
    board.add_tile(Tile::new(4, 2, 2));
}

#[test]
#[should_panic(expected = "power of two")]
fn add_tile_rejects_non_power_of_two_value() {
    let mut board = Board::new(4);
    board.add_tile(Tile::new(3, 0, 0));
}

#[test]
fn from_rows_validates_shape_and_values() {
    // Non-square: 2 rows of 3 cells.
    let rows = vec![vec![0, 0, 0], vec![0, 0, 0]];
    assert!(Board::from_rows(&rows, 0).is_err());

    // Value 6 is not a power of two.
    let rows = vec![vec![6, 0], vec![0, 0]];
    assert!(Board::from_rows(&rows, 0).is_err());

    // Degenerate 1x1 grid.
    let rows = vec![vec![0]];
    assert!(Board::from_rows(&rows, 0).is_err());

    let rows = vec![vec![2, 0], vec![0, 4]];
    let board = Board::from_rows(&rows, 8).expect("valid grid");
    assert_eq!(board.score(), 8);
    assert_eq!(board.to_rows(), rows);
}

#[test]
fn clear_empties_cells_and_resets_score() {
    let rows = vec![vec![2, 4], vec![8, 0]];
    let mut board = Board::from_rows(&rows, 12).expect("valid grid");
    board.set_perspective(Direction::South);
    board.clear();
    assert_eq!(board.score(), 0);
    assert_eq!(board.perspective(), Direction::North);
    assert_eq!(board.to_rows(), vec![vec![0, 0], vec![0, 0]]);
}
