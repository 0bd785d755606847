use crate::board::{Board, Tile};
use crate::types::Direction;

/// Largest tile value: reaching it ends the game.
pub const MAX_TILE: u32 = 2048;

/// True if any cell on the board is empty.
pub fn empty_space_exists(board: &Board) -> bool {
    let size = board.size();
    (0..size).any(|c| (0..size).any(|r| board.tile(c, r).is_none()))
}

/// True if any tile has reached [`MAX_TILE`].
pub fn max_tile_exists(board: &Board) -> bool {
    let size = board.size();
    (0..size).any(|c| (0..size).any(|r| board.tile(c, r).map(Tile::value) == Some(MAX_TILE)))
}

/// True if the tile at `(col, row)` has an orthogonally adjacent
/// (up/down/left/right, bounds-checked) neighbor of equal value.
fn has_equal_neighbor(board: &Board, col: usize, row: usize) -> bool {
    let Some(tile) = board.tile(col, row) else {
        return false;
    };
    let size = board.size();
    let mut neighbors: [Option<(usize, usize)>; 4] = [None; 4];
    if col > 0 {
        neighbors[0] = Some((col - 1, row));
    }
    if col + 1 < size {
        neighbors[1] = Some((col + 1, row));
    }
    if row > 0 {
        neighbors[2] = Some((col, row - 1));
    }
    if row + 1 < size {
        neighbors[3] = Some((col, row + 1));
    }
    neighbors
        .into_iter()
        .flatten()
        .any(|(c, r)| board.tile(c, r).map(Tile::value) == Some(tile.value()))
}

/// True if any legal move remains: an empty cell exists, or two
/// orthogonally adjacent tiles hold equal values.
pub fn at_least_one_move_exists(board: &Board) -> bool {
    if empty_space_exists(board) {
        return true;
    }
    let size = board.size();
    (0..size).any(|c| (0..size).any(|r| has_equal_neighbor(board, c, r)))
}

/// Terminal-state predicate: the maximum tile was reached, or no legal move
/// remains. Always evaluated in the identity frame; callers restore the
/// perspective before invoking it.
pub fn is_game_over(board: &Board) -> bool {
    debug_assert_eq!(board.perspective(), Direction::North);
    max_tile_exists(board) || !at_least_one_move_exists(board)
}
