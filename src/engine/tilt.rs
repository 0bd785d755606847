use crate::board::{Board, Tile};
use crate::state::GameState;
use crate::types::Direction;

/// Tilt the board toward `dir`. Returns true iff any tile slid or merged.
///
/// The board adopts the perspective that maps `dir` onto "increasing row",
/// every column is processed independently, the perspective is restored to
/// North and game-over is recomputed before returning.
pub fn tilt(state: &mut GameState, dir: Direction) -> bool {
    let mut changed = false;

    state.board_mut().set_perspective(dir);
    for col in 0..state.size() {
        if tilt_column(state.board_mut(), col) {
            changed = true;
        }
    }
    state.board_mut().set_perspective(Direction::North);
    state.recompute_game_over();

    changed
}

/// Process one column, rows `size - 2` down to 0 (the topmost row has
/// nothing above it to merge into).
///
/// Each row gets a `merged` marker: a row that just received a merge result
/// may not receive a second merge this tilt. Scanning top-down resolves the
/// three-in-a-row case the required way: the two tiles nearer the wall
/// merge first and mark their row, so the trailing tile only slides.
fn tilt_column(board: &mut Board, col: usize) -> bool {
    let size = board.size();
    let mut merged = vec![false; size];
    let mut changed = false;

    for row in (0..size - 1).rev() {
        let Some(tile) = board.tile(col, row) else {
            continue;
        };
        match nearest_sibling_row(board, col, row) {
            Some(sib)
                if !merged[sib]
                    && board.tile(col, sib).map(Tile::value) == Some(tile.value()) =>
            {
                let did_merge = board.move_tile(col, sib, tile);
                debug_assert!(did_merge, "merge move must land on an occupied cell");
                merged[sib] = true;
                changed = true;
            }
            _ => {
                if let Some(target) = target_row(board, col, row) {
                    board.move_tile(col, target, tile);
                    changed = true;
                }
            }
        }
    }

    changed
}

/// Nearest occupied row strictly above `row`, scanning upward and skipping
/// gaps. None if every row above is empty.
fn nearest_sibling_row(board: &Board, col: usize, row: usize) -> Option<usize> {
    ((row + 1)..board.size()).find(|&r| board.tile(col, r).is_some())
}

/// Highest empty row strictly above `row`, scanning from the top downward
/// and stopping at the first empty row found. None means the tile is as far
/// as it can go. This is deliberately the topmost-empty rule, not a full
/// compaction rule; callers must not generalize it.
fn target_row(board: &Board, col: usize, row: usize) -> Option<usize> {
    ((row + 1)..board.size())
        .rev()
        .find(|&r| board.tile(col, r).is_none())
}
