use std::fmt;

use crate::board::{Board, Tile};
use crate::engine::{terminal, tilt};
use crate::types::Direction;

/// The full state of one game: the board plus score bookkeeping and the
/// terminal flag.
///
/// The aggregate is exclusively owned by its caller; there is no observer
/// registry. Every mutating operation reports the mutation explicitly
/// ([`GameState::tilt`] returns whether the board changed, `add_tile` and
/// `clear` always mutate), so a caller's event loop can notify renderers or
/// persistence synchronously, ordered after the mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    max_score: u32,
    game_over: bool,
}

impl GameState {
    /// A new game on an empty `size` x `size` board with score 0.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            max_score: 0,
            game_over: false,
        }
    }

    /// Seeding/testing constructor from a grid snapshot. `rows` is indexed
    /// bottom-up with `rows[0][0]` the bottom-left corner; 0 denotes an
    /// empty cell.
    pub fn from_grid(
        rows: &[Vec<u32>],
        score: u32,
        max_score: u32,
        game_over: bool,
    ) -> Result<Self, String> {
        let board = Board::from_rows(rows, score)?;
        Ok(Self {
            board,
            max_score,
            game_over,
        })
    }

    /// The tile at `(col, row)` under the board's current perspective,
    /// or None for an empty cell.
    #[inline]
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.board.tile(col, row)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.board.score()
    }

    /// High-water score mark. Only moves when a game reaches its end.
    #[inline]
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Recompute and return whether the game is over: a tile reached
    /// [`terminal::MAX_TILE`], or no legal move remains.
    pub fn game_over(&mut self) -> bool {
        self.recompute_game_over();
        self.game_over
    }

    /// Empty the board and reset the score and terminal flag. The
    /// high-water `max_score` is deliberately left untouched.
    pub fn clear(&mut self) {
        self.board.clear();
        self.game_over = false;
    }

    /// Place a tile from the external spawn policy. Panics if the cell is
    /// already occupied (a spawn-policy bug).
    pub fn add_tile(&mut self, tile: Tile) {
        self.board.add_tile(tile);
        self.recompute_game_over();
    }

    /// Tilt the board toward `dir`. Returns true iff the board changed.
    #[inline]
    pub fn tilt(&mut self, dir: Direction) -> bool {
        tilt::tilt(self, dir)
    }

    /// Grid snapshot, rows bottom-up, 0 for empty cells. This is the read
    /// surface an external persistence layer serializes.
    pub fn to_grid(&self) -> Vec<Vec<u32>> {
        self.board.to_rows()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Re-run the terminal detector and, on a transition into the terminal
    /// state, fold the score into the high-water mark.
    pub(crate) fn recompute_game_over(&mut self) {
        self.game_over = terminal::is_game_over(&self.board);
        if self.game_over {
            self.max_score = self.max_score.max(self.score());
        }
    }
}

/// Debug rendering: the grid top row first, then score, high-water mark and
/// over/not-over status.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        writeln!(f, "[")?;
        for row in (0..size).rev() {
            for col in 0..size {
                match self.board.tile(col, row) {
                    Some(t) => write!(f, "|{:4}", t.value())?,
                    None => write!(f, "|    ")?,
                }
            }
            writeln!(f, "|")?;
        }
        let over = if self.game_over { "over" } else { "not over" };
        write!(
            f,
            "] {} (max: {}) (game is {})",
            self.score(),
            self.max_score,
            over
        )
    }
}
