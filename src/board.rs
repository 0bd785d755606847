use serde::{Deserialize, Serialize};

use crate::types::{rc_to_idx, to_physical, Direction};

/// A value at a position. Immutable once created; sliding or merging a tile
/// produces a fresh record at the new position, it never mutates in place.
///
/// Coordinates are logical: they mean whatever the perspective of the board
/// that produced the tile says they mean. The board is the sole owner of
/// every tile it stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    value: u32,
    col: usize,
    row: usize,
}

impl Tile {
    #[inline]
    pub fn new(value: u32, col: usize, row: usize) -> Self {
        Self { value, col, row }
    }

    #[inline]
    pub fn value(self) -> u32 {
        self.value
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row
    }
}

#[inline]
fn is_valid_tile_value(v: u32) -> bool {
    v >= 2 && v.is_power_of_two()
}

/// Square grid of optional tiles plus the active viewing perspective.
///
/// Storage is always in the physical (North) frame; `tile`, `move_tile` and
/// `add_tile` translate logical coordinates through the pure transforms in
/// [`crate::types`], so callers never observe the physical layout directly.
/// Score bookkeeping lives here: every merge adds the post-merge doubled
/// value, exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    // Cells laid out row-major (row * size + col), physical frame.
    cells: Vec<Option<u32>>,
    perspective: Direction,
    score: u32,
}

impl Board {
    /// Empty board. Caller obligation: `size >= 2`.
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "board size must be at least 2, got {size}");
        Self {
            size,
            cells: vec![None; size * size],
            perspective: Direction::North,
            score: 0,
        }
    }

    /// Seeding constructor. `rows` is indexed bottom-up: `rows[0][0]` is the
    /// bottom-left corner; a value of 0 denotes an empty cell. Rejects
    /// non-square grids and values that are not powers of two >= 2.
    pub fn from_rows(rows: &[Vec<u32>], score: u32) -> Result<Self, String> {
        let size = rows.len();
        if size < 2 {
            return Err(format!("grid must be at least 2x2, got {size} rows"));
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(format!(
                    "grid must be square: row {r} has {} cells, expected {size}",
                    row.len()
                ));
            }
        }
        let mut board = Self::new(size);
        board.score = score;
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == 0 {
                    continue;
                }
                if !is_valid_tile_value(v) {
                    return Err(format!(
                        "invalid tile value {v} at ({c}, {r}): must be a power of two >= 2"
                    ));
                }
                board.cells[rc_to_idx(size, c, r)] = Some(v);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn perspective(&self) -> Direction {
        self.perspective
    }

    /// Change how logical coordinates are translated on future accesses.
    /// Tile values and identities are untouched; only the mapping moves.
    #[inline]
    pub fn set_perspective(&mut self, dir: Direction) {
        self.perspective = dir;
    }

    /// Read the tile at logical `(col, row)` under the current perspective.
    /// The returned tile carries the logical coordinates it was queried at.
    #[inline]
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        assert!(
            col < self.size && row < self.size,
            "tile read out of bounds: ({col}, {row}) on a {0}x{0} board",
            self.size
        );
        let (pc, pr) = to_physical(self.perspective, self.size, col, row);
        self.cells[rc_to_idx(self.size, pc, pr)].map(|value| Tile::new(value, col, row))
    }

    /// Relocate `tile` to logical `(col, dest_row)`.
    ///
    /// If the destination is occupied this is a merge: the destination value
    /// doubles, the moving tile is consumed, the doubled value is added to
    /// the score, and `true` is returned. Otherwise the tile slides there
    /// unchanged and `false` is returned.
    ///
    /// Panics if `dest_row` is not strictly beyond the tile's current row,
    /// or if `tile` does not occupy the cell it claims: both are programmer
    /// errors in the tilt algorithm, not recoverable conditions.
    pub fn move_tile(&mut self, col: usize, dest_row: usize, tile: Tile) -> bool {
        assert!(
            dest_row > tile.row(),
            "move destination row {dest_row} must be strictly beyond the tile's row {}",
            tile.row()
        );
        assert!(dest_row < self.size, "move destination row {dest_row} out of bounds");

        let (sc, sr) = to_physical(self.perspective, self.size, tile.col(), tile.row());
        let src = self.cells[rc_to_idx(self.size, sc, sr)]
            .take()
            .unwrap_or_else(|| {
                panic!(
                    "no tile at ({}, {}) to move",
                    tile.col(),
                    tile.row()
                )
            });
        assert_eq!(
            src,
            tile.value(),
            "tile at ({}, {}) does not match the tile being moved",
            tile.col(),
            tile.row()
        );

        let (dc, dr) = to_physical(self.perspective, self.size, col, dest_row);
        let dest = &mut self.cells[rc_to_idx(self.size, dc, dr)];
        match *dest {
            Some(existing) => {
                let doubled = existing * 2;
                *dest = Some(doubled);
                self.score += doubled;
                true
            }
            None => {
                *dest = Some(src);
                false
            }
        }
    }

    /// Place a new tile. Panics if the cell is occupied, out of bounds, or
    /// the value is not a power of two >= 2: placing onto an occupied cell
    /// is a spawn-policy bug, not a runtime condition to recover from.
    pub fn add_tile(&mut self, tile: Tile) {
        assert!(
            tile.col() < self.size && tile.row() < self.size,
            "add_tile out of bounds: ({}, {}) on a {2}x{2} board",
            tile.col(),
            tile.row(),
            self.size
        );
        assert!(
            is_valid_tile_value(tile.value()),
            "tile value {} must be a power of two >= 2",
            tile.value()
        );
        let (pc, pr) = to_physical(self.perspective, self.size, tile.col(), tile.row());
        let cell = &mut self.cells[rc_to_idx(self.size, pc, pr)];
        assert!(
            cell.is_none(),
            "cell ({}, {}) is already occupied",
            tile.col(),
            tile.row()
        );
        *cell = Some(tile.value());
    }

    /// Empty every cell and reset the score bookkeeping. The perspective
    /// returns to North.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.score = 0;
        self.perspective = Direction::North;
    }

    /// Snapshot of the grid in the physical frame, rows bottom-up,
    /// 0 for empty cells. Inverse of [`Board::from_rows`].
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.size)
            .map(|r| {
                (0..self.size)
                    .map(|c| self.cells[rc_to_idx(self.size, c, r)].unwrap_or(0))
                    .collect()
            })
            .collect()
    }
}
