use serde::{Deserialize, Serialize};

/// A push direction for a tilt. Also doubles as the board perspective:
/// under perspective `d`, logical row indices increase toward the `d` wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    #[inline]
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Map logical coordinates under perspective `dir` to physical coordinates.
///
/// The physical frame is the North perspective: column 0, row 0 at the
/// bottom-left, rows increasing northward. The mapping is a pure rotation
/// chosen so that "logical row `size - 1`" is always the wall being pushed
/// toward, which lets the tilt algorithm stay direction-agnostic.
#[inline]
pub fn to_physical(dir: Direction, size: usize, col: usize, row: usize) -> (usize, usize) {
    debug_assert!(col < size && row < size);
    let last = size - 1;
    match dir {
        Direction::North => (col, row),
        Direction::South => (last - col, last - row),
        Direction::East => (row, last - col),
        Direction::West => (last - row, col),
    }
}

/// Inverse of [`to_physical`]: recover logical coordinates under `dir`
/// from physical ones.
#[inline]
pub fn to_logical(dir: Direction, size: usize, pcol: usize, prow: usize) -> (usize, usize) {
    debug_assert!(pcol < size && prow < size);
    let last = size - 1;
    match dir {
        Direction::North => (pcol, prow),
        Direction::South => (last - pcol, last - prow),
        Direction::East => (last - prow, pcol),
        Direction::West => (prow, last - pcol),
    }
}

/// Board indexing helper: row-major cell index for physical coordinates.
#[inline]
pub fn rc_to_idx(size: usize, col: usize, row: usize) -> usize {
    debug_assert!(col < size && row < size);
    row * size + col
}
