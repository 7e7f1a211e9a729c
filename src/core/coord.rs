//! Board coordinates.
//!
//! The board is a fixed 7x7 grid. Coordinates are 0-based `(row, col)` and
//! cells are stored row-major, so `index = row * BOARD_SIZE + col`.
//!
//! ## Neighbor order
//!
//! [`Coord::neighbors`] scans row offsets -1..=1, then column offsets -1..=1,
//! skipping the center. Move generation, chain targeting, and the automated
//! opponent's tie-breaking all inherit this order.
//!
//! ```
//! use stomple::core::Coord;
//!
//! let corner = Coord::new(0, 0);
//! let n: Vec<_> = corner.neighbors().into_iter().collect();
//! assert_eq!(n, vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::InvalidMoveError;

/// Side length of the board.
pub const BOARD_SIZE: usize = 7;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Neighbor offsets in scan order.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A `(row, col)` position on the board.
///
/// Fields are public so callers can name any coordinate; use
/// [`Coord::in_bounds`] before indexing with one that came from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Create a coordinate. No bounds check.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Create a coordinate if it lies on the board.
    #[must_use]
    pub fn checked(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Coordinate from signed input, e.g. a value handed over by a binding.
    pub fn from_signed(row: i64, col: i64) -> Result<Self, InvalidMoveError> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) => Self::checked(r, c),
            _ => None,
        }
        .ok_or(InvalidMoveError::OutOfBounds { row, col })
    }

    /// Check whether this coordinate lies on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Row-major cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Inverse of [`Coord::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8)
    }

    /// Every coordinate on the board, row-major.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).map(Coord::from_index)
    }

    /// True iff the coordinate is on the outer ring of the board.
    #[must_use]
    pub const fn is_edge(self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        self.row == 0 || self.col == 0 || self.row == last || self.col == last
    }

    /// The up-to-8 surrounding coordinates, clipped to the board.
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Coord; 8]> {
        let mut out = SmallVec::new();
        for (dr, dc) in OFFSETS {
            let r = self.row as i16 + dr as i16;
            let c = self.col as i16 + dc as i16;
            if r >= 0 && c >= 0 {
                if let Some(coord) = Coord::checked(r as usize, c as usize) {
                    out.push(coord);
                }
            }
        }
        out
    }

    /// Check whether `other` is one of this coordinate's neighbors.
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
