//! The 7x7 board and its cells.
//!
//! ## Layout
//!
//! Cells live in a row-major arena indexed by [`Coord::index`]. A `Board` is a
//! plain value: cloning it yields an independent board, which is what the
//! automated opponent's lookahead relies on.
//!
//! ## Text format
//!
//! One line per row. Marbles print as their color symbol, a stamped cell as
//! its occupant (`P` human, `C` automated), an empty cell as `.`:
//!
//! ```
//! use stomple::core::{Board, Coord, MarbleColor};
//!
//! let board = Board::parse(
//!     "R......\n\
//!      .......\n\
//!      .......\n\
//!      ...G...\n\
//!      .......\n\
//!      .......\n\
//!      ......B",
//! )
//! .unwrap();
//!
//! assert_eq!(board.marble_count(), 3);
//! assert_eq!(board.cell(Coord::new(3, 3)).marble, Some(MarbleColor::Green));
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::MarbleColor;
use super::coord::{Coord, BOARD_SIZE, CELL_COUNT};
use super::error::BoardParseError;
use super::player::PlayerRole;
use super::rng::GameRng;

/// Marbles of each color placed at initialization.
pub const MARBLES_PER_COLOR: usize = 7;

/// Contents of one board cell.
///
/// A stamp appears only on a cell whose marble has been stomped, and only
/// while the stamping player is still standing there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub marble: Option<MarbleColor>,
    pub stamp: Option<PlayerRole>,
}

impl Cell {
    /// A cell with nothing on it.
    pub const EMPTY: Cell = Cell {
        marble: None,
        stamp: None,
    };

    /// A cell holding a marble.
    #[must_use]
    pub const fn with_marble(color: MarbleColor) -> Self {
        Self {
            marble: Some(color),
            stamp: None,
        }
    }

    #[must_use]
    pub const fn has_marble(&self) -> bool {
        self.marble.is_some()
    }

    /// Display symbol for the text format.
    #[must_use]
    pub fn symbol(&self) -> char {
        match (self.stamp, self.marble) {
            (Some(role), _) => role.stamp_symbol(),
            (None, Some(color)) => color.symbol(),
            (None, None) => '.',
        }
    }
}

/// Square grid of `BOARD_SIZE` x `BOARD_SIZE` cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no marbles and no stamps.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: vec![Cell::EMPTY; CELL_COUNT],
        }
    }

    /// A fresh game board: seven marbles of each color, uniformly shuffled and
    /// laid out row-major.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        let mut marbles: Vec<MarbleColor> = MarbleColor::ALL
            .iter()
            .flat_map(|&color| std::iter::repeat(color).take(MARBLES_PER_COLOR))
            .collect();
        rng.shuffle(&mut marbles);

        Self {
            cells: marbles.into_iter().map(Cell::with_marble).collect(),
        }
    }

    /// Read marbles from the text format.
    ///
    /// Whitespace inside a row is ignored and blank lines are skipped.
    /// Stamp symbols (`P`, `C`) read back as empty cells, since stamps follow
    /// player positions rather than board contents.
    pub fn parse(text: &str) -> Result<Self, BoardParseError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::RowCount {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        let mut board = Self::empty();
        for (row, symbols) in rows.iter().enumerate() {
            if symbols.len() != BOARD_SIZE {
                return Err(BoardParseError::RowWidth {
                    row,
                    expected: BOARD_SIZE,
                    found: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                let marble = match symbol {
                    '.' | 'P' | 'C' => None,
                    other => Some(MarbleColor::from_symbol(other).ok_or(
                        BoardParseError::UnknownSymbol {
                            row,
                            col,
                            symbol: other,
                        },
                    )?),
                };
                board.cells[row * BOARD_SIZE + col].marble = marble;
            }
        }

        Ok(board)
    }

    /// Get a cell. Panics on an out-of-bounds coordinate.
    #[must_use]
    pub fn cell(&self, at: Coord) -> &Cell {
        &self.cells[at.index()]
    }

    /// Get a cell if the coordinate is on the board.
    #[must_use]
    pub fn get_cell(&self, at: Coord) -> Option<&Cell> {
        if at.in_bounds() {
            Some(&self.cells[at.index()])
        } else {
            None
        }
    }

    pub(crate) fn cell_mut(&mut self, at: Coord) -> &mut Cell {
        &mut self.cells[at.index()]
    }

    pub(crate) fn clear_stamps(&mut self) {
        for cell in &mut self.cells {
            cell.stamp = None;
        }
    }

    /// Place or remove a marble directly. Intended for setting up positions.
    pub fn set_marble(&mut self, at: Coord, marble: Option<MarbleColor>) {
        self.cell_mut(at).marble = marble;
    }

    /// Marble at a coordinate, if any.
    #[must_use]
    pub fn marble_at(&self, at: Coord) -> Option<MarbleColor> {
        self.get_cell(at).and_then(|c| c.marble)
    }

    /// True iff the coordinate is on the outer ring.
    #[must_use]
    pub fn is_edge_cell(&self, at: Coord) -> bool {
        at.is_edge()
    }

    /// Surrounding coordinates in scan order (see [`Coord::neighbors`]).
    #[must_use]
    pub fn adjacent_cells(&self, at: Coord) -> SmallVec<[Coord; 8]> {
        at.neighbors()
    }

    /// Iterate over `(coord, cell)` pairs, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Coord::from_index(i), cell))
    }

    /// Iterate over remaining marbles, row-major.
    pub fn marbles(&self) -> impl Iterator<Item = (Coord, MarbleColor)> + '_ {
        self.cells().filter_map(|(at, cell)| cell.marble.map(|m| (at, m)))
    }

    /// Number of marbles still on the board.
    #[must_use]
    pub fn marble_count(&self) -> usize {
        self.cells.iter().filter(|c| c.has_marble()).count()
    }

    /// Number of remaining marbles of one color.
    #[must_use]
    pub fn count_color(&self, color: MarbleColor) -> usize {
        self.cells.iter().filter(|c| c.marble == Some(color)).count()
    }

    /// Remaining marbles per color. Colors with none left are absent.
    #[must_use]
    pub fn color_tally(&self) -> FxHashMap<MarbleColor, usize> {
        let mut tally = FxHashMap::default();
        for (_, color) in self.marbles() {
            *tally.entry(color).or_insert(0) += 1;
        }
        tally
    }

    /// Where a role's stamp currently sits, if anywhere.
    #[must_use]
    pub fn stamp_of(&self, role: PlayerRole) -> Option<Coord> {
        self.cells()
            .find(|(_, cell)| cell.stamp == Some(role))
            .map(|(at, _)| at)
    }

    /// Remove the marble at `at` and stamp the cell for `role`, clearing the
    /// stamp at `previous`. Returns the removed color.
    ///
    /// No legality check: callers validate against the move rules first.
    pub fn stomp(
        &mut self,
        at: Coord,
        role: PlayerRole,
        previous: Option<Coord>,
    ) -> Option<MarbleColor> {
        if let Some(prev) = previous {
            self.cell_mut(prev).stamp = None;
        }
        let cell = self.cell_mut(at);
        let removed = cell.marble.take();
        cell.stamp = Some(role);
        removed
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.cells[row * BOARD_SIZE + col].symbol())?;
            }
        }
        Ok(())
    }
}
