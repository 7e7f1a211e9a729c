//! Errors reported at the engine boundary.
//!
//! All of these are recoverable: a rejected call leaves the game state
//! exactly as it was.

use thiserror::Error;

use super::color::MarbleColor;
use super::coord::Coord;
use super::player::PlayerRole;

/// A stomp request that the current game state does not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMoveError {
    #[error("the game is already over")]
    GameOver,

    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: i64, col: i64 },

    #[error("it is not {player}'s turn")]
    NotYourTurn { player: PlayerRole },

    #[error("{coord} is not a legal stomp")]
    IllegalMove { coord: Coord },

    #[error("{coord} does not continue the pending {color} chain")]
    ChainRequired { coord: Coord, color: MarbleColor },
}

/// Failure to read a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row}: expected {expected} cells, found {found}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, column {col}: unknown cell symbol {symbol:?}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
}
