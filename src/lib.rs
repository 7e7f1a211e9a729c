//! # stomple
//!
//! Rules engine and automated opponent for Stomple, a two-player game on a
//! 7x7 board of colored marbles.
//!
//! ## Rules in brief
//!
//! - The board holds seven marbles of each of seven colors. Red is reserved
//!   and never a stamp color.
//! - Each player owns a stamp color. Stomping a marble removes it and leaves
//!   the player's stamp on that cell.
//! - A player's first stomp must be on the board edge. Afterwards it must be
//!   next to the current position, or on any marble of the player's stamp
//!   color anywhere on the board.
//! - Stomping a color with same-colored neighbors forces the player to keep
//!   stomping that color.
//! - A player with no legal move on their turn loses.
//!
//! ## Modules
//!
//! - `core`: colors, coordinates, board, players, game state, RNG, config
//! - `rules`: move generation, chain resolution, turn flow
//! - `ai`: the automated opponent
//! - `scoring`: end-of-game score
//! - `ranking`: score submission seam
//! - `python`: Python bindings (feature `python`)

pub mod ai;
pub mod core;
pub mod ranking;
pub mod rules;
pub mod scoring;

#[cfg(feature = "python")]
pub mod python;

pub use crate::core::{
    Board, Cell, Coord, GameConfig, GameRng, GameState, InvalidMoveError,
    MarbleColor, Outcome, Player, PlayerMap, PlayerRole, StompRecord,
};

pub use crate::rules::Snapshot;

pub use crate::ai::{MobilityMinimizer, MovePolicy, OpponentStrategy, RandomPolicy};

pub use crate::scoring::ScoreBreakdown;

pub use crate::ranking::{InMemoryLeaderboard, RankEntry, RankingError, ScoreSubmitter};
