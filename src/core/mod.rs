//! Core game types: colors, coordinates, board, players, state, RNG, configuration.

pub mod action;
pub mod board;
pub mod color;
pub mod config;
pub mod coord;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::StompRecord;
pub use board::{Board, Cell, MARBLES_PER_COLOR};
pub use color::MarbleColor;
pub use config::GameConfig;
pub use coord::{Coord, BOARD_SIZE, CELL_COUNT};
pub use error::{BoardParseError, InvalidMoveError};
pub use player::{Player, PlayerMap, PlayerRole};
pub use rng::GameRng;
pub use state::{GameState, Outcome};
