//! Game rules.
//!
//! - `movegen`: legal and chain moves as pure functions of board and player
//! - `snapshot`: board + players as one value, with the stomp primitive
//! - `engine`: turn transitions on `GameState`

pub mod engine;
pub mod movegen;
pub mod snapshot;

pub use movegen::{chain_moves, has_legal_move, legal_moves, MoveList};
pub use snapshot::Snapshot;
