//! Automated opponent.
//!
//! - `policy`: the `MovePolicy` trait, a random policy, and the
//!   `OpponentStrategy` switch stored in `GameConfig`
//! - `mobility`: the one-ply heuristic that minimizes the opponent's moves
//!
//! ```
//! use stomple::core::{GameConfig, GameState, PlayerRole};
//!
//! let mut state = GameState::new_game(&GameConfig::default());
//! let choice = state.automated_move().unwrap();
//! assert!(state.legal_moves(PlayerRole::Automated).contains(&choice));
//! state.apply_move(PlayerRole::Automated, choice).unwrap();
//! ```

pub mod mobility;
pub mod policy;

pub use mobility::{CandidateEval, MobilityMinimizer};
pub use policy::{MovePolicy, OpponentStrategy, RandomPolicy};
