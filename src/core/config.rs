//! Game configuration.
//!
//! A `GameConfig` fully determines a new game: the seed drives the board
//! shuffle and stamp color assignment, and the opponent strategy decides how
//! the automated seat picks its moves.

use serde::{Deserialize, Serialize};

use super::player::PlayerRole;
use crate::ai::OpponentStrategy;

/// Settings for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for all game randomness.
    pub seed: u64,

    /// Who stomps first.
    pub first_player: PlayerRole,

    /// How the automated seat chooses moves.
    pub opponent: OpponentStrategy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            first_player: PlayerRole::Automated,
            opponent: OpponentStrategy::MobilityMinimizer,
        }
    }
}

impl GameConfig {
    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set who moves first.
    #[must_use]
    pub fn with_first_player(mut self, role: PlayerRole) -> Self {
        self.first_player = role;
        self
    }

    /// Set the opponent strategy.
    #[must_use]
    pub fn with_opponent(mut self, opponent: OpponentStrategy) -> Self {
        self.opponent = opponent;
        self
    }
}
