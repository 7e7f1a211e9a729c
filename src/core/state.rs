//! Game state.
//!
//! ## GameState
//!
//! A single game as one owned value:
//! - The [`Snapshot`] (board and both players)
//! - Whose turn it is, and whether a chain stomp is pending
//! - The last stomped color
//! - The loser, once decided (write-once)
//! - Stomp history and the game's RNG
//!
//! The caller owns the `GameState` and threads it through the transition
//! methods in [`crate::rules::engine`]. Nothing is global.
//!
//! ## Outcome
//!
//! A game ends when the player to move has no legal stomp; that player loses.
//! [`GameState::outcome`] reports the human player's view, which is the view
//! that gets scored.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::action::StompRecord;
use super::board::Board;
use super::color::MarbleColor;
use super::config::GameConfig;
use super::player::{Player, PlayerMap, PlayerRole};
use super::rng::GameRng;
use crate::rules::Snapshot;

/// Result of the game from one player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Still being played.
    Unresolved,
    Win,
    Loss,
}

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) snapshot: Snapshot,
    pub(crate) config: GameConfig,
    pub(crate) to_move: PlayerRole,
    pub(crate) last_stomped: Option<MarbleColor>,
    pub(crate) pending_chain: Option<MarbleColor>,
    pub(crate) loser: Option<PlayerRole>,
    pub(crate) turn_number: u32,
    pub(crate) history: Vector<StompRecord>,
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Start a new game: shuffle the board, hand out two distinct stamp
    /// colors (never the reserved one), and give the first move to
    /// `config.first_player`.
    #[must_use]
    pub fn new_game(config: &GameConfig) -> Self {
        let root = GameRng::new(config.seed);

        let board = Board::random(&mut root.for_context("board"));

        let mut stamp_colors = MarbleColor::STAMP_COLORS;
        root.for_context("stamps").shuffle(&mut stamp_colors);

        let players = PlayerMap::from_values(
            Player::new(PlayerRole::Human, stamp_colors[0]),
            Player::new(PlayerRole::Automated, stamp_colors[1]),
        );

        Self::from_snapshot(Snapshot::new(board, players), config.first_player, config)
    }

    /// Resume from an arbitrary position with `to_move` about to stomp.
    ///
    /// If `to_move` has no legal stomp, the game is decided immediately.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot, to_move: PlayerRole, config: &GameConfig) -> Self {
        let mut state = Self {
            snapshot,
            config: config.clone(),
            to_move,
            last_stomped: None,
            pending_chain: None,
            loser: None,
            turn_number: 1,
            history: Vector::new(),
            rng: GameRng::new(config.seed).for_context("opponent"),
        };
        state.settle_if_stuck();
        state
    }

    /// Decide the game if the player to move cannot stomp.
    pub(crate) fn settle_if_stuck(&mut self) {
        if self.loser.is_some() || self.pending_chain.is_some() {
            return;
        }
        if !self.snapshot.has_legal_move(self.to_move) {
            self.loser = Some(self.to_move);
            info!(
                loser = %self.to_move,
                turn = self.turn_number,
                marbles_left = self.snapshot.board.marble_count(),
                "game over"
            );
        }
    }

    // === Accessors ===

    /// Board and players.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.snapshot.board
    }

    #[must_use]
    pub fn player(&self, role: PlayerRole) -> &Player {
        self.snapshot.player(role)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whose turn it is. After the game ends this is the player who lost.
    #[must_use]
    pub fn to_move(&self) -> PlayerRole {
        self.to_move
    }

    /// Turn number (starts at 1, advances when the turn passes).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Color of the most recently stomped marble.
    #[must_use]
    pub fn last_stomped(&self) -> Option<MarbleColor> {
        self.last_stomped
    }

    /// Every stomp so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<StompRecord> {
        &self.history
    }

    // === Outcome ===

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.loser.is_some()
    }

    /// The player who ran out of moves, once decided.
    #[must_use]
    pub fn loser(&self) -> Option<PlayerRole> {
        self.loser
    }

    /// The winner, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerRole> {
        self.loser.map(PlayerRole::opponent)
    }

    /// Outcome from `role`'s point of view.
    #[must_use]
    pub fn outcome_for(&self, role: PlayerRole) -> Outcome {
        match self.loser {
            None => Outcome::Unresolved,
            Some(loser) if loser == role => Outcome::Loss,
            Some(_) => Outcome::Win,
        }
    }

    /// Outcome from the human player's point of view.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome_for(PlayerRole::Human)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    #[test]
    fn test_new_game_setup() {
        let state = GameState::new_game(&GameConfig::default());

        assert_eq!(state.board().marble_count(), 49);
        assert_eq!(state.to_move(), PlayerRole::Automated);
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.outcome(), Outcome::Unresolved);
        assert!(state.history().is_empty());

        let human = state.player(PlayerRole::Human);
        let automated = state.player(PlayerRole::Automated);
        assert_ne!(human.stamp_color, automated.stamp_color);
        assert!(!human.stamp_color.is_reserved());
        assert!(!automated.stamp_color.is_reserved());
        assert_eq!(human.position, None);
        assert_eq!(automated.position, None);
    }

    #[test]
    fn test_new_game_is_seeded() {
        let config = GameConfig::default().with_seed(1234);
        let a = GameState::new_game(&config);
        let b = GameState::new_game(&config);
        assert_eq!(a.snapshot(), b.snapshot());

        let c = GameState::new_game(&config.clone().with_seed(4321));
        assert_ne!(a.board(), c.board());
    }

    #[test]
    fn test_first_player_config() {
        let config = GameConfig::default().with_first_player(PlayerRole::Human);
        assert_eq!(GameState::new_game(&config).to_move(), PlayerRole::Human);
    }

    #[test]
    fn test_from_snapshot_with_stuck_mover() {
        let snapshot = Snapshot::new(
            Board::empty(),
            PlayerMap::from_values(
                Player::new(PlayerRole::Human, MarbleColor::Green),
                Player::new(PlayerRole::Automated, MarbleColor::Black).at(Coord::new(3, 3)),
            ),
        );
        let state = GameState::from_snapshot(snapshot, PlayerRole::Automated, &GameConfig::default());

        assert!(state.is_over());
        assert_eq!(state.loser(), Some(PlayerRole::Automated));
        assert_eq!(state.winner(), Some(PlayerRole::Human));
        assert_eq!(state.outcome(), Outcome::Win);
        assert_eq!(state.outcome_for(PlayerRole::Automated), Outcome::Loss);
    }
}
