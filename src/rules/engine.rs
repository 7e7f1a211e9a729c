//! Turn rules: validating and applying stomps, chain stomps, and the
//! automated seat's turn.
//!
//! ## Turn cycle
//!
//! 1. The player to move stomps one of [`GameState::available_moves`].
//! 2. If a neighbor of the new position holds a marble of the stomped color,
//!    a chain is pending and the same player must stomp one of those.
//! 3. Otherwise the turn passes. If the next player has no legal stomp, they
//!    lose and the game is over.
//!
//! Rejected moves return an [`InvalidMoveError`] and change nothing.

use tracing::debug;

use super::movegen::MoveList;
use crate::core::{Coord, GameState, InvalidMoveError, MarbleColor, PlayerRole, StompRecord};
use crate::scoring::ScoreBreakdown;

impl GameState {
    /// Legal stomps for `role` by the standard move rules, ignoring turn
    /// order and pending chains.
    #[must_use]
    pub fn legal_moves(&self, role: PlayerRole) -> MoveList {
        self.snapshot.legal_moves(role)
    }

    /// Whether `role` has any legal stomp by the standard move rules.
    #[must_use]
    pub fn has_legal_move(&self, role: PlayerRole) -> bool {
        self.snapshot.has_legal_move(role)
    }

    /// Neighbors of `role`'s position holding a `color` marble.
    #[must_use]
    pub fn chain_moves(&self, role: PlayerRole, color: MarbleColor) -> MoveList {
        self.snapshot.chain_moves(role, color)
    }

    /// The color of a pending chain stomp. While set, the player to move
    /// must stomp again.
    #[must_use]
    pub fn pending_chain(&self) -> Option<MarbleColor> {
        self.pending_chain
    }

    /// Exactly the moves [`GameState::apply_move`] would accept from `role`
    /// right now: chain moves while a chain is pending, nothing when it is not
    /// `role`'s turn or the game is over.
    #[must_use]
    pub fn available_moves(&self, role: PlayerRole) -> MoveList {
        if self.is_over() || role != self.to_move {
            return MoveList::new();
        }
        match self.pending_chain {
            Some(color) => self.chain_moves(role, color),
            None => self.legal_moves(role),
        }
    }

    /// Check a stomp without applying it. On success returns the color the
    /// stomp would remove.
    pub fn validate_move(&self, role: PlayerRole, at: Coord) -> Result<MarbleColor, InvalidMoveError> {
        if self.is_over() {
            return Err(InvalidMoveError::GameOver);
        }
        if !at.in_bounds() {
            return Err(InvalidMoveError::OutOfBounds {
                row: at.row.into(),
                col: at.col.into(),
            });
        }
        if role != self.to_move {
            return Err(InvalidMoveError::NotYourTurn { player: role });
        }

        let allowed = match self.pending_chain {
            Some(color) => {
                if !self.chain_moves(role, color).contains(&at) {
                    return Err(InvalidMoveError::ChainRequired { coord: at, color });
                }
                true
            }
            None => self.legal_moves(role).contains(&at),
        };

        match self.snapshot.board.marble_at(at) {
            Some(color) if allowed => Ok(color),
            _ => Err(InvalidMoveError::IllegalMove { coord: at }),
        }
    }

    /// Stomp `at` for `role`.
    ///
    /// On success the marble is gone, the cell carries `role`'s stamp, and
    /// either a chain is pending or the turn has passed (possibly ending the
    /// game). On error nothing changes.
    pub fn apply_move(&mut self, role: PlayerRole, at: Coord) -> Result<(), InvalidMoveError> {
        let color = match self.validate_move(role, at) {
            Ok(color) => color,
            Err(err) => {
                debug!(player = %role, coord = %at, error = %err, "stomp rejected");
                return Err(err);
            }
        };

        let chained = self.pending_chain.is_some();
        self.snapshot.perform_stomp(role, at);
        self.last_stomped = Some(color);
        self.history.push_back(StompRecord {
            player: role,
            coord: at,
            color,
            chained,
            turn: self.turn_number,
            sequence: self.history.len() as u32,
        });

        if self.chain_moves(role, color).is_empty() {
            self.pending_chain = None;
            self.to_move = role.opponent();
            self.turn_number += 1;
            self.settle_if_stuck();
        } else {
            self.pending_chain = Some(color);
        }

        debug!(
            player = %role,
            coord = %at,
            color = %color,
            chained,
            chain_pending = self.pending_chain.is_some(),
            "stomp applied"
        );
        Ok(())
    }

    /// The state after `role` stomps `at`, leaving `self` as it was.
    pub fn with_move(&self, role: PlayerRole, at: Coord) -> Result<Self, InvalidMoveError> {
        let mut next = self.clone();
        next.apply_move(role, at)?;
        Ok(next)
    }

    /// The automated seat's next stomp, to be applied with
    /// [`GameState::apply_move`].
    ///
    /// During a pending chain this is the first chain move; otherwise the
    /// configured opponent strategy picks among the legal moves. `None` when
    /// it is not the automated seat's turn or the game is over.
    pub fn automated_move(&mut self) -> Option<Coord> {
        let role = PlayerRole::Automated;
        if self.is_over() || self.to_move != role {
            return None;
        }
        if let Some(color) = self.pending_chain {
            return self.chain_moves(role, color).first().copied();
        }

        let candidates = self.legal_moves(role);
        let strategy = self.config.opponent;
        strategy.select(&self.snapshot, role, &candidates, &mut self.rng)
    }

    /// Play the automated seat's whole turn: its chosen stomp plus every
    /// forced chain continuation. Returns the stomped cells in order.
    pub fn play_automated_turn(&mut self) -> Result<Vec<Coord>, InvalidMoveError> {
        let role = PlayerRole::Automated;
        if self.is_over() {
            return Err(InvalidMoveError::GameOver);
        }
        if self.to_move != role {
            return Err(InvalidMoveError::NotYourTurn { player: role });
        }

        let mut stomped = Vec::new();
        while self.to_move == role && !self.is_over() {
            let Some(at) = self.automated_move() else {
                break;
            };
            self.apply_move(role, at)?;
            stomped.push(at);
        }
        Ok(stomped)
    }

    /// Score for the human player from the marbles left on the board.
    #[must_use]
    pub fn score_breakdown(&self) -> ScoreBreakdown {
        self.score_breakdown_for(PlayerRole::Human)
    }

    /// Score for `role` from the marbles left on the board.
    #[must_use]
    pub fn score_breakdown_for(&self, role: PlayerRole) -> ScoreBreakdown {
        ScoreBreakdown::compute(&self.snapshot.board, self.outcome_for(role))
    }
}
