//! Board plus both players as a single value.
//!
//! A `Snapshot` is everything a stomp touches. The live game mutates its own
//! snapshot in place; the automated opponent clones one per candidate move
//! and plays the candidate out on the clone, so lookahead can never leak into
//! the real game.

use serde::{Deserialize, Serialize};

use super::movegen::{self, MoveList};
use crate::core::{Board, Coord, MarbleColor, Player, PlayerMap, PlayerRole};

/// Board and players at one point in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub players: PlayerMap<Player>,
}

impl Snapshot {
    /// Bundle a board with its two players.
    ///
    /// Stamps on `board` are replaced so that each positioned player's cell
    /// carries that player's stamp and no other cell is stamped.
    ///
    /// # Panics
    ///
    /// Panics if the players sit in the wrong slots, share a stamp color,
    /// share a cell, or stand on a cell that still holds a marble.
    #[must_use]
    pub fn new(mut board: Board, players: PlayerMap<Player>) -> Self {
        for (role, player) in players.iter() {
            assert_eq!(role, player.role, "Player stored under the wrong role");
        }
        assert_ne!(
            players[PlayerRole::Human].stamp_color,
            players[PlayerRole::Automated].stamp_color,
            "Players must have distinct stamp colors"
        );

        board.clear_stamps();
        for (role, player) in players.iter() {
            let Some(at) = player.position else {
                continue;
            };
            assert!(at.in_bounds(), "Player position must be on the board");
            let cell = board.cell(at);
            assert!(!cell.has_marble(), "Player cannot stand on a marble");
            assert!(cell.stamp.is_none(), "Players cannot share a cell");
            board.cell_mut(at).stamp = Some(role);
        }

        Self { board, players }
    }

    /// A player's current state.
    #[must_use]
    pub fn player(&self, role: PlayerRole) -> &Player {
        &self.players[role]
    }

    /// Legal stomps for `role` on this snapshot.
    #[must_use]
    pub fn legal_moves(&self, role: PlayerRole) -> MoveList {
        movegen::legal_moves(&self.board, &self.players[role])
    }

    /// Whether `role` has any legal stomp.
    #[must_use]
    pub fn has_legal_move(&self, role: PlayerRole) -> bool {
        movegen::has_legal_move(&self.board, &self.players[role])
    }

    /// Chain continuations of `color` around `role`'s position.
    ///
    /// Empty if the player has not moved yet.
    #[must_use]
    pub fn chain_moves(&self, role: PlayerRole, color: MarbleColor) -> MoveList {
        match self.players[role].position {
            Some(position) => movegen::chain_moves(&self.board, position, color),
            None => MoveList::new(),
        }
    }

    /// Stomp `at` for `role`: remove the marble, stamp the cell, clear the
    /// stamp on the player's previous cell, and move the player there.
    ///
    /// Returns the removed color. Performs no legality check.
    pub fn perform_stomp(&mut self, role: PlayerRole, at: Coord) -> Option<MarbleColor> {
        let player = &mut self.players[role];
        let removed = self.board.stomp(at, role, player.position);
        player.position = Some(at);
        removed
    }

    /// Like [`Snapshot::perform_stomp`], on a copy.
    #[must_use]
    pub fn stomped(&self, role: PlayerRole, at: Coord) -> (Self, Option<MarbleColor>) {
        let mut next = self.clone();
        let removed = next.perform_stomp(role, at);
        (next, removed)
    }

    /// Play out a forced chain of `color` for `role`, always taking the first
    /// chain move, until none remain. Returns the stomped cells in order.
    ///
    /// Every step removes a marble, so the chain ends within `CELL_COUNT` steps.
    pub fn resolve_chain(&mut self, role: PlayerRole, color: MarbleColor) -> Vec<Coord> {
        let mut steps = Vec::new();
        while let Some(&next) = self.chain_moves(role, color).first() {
            self.perform_stomp(role, next);
            steps.push(next);
        }
        steps
    }
}
