//! Move generation.
//!
//! Pure functions of a board and a player. The order of the returned moves
//! matters: the automated opponent breaks ties by taking the first move it
//! sees, and chain resolution always takes the first chain move.
//!
//! - No position yet: every edge cell holding a marble, row-major.
//! - Otherwise: marble-holding neighbors in neighbor scan order, followed by
//!   every other cell holding a marble of the player's stamp color, row-major.

use smallvec::SmallVec;

use crate::core::{Board, Coord, MarbleColor, Player};

/// A list of stomp targets. Never larger than the 24 edge cells.
pub type MoveList = SmallVec<[Coord; 24]>;

/// All cells `player` may stomp on `board`. Each cell appears once.
#[must_use]
pub fn legal_moves(board: &Board, player: &Player) -> MoveList {
    let mut moves = MoveList::new();

    match player.position {
        None => {
            moves.extend(
                board
                    .cells()
                    .filter(|(at, cell)| at.is_edge() && cell.has_marble())
                    .map(|(at, _)| at),
            );
        }
        Some(position) => {
            for at in position.neighbors() {
                if board.cell(at).has_marble() {
                    moves.push(at);
                }
            }
            for (at, color) in board.marbles() {
                if color == player.stamp_color && !moves.contains(&at) {
                    moves.push(at);
                }
            }
        }
    }

    moves
}

/// Whether [`legal_moves`] would be non-empty, without building the list.
#[must_use]
pub fn has_legal_move(board: &Board, player: &Player) -> bool {
    match player.position {
        None => board.marbles().any(|(at, _)| at.is_edge()),
        Some(position) => {
            position.neighbors().iter().any(|&at| board.cell(at).has_marble())
                || board.marbles().any(|(_, color)| color == player.stamp_color)
        }
    }
}

/// Neighbors of `position` holding a marble of `color`: the forced chain
/// continuations after stomping a `color` marble at `position`.
#[must_use]
pub fn chain_moves(board: &Board, position: Coord, color: MarbleColor) -> MoveList {
    position
        .neighbors()
        .into_iter()
        .filter(|&at| board.cell(at).marble == Some(color))
        .collect()
}
