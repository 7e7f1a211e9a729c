//! Stomp history records.
//!
//! Every accepted stomp is appended to the game's history. A record notes
//! whether the stomp was a forced chain continuation, which lets a replay
//! tell turn-opening moves apart from chain steps.

use serde::{Deserialize, Serialize};

use super::color::MarbleColor;
use super::coord::Coord;
use super::player::PlayerRole;

/// One applied stomp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StompRecord {
    /// The player who stomped.
    pub player: PlayerRole,

    /// The stomped cell.
    pub coord: Coord,

    /// Color of the removed marble.
    pub color: MarbleColor,

    /// True if this stomp continued a chain.
    pub chained: bool,

    /// Turn number when the stomp happened (starts at 1).
    pub turn: u32,

    /// Position in the whole game's history (starts at 0).
    pub sequence: u32,
}
