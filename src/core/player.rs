//! Player roles and per-player data.
//!
//! ## PlayerRole
//!
//! The game always has exactly two seats: the human and the automated
//! opponent. Dispatch on who is acting is a `match` on this enum.
//!
//! ## PlayerMap
//!
//! Per-role storage backed by a two-element array, indexed by `PlayerRole`.
//!
//! ## Player
//!
//! A seat's stamp color and current position on the board.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::board::Board;
use super::color::MarbleColor;
use super::coord::Coord;

/// Which seat a player occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerRole {
    /// Moves chosen by the caller (the person at the screen).
    Human,
    /// Moves chosen by the engine's opponent policy.
    Automated,
}

impl PlayerRole {
    /// Both roles, in storage order.
    pub const ALL: [PlayerRole; 2] = [PlayerRole::Human, PlayerRole::Automated];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerRole::Human => PlayerRole::Automated,
            PlayerRole::Automated => PlayerRole::Human,
        }
    }

    /// Storage index (0 for human, 1 for automated).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerRole::Human => 0,
            PlayerRole::Automated => 1,
        }
    }

    /// Symbol used for this player's stamp in the text board format.
    #[must_use]
    pub const fn stamp_symbol(self) -> char {
        match self {
            PlayerRole::Human => 'P',
            PlayerRole::Automated => 'C',
        }
    }
}

impl std::fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerRole::Human => f.write_str("Player"),
            PlayerRole::Automated => f.write_str("Computer"),
        }
    }
}

/// One value per seat with O(1) access.
///
/// ## Example
///
/// ```
/// use stomple::core::{PlayerMap, PlayerRole};
///
/// let mut moves: PlayerMap<u32> = PlayerMap::new(|_| 0);
/// moves[PlayerRole::Automated] += 1;
/// assert_eq!(moves[PlayerRole::Automated], 1);
/// assert_eq!(moves[PlayerRole::Human], 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerRole) -> T) -> Self {
        Self {
            data: [factory(PlayerRole::Human), factory(PlayerRole::Automated)],
        }
    }

    /// Create a map from explicit per-role values.
    pub fn from_values(human: T, automated: T) -> Self {
        Self {
            data: [human, automated],
        }
    }

    /// Get a reference to a role's value.
    #[must_use]
    pub fn get(&self, role: PlayerRole) -> &T {
        &self.data[role.index()]
    }

    /// Get a mutable reference to a role's value.
    pub fn get_mut(&mut self, role: PlayerRole) -> &mut T {
        &mut self.data[role.index()]
    }

    /// Iterate over (PlayerRole, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerRole, &T)> {
        PlayerRole::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<PlayerRole> for PlayerMap<T> {
    type Output = T;

    fn index(&self, role: PlayerRole) -> &Self::Output {
        self.get(role)
    }
}

impl<T> IndexMut<PlayerRole> for PlayerMap<T> {
    fn index_mut(&mut self, role: PlayerRole) -> &mut Self::Output {
        self.get_mut(role)
    }
}

/// A seat at the board.
///
/// `position` is `None` until the player's first stomp; afterwards it always
/// names the cell the player stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub role: PlayerRole,
    pub stamp_color: MarbleColor,
    pub position: Option<Coord>,
}

impl Player {
    /// Create a player who has not moved yet.
    ///
    /// # Panics
    ///
    /// Panics if `stamp_color` is the reserved color.
    #[must_use]
    pub fn new(role: PlayerRole, stamp_color: MarbleColor) -> Self {
        assert!(
            !stamp_color.is_reserved(),
            "Reserved color cannot be a stamp color"
        );
        Self {
            role,
            stamp_color,
            position: None,
        }
    }

    /// Same player, standing at `position`.
    #[must_use]
    pub fn at(mut self, position: Coord) -> Self {
        self.position = Some(position);
        self
    }

    /// Whether the player has any legal stomp on `board`.
    #[must_use]
    pub fn has_legal_move(&self, board: &Board) -> bool {
        crate::rules::has_legal_move(board, self)
    }
}
