//! Marble colors.
//!
//! Seven colors, seven marbles each. Red is reserved: it is never handed out
//! as a stamp color and it is worth more when left on the board at the end.

use serde::{Deserialize, Serialize};

/// Color of a marble on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MarbleColor {
    SkyBlue,
    NavyBlue,
    Green,
    Yellow,
    Black,
    White,
    Red,
}

impl MarbleColor {
    /// Every marble color, in board-fill order.
    pub const ALL: [MarbleColor; 7] = [
        MarbleColor::SkyBlue,
        MarbleColor::NavyBlue,
        MarbleColor::Green,
        MarbleColor::Yellow,
        MarbleColor::Black,
        MarbleColor::White,
        MarbleColor::Red,
    ];

    /// Colors that may be assigned to a player as a stamp color.
    pub const STAMP_COLORS: [MarbleColor; 6] = [
        MarbleColor::SkyBlue,
        MarbleColor::NavyBlue,
        MarbleColor::Green,
        MarbleColor::Yellow,
        MarbleColor::Black,
        MarbleColor::White,
    ];

    /// The reserved color.
    pub const RESERVED: MarbleColor = MarbleColor::Red;

    /// Check if this is the reserved color.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(self, MarbleColor::Red)
    }

    /// Single-letter symbol used by the text board format.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            MarbleColor::SkyBlue => 'B',
            MarbleColor::NavyBlue => 'N',
            MarbleColor::Green => 'G',
            MarbleColor::Yellow => 'Y',
            MarbleColor::Black => 'K',
            MarbleColor::White => 'W',
            MarbleColor::Red => 'R',
        }
    }

    /// Parse a symbol produced by [`MarbleColor::symbol`].
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.symbol() == symbol)
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MarbleColor::SkyBlue => "Sky Blue",
            MarbleColor::NavyBlue => "Navy Blue",
            MarbleColor::Green => "Green",
            MarbleColor::Yellow => "Yellow",
            MarbleColor::Black => "Black",
            MarbleColor::White => "White",
            MarbleColor::Red => "Red",
        }
    }
}

impl std::fmt::Display for MarbleColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
