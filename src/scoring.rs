//! End-of-game scoring.
//!
//! ```text
//! total = (BASE_SCORE + RED_MARBLE_POINTS * red_left + OTHER_MARBLE_POINTS * other_left)
//!         * (-1 if lost, else 1)
//! ```
//!
//! Every term is kept in [`ScoreBreakdown`] so a presentation layer can show
//! the arithmetic, not just the result.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Outcome};

/// Points every finished game starts from.
pub const BASE_SCORE: i32 = 3;

/// Points per red marble left on the board.
pub const RED_MARBLE_POINTS: i32 = 3;

/// Points per non-red marble left on the board.
pub const OTHER_MARBLE_POINTS: i32 = 1;

/// Itemized score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: i32,
    pub red_remaining: u32,
    pub red_points: i32,
    pub other_remaining: u32,
    pub other_points: i32,
    /// -1 for a loss, 1 otherwise.
    pub multiplier: i32,
    pub total: i32,
}

impl ScoreBreakdown {
    /// Score from remaining-marble counts.
    #[must_use]
    pub fn from_counts(red_remaining: u32, other_remaining: u32, outcome: Outcome) -> Self {
        let red_points = RED_MARBLE_POINTS * red_remaining as i32;
        let other_points = OTHER_MARBLE_POINTS * other_remaining as i32;
        let multiplier = match outcome {
            Outcome::Loss => -1,
            Outcome::Win | Outcome::Unresolved => 1,
        };

        Self {
            base: BASE_SCORE,
            red_remaining,
            red_points,
            other_remaining,
            other_points,
            multiplier,
            total: (BASE_SCORE + red_points + other_points) * multiplier,
        }
    }

    /// Score from the marbles left on `board`.
    #[must_use]
    pub fn compute(board: &Board, outcome: Outcome) -> Self {
        let (red, other) = board
            .marbles()
            .fold((0u32, 0u32), |(red, other), (_, color)| {
                if color.is_reserved() {
                    (red + 1, other)
                } else {
                    (red, other + 1)
                }
            });
        Self::from_counts(red, other, outcome)
    }

    /// Sum before the win/loss multiplier.
    #[must_use]
    pub fn subtotal(&self) -> i32 {
        self.base + self.red_points + self.other_points
    }
}

impl std::fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Base score: {}", self.base)?;
        writeln!(
            f,
            "Red marbles left: {} x {} = {}",
            RED_MARBLE_POINTS, self.red_remaining, self.red_points
        )?;
        writeln!(
            f,
            "Other marbles left: {} x {} = {}",
            OTHER_MARBLE_POINTS, self.other_remaining, self.other_points
        )?;
        if self.multiplier < 0 {
            writeln!(f, "Loss: x(-1)")?;
        }
        write!(f, "Total: {}", self.total)
    }
}
