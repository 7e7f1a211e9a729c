//! One-ply mobility heuristic.
//!
//! For every candidate stomp the automated seat plays the stomp on a copy of
//! the snapshot, resolves the forced chain it triggers (always taking the
//! first chain move), and counts the opponent's legal moves on the result.
//! The candidate leaving the opponent the fewest moves wins; on a tie the
//! earliest candidate is kept, so candidate order decides ties.
//!
//! This is a greedy minimizer, not a search: it never looks at the
//! opponent's reply.

use tracing::{debug, trace};

use super::policy::MovePolicy;
use crate::core::{Coord, GameRng, PlayerRole};
use crate::rules::Snapshot;

/// Result of playing out one candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateEval {
    /// The candidate stomp.
    pub coord: Coord,
    /// Forced chain stomps that followed it, in order.
    pub chain: Vec<Coord>,
    /// Opponent's legal move count afterwards.
    pub opponent_mobility: usize,
}

/// Minimizes the opponent's mobility after one move plus its chain.
#[derive(Clone, Debug, Default)]
pub struct MobilityMinimizer;

impl MobilityMinimizer {
    /// Play `at` for `role` on a copy of `snapshot` and measure the opponent.
    #[must_use]
    pub fn evaluate(snapshot: &Snapshot, role: PlayerRole, at: Coord) -> CandidateEval {
        let (mut scratch, removed) = snapshot.stomped(role, at);
        let chain = match removed {
            Some(color) => scratch.resolve_chain(role, color),
            None => Vec::new(),
        };
        let opponent_mobility = scratch.legal_moves(role.opponent()).len();

        CandidateEval {
            coord: at,
            chain,
            opponent_mobility,
        }
    }

    /// Evaluate every candidate, in order.
    #[must_use]
    pub fn evaluate_all(snapshot: &Snapshot, role: PlayerRole, candidates: &[Coord]) -> Vec<CandidateEval> {
        candidates
            .iter()
            .map(|&at| Self::evaluate(snapshot, role, at))
            .collect()
    }
}

impl MovePolicy for MobilityMinimizer {
    fn select(
        &self,
        snapshot: &Snapshot,
        role: PlayerRole,
        candidates: &[Coord],
        rng: &mut GameRng,
    ) -> Option<Coord> {
        let mut best: Option<(Coord, usize)> = None;

        for &at in candidates {
            let eval = Self::evaluate(snapshot, role, at);
            trace!(
                coord = %at,
                chain_len = eval.chain.len(),
                opponent_mobility = eval.opponent_mobility,
                "candidate evaluated"
            );
            if best.map_or(true, |(_, min)| eval.opponent_mobility < min) {
                best = Some((at, eval.opponent_mobility));
            }
        }

        match best {
            Some((at, mobility)) => {
                debug!(
                    player = %role,
                    coord = %at,
                    opponent_mobility = mobility,
                    candidates = candidates.len(),
                    "move selected"
                );
                Some(at)
            }
            None => rng.choose(candidates).copied(),
        }
    }
}
