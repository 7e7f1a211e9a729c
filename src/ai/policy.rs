//! Move policies for the automated seat.
//!
//! Policies are trait-based so the opponent can be swapped:
//! - `MobilityMinimizer`: one-ply lookahead, starve the opponent of moves
//! - `RandomPolicy`: uniform over the candidates
//!
//! `OpponentStrategy` is the serializable, closed choice between them that
//! lives in `GameConfig`.

use serde::{Deserialize, Serialize};

use super::mobility::MobilityMinimizer;
use crate::core::{Coord, GameRng, PlayerRole};
use crate::rules::Snapshot;

/// Picks one stomp out of a candidate list.
pub trait MovePolicy: Send + Sync {
    /// Choose a move for `role` from `candidates`.
    ///
    /// Returns `None` only if `candidates` is empty. The returned move is
    /// always one of `candidates`.
    fn select(
        &self,
        snapshot: &Snapshot,
        role: PlayerRole,
        candidates: &[Coord],
        rng: &mut GameRng,
    ) -> Option<Coord>;
}

/// Uniform random policy.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn select(
        &self,
        _snapshot: &Snapshot,
        _role: PlayerRole,
        candidates: &[Coord],
        rng: &mut GameRng,
    ) -> Option<Coord> {
        rng.choose(candidates).copied()
    }
}

/// Which policy drives the automated seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpponentStrategy {
    #[default]
    MobilityMinimizer,
    Random,
}

impl OpponentStrategy {
    /// Dispatch to the policy for this strategy.
    pub fn select(
        self,
        snapshot: &Snapshot,
        role: PlayerRole,
        candidates: &[Coord],
        rng: &mut GameRng,
    ) -> Option<Coord> {
        match self {
            OpponentStrategy::MobilityMinimizer => {
                MobilityMinimizer.select(snapshot, role, candidates, rng)
            }
            OpponentStrategy::Random => RandomPolicy.select(snapshot, role, candidates, rng),
        }
    }
}
