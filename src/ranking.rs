//! Score submission seam.
//!
//! Submitting a score to a leaderboard and getting the ranking back is done
//! by a collaborator outside the engine. This module defines what the engine
//! expects of it, plus an in-memory implementation for local play.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// One row of a leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankEntry {
    /// 1-based position.
    pub rank: u32,
    pub user_id: String,
    pub score: i32,
}

/// Why a submission failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("a user id is required to submit a score")]
    MissingUserId,

    #[error("ranking service unavailable: {0}")]
    Unavailable(String),

    #[error("ranking service rejected the submission with status {status}")]
    Rejected { status: u16 },

    #[error("malformed ranking response: {0}")]
    Malformed(String),
}

/// Something that accepts a final score and answers with the ranking.
pub trait ScoreSubmitter {
    /// Submit `score` for `user_id` and return the resulting ranking.
    fn submit(&mut self, user_id: &str, score: i32) -> Result<Vec<RankEntry>, RankingError>;
}

/// Index of the submitter's own row: first entry matching both user id and
/// score.
#[must_use]
pub fn find_entry(ranking: &[RankEntry], user_id: &str, score: i32) -> Option<usize> {
    ranking
        .iter()
        .position(|e| e.user_id == user_id && e.score == score)
}

/// Leaderboard kept in memory.
///
/// Higher scores rank first; equal scores keep submission order.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLeaderboard {
    entries: Vec<(String, i32)>,
}

impl InMemoryLeaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current ranking.
    #[must_use]
    pub fn ranking(&self) -> Vec<RankEntry> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, (user_id, score))| RankEntry {
                rank: i as u32 + 1,
                user_id: user_id.clone(),
                score: *score,
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ScoreSubmitter for InMemoryLeaderboard {
    fn submit(&mut self, user_id: &str, score: i32) -> Result<Vec<RankEntry>, RankingError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(RankingError::MissingUserId);
        }

        let at = self.entries.partition_point(|(_, s)| *s >= score);
        self.entries.insert(at, (user_id.to_string(), score));
        debug!(user_id, score, rank = at + 1, "score recorded");

        Ok(self.ranking())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboard_orders_by_score() {
        let mut board = InMemoryLeaderboard::new();
        board.submit("ana", 12).unwrap();
        board.submit("bo", -5).unwrap();
        let ranking = board.submit("cy", 20).unwrap();

        let order: Vec<_> = ranking.iter().map(|e| (e.rank, e.user_id.as_str(), e.score)).collect();
        assert_eq!(order, vec![(1, "cy", 20), (2, "ana", 12), (3, "bo", -5)]);
    }

    #[test]
    fn test_ties_keep_submission_order() {
        let mut board = InMemoryLeaderboard::new();
        board.submit("first", 7).unwrap();
        let ranking = board.submit("second", 7).unwrap();

        assert_eq!(ranking[0].user_id, "first");
        assert_eq!(ranking[1].user_id, "second");
        assert_eq!(ranking[1].rank, 2);
    }

    #[test]
    fn test_blank_user_rejected() {
        let mut board = InMemoryLeaderboard::new();
        assert_eq!(board.submit("   ", 3), Err(RankingError::MissingUserId));
        assert!(board.is_empty());
    }

    #[test]
    fn test_find_entry() {
        let mut board = InMemoryLeaderboard::new();
        board.submit("ana", 12).unwrap();
        board.submit("ana", 4).unwrap();
        let ranking = board.submit("bo", 9).unwrap();

        assert_eq!(find_entry(&ranking, "ana", 4), Some(2));
        assert_eq!(find_entry(&ranking, "bo", 9), Some(1));
        assert_eq!(find_entry(&ranking, "cy", 9), None);
    }

    #[test]
    fn test_rank_entry_json() {
        let entry = RankEntry {
            rank: 1,
            user_id: "ana".to_string(),
            score: 12,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"rank":1,"user_id":"ana","score":12}"#);
    }
}
