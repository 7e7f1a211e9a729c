//! Scoring and score submission tests.

mod common;

use common::{game_on, init_logging, play_out};
use stomple::core::{Coord, GameConfig, GameState, MarbleColor, Outcome, PlayerRole};
use stomple::ranking::{find_entry, InMemoryLeaderboard, RankEntry, RankingError, ScoreSubmitter};
use stomple::scoring::ScoreBreakdown;

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_score_after_win() {
    init_logging();
    // Human clears the only edge marble; the automated seat is then stuck
    // with two red and three other marbles left in the middle.
    let mut state = game_on(
        "G......\n\
         .......\n\
         ..RNR..\n\
         ...B...\n\
         ...K...\n\
         .......\n\
         .......",
        MarbleColor::Yellow,
        MarbleColor::White,
        PlayerRole::Human,
    );

    state.apply_move(PlayerRole::Human, Coord::new(0, 0)).unwrap();
    assert_eq!(state.outcome(), Outcome::Win);

    let score = state.score_breakdown();
    assert_eq!(score.red_remaining, 2);
    assert_eq!(score.other_remaining, 3);
    assert_eq!(score.total, 12);
    assert_eq!(state.score_breakdown_for(PlayerRole::Automated).total, -12);
}

#[test]
fn test_score_matches_board_after_full_game() {
    for seed in 0..6 {
        let mut state = GameState::new_game(&GameConfig::default().with_seed(seed));
        play_out(&mut state);

        let score = state.score_breakdown();
        let board = state.board();
        let red = board.count_color(MarbleColor::Red) as u32;
        assert_eq!(score.red_remaining, red);
        assert_eq!(
            score.other_remaining as usize,
            board.marble_count() - red as usize
        );
        assert_eq!(score.subtotal(), 3 + 3 * score.red_remaining as i32 + score.other_remaining as i32);

        match state.outcome() {
            Outcome::Win => assert!(score.total > 0),
            Outcome::Loss => assert!(score.total < 0),
            Outcome::Unresolved => unreachable!("game was played out"),
        }
        assert_eq!(score, ScoreBreakdown::compute(board, state.outcome()));
    }
}

#[test]
fn test_score_serialization() {
    let score = ScoreBreakdown::from_counts(2, 3, Outcome::Loss);
    let json = serde_json::to_value(score).unwrap();
    assert_eq!(json["total"], -12);
    assert_eq!(json["multiplier"], -1);
}

// =============================================================================
// Ranking
// =============================================================================

/// Stands in for a ranking service that cannot be reached.
struct Offline;

impl ScoreSubmitter for Offline {
    fn submit(&mut self, _user_id: &str, _score: i32) -> Result<Vec<RankEntry>, RankingError> {
        Err(RankingError::Unavailable("connection refused".to_string()))
    }
}

fn submit_final<S: ScoreSubmitter>(
    submitter: &mut S,
    user_id: &str,
    state: &GameState,
) -> Result<(Vec<RankEntry>, Option<usize>), RankingError> {
    let score = state.score_breakdown().total;
    let ranking = submitter.submit(user_id, score)?;
    let own = find_entry(&ranking, user_id, score);
    Ok((ranking, own))
}

#[test]
fn test_submit_finished_game() {
    init_logging();
    let mut leaderboard = InMemoryLeaderboard::new();
    leaderboard.submit("rival", 25).unwrap();
    leaderboard.submit("loser", -30).unwrap();

    let mut state = GameState::new_game(&GameConfig::default().with_seed(4));
    play_out(&mut state);

    let (ranking, own) = submit_final(&mut leaderboard, "me", &state).unwrap();
    assert_eq!(ranking.len(), 3);
    let own = own.unwrap();
    assert_eq!(ranking[own].user_id, "me");
    assert_eq!(ranking[own].score, state.score_breakdown().total);
    assert_eq!(ranking[own].rank as usize, own + 1);

    for pair in ranking.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_submit_failure_propagates() {
    let mut state = GameState::new_game(&GameConfig::default());
    play_out(&mut state);

    let err = submit_final(&mut Offline, "me", &state).unwrap_err();
    assert_eq!(err.to_string(), "ranking service unavailable: connection refused");
}
