//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use stomple::core::{Board, GameConfig, GameState, MarbleColor, Player, PlayerMap, PlayerRole};
use stomple::rules::Snapshot;

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Filter comes from `TEST_LOG`, then
/// `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());

        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn board(text: &str) -> Board {
    Board::parse(text).expect("fixture board should parse")
}

/// A game on a fixed board, nobody placed yet.
pub fn game_on(text: &str, human: MarbleColor, automated: MarbleColor, to_move: PlayerRole) -> GameState {
    game_with(
        text,
        Player::new(PlayerRole::Human, human),
        Player::new(PlayerRole::Automated, automated),
        to_move,
        &GameConfig::default(),
    )
}

pub fn game_with(
    text: &str,
    human: Player,
    automated: Player,
    to_move: PlayerRole,
    config: &GameConfig,
) -> GameState {
    GameState::from_snapshot(
        Snapshot::new(board(text), PlayerMap::from_values(human, automated)),
        to_move,
        config,
    )
}

/// Play a game to the end. The human takes the first available move; the
/// automated seat plays its configured strategy. Returns the number of stomps.
pub fn play_out(state: &mut GameState) -> usize {
    let mut stomps = 0;
    while !state.is_over() {
        match state.to_move() {
            PlayerRole::Automated => {
                stomps += state.play_automated_turn().expect("automated turn").len();
            }
            PlayerRole::Human => {
                let at = state.available_moves(PlayerRole::Human)[0];
                state.apply_move(PlayerRole::Human, at).expect("human move");
                stomps += 1;
            }
        }
        assert!(stomps <= 49, "a game cannot stomp more marbles than exist");
    }
    stomps
}
