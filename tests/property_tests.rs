//! Property tests over random boards and seeds.

mod common;

use proptest::prelude::*;

use stomple::core::{
    Board, Coord, GameConfig, GameRng, GameState, MarbleColor, Player, PlayerMap, PlayerRole,
    BOARD_SIZE, MARBLES_PER_COLOR,
};
use stomple::ai::OpponentStrategy;
use stomple::rules::Snapshot;

fn random_snapshot(seed: u64) -> Snapshot {
    Snapshot::new(
        Board::random(&mut GameRng::new(seed)),
        PlayerMap::from_values(
            Player::new(PlayerRole::Human, MarbleColor::Green),
            Player::new(PlayerRole::Automated, MarbleColor::White),
        ),
    )
}

proptest! {
    #[test]
    fn board_has_seven_of_each_color(seed in any::<u64>()) {
        let board = Board::random(&mut GameRng::new(seed));
        prop_assert_eq!(board.marble_count(), 49);
        for color in MarbleColor::ALL {
            prop_assert_eq!(board.count_color(color), MARBLES_PER_COLOR);
        }
        prop_assert!(board.cells().all(|(_, c)| c.stamp.is_none()));
    }

    #[test]
    fn neighbors_are_in_bounds_and_distinct(row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let at = Coord::checked(row, col).unwrap();
        let neighbors = at.neighbors();

        prop_assert!((3..=8).contains(&neighbors.len()));
        prop_assert_eq!(neighbors.len() == 8, !at.is_edge());
        for (i, n) in neighbors.iter().enumerate() {
            prop_assert!(n.in_bounds());
            prop_assert_ne!(*n, at);
            prop_assert!(at.is_adjacent(*n));
            prop_assert!(!neighbors[..i].contains(n));
        }
    }

    #[test]
    fn chain_never_restomps(seed in any::<u64>(), start in 0usize..24) {
        let mut snapshot = random_snapshot(seed);
        let edge: Vec<_> = snapshot.legal_moves(PlayerRole::Human).to_vec();
        let at = edge[start % edge.len()];

        let color = snapshot.perform_stomp(PlayerRole::Human, at).unwrap();
        let chain = snapshot.resolve_chain(PlayerRole::Human, color);

        prop_assert!(chain.len() < MARBLES_PER_COLOR);
        prop_assert!(!chain.contains(&at));
        let mut prev = at;
        for (i, step) in chain.iter().enumerate() {
            prop_assert!(prev.is_adjacent(*step));
            prop_assert!(!chain[..i].contains(step));
            prop_assert_eq!(snapshot.board.marble_at(*step), None);
            prev = *step;
        }
        prop_assert!(snapshot.chain_moves(PlayerRole::Human, color).is_empty());
        prop_assert_eq!(snapshot.board.marble_count(), 48 - chain.len());
    }

    #[test]
    fn automated_move_is_legal(seed in any::<u64>(), human_moves in 0usize..6, random in any::<bool>()) {
        let opponent = if random { OpponentStrategy::Random } else { OpponentStrategy::MobilityMinimizer };
        let config = GameConfig::default()
            .with_seed(seed)
            .with_first_player(PlayerRole::Human)
            .with_opponent(opponent);
        let mut state = GameState::new_game(&config);

        for _ in 0..human_moves {
            if state.is_over() {
                break;
            }
            match state.to_move() {
                PlayerRole::Human => {
                    let at = state.available_moves(PlayerRole::Human)[0];
                    state.apply_move(PlayerRole::Human, at).unwrap();
                }
                PlayerRole::Automated => {
                    state.play_automated_turn().unwrap();
                }
            }
        }

        if state.to_move() == PlayerRole::Automated && !state.is_over() {
            let at = state.automated_move().unwrap();
            prop_assert!(state.available_moves(PlayerRole::Automated).contains(&at));
        } else {
            prop_assert_eq!(state.automated_move(), None);
        }
    }
}
