//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::ai::OpponentStrategy;
use crate::core::{Coord, GameConfig, GameState, InvalidMoveError, Outcome, PlayerRole};

/// Python mirror of `PlayerRole`.
#[pyclass(name = "PlayerRole", eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PyPlayerRole {
    Human,
    Automated,
}

impl From<PyPlayerRole> for PlayerRole {
    fn from(role: PyPlayerRole) -> Self {
        match role {
            PyPlayerRole::Human => PlayerRole::Human,
            PyPlayerRole::Automated => PlayerRole::Automated,
        }
    }
}

impl From<PlayerRole> for PyPlayerRole {
    fn from(role: PlayerRole) -> Self {
        match role {
            PlayerRole::Human => PyPlayerRole::Human,
            PlayerRole::Automated => PyPlayerRole::Automated,
        }
    }
}

fn to_py_err(err: InvalidMoveError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn to_tuples(moves: &[Coord]) -> Vec<(u8, u8)> {
    moves.iter().map(|c| (c.row, c.col)).collect()
}

/// Python wrapper for one game.
#[pyclass(name = "StompleGame")]
pub struct PyStompleGame {
    state: GameState,
}

#[pymethods]
impl PyStompleGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    /// - human_first: give the first move to the human seat
    /// - random_opponent: use the uniform random opponent
    #[new]
    #[pyo3(signature = (seed = 42, human_first = false, random_opponent = false))]
    fn new(seed: u64, human_first: bool, random_opponent: bool) -> Self {
        let mut config = GameConfig::default().with_seed(seed);
        if human_first {
            config = config.with_first_player(PlayerRole::Human);
        }
        if random_opponent {
            config = config.with_opponent(OpponentStrategy::Random);
        }
        Self {
            state: GameState::new_game(&config),
        }
    }

    /// Whose turn it is.
    fn to_move(&self) -> PyPlayerRole {
        self.state.to_move().into()
    }

    /// Legal moves for a role as (row, col) tuples.
    fn legal_moves(&self, role: PyPlayerRole) -> Vec<(u8, u8)> {
        to_tuples(&self.state.legal_moves(role.into()))
    }

    /// Moves `apply_move` would accept from a role right now.
    fn available_moves(&self, role: PyPlayerRole) -> Vec<(u8, u8)> {
        to_tuples(&self.state.available_moves(role.into()))
    }

    /// Apply a stomp. Raises ValueError if it is not allowed, including
    /// coordinates off the board.
    fn apply_move(&mut self, role: PyPlayerRole, row: i64, col: i64) -> PyResult<()> {
        let at = Coord::from_signed(row, col).map_err(to_py_err)?;
        self.state.apply_move(role.into(), at).map_err(to_py_err)
    }

    /// Name of the pending chain color, if any.
    fn pending_chain(&self) -> Option<&'static str> {
        self.state.pending_chain().map(|c| c.name())
    }

    /// The automated seat's next move, without applying it.
    fn automated_move(&mut self) -> Option<(u8, u8)> {
        self.state.automated_move().map(|c| (c.row, c.col))
    }

    /// Play the automated seat's whole turn. Returns the stomped cells.
    fn play_automated_turn(&mut self) -> PyResult<Vec<(u8, u8)>> {
        self.state
            .play_automated_turn()
            .map(|moves| to_tuples(&moves))
            .map_err(to_py_err)
    }

    /// "unresolved", "win", or "loss" from the human seat's view.
    fn outcome(&self) -> &'static str {
        match self.state.outcome() {
            Outcome::Unresolved => "unresolved",
            Outcome::Win => "win",
            Outcome::Loss => "loss",
        }
    }

    /// Human seat's total score.
    fn score(&self) -> i32 {
        self.state.score_breakdown().total
    }

    /// Itemized score text.
    fn score_details(&self) -> String {
        self.state.score_breakdown().to_string()
    }

    /// Text rendering of the board.
    fn board(&self) -> String {
        self.state.board().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "StompleGame(turn={}, to_move={}, marbles={})",
            self.state.turn_number(),
            self.state.to_move(),
            self.state.board().marble_count()
        )
    }
}
