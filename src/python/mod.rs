//! Python bindings for the stomple engine.
//!
//! # Quick Start
//!
//! ```python
//! import stomple
//!
//! game = stomple.StompleGame(seed=7)
//! game.play_automated_turn()
//!
//! while game.outcome() == "unresolved":
//!     row, col = game.available_moves(stomple.PlayerRole.Human)[0]
//!     game.apply_move(stomple.PlayerRole.Human, row, col)
//!     if game.to_move() == stomple.PlayerRole.Automated:
//!         game.play_automated_turn()
//!
//! print(game.score_details())
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// stomple: rules engine and automated opponent.
#[pymodule]
fn stomple(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerRole>()?;
    m.add_class::<PyStompleGame>()?;
    Ok(())
}
