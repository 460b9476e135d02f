//! Python bindings for the battle-chess engine.
//!
//! # Quick Start
//!
//! ```python
//! import battle_chess as bc
//!
//! game = bc.BattleChess()
//! while game.winner() is None:
//!     legal = game.legal_indices()
//!     if not legal:
//!         break
//!     event = game.apply(legal[0])
//!
//! obs = game.observe("north")        # int8 [12, 8, 8]
//!
//! record = bc.play_selfplay(north="greedy", south="random", seed=7)
//! states, actions, values = record.to_numpy_batch()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;
mod py_training;

pub use py_core::*;
pub use py_game::*;
pub use py_training::*;

/// battle_chess: a deterministic battle-chess engine for RL training.
#[pymodule]
fn battle_chess(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAction>()?;
    m.add_class::<PyBattleChess>()?;
    m.add_class::<PyGameRecord>()?;
    m.add_function(wrap_pyfunction!(play_selfplay, m)?)?;
    Ok(())
}
