//! Game bindings for Python.

use numpy::{PyArray1, PyArray3, PyArrayMethods};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{GameState, RulesetConfig};
use crate::nn::{ActionCodec, BoardEncoder, StateEncoder};
use crate::rules::BattleRules;

use super::py_core::{coord_tuple, parse_side, value_error, PyAction};

/// Python wrapper for one battle-chess game.
///
/// Actions cross the boundary as flat indices (see `encode_action`).
#[pyclass(name = "BattleChess")]
pub struct PyBattleChess {
    rules: BattleRules,
    state: GameState,
    codec: ActionCodec,
    encoder: BoardEncoder,
}

impl PyBattleChess {
    fn legal(&self) -> Vec<crate::core::Action> {
        self.rules.legal_actions(&self.state)
    }
}

#[pymethods]
impl PyBattleChess {
    /// Create a game in the standard setup.
    #[new]
    #[pyo3(signature = (rows = 8, cols = 8, minimal_loss_rule = false))]
    fn new(rows: usize, cols: usize, minimal_loss_rule: bool) -> PyResult<Self> {
        let config = RulesetConfig::new()
            .with_board(rows, cols)
            .with_minimal_loss_rule(minimal_loss_rule);
        let rules = BattleRules::new(config).map_err(value_error)?;
        let state = rules.initial_state().map_err(value_error)?;
        Ok(Self {
            codec: ActionCodec::for_config(rules.config()),
            encoder: BoardEncoder::for_config(rules.config()),
            rules,
            state,
        })
    }

    /// Legal actions for the side to move.
    fn legal_actions(&self) -> Vec<PyAction> {
        self.legal().into_iter().map(PyAction::from).collect()
    }

    /// Flat indices of the legal actions.
    fn legal_indices(&self) -> Vec<usize> {
        self.codec.legal_indices(&self.legal())
    }

    /// Boolean mask over the whole action space.
    fn action_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<bool>> {
        PyArray1::from_vec_bound(py, self.codec.action_mask(&self.legal()))
    }

    /// Size of the flat action space.
    #[getter]
    fn action_space_size(&self) -> usize {
        self.codec.action_space_size()
    }

    /// Apply the action at flat `index` and return its event as a dict.
    ///
    /// The index must be legal; check `legal_indices` first when sampling
    /// from the full space.
    fn apply<'py>(&mut self, py: Python<'py>, index: usize) -> PyResult<Bound<'py, PyAny>> {
        let json = self.apply_json(index)?;
        py.import_bound("json")?.call_method1("loads", (json,))
    }

    /// Apply the action at flat `index` and return its event as JSON.
    fn apply_json(&mut self, index: usize) -> PyResult<String> {
        let action = self.codec.decode(index).map_err(value_error)?;
        let event = self
            .rules
            .apply(&mut self.state, &action)
            .map_err(value_error)?;
        serde_json::to_string(&event).map_err(value_error)
    }

    /// "north", "south", "draw", or None while both kings stand.
    fn winner(&self) -> Option<&'static str> {
        self.rules.winner(&self.state).map(|r| r.name())
    }

    /// 12 x rows x cols int8 occupancy planes from `side`'s view.
    fn observe<'py>(&self, py: Python<'py>, side: &str) -> PyResult<Bound<'py, PyArray3<i8>>> {
        let side = parse_side(side)?;
        let encoded = self.encoder.encode(&self.state, side);
        let [planes, rows, cols] = [encoded.shape[0], encoded.shape[1], encoded.shape[2]];
        PyArray1::from_vec_bound(py, encoded.to_binary()).reshape([planes, rows, cols])
    }

    fn encode_action(&self, action: &PyAction) -> PyResult<usize> {
        self.codec.encode(&action.0).map_err(value_error)
    }

    fn decode_action(&self, index: usize) -> PyResult<PyAction> {
        self.codec.decode(index).map(PyAction::from).map_err(value_error)
    }

    /// Side to move.
    #[getter]
    fn to_move(&self) -> &'static str {
        self.state.side_to_move.name()
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.state.move_count
    }

    /// Units as (row, col, slot, side, type code) tuples.
    fn units(&self) -> Vec<(usize, usize, usize, &'static str, char)> {
        self.state
            .board
            .units()
            .map(|(coord, slot, unit)| {
                let (row, col) = coord_tuple(coord);
                (row, col, slot.index(), unit.side.name(), unit.kind.code())
            })
            .collect()
    }

    /// Material per side as a dict.
    fn material<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        for (side, value) in crate::rules::material(&self.state).iter() {
            dict.set_item(side.name(), *value)?;
        }
        Ok(dict)
    }

    /// Independent copy for simulation.
    fn copy(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            state: self.state.clone(),
            codec: self.codec,
            encoder: self.encoder,
        }
    }

    fn __repr__(&self) -> String {
        let status = self.winner().unwrap_or("ongoing");
        format!(
            "BattleChess(move={}, to_move={}, status={})",
            self.state.move_count,
            self.state.side_to_move.name(),
            status
        )
    }
}
