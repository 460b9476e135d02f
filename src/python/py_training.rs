//! Self-play bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::agents::{Agent, GreedyAgent, RandomAgent};
use crate::core::{RulesetConfig, Side};
use crate::nn::{BoardEncoder, StateEncoder};
use crate::rules::BattleRules;
use crate::training::{GameRecord, SelfPlayConfig, SelfPlayRunner};

use super::py_core::value_error;

fn make_agent(kind: &str, seed: u64) -> PyResult<Box<dyn Agent>> {
    match kind {
        "greedy" => Ok(Box::new(GreedyAgent::new())),
        "random" => Ok(Box::new(RandomAgent::new(seed))),
        other => Err(value_error(format!("unknown agent {other:?}"))),
    }
}

/// Python wrapper for a recorded game.
#[pyclass(name = "GameRecord")]
#[derive(Clone, Debug)]
pub struct PyGameRecord(pub GameRecord);

#[pymethods]
impl PyGameRecord {
    fn __len__(&self) -> usize {
        self.0.len()
    }

    /// "north", "south", "draw", or None if the move limit was hit.
    #[getter]
    fn outcome(&self) -> Option<&'static str> {
        self.0.outcome.map(|r| r.name())
    }

    /// (north, south) agent names.
    #[getter]
    fn players(&self) -> (String, String) {
        (
            self.0.players[Side::North].clone(),
            self.0.players[Side::South].clone(),
        )
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed
    }

    fn to_jsonl(&self) -> PyResult<String> {
        self.0.to_jsonl().map_err(value_error)
    }

    fn to_notation(&self) -> String {
        self.0.to_notation()
    }

    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        self.0.to_bytes().map_err(value_error)
    }

    #[staticmethod]
    fn from_bytes(bytes: Vec<u8>) -> PyResult<Self> {
        GameRecord::from_bytes(&bytes).map(Self).map_err(value_error)
    }

    /// Training arrays for every step:
    /// - states: [N, 12 * rows * cols] float32
    /// - actions: [N] flat action indices
    /// - values: [N] final value for the mover
    fn to_numpy_batch<'py>(
        &self,
        py: Python<'py>,
    ) -> PyResult<(
        Bound<'py, PyArray2<f32>>,
        Bound<'py, PyArray1<u64>>,
        Bound<'py, PyArray1<f32>>,
    )> {
        let encoder = BoardEncoder::for_config(&self.0.config);
        let samples = self.0.training_samples(&encoder).map_err(value_error)?;
        let n = samples.len();
        let state_dim: usize = encoder.output_shape().iter().product();

        let mut states = Vec::with_capacity(n * state_dim);
        let mut actions = Vec::with_capacity(n);
        let mut values = Vec::with_capacity(n);
        for sample in samples {
            states.extend_from_slice(&sample.state.tensor);
            actions.push(sample.action_index as u64);
            values.push(sample.value);
        }

        let states = PyArray1::from_vec_bound(py, states).reshape([n, state_dim])?;
        Ok((
            states,
            PyArray1::from_vec_bound(py, actions),
            PyArray1::from_vec_bound(py, values),
        ))
    }

    fn __repr__(&self) -> String {
        format!(
            "GameRecord({} vs {}, moves={}, outcome={})",
            self.0.players[Side::North],
            self.0.players[Side::South],
            self.0.len(),
            self.outcome().unwrap_or("none")
        )
    }
}

/// Play one self-play game between two baseline agents.
///
/// Agents are "greedy" or "random".
#[pyfunction]
#[pyo3(signature = (
    north = "greedy",
    south = "greedy",
    max_moves = 500,
    seed = 0,
    rows = 8,
    cols = 8,
    minimal_loss_rule = false
))]
pub fn play_selfplay(
    north: &str,
    south: &str,
    max_moves: usize,
    seed: u64,
    rows: usize,
    cols: usize,
    minimal_loss_rule: bool,
) -> PyResult<PyGameRecord> {
    let config = RulesetConfig::new()
        .with_board(rows, cols)
        .with_minimal_loss_rule(minimal_loss_rule);
    let rules = BattleRules::new(config).map_err(value_error)?;
    let runner = SelfPlayRunner::new(
        rules,
        SelfPlayConfig::new().with_max_moves(max_moves).with_seed(seed),
    );

    let mut north = make_agent(north, seed)?;
    let mut south = make_agent(south, seed.wrapping_add(1))?;
    runner
        .play_game(north.as_mut(), south.as_mut())
        .map(PyGameRecord)
        .map_err(value_error)
}
