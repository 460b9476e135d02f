//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, ActionType, Coord, Side, Slot};

/// Convert any displayable engine error into a Python `ValueError`.
pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Parse "north" / "south".
pub(crate) fn parse_side(name: &str) -> PyResult<Side> {
    Side::from_name(name).ok_or_else(|| value_error(format!("unknown side {name:?}")))
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// Create an action from raw fields.
    ///
    /// `slot` is 0 (top) or 1 (bottom); `action_type` is 0 move, 1 melee,
    /// 2 ranged, 3 convert.
    #[new]
    fn new(
        from_row: usize,
        from_col: usize,
        slot: usize,
        to_row: usize,
        to_col: usize,
        action_type: usize,
    ) -> PyResult<Self> {
        Action::from_raw([from_row, from_col, slot, to_row, to_col, action_type])
            .map(Self)
            .map_err(value_error)
    }

    #[getter]
    fn from_square(&self) -> (usize, usize) {
        (self.0.from.row, self.0.from.col)
    }

    #[getter]
    fn to_square(&self) -> (usize, usize) {
        (self.0.to.row, self.0.to.col)
    }

    #[getter]
    fn slot(&self) -> usize {
        self.0.slot.index()
    }

    #[getter]
    fn action_type(&self) -> u8 {
        self.0.kind.index()
    }

    /// Raw `(from_row, from_col, slot, to_row, to_col, action_type)` tuple.
    fn to_tuple(&self) -> (usize, usize, usize, usize, usize, usize) {
        let [a, b, c, d, e, f] = self.0.to_raw();
        (a, b, c, d, e, f)
    }

    fn __repr__(&self) -> String {
        let kind = match self.0.kind {
            ActionType::Move => "move",
            ActionType::Melee => "melee",
            ActionType::Ranged => "ranged",
            ActionType::Convert => "convert",
        };
        let slot = match self.0.slot {
            Slot::Top => "top",
            Slot::Bottom => "bottom",
        };
        format!("Action({} {slot} -> {} {kind})", self.0.from, self.0.to)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

impl From<Action> for PyAction {
    fn from(action: Action) -> Self {
        Self(action)
    }
}

/// Coordinates as a Python tuple.
pub(crate) fn coord_tuple(coord: Coord) -> (usize, usize) {
    (coord.row, coord.col)
}
