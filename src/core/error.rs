//! Error types for board mutation, action application, encoding, unit codes
//! and configuration.
//!
//! Every failure is local and recoverable by the caller. Board errors mean a
//! caller bypassed the generator; action errors mean the action is not legal
//! in the given state.

use thiserror::Error;

use super::board::{Coord, Slot};

/// Structural violations of the two-slot stacking model.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("square {0} already holds two units")]
    StackOverflow(Coord),
    #[error("no unit in the {slot} slot of {coord}")]
    EmptySlot { coord: Coord, slot: Slot },
    #[error("square {0} is off the board")]
    OutOfBounds(Coord),
}

/// Failures of `apply` on an action that is not currently legal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("source slot is empty or holds a unit of the wrong side")]
    IllegalSource,
    #[error("destination cannot accept the moving unit")]
    IllegalDestination,
    #[error("melee target is absent or friendly")]
    IllegalCapture,
    #[error("ranged target is absent or friendly")]
    IllegalTarget,
    #[error("conversion target is absent, stacked or already friendly")]
    IllegalConvertTarget,
    #[error("unknown action type {0}")]
    UnknownActionType(u8),
    #[error("source square cannot take the acting unit back")]
    OverfullSource,
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A character that is not one of the unit codes P, N, B, R, Q, K.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown unit code {0:?}")]
pub struct UnknownUnitCode(pub char);

/// Failures of the flat action index codec.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("action index {index} outside action space of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("{field} value {value} outside base {base}")]
    FieldOutOfRange {
        field: &'static str,
        value: usize,
        base: usize,
    },
}

/// Ruleset geometry the engine cannot host.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board {rows}x{cols} is too small for the standard setup (min {min_rows}x{min_cols})")]
    BoardTooSmall {
        rows: usize,
        cols: usize,
        min_rows: usize,
        min_cols: usize,
    },
    #[error("board {rows}x{cols} exceeds the maximum side length {max}")]
    BoardTooLarge { rows: usize, cols: usize, max: usize },
}
