//! Core engine types: sides, units, board, actions, state, RNG, configuration.
//!
//! Everything here is plain data. Legality and state transitions live in
//! `rules`.

pub mod side;
pub mod unit;
pub mod board;
pub mod action;
pub mod config;
pub mod error;
pub mod state;
pub mod rng;

pub use side::{Side, SideMap};
pub use unit::{Unit, UnitType};
pub use board::{Board, Coord, Slot, Square};
pub use action::{Action, ActionType};
pub use config::RulesetConfig;
pub use error::{ActionError, BoardError, CodecError, ConfigError, UnknownUnitCode};
pub use state::{GameResult, GameState};
pub use rng::GameRng;
