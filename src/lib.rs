//! # battle-chess
//!
//! A deterministic two-player battle-chess rules engine built for RL
//! training loops.
//!
//! ## Design Principles
//!
//! 1. **Values, not references**: the board is a flat arena of two-slot
//!    squares holding plain `Unit` values. Cloning a `GameState` is a full,
//!    independent copy, so speculative evaluation is copy-then-mutate.
//!
//! 2. **Explicit turn state**: the side to move lives in the state passed to
//!    every call, never in globals, so concurrent games cannot interfere.
//!
//! 3. **Events as return values**: `apply` returns an `EventRecord` instead of
//!    logging; reward shaping, game logs and replay all consume it.
//!
//! ## Turn flow
//!
//! generator -> minimal-loss filter (optional) -> agent picks an action ->
//! `apply` -> victory check from king presence.
//!
//! ## Modules
//!
//! - `core`: Sides, units, board, actions, state, RNG, configuration, errors
//! - `rules`: Move generation, combat table, turn engine, minimal-loss filter
//! - `events`: Event records and move notation
//! - `nn`: Observation planes and the flat action codec
//! - `agents`: Random and one-ply greedy baselines
//! - `training`: Matches, recorded games and the self-play runner
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ```
//! use battle_chess::{BattleRules, Side};
//!
//! let rules = BattleRules::standard();
//! let mut state = rules.initial_state().unwrap();
//!
//! let action = rules.legal_actions(&state)[0];
//! let event = rules.apply(&mut state, &action).unwrap();
//!
//! assert_eq!(event.side, Side::North);
//! assert_eq!(state.side_to_move, Side::South);
//! assert_eq!(rules.winner(&state), None);
//! ```

pub mod core;
pub mod rules;
pub mod events;
pub mod nn;
pub mod agents;
pub mod training;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    Unit, UnitType,
    Board, Coord, Slot, Square,
    Action, ActionType,
    RulesetConfig,
    GameResult, GameState,
    GameRng,
    ActionError, BoardError, CodecError, ConfigError,
};

pub use crate::rules::{
    BattleRules, CombatOutcome,
    apply_action, generate_actions, minimal_loss_filter, resolve_melee, winner_if_any,
};

pub use crate::events::{EventDetail, EventRecord};

pub use crate::nn::{ActionCodec, BoardEncoder, EncodedState, StateEncoder};

pub use crate::agents::{Agent, GreedyAgent, RandomAgent};

pub use crate::training::{
    GameRecord, GameStep, Match, SelfPlayConfig, SelfPlayRunner, TrainingError, TrainingSample,
};
