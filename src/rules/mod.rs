//! Game rules: move generation, combat, turn application and the
//! minimal-loss filter.
//!
//! Control flow for one turn:
//! generator -> minimal-loss filter (if enabled) -> caller picks an action
//! -> `apply` -> victory check. Combat resolution is only reached from
//! `apply` when the action is a melee.

pub mod combat;
pub mod movegen;
pub mod filter;
pub mod engine;

pub use combat::{resolve_melee, CombatOutcome};
pub use movegen::{forward_dirs, generate_actions, is_paired_archer};
pub use filter::{minimal_loss_filter, score_loss, LossScore};
pub use engine::{apply_action, material, winner_if_any, BattleRules};
