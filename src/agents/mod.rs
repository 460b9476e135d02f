//! Baseline agents.
//!
//! An agent picks one action for the side to move. Agents never mutate the
//! state they are shown; any lookahead works on copies.

pub mod random;
pub mod greedy;

pub use random::RandomAgent;
pub use greedy::GreedyAgent;

use crate::core::{Action, GameState};
use crate::rules::BattleRules;

/// Chooses actions for one side.
pub trait Agent {
    /// Pick an action for `state.side_to_move`, or `None` if it has none.
    fn select(&mut self, rules: &BattleRules, state: &GameState) -> Option<Action>;

    /// Short name for logs.
    fn name(&self) -> &str;
}
