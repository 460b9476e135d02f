//! One-ply material-greedy agent.
//!
//! Each legal action is applied to a copy of the state and scored by how much
//! it improves the mover's material balance (own minus opponent). The first
//! best-scoring action in generator order wins. Actions that fail to apply
//! rank below everything else.

use crate::core::{Action, GameState};
use crate::rules::{apply_action, material, BattleRules};

use super::Agent;

/// Greedy material agent. No search beyond one ply.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyAgent;

impl GreedyAgent {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Change in (own - opponent) material after `action`, or `None` if the
    /// action cannot be applied.
    #[must_use]
    pub fn score(state: &GameState, action: &Action) -> Option<i64> {
        let side = state.side_to_move;
        let before = material(state);

        let mut next = state.clone();
        apply_action(&mut next, action).ok()?;
        let after = material(&next);

        let balance_before = before[side] - before[side.opponent()];
        let balance_after = after[side] - after[side.opponent()];
        Some(balance_after - balance_before)
    }
}

impl Agent for GreedyAgent {
    fn select(&mut self, rules: &BattleRules, state: &GameState) -> Option<Action> {
        let mut best: Option<(Option<i64>, Action)> = None;
        for action in rules.legal_actions(state) {
            let score = Self::score(state, &action);
            match best {
                Some((top, _)) if score <= top => {}
                _ => best = Some((score, action)),
            }
        }
        best.map(|(_, action)| action)
    }

    fn name(&self) -> &str {
        "greedy"
    }
}
