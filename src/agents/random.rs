//! Uniform random agent.

use crate::core::{Action, GameRng, GameState};
use crate::rules::BattleRules;

use super::Agent;

/// Picks uniformly among the legal actions.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select(&mut self, rules: &BattleRules, state: &GameState) -> Option<Action> {
        let legal = rules.legal_actions(state);
        self.rng.choose(&legal).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}
