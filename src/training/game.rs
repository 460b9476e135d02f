//! A single game in progress.
//!
//! `Match` owns the rules, the live state and the event history. History is
//! an `im::Vector`, so `fork` is cheap and the fork can be played forward
//! independently (speculative evaluation, what-if analysis).

use im::Vector;

use crate::core::{Action, GameResult, GameState};
use crate::events::EventRecord;
use crate::rules::BattleRules;

use super::error::TrainingError;

/// One game: rules, state and everything that happened so far.
#[derive(Clone, Debug)]
pub struct Match {
    rules: BattleRules,
    state: GameState,
    history: Vector<EventRecord>,
}

impl Match {
    /// Start a game in the standard setup.
    pub fn new(rules: BattleRules) -> Result<Self, TrainingError> {
        let state = rules.initial_state()?;
        Ok(Self::from_state(rules, state))
    }

    /// Continue from an arbitrary position with empty history.
    #[must_use]
    pub fn from_state(rules: BattleRules, state: GameState) -> Self {
        Self {
            rules,
            state,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &BattleRules {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    /// Legal actions for the side to move.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.rules.legal_actions(&self.state)
    }

    /// Apply an action and append its event.
    pub fn step(&mut self, action: &Action) -> Result<EventRecord, TrainingError> {
        let ply = self.history.len();
        let event = self
            .rules
            .apply(&mut self.state, action)
            .map_err(|source| TrainingError::Action { ply, source })?;
        self.history.push_back(event);
        Ok(event)
    }

    /// Result derived from the board.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.rules.winner(&self.state)
    }

    /// Independent copy sharing history structure.
    #[must_use]
    pub fn fork(&self) -> Self {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActionType, Coord, Side, Slot};

    #[test]
    fn test_step_records_history() {
        let mut game = Match::new(BattleRules::standard()).unwrap();
        let action = Action::new(Coord::new(6, 3), Slot::Top, Coord::new(5, 3), ActionType::Move);

        let event = game.step(&action).unwrap();
        assert_eq!(event.side, Side::North);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.state().side_to_move, Side::South);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_rejected_step_reports_ply() {
        let mut game = Match::new(BattleRules::standard()).unwrap();
        let bogus = Action::new(Coord::new(4, 4), Slot::Top, Coord::new(3, 4), ActionType::Move);

        let err = game.step(&bogus).unwrap_err();
        assert!(matches!(err, TrainingError::Action { ply: 0, .. }));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_fork_is_independent() {
        let mut game = Match::new(BattleRules::standard()).unwrap();
        let first = game.legal_actions()[0];
        game.step(&first).unwrap();

        let mut fork = game.fork();
        let reply = fork.legal_actions()[0];
        fork.step(&reply).unwrap();

        assert_eq!(game.history().len(), 1);
        assert_eq!(fork.history().len(), 2);
        assert_ne!(game.state(), fork.state());
    }
}
