//! Self-play loop for generating recorded games.
//!
//! Two agents alternate until one king falls, the side to move has no legal
//! action (it loses), or the move limit is reached (no result).

use crate::agents::Agent;
use crate::core::{GameResult, GameRng, Side, SideMap};
use crate::nn::ActionCodec;
use crate::rules::BattleRules;

use super::error::TrainingError;
use super::game::Match;
use super::record::{GameRecord, GameStep};

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelfPlayConfig {
    /// Maximum actions per game (to prevent endless games).
    pub max_moves: usize,

    /// Base seed; each game of a batch gets a forked seed.
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_moves: 500,
            seed: 0,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum moves per game.
    #[must_use]
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Plays games between two agents and records them.
#[derive(Clone, Debug)]
pub struct SelfPlayRunner {
    rules: BattleRules,
    config: SelfPlayConfig,
}

impl SelfPlayRunner {
    #[must_use]
    pub fn new(rules: BattleRules, config: SelfPlayConfig) -> Self {
        Self { rules, config }
    }

    #[must_use]
    pub fn rules(&self) -> &BattleRules {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play one game from the standard setup.
    pub fn play_game(
        &self,
        north: &mut dyn Agent,
        south: &mut dyn Agent,
    ) -> Result<GameRecord, TrainingError> {
        self.play_seeded(north, south, self.config.seed)
    }

    /// Play `count` games; `make_agents` builds the (north, south) pair from
    /// each game's seed.
    pub fn play_games<F>(&self, count: usize, mut make_agents: F) -> Result<Vec<GameRecord>, TrainingError>
    where
        F: FnMut(u64) -> (Box<dyn Agent>, Box<dyn Agent>),
    {
        let mut rng = GameRng::new(self.config.seed);
        (0..count)
            .map(|_| {
                let seed = rng.fork().seed();
                let (mut north, mut south) = make_agents(seed);
                self.play_seeded(north.as_mut(), south.as_mut(), seed)
            })
            .collect()
    }

    fn play_seeded(
        &self,
        north: &mut dyn Agent,
        south: &mut dyn Agent,
        seed: u64,
    ) -> Result<GameRecord, TrainingError> {
        let codec = ActionCodec::for_config(self.rules.config());
        let mut game = Match::new(self.rules.clone())?;
        let mut record = GameRecord::new(self.rules.config().clone(), seed);
        record.players = SideMap::new(|side| match side {
            Side::North => north.name().to_string(),
            Side::South => south.name().to_string(),
        });

        while record.len() < self.config.max_moves {
            if game.outcome().is_some() {
                break;
            }

            let side = game.state().side_to_move;
            let agent: &mut dyn Agent = match side {
                Side::North => &mut *north,
                Side::South => &mut *south,
            };
            let Some(action) = agent.select(game.rules(), game.state()) else {
                record.outcome = Some(GameResult::Winner(side.opponent()));
                return Ok(record);
            };

            let index = codec.encode(&action)?;
            let event = game.step(&action)?;
            record.push(GameStep { side, index, event });
        }

        record.outcome = game.outcome();
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{GreedyAgent, RandomAgent};

    #[test]
    fn test_self_play_config_default() {
        let config = SelfPlayConfig::default();
        assert_eq!(config.max_moves, 500);
        assert_eq!(config.seed, 0);

        let config = SelfPlayConfig::new().with_max_moves(20).with_seed(9);
        assert_eq!(config.max_moves, 20);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_move_limit_stops_game() {
        let runner = SelfPlayRunner::new(
            BattleRules::standard(),
            SelfPlayConfig::new().with_max_moves(6),
        );
        let record = runner
            .play_game(&mut RandomAgent::new(1), &mut RandomAgent::new(2))
            .unwrap();

        assert_eq!(record.len(), 6);
        assert_eq!(record.outcome, None);
        assert_eq!(record.side_steps(Side::North).count(), 3);
    }

    #[test]
    fn test_record_names_the_agents() {
        let runner = SelfPlayRunner::new(
            BattleRules::standard(),
            SelfPlayConfig::new().with_max_moves(2),
        );
        let record = runner
            .play_game(&mut GreedyAgent::new(), &mut RandomAgent::new(5))
            .unwrap();

        assert_eq!(record.players[Side::North], "greedy");
        assert_eq!(record.players[Side::South], "random");
        assert!(record.to_notation().starts_with("[north \"greedy\"]\n[south \"random\"]\n\n1. "));
    }

    #[test]
    fn test_greedy_game_is_deterministic() {
        let runner = SelfPlayRunner::new(
            BattleRules::standard(),
            SelfPlayConfig::new().with_max_moves(40),
        );
        let a = runner
            .play_game(&mut GreedyAgent::new(), &mut GreedyAgent::new())
            .unwrap();
        let b = runner
            .play_game(&mut GreedyAgent::new(), &mut GreedyAgent::new())
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_play_games_forks_seeds() {
        let runner = SelfPlayRunner::new(
            BattleRules::standard(),
            SelfPlayConfig::new().with_max_moves(4).with_seed(3),
        );
        let records = runner
            .play_games(3, |seed| {
                (
                    Box::new(RandomAgent::new(seed)) as Box<dyn Agent>,
                    Box::new(RandomAgent::new(seed.wrapping_add(1))) as Box<dyn Agent>,
                )
            })
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_ne!(records[0].seed, records[1].seed);
        assert!(records.iter().all(|r| r.len() == 4));
    }
}
