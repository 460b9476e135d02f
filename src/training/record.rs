//! Recorded games and training samples.
//!
//! A `GameRecord` captures a complete game from self-play:
//! - The ruleset and seed it was played with, and which agents played
//! - Every action as a flat index plus the event it produced
//! - The final outcome, if the game reached one
//!
//! Records export to JSON lines (one event per line), a compact binary form
//! and a readable move list, and can be replayed to rebuild the final state.

use serde::{Deserialize, Serialize};

use crate::core::{GameResult, GameState, RulesetConfig, Side, SideMap};
use crate::events::{event_notation, EventRecord};
use crate::nn::{ActionCodec, EncodedState, StateEncoder, PLANES};
use crate::rules::BattleRules;

use super::error::TrainingError;
use super::game::Match;

/// One applied action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStep {
    pub side: Side,

    /// Flat action index under the record's geometry.
    pub index: usize,

    pub event: EventRecord,
}

/// A complete recorded game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub config: RulesetConfig,

    /// Seed the game was played with.
    pub seed: u64,

    /// Agent name per side; empty for hand-built records.
    pub players: SideMap<String>,

    pub steps: Vec<GameStep>,

    /// `None` if the game stopped at the move limit.
    pub outcome: Option<GameResult>,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    move_no: f64,
    agent: Side,
    index: usize,
    #[serde(flatten)]
    event: &'a EventRecord,
}

impl GameRecord {
    #[must_use]
    pub fn new(config: RulesetConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            players: SideMap::default(),
            steps: Vec::new(),
            outcome: None,
        }
    }

    pub fn push(&mut self, step: GameStep) {
        self.steps.push(step);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps taken by one side.
    pub fn side_steps(&self, side: Side) -> impl Iterator<Item = &GameStep> {
        self.steps.iter().filter(move |s| s.side == side)
    }

    /// Final reward per side: 1 for a win, 0 for a loss, 0.5 for a draw or
    /// an unfinished game.
    #[must_use]
    pub fn outcome_values(&self) -> SideMap<f64> {
        SideMap::new(|side| match self.outcome {
            Some(GameResult::Winner(winner)) if winner == side => 1.0,
            Some(GameResult::Winner(_)) => 0.0,
            Some(GameResult::Draw) | None => 0.5,
        })
    }

    /// Number of opponent units each side destroyed.
    #[must_use]
    pub fn kills(&self) -> SideMap<usize> {
        let mut kills = SideMap::with_value(0);
        for step in &self.steps {
            kills[step.side] += step.event.enemy_losses().len();
        }
        kills
    }

    /// One JSON object per event. `move_no` counts full moves; South's half
    /// of move `n` is `n + 0.5`.
    pub fn to_jsonl(&self) -> Result<String, TrainingError> {
        let mut out = String::new();
        for (ply, step) in self.steps.iter().enumerate() {
            let half = if ply % 2 == 1 { 0.5 } else { 0.0 };
            let line = JsonLine {
                move_no: (ply / 2 + 1) as f64 + half,
                agent: step.side,
                index: step.index,
                event: &step.event,
            };
            out.push_str(&serde_json::to_string(&line)?);
            out.push('\n');
        }
        Ok(out)
    }

    /// Compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TrainingError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TrainingError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Numbered move list, one full move per line, with a result line.
    /// Known player names come first as `[north "greedy"]` tags.
    #[must_use]
    pub fn to_notation(&self) -> String {
        let rows = self.config.rows;
        let mut out = String::new();
        for (side, name) in self.players.iter().filter(|(_, name)| !name.is_empty()) {
            out.push_str(&format!("[{side} \"{name}\"]\n"));
        }
        if !out.is_empty() {
            out.push('\n');
        }
        for (n, pair) in self.steps.chunks(2).enumerate() {
            out.push_str(&format!("{}.", n + 1));
            for step in pair {
                out.push(' ');
                out.push_str(&event_notation(&step.event, rows));
            }
            out.push('\n');
        }
        let result = self.outcome.map_or("unfinished", |r| r.name());
        out.push_str(&format!("Result: {result}\n"));
        out
    }

    /// Re-apply every recorded action from the standard setup.
    pub fn replay(&self) -> Result<GameState, TrainingError> {
        let mut game = Match::new(BattleRules::new(self.config.clone())?)?;
        for step in &self.steps {
            game.step(&step.event.action())?;
        }
        Ok(game.state().clone())
    }

    /// Observation, action index and final value for every step, each from
    /// the mover's perspective.
    ///
    /// Fails with `EncoderShape` if `encoder` was built for another board.
    pub fn training_samples(
        &self,
        encoder: &dyn StateEncoder,
    ) -> Result<Vec<TrainingSample>, TrainingError> {
        let expected = vec![PLANES, self.config.rows, self.config.cols];
        let found = encoder.output_shape();
        if found != expected {
            return Err(TrainingError::EncoderShape { expected, found });
        }

        let values = self.outcome_values();
        let codec = ActionCodec::for_config(&self.config);
        let mut game = Match::new(BattleRules::new(self.config.clone())?)?;
        let mut samples = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let action = step.event.action();
            samples.push(TrainingSample {
                state: encoder.encode(game.state(), step.side),
                action_index: codec.encode(&action)?,
                value: values[step.side] as f32,
                side: step.side,
            });
            game.step(&action)?;
        }
        Ok(samples)
    }
}

/// A single training sample extracted from a record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Observation before the action.
    pub state: EncodedState,

    /// Flat index of the action taken.
    pub action_index: usize,

    /// Final value for the acting side.
    pub value: f32,

    pub side: Side,
}
