//! Self-play and recorded games.
//!
//! ## Overview
//!
//! - **Match**: one game in progress with cheap forking
//! - **GameRecord**: a finished game with JSONL, binary and notation export,
//!   replay, and extraction of training samples
//! - **SelfPlayRunner**: plays agents against each other
//!
//! ## Usage
//!
//! ```
//! use battle_chess::agents::{GreedyAgent, RandomAgent};
//! use battle_chess::rules::BattleRules;
//! use battle_chess::training::{SelfPlayConfig, SelfPlayRunner};
//!
//! let runner = SelfPlayRunner::new(
//!     BattleRules::standard(),
//!     SelfPlayConfig::new().with_max_moves(20).with_seed(42),
//! );
//! let record = runner
//!     .play_game(&mut GreedyAgent::new(), &mut RandomAgent::new(42))
//!     .unwrap();
//!
//! let final_state = record.replay().unwrap();
//! assert_eq!(final_state.move_count as usize, record.len());
//! ```

pub mod error;
pub mod game;
pub mod record;
pub mod self_play;

pub use error::TrainingError;
pub use game::Match;
pub use record::{GameRecord, GameStep, TrainingSample};
pub use self_play::{SelfPlayConfig, SelfPlayRunner};
