//! Tensor encodings for learning agents.
//!
//! ## Overview
//!
//! - **Observation**: `StateEncoder` trait and the 12-plane `BoardEncoder`
//! - **Actions**: `ActionCodec` maps actions to a fixed discrete index space
//!   and builds legality masks
//!
//! ## Usage
//!
//! ```
//! use battle_chess::core::Side;
//! use battle_chess::nn::{ActionCodec, BoardEncoder, StateEncoder};
//! use battle_chess::rules::BattleRules;
//!
//! let rules = BattleRules::standard();
//! let state = rules.initial_state().unwrap();
//!
//! let encoder = BoardEncoder::for_config(rules.config());
//! let observation = encoder.encode(&state, Side::North);
//! assert_eq!(observation.shape, vec![12, 8, 8]);
//!
//! let codec = ActionCodec::for_config(rules.config());
//! let mask = codec.action_mask(&rules.legal_actions(&state));
//! assert_eq!(mask.len(), encoder.action_space_size());
//! ```

pub mod codec;
pub mod encoder;
pub mod traits;

pub use codec::ActionCodec;
pub use encoder::{BoardEncoder, StateEncoder, PLANES};
pub use traits::EncodedState;
