//! Errors raised while playing, exporting or replaying recorded games.

use thiserror::Error;

use crate::core::{ActionError, CodecError, ConfigError};

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("action at ply {ply} rejected: {source}")]
    Action { ply: usize, source: ActionError },
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("encoder shape {found:?} does not match board shape {expected:?}")]
    EncoderShape {
        expected: Vec<usize>,
        found: Vec<usize>,
    },
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("binary encoding failed: {0}")]
    Binary(#[from] bincode::Error),
}
