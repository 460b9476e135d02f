//! Ruleset configuration.
//!
//! Only board geometry and the optional minimal-loss turn rule are
//! configurable. Piece movement and combat are fixed rule tables.
//!
//! The struct is serde-(de)serializable so callers can load it from whatever
//! ruleset format they use; the engine itself never touches files.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Smallest board that fits the standard back rank and two pawn ranks per side.
pub const MIN_ROWS: usize = 4;
pub const MIN_COLS: usize = 8;

/// Largest supported side length.
pub const MAX_SIDE: usize = 16;

/// Complete ruleset configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesetConfig {
    /// Number of board rows.
    pub rows: usize,

    /// Number of board columns.
    pub cols: usize,

    /// Restrict each turn to the actions that lose the least own material.
    #[serde(default)]
    pub minimal_loss_rule: bool,
}

impl Default for RulesetConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            minimal_loss_rule: false,
        }
    }
}

impl RulesetConfig {
    /// Standard 8x8 ruleset with the minimal-loss rule disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board geometry.
    #[must_use]
    pub fn with_board(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Enable or disable the minimal-loss rule.
    #[must_use]
    pub fn with_minimal_loss_rule(mut self, enabled: bool) -> Self {
        self.minimal_loss_rule = enabled;
        self
    }

    /// Check that the geometry can host the standard setup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_ROWS || self.cols < MIN_COLS {
            return Err(ConfigError::BoardTooSmall {
                rows: self.rows,
                cols: self.cols,
                min_rows: MIN_ROWS,
                min_cols: MIN_COLS,
            });
        }
        if self.rows > MAX_SIDE || self.cols > MAX_SIDE {
            return Err(ConfigError::BoardTooLarge {
                rows: self.rows,
                cols: self.cols,
                max: MAX_SIDE,
            });
        }
        Ok(())
    }
}
