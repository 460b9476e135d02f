//! Board observation encoding.
//!
//! `BoardEncoder` produces the 12-plane occupancy tensor: planes 0-5 are the
//! observer's pawn, cavalry, archer, heavy infantry, queen and king; planes
//! 6-11 are the opponent's in the same order. Only the top unit of each
//! square is visible.
//!
//! South's view is rotated half a turn (both rows and columns reversed) so
//! that either side sees its own forward direction as decreasing row.

use crate::core::{Coord, GameState, RulesetConfig, Side, UnitType};
use crate::nn::traits::EncodedState;

use super::codec::ActionCodec;

/// Number of observation planes.
pub const PLANES: usize = 2 * UnitType::ALL.len();

/// Encodes game state into tensors for neural network input.
pub trait StateEncoder: Send + Sync {
    /// Encode the game state from one side's perspective.
    fn encode(&self, state: &GameState, perspective: Side) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions.
    ///
    /// This defines the size of the policy output vector.
    fn action_space_size(&self) -> usize;
}

/// Occupancy-plane encoder for a fixed board geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardEncoder {
    rows: usize,
    cols: usize,
}

impl BoardEncoder {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub fn for_config(config: &RulesetConfig) -> Self {
        Self::new(config.rows, config.cols)
    }

    /// Encoder matching the board of `state`.
    #[must_use]
    pub fn for_state(state: &GameState) -> Self {
        Self::new(state.board.rows(), state.board.cols())
    }

    /// Coordinate as seen by `perspective`, or `None` if `coord` lies outside
    /// this encoder's geometry.
    #[must_use]
    pub fn view_coord(&self, coord: Coord, perspective: Side) -> Option<Coord> {
        if coord.row >= self.rows || coord.col >= self.cols {
            return None;
        }
        Some(match perspective {
            Side::North => coord,
            Side::South => Coord::new(self.rows - 1 - coord.row, self.cols - 1 - coord.col),
        })
    }

    /// Flat tensor index of a plane and board square.
    #[must_use]
    pub fn index(&self, plane: usize, coord: Coord) -> usize {
        (plane * self.rows + coord.row) * self.cols + coord.col
    }
}

impl StateEncoder for BoardEncoder {
    fn encode(&self, state: &GameState, perspective: Side) -> EncodedState {
        let mut encoded = EncodedState::zeros(self.output_shape());

        for (coord, sq) in state.board.squares() {
            let Some(unit) = sq.top() else {
                continue;
            };
            let block = if unit.side == perspective { 0 } else { UnitType::ALL.len() };
            let plane = block + unit.kind.channel();
            // Squares beyond the encoder's board have no plane position.
            let Some(at) = self.view_coord(coord, perspective) else {
                continue;
            };
            encoded.set(self.index(plane, at), 1.0);
        }

        encoded
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![PLANES, self.rows, self.cols]
    }

    fn action_space_size(&self) -> usize {
        ActionCodec::new(self.rows, self.cols).action_space_size()
    }
}
