//! Flat action index codec.
//!
//! Actions map onto `0..rows*cols*2*4*rows*cols` by mixed-radix encoding,
//! most significant field first, in the order
//! `(from_row, from_col, slot, action_type, to_row, to_col)`.
//! The standard 8x8 board gives 32768 indices.
//!
//! ```
//! use battle_chess::core::{Action, ActionType, Coord, Slot};
//! use battle_chess::nn::ActionCodec;
//!
//! let codec = ActionCodec::new(8, 8);
//! let action = Action::new(Coord::new(6, 4), Slot::Top, Coord::new(5, 4), ActionType::Move);
//! let index = codec.encode(&action).unwrap();
//! assert_eq!(codec.decode(index).unwrap(), action);
//! ```

use crate::core::{Action, ActionType, CodecError, Coord, RulesetConfig, Slot};

const SLOTS: usize = Slot::ALL.len();
const ACTION_TYPES: usize = ActionType::ALL.len();

/// Mixed-radix codec for one board geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionCodec {
    rows: usize,
    cols: usize,
}

impl ActionCodec {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub fn for_config(config: &RulesetConfig) -> Self {
        Self::new(config.rows, config.cols)
    }

    fn bases(&self) -> [(&'static str, usize); 6] {
        [
            ("from_row", self.rows),
            ("from_col", self.cols),
            ("slot", SLOTS),
            ("action_type", ACTION_TYPES),
            ("to_row", self.rows),
            ("to_col", self.cols),
        ]
    }

    /// Size of the discrete action space.
    #[must_use]
    pub fn action_space_size(&self) -> usize {
        self.bases().iter().map(|(_, base)| base).product()
    }

    /// Flat index of `action`.
    pub fn encode(&self, action: &Action) -> Result<usize, CodecError> {
        let fields = [
            action.from.row,
            action.from.col,
            action.slot.index(),
            usize::from(action.kind.index()),
            action.to.row,
            action.to.col,
        ];

        let mut index = 0;
        for (value, (field, base)) in fields.into_iter().zip(self.bases()) {
            if value >= base {
                return Err(CodecError::FieldOutOfRange { field, value, base });
            }
            index = index * base + value;
        }
        Ok(index)
    }

    /// Action at flat `index`.
    pub fn decode(&self, index: usize) -> Result<Action, CodecError> {
        let size = self.action_space_size();
        if index >= size {
            return Err(CodecError::IndexOutOfRange { index, size });
        }

        let mut fields = [0usize; 6];
        let mut rest = index;
        for (digit, (_, base)) in fields.iter_mut().zip(self.bases()).rev() {
            *digit = rest % base;
            rest /= base;
        }

        let [from_row, from_col, slot, kind, to_row, to_col] = fields;
        // Every digit is below its base, so both lookups succeed.
        let slot = Slot::from_index(slot).unwrap_or(Slot::Top);
        let kind = ActionType::ALL[kind];
        Ok(Action::new(
            Coord::new(from_row, from_col),
            slot,
            Coord::new(to_row, to_col),
            kind,
        ))
    }

    /// Flat indices of `actions`, in the same order.
    #[must_use]
    pub fn legal_indices(&self, actions: &[Action]) -> Vec<usize> {
        actions.iter().filter_map(|a| self.encode(a).ok()).collect()
    }

    /// Boolean mask over the whole action space, true at each of `actions`.
    #[must_use]
    pub fn action_mask(&self, actions: &[Action]) -> Vec<bool> {
        let mut mask = vec![false; self.action_space_size()];
        for index in self.legal_indices(actions) {
            mask[index] = true;
        }
        mask
    }
}
