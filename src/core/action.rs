//! Action representation.
//!
//! An action names the acting unit by its square and slot, the square it acts
//! on, and what it does there. Actions are plain values compared by content;
//! the generator produces them and `apply` consumes them.
//!
//! ```
//! use battle_chess::core::{Action, ActionType, Coord, Slot};
//!
//! // North pawn on e2 (row 6, col 4) steps to e3.
//! let step = Action::new(Coord::new(6, 4), Slot::Top, Coord::new(5, 4), ActionType::Move);
//! assert_eq!(step.kind, ActionType::Move);
//! ```

use serde::{Deserialize, Serialize};

use super::board::{Coord, Slot};
use super::error::ActionError;

/// What the acting unit does at the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    /// Relocate to an empty square or onto a friendly single unit.
    Move,
    /// Fight the destination stack.
    Melee,
    /// Shoot the destination top unit without moving.
    Ranged,
    /// Turn the destination unit to the acting side without moving.
    Convert,
}

impl ActionType {
    pub const ALL: [ActionType; 4] = [
        ActionType::Move,
        ActionType::Melee,
        ActionType::Ranged,
        ActionType::Convert,
    ];

    /// Index used in the flat action encoding.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            ActionType::Move => 0,
            ActionType::Melee => 1,
            ActionType::Ranged => 2,
            ActionType::Convert => 3,
        }
    }
}

impl TryFrom<u8> for ActionType {
    type Error = ActionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ActionType::Move),
            1 => Ok(ActionType::Melee),
            2 => Ok(ActionType::Ranged),
            3 => Ok(ActionType::Convert),
            other => Err(ActionError::UnknownActionType(other)),
        }
    }
}

/// A complete game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Square of the acting unit.
    pub from: Coord,

    /// Which unit of a stacked source acts.
    pub slot: Slot,

    /// Destination or target square.
    pub to: Coord,

    pub kind: ActionType,
}

impl Action {
    #[must_use]
    pub const fn new(from: Coord, slot: Slot, to: Coord, kind: ActionType) -> Self {
        Self {
            from,
            slot,
            to,
            kind,
        }
    }

    /// Build an action from raw integer fields in
    /// `(from_row, from_col, slot, to_row, to_col, action_type)` order.
    pub fn from_raw(raw: [usize; 6]) -> Result<Self, ActionError> {
        let [from_row, from_col, slot, to_row, to_col, kind] = raw;
        let slot = Slot::from_index(slot).ok_or(ActionError::IllegalSource)?;
        let kind = u8::try_from(kind)
            .map_err(|_| ActionError::UnknownActionType(u8::MAX))
            .and_then(ActionType::try_from)?;
        Ok(Self::new(
            Coord::new(from_row, from_col),
            slot,
            Coord::new(to_row, to_col),
            kind,
        ))
    }

    /// Raw fields in `(from_row, from_col, slot, to_row, to_col, action_type)` order.
    #[must_use]
    pub fn to_raw(&self) -> [usize; 6] {
        [
            self.from.row,
            self.from.col,
            self.slot.index(),
            self.to.row,
            self.to.col,
            usize::from(self.kind.index()),
        ]
    }

    /// Whether the acting unit stays on its source square.
    #[must_use]
    pub fn keeps_actor_in_place(&self) -> bool {
        matches!(self.kind, ActionType::Ranged | ActionType::Convert)
    }
}
