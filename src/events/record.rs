//! Structured event records.
//!
//! Every successful `apply` returns one `EventRecord`. The record is the
//! engine's only observability channel: reward shaping, game logs and replay
//! all consume it, and nothing is written anywhere as a side effect.
//!
//! The serialized form keeps the field names consumers rely on:
//!
//! ```json
//! {"side":"north","action_type":"melee","actor":"N",
//!  "from":{"row":7,"col":1},"to":{"row":5,"col":2},"slot":"top",
//!  "move_number":3,
//!  "detail":{"capture":{"defender_top":"B","defender_bottom":"B",
//!            "attacker_survived":true,"top_survived":false,"bottom_survived":false}}}
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionType, Coord, Side, Slot, UnitType};
use crate::rules::CombatOutcome;

/// Type-specific part of an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventDetail {
    /// Plain relocation or stacking.
    Move,

    /// Melee: defender types before combat and who survived.
    Capture {
        defender_top: UnitType,
        defender_bottom: Option<UnitType>,
        attacker_survived: bool,
        top_survived: bool,
        bottom_survived: bool,
    },

    /// Ranged kill of the target's top unit.
    Ranged { killed: UnitType, power_shot: bool },

    /// Queen conversion of a lone enemy unit.
    Convert { converted: UnitType },
}

impl EventDetail {
    /// Capture detail from the combat table result.
    #[must_use]
    pub fn capture(top: UnitType, bottom: Option<UnitType>, outcome: CombatOutcome) -> Self {
        EventDetail::Capture {
            defender_top: top,
            defender_bottom: bottom,
            attacker_survived: outcome.attacker_survives,
            top_survived: outcome.top_survives,
            bottom_survived: outcome.bottom_survives,
        }
    }
}

/// What one applied action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventRecord {
    /// Side that acted.
    pub side: Side,

    pub action_type: ActionType,

    /// Type of the acting unit.
    pub actor: UnitType,

    pub from: Coord,
    pub to: Coord,
    pub slot: Slot,

    /// Move counter after this action (1 for the first action of a game).
    pub move_number: u32,

    pub detail: EventDetail,
}

impl EventRecord {
    /// The action this event was produced by.
    #[must_use]
    pub fn action(&self) -> Action {
        Action::new(self.from, self.slot, self.to, self.action_type)
    }

    /// Units of the opponent removed by this event (ranged kills and
    /// melee defenders that died).
    #[must_use]
    pub fn enemy_losses(&self) -> SmallLosses {
        let mut losses = SmallLosses::new();
        match self.detail {
            EventDetail::Capture {
                defender_top,
                defender_bottom,
                top_survived,
                bottom_survived,
                ..
            } => {
                if !top_survived {
                    losses.push(defender_top);
                }
                if let (Some(bottom), false) = (defender_bottom, bottom_survived) {
                    losses.push(bottom);
                }
            }
            EventDetail::Ranged { killed, .. } => losses.push(killed),
            EventDetail::Move | EventDetail::Convert { .. } => {}
        }
        losses
    }

    /// Whether the acting unit died in this event.
    #[must_use]
    pub fn actor_lost(&self) -> bool {
        matches!(
            self.detail,
            EventDetail::Capture {
                attacker_survived: false,
                ..
            }
        )
    }
}

/// At most two enemy units die per event.
pub type SmallLosses = smallvec::SmallVec<[UnitType; 2]>;
