//! Melee combat resolution.
//!
//! A fixed outcome table keyed by attacker and defender types. The first
//! matching rule wins; anything not covered falls through to the default
//! (attacker survives, top defender dies). A bottom defender survives unless
//! a rule says otherwise.

use serde::{Deserialize, Serialize};

use crate::core::{Unit, UnitType};

/// Survival flags for the three units in a melee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub attacker_survives: bool,
    pub top_survives: bool,
    /// Always false when there was no bottom defender.
    pub bottom_survives: bool,
}

impl CombatOutcome {
    const fn new(attacker_survives: bool, top_survives: bool, bottom_survives: bool) -> Self {
        Self {
            attacker_survives,
            top_survives,
            bottom_survives,
        }
    }
}

/// Resolve a melee between `attacker` and the defending stack.
#[must_use]
pub fn resolve_melee(attacker: Unit, top: Unit, bottom: Option<Unit>) -> CombatOutcome {
    use UnitType::*;

    let has_bottom = bottom.is_some();
    let bottom_kind = bottom.map(|u| u.kind);

    // attacker wins and kills only the top defender
    let top_falls = CombatOutcome::new(true, false, has_bottom);
    // attacker and top defender destroy each other
    let mutual = CombatOutcome::new(false, false, has_bottom);
    // attack breaks on the defender
    let repelled = CombatOutcome::new(false, true, has_bottom);

    match (attacker.kind, top.kind) {
        (a, d) if a == d && a != King => mutual,

        (Cavalry, Pawn) => repelled,
        (Cavalry, Archer) if bottom_kind == Some(Archer) => CombatOutcome::new(true, false, false),
        (Cavalry, Archer) => top_falls,
        (Cavalry, HeavyInfantry) => top_falls,

        (HeavyInfantry, Pawn) if bottom_kind == Some(Pawn) => mutual,
        (HeavyInfantry, Pawn) => top_falls,
        (HeavyInfantry, Archer) => top_falls,
        (HeavyInfantry, HeavyInfantry) => mutual,

        (Archer, Cavalry | HeavyInfantry) => repelled,

        (Pawn, Cavalry) => top_falls,

        _ => top_falls,
    }
}
