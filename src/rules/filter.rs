//! Minimal-loss turn rule.
//!
//! When enabled, the side to move may only play the actions that cost it the
//! least material this turn. Each candidate is simulated on its own copy of
//! the state. Candidates whose simulation fails are left out of the
//! comparison; if none can be evaluated the input passes through.
//!
//! The rule only binds when every evaluable action costs something: if some
//! action loses nothing (or gains), the full set stays legal.

use crate::core::{Action, GameState};

use super::engine::{apply_action, material};

/// Own and opponent material lost by one candidate action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LossScore {
    pub own_loss: i64,
    pub opp_loss: i64,
}

/// Simulate `action` on a copy and measure what each side loses.
///
/// Returns `None` if the action cannot be applied.
#[must_use]
pub fn score_loss(state: &GameState, action: &Action) -> Option<LossScore> {
    let side = state.side_to_move;
    let before = material(state);

    let mut next = state.clone();
    apply_action(&mut next, action).ok()?;
    let after = material(&next);

    Some(LossScore {
        own_loss: before[side] - after[side],
        opp_loss: before[side.opponent()] - after[side.opponent()],
    })
}

/// Restrict `actions` to those with the smallest own loss.
///
/// The surviving actions are ordered by opponent loss, largest first; ties
/// keep generator order.
#[must_use]
pub fn minimal_loss_filter(state: &GameState, actions: Vec<Action>) -> Vec<Action> {
    let scored: Vec<(LossScore, Action)> = actions
        .iter()
        .filter_map(|a| score_loss(state, a).map(|s| (s, *a)))
        .collect();

    let Some(min_own) = scored.iter().map(|(s, _)| s.own_loss).min() else {
        return actions;
    };
    if min_own <= 0 {
        return actions;
    }

    let mut best: Vec<(LossScore, Action)> = scored
        .into_iter()
        .filter(|(s, _)| s.own_loss == min_own)
        .collect();
    best.sort_by(|(a, _), (b, _)| b.opp_loss.cmp(&a.opp_loss));
    best.into_iter().map(|(_, a)| a).collect()
}
