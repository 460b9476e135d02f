//! Turn application and victory detection.
//!
//! `BattleRules` bundles a ruleset with the operations callers need:
//! - What actions are legal (generator plus the optional minimal-loss filter)
//! - How an action modifies state
//! - Whether the game is over
//!
//! `apply` validates everything before touching the board, so a failed
//! action leaves the state exactly as it was.

use crate::core::{
    Action, ActionError, ActionType, ConfigError, Coord, GameResult, GameState, RulesetConfig,
    Side, SideMap, Slot, Unit,
};
use crate::events::{EventDetail, EventRecord};

use super::combat::resolve_melee;
use super::filter::minimal_loss_filter;
use super::movegen::{generate_actions, is_paired_archer};

/// Rules for one configured ruleset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BattleRules {
    config: RulesetConfig,
}

impl BattleRules {
    /// Rules for a validated configuration.
    pub fn new(config: RulesetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Standard 8x8 rules without the minimal-loss rule.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(&self) -> &RulesetConfig {
        &self.config
    }

    /// Fresh game in the standard setup.
    pub fn initial_state(&self) -> Result<GameState, ConfigError> {
        GameState::standard(&self.config)
    }

    /// Legal actions for the side to move, filtered by the minimal-loss rule
    /// when the ruleset enables it. Empty if the side cannot act.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        let actions = generate_actions(state);
        if self.config.minimal_loss_rule {
            minimal_loss_filter(state, actions)
        } else {
            actions
        }
    }

    /// Structurally legal actions, ignoring the minimal-loss rule.
    #[must_use]
    pub fn legal_actions_unfiltered(&self, state: &GameState) -> Vec<Action> {
        generate_actions(state)
    }

    /// Apply `action` for the side to move.
    pub fn apply(&self, state: &mut GameState, action: &Action) -> Result<EventRecord, ActionError> {
        apply_action(state, action)
    }

    /// Game result derived from the board, or `None` while both kings live.
    #[must_use]
    pub fn winner(&self, state: &GameState) -> Option<GameResult> {
        winner_if_any(state)
    }
}

/// Scan the board for kings.
///
/// Exactly one side with a king wins; no kings at all is a draw. The advisory
/// `GameState::outcome` is never consulted.
#[must_use]
pub fn winner_if_any(state: &GameState) -> Option<GameResult> {
    let north = state.board.has_king(Side::North);
    let south = state.board.has_king(Side::South);
    match (north, south) {
        (true, true) => None,
        (true, false) => Some(GameResult::Winner(Side::North)),
        (false, true) => Some(GameResult::Winner(Side::South)),
        (false, false) => Some(GameResult::Draw),
    }
}

/// Material of both sides.
#[must_use]
pub fn material(state: &GameState) -> SideMap<i64> {
    SideMap::new(|side| state.board.material(side))
}

/// Apply one action and return what happened.
///
/// On success the side to move flips, the move counter increments and the
/// advisory outcome is refreshed. On failure nothing changes.
pub fn apply_action(state: &mut GameState, action: &Action) -> Result<EventRecord, ActionError> {
    let side = state.side_to_move;
    if action.from == action.to {
        return Err(self_target_error(action.kind));
    }
    let source = state.board.get(action.from)?;
    let actor = source
        .get(action.slot)
        .filter(|u| u.side == side)
        .ok_or(ActionError::IllegalSource)?;
    let paired = is_paired_archer(source, action.slot);
    let target = *state.board.get(action.to)?;

    let detail = match action.kind {
        ActionType::Move => {
            if !target.accepts(side) {
                return Err(ActionError::IllegalDestination);
            }
            let unit = state.board.remove_unit(action.from, action.slot)?;
            state.board.add_unit(action.to, unit)?;
            EventDetail::Move
        }
        ActionType::Melee => {
            let top = target.enemy_top(side).ok_or(ActionError::IllegalCapture)?;
            let bottom = target.bottom();
            let outcome = resolve_melee(actor, top, bottom);

            let attacker = state.board.remove_unit(action.from, action.slot)?;
            clear_square(state, action.to, target.len())?;

            // Survivors refill the square top first; a lone surviving bottom
            // defender ends up on top.
            let survivors = [
                outcome.top_survives.then_some(top),
                outcome.attacker_survives.then_some(attacker),
                bottom.filter(|_| outcome.bottom_survives),
            ];
            for unit in survivors.into_iter().flatten() {
                state.board.add_unit(action.to, unit)?;
            }
            EventDetail::capture(top.kind, bottom.map(|u| u.kind), outcome)
        }
        ActionType::Ranged => {
            let killed = target.enemy_top(side).ok_or(ActionError::IllegalTarget)?;
            state.board.remove_unit(action.to, Slot::Top)?;
            EventDetail::Ranged {
                killed: killed.kind,
                power_shot: paired && killed.kind.is_power_shot_target(),
            }
        }
        ActionType::Convert => {
            let converted = target
                .enemy_top(side)
                .filter(|_| target.bottom().is_none())
                .ok_or(ActionError::IllegalConvertTarget)?;
            state.board.remove_unit(action.to, Slot::Top)?;
            state.board.add_unit(action.to, converted.converted_to(side))?;
            EventDetail::Convert {
                converted: converted.kind,
            }
        }
    };

    if action.keeps_actor_in_place() {
        return_to_source(state, action.from, action.slot, actor)?;
    }

    state.side_to_move = side.opponent();
    state.move_count += 1;
    state.outcome = winner_if_any(state);

    Ok(EventRecord {
        side,
        action_type: action.kind,
        actor: actor.kind,
        from: action.from,
        to: action.to,
        slot: action.slot,
        move_number: state.move_count,
        detail,
    })
}

fn self_target_error(kind: ActionType) -> ActionError {
    match kind {
        ActionType::Move => ActionError::IllegalDestination,
        ActionType::Melee => ActionError::IllegalCapture,
        ActionType::Ranged => ActionError::IllegalTarget,
        ActionType::Convert => ActionError::IllegalConvertTarget,
    }
}

fn clear_square(state: &mut GameState, at: Coord, count: usize) -> Result<(), ActionError> {
    for _ in 0..count {
        state.board.remove_unit(at, Slot::Top)?;
    }
    Ok(())
}

// Ranged and convert actors lift off their square and land back in the
// first free slot, so a top archer may come back as the bottom unit.
fn return_to_source(
    state: &mut GameState,
    from: Coord,
    slot: Slot,
    actor: Unit,
) -> Result<(), ActionError> {
    let lifted = state.board.remove_unit(from, slot)?;
    debug_assert_eq!(lifted, actor);
    state
        .board
        .add_unit(from, lifted)
        .map(|_| ())
        .map_err(|_| ActionError::OverfullSource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UnitType;

    fn place(state: &mut GameState, row: usize, col: usize, kind: UnitType, side: Side) {
        state.board.add_unit(Coord::new(row, col), Unit::new(kind, side)).unwrap();
    }

    fn action(from: (usize, usize), slot: Slot, to: (usize, usize), kind: ActionType) -> Action {
        Action::new(Coord::new(from.0, from.1), slot, Coord::new(to.0, to.1), kind)
    }

    fn kings(state: &mut GameState) {
        place(state, 7, 7, UnitType::King, Side::North);
        place(state, 0, 0, UnitType::King, Side::South);
    }

    #[test]
    fn test_move_flips_turn() {
        let rules = BattleRules::standard();
        let mut state = rules.initial_state().unwrap();
        let event = rules
            .apply(&mut state, &action((6, 4), Slot::Top, (5, 4), ActionType::Move))
            .unwrap();

        assert_eq!(event.detail, EventDetail::Move);
        assert_eq!(event.actor, UnitType::Pawn);
        assert_eq!(event.move_number, 1);
        assert_eq!(state.side_to_move, Side::South);
        assert_eq!(state.move_count, 1);
        assert!(state.board.get(Coord::new(6, 4)).unwrap().is_empty());
    }

    #[test]
    fn test_move_onto_friend_stacks_below() {
        let rules = BattleRules::standard();
        let mut state = rules.initial_state().unwrap();
        rules
            .apply(&mut state, &action((7, 4), Slot::Top, (6, 4), ActionType::Move))
            .unwrap();

        let sq = state.board.get(Coord::new(6, 4)).unwrap();
        assert_eq!(sq.top().map(|u| u.kind), Some(UnitType::Pawn));
        assert_eq!(sq.bottom().map(|u| u.kind), Some(UnitType::King));
    }

    #[test]
    fn test_wrong_side_is_illegal_source() {
        let rules = BattleRules::standard();
        let mut state = rules.initial_state().unwrap();
        let before = state.clone();

        let err = rules
            .apply(&mut state, &action((1, 0), Slot::Top, (2, 0), ActionType::Move))
            .unwrap_err();
        assert_eq!(err, ActionError::IllegalSource);
        assert_eq!(state, before);

        let err = rules
            .apply(&mut state, &action((6, 0), Slot::Bottom, (5, 0), ActionType::Move))
            .unwrap_err();
        assert_eq!(err, ActionError::IllegalSource);
    }

    #[test]
    fn test_illegal_destination_leaves_state_unchanged() {
        let mut state = GameState::empty(8, 8);
        kings(&mut state);
        place(&mut state, 4, 4, UnitType::Pawn, Side::North);
        place(&mut state, 3, 4, UnitType::Pawn, Side::South);
        let before = state.clone();

        let err = apply_action(&mut state, &action((4, 4), Slot::Top, (3, 4), ActionType::Move))
            .unwrap_err();
        assert_eq!(err, ActionError::IllegalDestination);
        assert_eq!(state, before);
    }

    #[test]
    fn test_melee_against_friend_is_illegal_capture() {
        let mut state = GameState::empty(8, 8);
        kings(&mut state);
        place(&mut state, 4, 4, UnitType::Pawn, Side::North);
        place(&mut state, 3, 4, UnitType::Pawn, Side::North);

        let err = apply_action(&mut state, &action((4, 4), Slot::Top, (3, 4), ActionType::Melee))
            .unwrap_err();
        assert_eq!(err, ActionError::IllegalCapture);
    }

    #[test]
    fn test_melee_attacker_takes_square() {
        let mut state = GameState::empty(8, 8);
        kings(&mut state);
        place(&mut state, 4, 4, UnitType::Pawn, Side::North);
        place(&mut state, 3, 4, UnitType::Archer, Side::South);

        let event =
            apply_action(&mut state, &action((4, 4), Slot::Top, (3, 4), ActionType::Melee)).unwrap();

        assert!(matches!(
            event.detail,
            EventDetail::Capture {
                defender_top: UnitType::Archer,
                attacker_survived: true,
                top_survived: false,
                ..
            }
        ));
        let sq = state.board.get(Coord::new(3, 4)).unwrap();
        assert_eq!(sq.top(), Some(Unit::new(UnitType::Pawn, Side::North)));
        assert!(state.board.get(Coord::new(4, 4)).unwrap().is_empty());
    }

    #[test]
    fn test_melee_repelled_attacker_dies() {
        let mut state = GameState::empty(8, 8);
        kings(&mut state);
        place(&mut state, 4, 4, UnitType::Cavalry, Side::North);
        place(&mut state, 3, 4, UnitType::Pawn, Side::South);

        apply_action(&mut state, &action((4, 4), Slot::Top, (3, 4), ActionType::Melee)).unwrap();

        assert!(state.board.get(Coord::new(4, 4)).unwrap().is_empty());
        let sq = state.board.get(Coord::new(3, 4)).unwrap();
        assert_eq!(sq.top(), Some(Unit::new(UnitType::Pawn, Side::South)));
        assert_eq!(sq.len(), 1);
    }

    #[test]
    fn test_melee_surviving_bottom_collapses_up() {
        let mut state = GameState::empty(8, 8);
        kings(&mut state);
        place(&mut state, 4, 4, UnitType::Archer, Side::North);
        place(&mut state, 3, 4, UnitType::Archer, Side::South);
        place(&mut state, 3, 4, UnitType::Pawn, Side::South);

        apply_action(&mut state, &action((4, 4), Slot::Top, (3, 4), ActionType::Melee)).unwrap();

        let sq = state.board.get(Coord::new(3, 4)).unwrap();
        assert_eq!(sq.top(), Some(Unit::new(UnitType::Pawn, Side::South)));
        assert_eq!(sq.bottom(), None);
    }

    #[test]
    fn test_ranged_keeps_archer_in_place() {
        let mut state = GameState::empty(8, 8);
        kings(&mut state);
        place(&mut state, 5, 3, UnitType::Archer, Side::North);
        place(&mut state, 3, 3, UnitType::Queen, Side::South);
        place(&mut state, 3, 3, UnitType::Pawn, Side::South);

        let event =
            apply_action(&mut state, &action((5, 3), Slot::Top, (3, 3), ActionType::Ranged)).unwrap();

        assert_eq!(
            event.detail,
            EventDetail::Ranged {
                killed: UnitType::Queen,
                power_shot: false
            }
        );
        assert_eq!(
            state.board.get(Coord::new(5, 3)).unwrap().top(),
            Some(Unit::new(UnitType::Archer, Side::North))
        );
        assert_eq!(
            state.board.get(Coord::new(3, 3)).unwrap().top(),
            Some(Unit::new(UnitType::Pawn, Side::South))
        );
    }

    #[test]
    fn test_power_shot_flag() {
        let mut state = GameState::empty(8, 8);
        kings(&mut state);
        place(&mut state, 5, 3, UnitType::Archer, Side::North);
        place(&mut state, 5, 3, UnitType::Archer, Side::North);
        place(&mut state, 4, 3, UnitType::Cavalry, Side::South);

        let event =
            apply_action(&mut state, &action((5, 3), Slot::Bottom, (4, 3), ActionType::Ranged))
                .unwrap();

        assert_eq!(
            event.detail,
            EventDetail::Ranged {
                killed: UnitType::Cavalry,
                power_shot: true
            }
        );
        assert_eq!(state.board.get(Coord::new(5, 3)).unwrap().len(), 2);
        assert!(state.board.get(Coord::new(4, 3)).unwrap().is_empty());
    }

    #[test]
    fn test_ranged_at_empty_square_is_illegal_target() {
        let mut state = GameState::empty(8, 8);
        kings(&mut state);
        place(&mut state, 5, 3, UnitType::Archer, Side::North);

        let err = apply_action(&mut state, &action((5, 3), Slot::Top, (4, 3), ActionType::Ranged))
            .unwrap_err();
        assert_eq!(err, ActionError::IllegalTarget);
    }

    #[test]
    fn test_convert_flips_side() {
        let mut state = GameState::empty(8, 8);
        kings(&mut state);
        place(&mut state, 4, 4, UnitType::Queen, Side::North);
        place(&mut state, 5, 5, UnitType::HeavyInfantry, Side::South);

        let event =
            apply_action(&mut state, &action((4, 4), Slot::Top, (5, 5), ActionType::Convert))
                .unwrap();

        assert_eq!(
            event.detail,
            EventDetail::Convert {
                converted: UnitType::HeavyInfantry
            }
        );
        assert_eq!(
            state.board.get(Coord::new(5, 5)).unwrap().top(),
            Some(Unit::new(UnitType::HeavyInfantry, Side::North))
        );
        assert_eq!(
            state.board.get(Coord::new(4, 4)).unwrap().top(),
            Some(Unit::new(UnitType::Queen, Side::North))
        );
    }

    #[test]
    fn test_convert_stacked_target_fails() {
        let mut state = GameState::empty(8, 8);
        kings(&mut state);
        place(&mut state, 4, 4, UnitType::Queen, Side::North);
        place(&mut state, 3, 4, UnitType::Pawn, Side::South);
        place(&mut state, 3, 4, UnitType::Pawn, Side::South);

        let err = apply_action(&mut state, &action((4, 4), Slot::Top, (3, 4), ActionType::Convert))
            .unwrap_err();
        assert_eq!(err, ActionError::IllegalConvertTarget);
    }

    #[test]
    fn test_acting_on_own_square_fails() {
        let mut state = GameState::empty(8, 8);
        kings(&mut state);
        place(&mut state, 4, 4, UnitType::Archer, Side::South);
        place(&mut state, 4, 4, UnitType::Archer, Side::North);
        let before = state.clone();

        let err = apply_action(&mut state, &action((4, 4), Slot::Bottom, (4, 4), ActionType::Ranged))
            .unwrap_err();
        assert_eq!(err, ActionError::IllegalTarget);
        assert_eq!(state, before);
    }

    #[test]
    fn test_off_board_is_board_error() {
        let mut state = GameState::empty(8, 8);
        let err = apply_action(&mut state, &action((9, 9), Slot::Top, (8, 8), ActionType::Move))
            .unwrap_err();
        assert!(matches!(err, ActionError::Board(_)));
    }

    #[test]
    fn test_king_capture_sets_outcome() {
        let mut state = GameState::empty(8, 8);
        place(&mut state, 7, 7, UnitType::King, Side::North);
        place(&mut state, 3, 4, UnitType::King, Side::South);
        place(&mut state, 4, 4, UnitType::Pawn, Side::North);

        apply_action(&mut state, &action((4, 4), Slot::Top, (3, 4), ActionType::Melee)).unwrap();

        assert_eq!(winner_if_any(&state), Some(GameResult::Winner(Side::North)));
        assert_eq!(state.outcome, Some(GameResult::Winner(Side::North)));
    }

    #[test]
    fn test_winner_if_any() {
        let mut state = GameState::empty(8, 8);
        assert_eq!(winner_if_any(&state), Some(GameResult::Draw));

        place(&mut state, 0, 0, UnitType::King, Side::South);
        assert_eq!(winner_if_any(&state), Some(GameResult::Winner(Side::South)));

        place(&mut state, 7, 7, UnitType::King, Side::North);
        assert_eq!(winner_if_any(&state), None);
    }

    #[test]
    fn test_winner_ignores_advisory_flag() {
        let mut state = BattleRules::standard().initial_state().unwrap();
        state.outcome = Some(GameResult::Draw);
        assert_eq!(winner_if_any(&state), None);
    }

    #[test]
    fn test_material_map() {
        let state = BattleRules::standard().initial_state().unwrap();
        let totals = material(&state);
        assert_eq!(totals[Side::North], totals[Side::South]);
    }

    #[test]
    fn test_new_rejects_bad_geometry() {
        assert!(BattleRules::new(RulesetConfig::new().with_board(2, 2)).is_err());
        assert!(BattleRules::new(RulesetConfig::new().with_board(10, 12)).is_ok());
    }
}
