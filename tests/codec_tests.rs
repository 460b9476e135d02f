//! Integration tests for the flat action codec and observation planes.

use battle_chess::core::{Action, ActionType, Coord, Side, Slot};
use battle_chess::nn::{ActionCodec, BoardEncoder, EncodedState, StateEncoder};
use battle_chess::rules::BattleRules;

#[test]
fn test_every_index_round_trips_on_small_board() {
    let codec = ActionCodec::new(4, 8);
    for index in 0..codec.action_space_size() {
        let action = codec.decode(index).unwrap();
        assert_eq!(codec.encode(&action), Ok(index));
    }
}

#[test]
fn test_legal_actions_round_trip() {
    let rules = BattleRules::standard();
    let state = rules.initial_state().unwrap();
    let codec = ActionCodec::for_config(rules.config());

    for action in rules.legal_actions(&state) {
        let index = codec.encode(&action).unwrap();
        assert_eq!(codec.decode(index).unwrap(), action);
    }
}

#[test]
fn test_mask_agrees_with_legal_indices() {
    let rules = BattleRules::standard();
    let state = rules.initial_state().unwrap();
    let codec = ActionCodec::for_config(rules.config());
    let legal = rules.legal_actions(&state);

    let mask = codec.action_mask(&legal);
    let from_mask: Vec<usize> = mask
        .iter()
        .enumerate()
        .filter(|(_, &m)| m)
        .map(|(i, _)| i)
        .collect();

    let mut indices = codec.legal_indices(&legal);
    indices.sort_unstable();
    assert_eq!(from_mask, indices);
}

#[test]
fn test_field_order_puts_action_type_before_destination() {
    let codec = ActionCodec::new(8, 8);
    let base = Action::new(Coord::new(0, 0), Slot::Top, Coord::new(0, 0), ActionType::Move);
    let melee = Action::new(Coord::new(0, 0), Slot::Top, Coord::new(0, 0), ActionType::Melee);
    let to_col = Action::new(Coord::new(0, 0), Slot::Top, Coord::new(0, 1), ActionType::Move);
    let bottom = Action::new(Coord::new(0, 0), Slot::Bottom, Coord::new(0, 0), ActionType::Move);

    assert_eq!(codec.encode(&base), Ok(0));
    assert_eq!(codec.encode(&to_col), Ok(1));
    assert_eq!(codec.encode(&melee), Ok(64));
    assert_eq!(codec.encode(&bottom), Ok(256));
}

#[test]
fn test_observations_are_mirror_images_at_start() {
    let rules = BattleRules::standard();
    let state = rules.initial_state().unwrap();
    let encoder = BoardEncoder::for_config(rules.config());

    let north = encoder.encode(&state, Side::North);
    let south = encoder.encode(&state, Side::South);

    // Pawn ranks are symmetric, so both sides see identical pawn planes.
    let plane = |e: &EncodedState, p: usize| e.tensor[p * 64..(p + 1) * 64].to_vec();
    assert_eq!(plane(&north, 0), plane(&south, 0));
    assert_eq!(plane(&north, 6), plane(&south, 6));
    // Own pawns sit on row 6 in both frames.
    assert!((0..8).all(|c| north.tensor[6 * 8 + c] == 1.0 && south.tensor[6 * 8 + c] == 1.0));
}
