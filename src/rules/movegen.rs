//! Structural move generation.
//!
//! Enumerates every action available to the side to move, slot by slot,
//! before the optional minimal-loss filter is applied.
//!
//! ## Piece rules
//!
//! - Every unit steps one square in its three forward directions: a `Move`
//!   onto an empty or friendly-stackable square, a `Melee` against an enemy top.
//! - Cavalry may continue with a second forward step from any first square
//!   it could move onto: empty, or a lone friendly unit (the charge).
//! - Archers additionally shoot up to two squares forward (`Ranged`); the
//!   square in between must have no top unit. A paired archer (the other slot
//!   of its square holds a friendly archer) may also shoot cavalry and heavy
//!   infantry.
//! - Queens convert any adjacent lone enemy unit that is not a king or queen.
//!
//! The result is deduplicated and ordered by generation order (row-major
//! source, top slot first).

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{Action, ActionType, Board, Coord, GameState, Side, Slot, Square, Unit, UnitType};

/// Three forward directions for a side as (row, col) deltas.
#[must_use]
pub fn forward_dirs(side: Side) -> [(isize, isize); 3] {
    let dr = side.forward_row_step();
    [(dr, -1), (dr, 0), (dr, 1)]
}

const ADJACENT: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Whether the unit in `slot` at `sq` has a friendly archer in the other slot.
#[must_use]
pub fn is_paired_archer(sq: &Square, slot: Slot) -> bool {
    match (sq.get(slot), sq.get(slot.other())) {
        (Some(unit), Some(partner)) => {
            unit.kind == UnitType::Archer && partner.is(UnitType::Archer, unit.side)
        }
        _ => false,
    }
}

/// Move or melee onto `to`, or nothing if the square is blocked by friends.
fn step_action(board: &Board, side: Side, from: Coord, slot: Slot, to: Coord) -> Option<Action> {
    let sq = board.square(to)?;
    if sq.accepts(side) {
        Some(Action::new(from, slot, to, ActionType::Move))
    } else if sq.enemy_top(side).is_some() {
        Some(Action::new(from, slot, to, ActionType::Melee))
    } else {
        None
    }
}

fn forward_squares(board: &Board, side: Side, from: Coord) -> SmallVec<[Coord; 3]> {
    forward_dirs(side)
        .iter()
        .filter_map(|&(dr, dc)| board.offset(from, dr, dc))
        .collect()
}

fn push_steps(board: &Board, side: Side, from: Coord, slot: Slot, out: &mut Vec<Action>) {
    for to in forward_squares(board, side, from) {
        out.extend(step_action(board, side, from, slot, to));
    }
}

fn push_charges(board: &Board, side: Side, from: Coord, slot: Slot, out: &mut Vec<Action>) {
    for first in forward_squares(board, side, from) {
        out.extend(step_action(board, side, from, slot, first));

        let through = board.square(first).is_some_and(|sq| sq.accepts(side));
        if !through {
            continue;
        }
        for second in forward_squares(board, side, first) {
            out.extend(step_action(board, side, from, slot, second));
        }
    }
}

fn push_shots(board: &Board, unit: Unit, from: Coord, slot: Slot, out: &mut Vec<Action>) {
    let paired = board.square(from).is_some_and(|sq| is_paired_archer(sq, slot));

    for (dr, dc) in forward_dirs(unit.side) {
        for distance in 1..=2isize {
            let Some(to) = board.offset(from, dr * distance, dc * distance) else {
                continue;
            };
            if distance == 2 {
                let blocked = board
                    .offset(from, dr, dc)
                    .and_then(|mid| board.square(mid))
                    .map_or(true, |mid| !mid.is_empty());
                if blocked {
                    continue;
                }
            }
            let Some(target) = board.square(to).and_then(|sq| sq.enemy_top(unit.side)) else {
                continue;
            };
            let reachable = target.kind.is_normal_ranged_target()
                || (paired && target.kind.is_power_shot_target());
            if reachable {
                out.push(Action::new(from, slot, to, ActionType::Ranged));
            }
        }
    }
}

fn push_conversions(board: &Board, side: Side, from: Coord, slot: Slot, out: &mut Vec<Action>) {
    for (dr, dc) in ADJACENT {
        let Some(to) = board.offset(from, dr, dc) else {
            continue;
        };
        let Some(sq) = board.square(to) else {
            continue;
        };
        let convertible = sq.bottom().is_none()
            && sq
                .enemy_top(side)
                .is_some_and(|target| target.kind.is_convertible());
        if convertible {
            out.push(Action::new(from, slot, to, ActionType::Convert));
        }
    }
}

/// All structurally legal actions for `state.side_to_move`.
#[must_use]
pub fn generate_actions(state: &GameState) -> Vec<Action> {
    let board = &state.board;
    let side = state.side_to_move;
    let mut actions = Vec::new();

    for (from, sq) in board.squares() {
        for (slot, unit) in sq.units() {
            if unit.side != side {
                continue;
            }
            match unit.kind {
                UnitType::Cavalry => push_charges(board, side, from, slot, &mut actions),
                UnitType::Archer => {
                    push_steps(board, side, from, slot, &mut actions);
                    push_shots(board, unit, from, slot, &mut actions);
                }
                UnitType::Queen => {
                    push_steps(board, side, from, slot, &mut actions);
                    push_conversions(board, side, from, slot, &mut actions);
                }
                UnitType::Pawn | UnitType::HeavyInfantry | UnitType::King => {
                    push_steps(board, side, from, slot, &mut actions);
                }
            }
        }
    }

    let mut seen = FxHashSet::default();
    actions.retain(|a| seen.insert(*a));
    actions
}
