//! Compact move notation for logs.
//!
//! Squares are named by file letter (column 0 = `a`) and rank counted from
//! North's back rank (`rows - row`), so on the standard board North starts on
//! ranks 1-2 and South on ranks 7-8.
//!
//! | action  | form                   |
//! |---------|------------------------|
//! | move    | `N b1-c3`              |
//! | melee   | `N b1xc3 (P)`          |
//! | ranged  | `B c1~c3 (N PS)`       |
//! | convert | `Q d1>d2 (convert P)`  |

use crate::core::Coord;

use super::record::{EventDetail, EventRecord};

/// Name of a square on a board with `rows` rows.
#[must_use]
pub fn square_name(coord: Coord, rows: usize) -> String {
    let file = char::from(b'a' + (coord.col % 26) as u8);
    format!("{file}{}", rows - coord.row)
}

/// Render one event.
#[must_use]
pub fn event_notation(event: &EventRecord, rows: usize) -> String {
    let from = square_name(event.from, rows);
    let to = square_name(event.to, rows);
    let actor = event.actor.code();

    match event.detail {
        EventDetail::Move => format!("{actor} {from}-{to}"),
        EventDetail::Capture { defender_top, .. } => format!("{actor} {from}x{to} ({defender_top})"),
        EventDetail::Ranged { killed, power_shot } => {
            let flag = if power_shot { " PS" } else { "" };
            format!("{actor} {from}~{to} ({killed}{flag})")
        }
        EventDetail::Convert { converted } => format!("{actor} {from}>{to} (convert {converted})"),
    }
}
