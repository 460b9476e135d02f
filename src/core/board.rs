//! Board, squares and the two-slot stacking model.
//!
//! ## Stacking
//!
//! Each square holds at most two units: `top` and `bottom`. A square never
//! has a bottom unit without a top unit. Removing the top unit promotes the
//! bottom one, so the invariant is kept in one place.
//!
//! All mutation goes through `Board::add_unit` and `Board::remove_unit`.
//!
//! ## Layout
//!
//! Squares live in a single flat arena indexed row-major. Copying a `Board`
//! copies every square; there is no shared substructure.

use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::side::Side;
use super::unit::{Unit, UnitType};

/// Position within a two-unit stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Top,
    Bottom,
}

impl Slot {
    /// Both slots, top first.
    pub const ALL: [Slot; 2] = [Slot::Top, Slot::Bottom];

    /// Index used in the flat action encoding (top = 0, bottom = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Slot::Top => 0,
            Slot::Bottom => 1,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Slot::Top),
            1 => Some(Slot::Bottom),
            _ => None,
        }
    }

    /// The other slot of the same square.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Slot::Top => Slot::Bottom,
            Slot::Bottom => Slot::Top,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Top => f.write_str("top"),
            Slot::Bottom => f.write_str("bottom"),
        }
    }
}

/// A board coordinate. Row 0 is South's back rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One board square holding up to two units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    top: Option<Unit>,
    bottom: Option<Unit>,
}

impl Square {
    /// The visible unit, if any.
    #[must_use]
    pub fn top(&self) -> Option<Unit> {
        self.top
    }

    /// The secondary occupant, if any.
    #[must_use]
    pub fn bottom(&self) -> Option<Unit> {
        self.bottom
    }

    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<Unit> {
        match slot {
            Slot::Top => self.top,
            Slot::Bottom => self.bottom,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.bottom.is_some()
    }

    /// Number of units on the square.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.top.is_some()) + usize::from(self.bottom.is_some())
    }

    /// Occupants with their slots, top first.
    pub fn units(&self) -> impl Iterator<Item = (Slot, Unit)> + '_ {
        Slot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|u| (slot, u)))
    }

    /// Whether a unit of `side` may move here without fighting: the square
    /// is empty, or its top is friendly and its bottom slot is free.
    #[must_use]
    pub fn accepts(&self, side: Side) -> bool {
        match self.top {
            None => true,
            Some(top) => top.side == side && self.bottom.is_none(),
        }
    }

    /// Top unit if it belongs to the opponent of `side`.
    #[must_use]
    pub fn enemy_top(&self, side: Side) -> Option<Unit> {
        self.top.filter(|u| u.side != side)
    }

    fn push(&mut self, unit: Unit) -> Option<Slot> {
        if self.top.is_none() {
            self.top = Some(unit);
            Some(Slot::Top)
        } else if self.bottom.is_none() {
            self.bottom = Some(unit);
            Some(Slot::Bottom)
        } else {
            None
        }
    }

    fn take(&mut self, slot: Slot) -> Option<Unit> {
        match slot {
            Slot::Top => {
                let unit = self.top.take()?;
                self.top = self.bottom.take();
                Some(unit)
            }
            Slot::Bottom => self.bottom.take(),
        }
    }
}

/// The game board: a fixed `rows x cols` grid of squares.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            squares: vec![Square::default(); rows * cols],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn index_of(&self, coord: Coord) -> Result<usize, BoardError> {
        if self.contains(coord) {
            Ok(coord.row * self.cols + coord.col)
        } else {
            Err(BoardError::OutOfBounds(coord))
        }
    }

    /// Square at `coord`, or `None` off the board.
    #[must_use]
    pub fn square(&self, coord: Coord) -> Option<&Square> {
        self.index_of(coord).ok().map(|i| &self.squares[i])
    }

    /// Square at `coord`, failing off the board.
    pub fn get(&self, coord: Coord) -> Result<&Square, BoardError> {
        let index = self.index_of(coord)?;
        Ok(&self.squares[index])
    }

    /// Step from `coord` by `(d_row, d_col)`, or `None` if that leaves the board.
    #[must_use]
    pub fn offset(&self, coord: Coord, d_row: isize, d_col: isize) -> Option<Coord> {
        let row = coord.row.checked_add_signed(d_row)?;
        let col = coord.col.checked_add_signed(d_col)?;
        let next = Coord::new(row, col);
        self.contains(next).then_some(next)
    }

    /// Place a unit in the first free slot (top preferred).
    ///
    /// Fails with `StackOverflow` if both slots are occupied.
    pub fn add_unit(&mut self, coord: Coord, unit: Unit) -> Result<Slot, BoardError> {
        let index = self.index_of(coord)?;
        self.squares[index]
            .push(unit)
            .ok_or(BoardError::StackOverflow(coord))
    }

    /// Remove the unit in `slot`. Removing the top promotes the bottom.
    ///
    /// Fails with `EmptySlot` if the slot has no unit.
    pub fn remove_unit(&mut self, coord: Coord, slot: Slot) -> Result<Unit, BoardError> {
        let index = self.index_of(coord)?;
        self.squares[index]
            .take(slot)
            .ok_or(BoardError::EmptySlot { coord, slot })
    }

    /// Iterate over all squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (Coord, &Square)> {
        let cols = self.cols;
        self.squares
            .iter()
            .enumerate()
            .map(move |(i, sq)| (Coord::new(i / cols, i % cols), sq))
    }

    /// Iterate over every unit on the board, including bottom occupants.
    pub fn units(&self) -> impl Iterator<Item = (Coord, Slot, Unit)> + '_ {
        self.squares()
            .flat_map(|(coord, sq)| sq.units().map(move |(slot, unit)| (coord, slot, unit)))
    }

    /// Total material value of one side's units.
    #[must_use]
    pub fn material(&self, side: Side) -> i64 {
        self.units()
            .filter(|(_, _, u)| u.side == side)
            .map(|(_, _, u)| u.kind.material_value())
            .sum()
    }

    /// Whether `side` still has a king anywhere (either slot).
    #[must_use]
    pub fn has_king(&self, side: Side) -> bool {
        self.units()
            .any(|(_, _, u)| u.is(UnitType::King, side))
    }
}
