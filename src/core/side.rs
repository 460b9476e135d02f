//! Sides and per-side data storage.
//!
//! ## Side
//!
//! One of the two players. North starts on the high rows and advances toward
//! row 0; South starts on rows 0-1 and advances toward the last row.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side` (material totals, rewards, agents).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    North,
    South,
}

impl Side {
    /// Both sides, North first.
    pub const ALL: [Side; 2] = [Side::North, Side::South];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::North => Side::South,
            Side::South => Side::North,
        }
    }

    /// Row delta of one step "forward" for this side.
    #[must_use]
    pub const fn forward_row_step(self) -> isize {
        match self {
            Side::North => -1,
            Side::South => 1,
        }
    }

    /// Storage index (North = 0, South = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::North => 0,
            Side::South => 1,
        }
    }

    /// Lowercase name, as used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Side::North => "north",
            Side::South => "south",
        }
    }

    /// Parse a side from its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "north" => Some(Side::North),
            "south" => Some(Side::South),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use battle_chess::core::{Side, SideMap};
///
/// let mut material: SideMap<i64> = SideMap::with_value(0);
/// material[Side::South] += 5;
///
/// assert_eq!(material[Side::North], 0);
/// assert_eq!(material[Side::South], 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::North), factory(Side::South)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, North first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
