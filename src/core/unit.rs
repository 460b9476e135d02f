//! Unit types and units.
//!
//! A `Unit` is a plain value: a piece type plus the side that owns it. Units
//! have no identity of their own and are owned by the square holding them.
//!
//! Unit types serialize as their one-letter code, so event logs read
//! `"actor":"N"` rather than the variant name.

use serde::{Deserialize, Serialize};

use super::error::UnknownUnitCode;
use super::side::Side;

/// The six piece types.
///
/// Short codes follow chess letters: P (pawn / pikeman), N (cavalry),
/// B (archer), R (heavy infantry), Q (queen), K (king).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum UnitType {
    Pawn,
    Cavalry,
    Archer,
    HeavyInfantry,
    Queen,
    King,
}

impl UnitType {
    /// All types, in observation channel order.
    pub const ALL: [UnitType; 6] = [
        UnitType::Pawn,
        UnitType::Cavalry,
        UnitType::Archer,
        UnitType::HeavyInfantry,
        UnitType::Queen,
        UnitType::King,
    ];

    /// Single-letter code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            UnitType::Pawn => 'P',
            UnitType::Cavalry => 'N',
            UnitType::Archer => 'B',
            UnitType::HeavyInfantry => 'R',
            UnitType::Queen => 'Q',
            UnitType::King => 'K',
        }
    }

    /// Parse a single-letter code.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'P' => Some(UnitType::Pawn),
            'N' => Some(UnitType::Cavalry),
            'B' => Some(UnitType::Archer),
            'R' => Some(UnitType::HeavyInfantry),
            'Q' => Some(UnitType::Queen),
            'K' => Some(UnitType::King),
            _ => None,
        }
    }

    /// Channel offset within a side's block of the observation tensor.
    #[must_use]
    pub const fn channel(self) -> usize {
        match self {
            UnitType::Pawn => 0,
            UnitType::Cavalry => 1,
            UnitType::Archer => 2,
            UnitType::HeavyInfantry => 3,
            UnitType::Queen => 4,
            UnitType::King => 5,
        }
    }

    /// Fixed material value used by the minimal-loss rule and greedy scoring.
    #[must_use]
    pub const fn material_value(self) -> i64 {
        match self {
            UnitType::Pawn => 1,
            UnitType::Cavalry => 3,
            UnitType::Archer => 3,
            UnitType::HeavyInfantry => 5,
            UnitType::Queen => 4,
            UnitType::King => 1000,
        }
    }

    /// Types a lone archer may shoot.
    #[must_use]
    pub const fn is_normal_ranged_target(self) -> bool {
        matches!(self, UnitType::Archer | UnitType::Pawn | UnitType::Queen)
    }

    /// Additional types reachable only by a power shot.
    #[must_use]
    pub const fn is_power_shot_target(self) -> bool {
        matches!(self, UnitType::Cavalry | UnitType::HeavyInfantry)
    }

    /// Kings and queens cannot be converted.
    #[must_use]
    pub const fn is_convertible(self) -> bool {
        !matches!(self, UnitType::King | UnitType::Queen)
    }
}

impl From<UnitType> for char {
    fn from(kind: UnitType) -> Self {
        kind.code()
    }
}

impl TryFrom<char> for UnitType {
    type Error = UnknownUnitCode;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        UnitType::from_code(code).ok_or(UnknownUnitCode(code))
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A unit on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub kind: UnitType,
    pub side: Side,
}

impl Unit {
    #[must_use]
    pub const fn new(kind: UnitType, side: Side) -> Self {
        Self { kind, side }
    }

    /// The same unit serving the other side (queen conversion).
    #[must_use]
    pub const fn converted_to(self, side: Side) -> Self {
        Self {
            kind: self.kind,
            side,
        }
    }

    #[must_use]
    pub fn is(self, kind: UnitType, side: Side) -> bool {
        self.kind == kind && self.side == side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for kind in UnitType::ALL {
            assert_eq!(UnitType::from_code(kind.code()), Some(kind));
        }
        assert_eq!(UnitType::from_code('X'), None);
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&UnitType::HeavyInfantry).unwrap(), "\"R\"");
        let kind: UnitType = serde_json::from_str("\"N\"").unwrap();
        assert_eq!(kind, UnitType::Cavalry);
        assert!(serde_json::from_str::<UnitType>("\"X\"").is_err());

        let unit = serde_json::to_value(Unit::new(UnitType::Queen, Side::South)).unwrap();
        assert_eq!(unit["kind"], "Q");
    }

    #[test]
    fn test_bincode_round_trip() {
        let bytes = bincode::serialize(&UnitType::Archer).unwrap();
        assert_eq!(bincode::deserialize::<UnitType>(&bytes).unwrap(), UnitType::Archer);
    }

    #[test]
    fn test_channels_are_dense() {
        let channels: Vec<_> = UnitType::ALL.iter().map(|k| k.channel()).collect();
        assert_eq!(channels, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_material_values() {
        assert_eq!(UnitType::Pawn.material_value(), 1);
        assert_eq!(UnitType::HeavyInfantry.material_value(), 5);
        assert_eq!(UnitType::Queen.material_value(), 4);
        assert_eq!(UnitType::King.material_value(), 1000);
    }

    #[test]
    fn test_ranged_target_classes() {
        assert!(UnitType::Archer.is_normal_ranged_target());
        assert!(!UnitType::Cavalry.is_normal_ranged_target());
        assert!(UnitType::Cavalry.is_power_shot_target());
        assert!(!UnitType::King.is_normal_ranged_target());
        assert!(!UnitType::King.is_power_shot_target());
    }

    #[test]
    fn test_conversion_keeps_kind() {
        let unit = Unit::new(UnitType::Pawn, Side::South);
        let converted = unit.converted_to(Side::North);
        assert!(converted.is(UnitType::Pawn, Side::North));
    }
}
