//! Game state.
//!
//! `GameState` is the board plus whose turn it is, a move counter and an
//! advisory outcome. The outcome is refreshed after each applied action for
//! convenience; the authoritative answer always comes from scanning the board
//! for kings (`rules::winner_if_any`).
//!
//! `Clone` is a full value copy with no shared substructure, so speculative
//! evaluation can copy and mutate freely.

use serde::{Deserialize, Serialize};

use super::board::{Board, Coord};
use super::config::RulesetConfig;
use super::error::ConfigError;
use super::side::Side;
use super::unit::{Unit, UnitType};

/// Back rank from column 0: heavy infantry, cavalry, archer, queen, king,
/// archer, cavalry, heavy infantry.
pub const BACK_RANK: [UnitType; 8] = [
    UnitType::HeavyInfantry,
    UnitType::Cavalry,
    UnitType::Archer,
    UnitType::Queen,
    UnitType::King,
    UnitType::Archer,
    UnitType::Cavalry,
    UnitType::HeavyInfantry,
];

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    /// Only this side still has a king.
    Winner(Side),
    /// Neither side has a king.
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }

    /// Name as reported to external collaborators: "north", "south" or "draw".
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameResult::Winner(side) => side.name(),
            GameResult::Draw => "draw",
        }
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,

    /// Side whose turn it is.
    pub side_to_move: Side,

    /// Number of actions applied so far.
    pub move_count: u32,

    /// Advisory terminal flag; see module docs.
    pub outcome: Option<GameResult>,
}

impl GameState {
    /// Empty board, North to move.
    #[must_use]
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            board: Board::new(rows, cols),
            side_to_move: Side::North,
            move_count: 0,
            outcome: None,
        }
    }

    /// Standard setup for the configured geometry.
    ///
    /// North's back rank is the last row with its pawns in front; South
    /// mirrors this on rows 0 and 1. North moves first.
    pub fn standard(config: &RulesetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut state = Self::empty(config.rows, config.cols);

        let ranks = [
            (Side::North, config.rows - 1, config.rows - 2),
            (Side::South, 0, 1),
        ];
        for (side, back, pawns) in ranks {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                state.place(Coord::new(back, col), Unit::new(*kind, side));
            }
            for col in 0..config.cols {
                state.place(Coord::new(pawns, col), Unit::new(UnitType::Pawn, side));
            }
        }

        Ok(state)
    }

    // Setup only writes to empty squares on a validated board.
    fn place(&mut self, coord: Coord, unit: Unit) {
        let placed = self.board.add_unit(coord, unit);
        debug_assert!(placed.is_ok(), "setup square {coord} already occupied");
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_setup_counts() {
        let state = GameState::standard(&RulesetConfig::default()).unwrap();

        assert_eq!(state.board.units().count(), 32);
        assert_eq!(state.side_to_move, Side::North);
        assert_eq!(state.move_count, 0);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_standard_setup_positions() {
        let state = GameState::standard(&RulesetConfig::default()).unwrap();
        let top = |r, c| state.board.get(Coord::new(r, c)).unwrap().top();

        assert_eq!(top(7, 4), Some(Unit::new(UnitType::King, Side::North)));
        assert_eq!(top(7, 3), Some(Unit::new(UnitType::Queen, Side::North)));
        assert_eq!(top(0, 1), Some(Unit::new(UnitType::Cavalry, Side::South)));
        assert_eq!(top(6, 5), Some(Unit::new(UnitType::Pawn, Side::North)));
        assert_eq!(top(1, 0), Some(Unit::new(UnitType::Pawn, Side::South)));
        assert_eq!(top(4, 4), None);
    }

    #[test]
    fn test_standard_setup_material() {
        let state = GameState::standard(&RulesetConfig::default()).unwrap();
        // 8 pawns + 2*5 + 2*3 + 2*3 + 4 + 1000
        assert_eq!(state.board.material(Side::North), 1034);
        assert_eq!(state.board.material(Side::South), 1034);
    }

    #[test]
    fn test_wider_board_keeps_back_rank_left_aligned() {
        let config = RulesetConfig::new().with_board(10, 10);
        let state = GameState::standard(&config).unwrap();

        assert_eq!(state.board.units().count(), 36);
        assert!(state.board.get(Coord::new(9, 9)).unwrap().is_empty());
        assert!(!state.board.get(Coord::new(8, 9)).unwrap().is_empty());
    }

    #[test]
    fn test_standard_rejects_invalid_geometry() {
        let config = RulesetConfig::new().with_board(3, 8);
        assert!(GameState::standard(&config).is_err());
    }

    #[test]
    fn test_clone_is_independent() {
        let state = GameState::standard(&RulesetConfig::default()).unwrap();
        let mut copy = state.clone();
        copy.board.remove_unit(Coord::new(7, 4), crate::core::Slot::Top).unwrap();

        assert!(state.board.has_king(Side::North));
        assert!(!copy.board.has_king(Side::North));
    }

    #[test]
    fn test_result_names() {
        assert_eq!(GameResult::Winner(Side::South).name(), "south");
        assert_eq!(GameResult::Draw.name(), "draw");
        assert!(GameResult::Winner(Side::North).is_winner(Side::North));
        assert!(!GameResult::Draw.is_winner(Side::North));
    }
}
