//! Board representation for Kalah

pub mod board;


use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{KalahError, KalahResult};

// Re-exports
pub use board::Board;

/// Pits per side on the classical board
pub const DEFAULT_PITS_PER_SIDE: usize = 6;
/// Starting stones per pit on the classical board
pub const DEFAULT_STONES_PER_PIT: u32 = 4;
/// Largest supported row length
pub const MAX_PITS_PER_SIDE: usize = 16;
/// Largest supported starting stones per pit
pub const MAX_STONES_PER_PIT: u32 = 64;
/// Most stones any board may hold, the starting total of the largest shape
pub const MAX_TOTAL_STONES: u32 = 2 * MAX_PITS_PER_SIDE as u32 * MAX_STONES_PER_PIT;

/// The two sides of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Bottom row, moves first
    Zero,
    /// Top row
    One,
}

impl Player {
    /// Both players in turn order
    pub const BOTH: [Player; 2] = [Player::Zero, Player::One];

    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Zero => Player::One,
            Player::One => Player::Zero,
        }
    }

    /// 0 or 1, for array indexing
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::Zero => 0,
            Player::One => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player} wins"),
            Outcome::Draw => f.write_str("Draw"),
        }
    }
}

/// Board shape fixed at game creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardShape {
    pub pits_per_side: usize,
    pub stones_per_pit: u32,
}

impl BoardShape {
    #[inline]
    pub fn new(pits_per_side: usize, stones_per_pit: u32) -> Self {
        Self {
            pits_per_side,
            stones_per_pit,
        }
    }

    /// Six pits per side, four stones per pit
    #[inline]
    pub fn standard() -> Self {
        Self::new(DEFAULT_PITS_PER_SIDE, DEFAULT_STONES_PER_PIT)
    }

    /// Number of slots in the flat layout (pits plus two stores)
    #[inline]
    pub fn slot_count(&self) -> usize {
        2 * self.pits_per_side + 2
    }

    /// Stones in play for a freshly created board
    #[inline]
    pub fn total_stones(&self) -> u32 {
        2 * self.pits_per_side as u32 * self.stones_per_pit
    }

    /// Reject shapes the engine cannot represent.
    pub fn validate(&self) -> KalahResult<()> {
        if self.pits_per_side == 0 || self.pits_per_side > MAX_PITS_PER_SIDE {
            return Err(KalahError::config(format!(
                "pits_per_side must be in 1..={MAX_PITS_PER_SIDE}, got {}",
                self.pits_per_side
            )));
        }
        if self.stones_per_pit == 0 || self.stones_per_pit > MAX_STONES_PER_PIT {
            return Err(KalahError::config(format!(
                "stones_per_pit must be in 1..={MAX_STONES_PER_PIT}, got {}",
                self.stones_per_pit
            )));
        }
        Ok(())
    }
}

impl Default for BoardShape {
    fn default() -> Self {
        Self::standard()
    }
}

/// Create a board in its starting layout with player 0 to move.
///
/// # Example
///
/// ```
/// use kalah::{create_board, Player};
///
/// let board = create_board(6, 4).unwrap();
/// assert_eq!(board.current_player(), Player::Zero);
/// assert_eq!(board.total_stones(), 48);
/// assert!(create_board(0, 4).is_err());
/// ```
pub fn create_board(pits_per_side: usize, stones_per_pit: u32) -> KalahResult<Board> {
    Board::new(BoardShape::new(pits_per_side, stones_per_pit))
}
