//! Score constants and evaluation weights
//!
//! Weights are validated against the number of stones in play so that the
//! terms of [`super::evaluate`] can never overtake each other.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardShape};
use crate::error::{KalahError, KalahResult};

/// Score bounds shared by evaluation and search
pub struct Score;

impl Score {
    /// Base value of a won game; the final store margin is added on top
    pub const WIN: i32 = 100_000_000;
    /// Value of a drawn game
    pub const DRAW: i32 = 0;
    /// Search window bound, above any reachable score
    pub const INF: i32 = 1_000_000_000;
}

/// Linear weights for the non-terminal terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Per stone of store difference
    pub store: i32,
    /// Per stone of row difference
    pub row: i32,
}

impl EvalWeights {
    #[inline]
    pub fn new(store: i32, row: i32) -> Self {
        Self { store, row }
    }

    /// Lexicographic weights for `total_stones` stones in play.
    ///
    /// Row differences of two positions lie within `2 * total_stones` of each
    /// other, so a store weight above that keeps one stone of store
    /// difference ahead of any row difference.
    #[inline]
    pub fn lexicographic(total_stones: u32) -> Self {
        Self::new(2 * total_stones as i32 + 1, 1)
    }

    /// Default weights for a board
    #[inline]
    pub fn for_board(board: &Board) -> Self {
        Self::lexicographic(board.total_stones())
    }

    /// Check that the terms keep their priority for `total_stones` stones.
    pub fn validate(&self, total_stones: u32) -> KalahResult<()> {
        let total = i64::from(total_stones);
        let store = i64::from(self.store);
        let row = i64::from(self.row);

        if row < 0 {
            return Err(KalahError::config(format!(
                "row weight must not be negative, got {row}"
            )));
        }
        let row_spread = 2 * row * total;
        if store <= row_spread {
            return Err(KalahError::config(format!(
                "store weight {store} must exceed the largest row swing ({row_spread})"
            )));
        }
        if (store + 2 * row) * total >= i64::from(Score::WIN) {
            return Err(KalahError::config(format!(
                "weights {store}/{row} are too large for {total} stones"
            )));
        }
        Ok(())
    }
}

/// Lexicographic weights for the standard board
impl Default for EvalWeights {
    fn default() -> Self {
        Self::lexicographic(BoardShape::standard().total_stones())
    }
}
