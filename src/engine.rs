//! AI engine facade
//!
//! Wraps the alpha-beta [`Searcher`] with timing and logging. Both the GUI
//! and the simulation harness pick their moves through [`AIEngine`].
//!
//! # Example
//!
//! ```
//! use kalah::{create_board, AIEngine};
//!
//! let mut engine = AIEngine::with_depth(4);
//! let board = create_board(6, 4).unwrap();
//!
//! let result = engine.get_move_with_stats(&board).unwrap();
//! println!("Best pit: {}", result.best_move);
//! println!("Time: {}ms, nodes: {}", result.time_ms, result.nodes);
//! ```

use std::time::Instant;

use tracing::info;

use crate::board::Board;
use crate::error::KalahResult;
use crate::search::{SearchConfig, SearchResult, Searcher};

/// Default look-ahead in turn switches
pub const DEFAULT_DEPTH: u32 = 5;

/// Result of a move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Pit to play
    pub best_move: usize,
    /// Backed-up value for the player on move
    pub score: i32,
    /// Wall time including setup, in milliseconds
    pub time_ms: u64,
    /// Nodes visited by the search
    pub nodes: u64,
    /// Depth searched
    pub depth: u32,
}

impl MoveResult {
    #[inline]
    fn from_search(result: &SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
            depth: result.depth,
        }
    }
}

/// Main AI engine for Kalah.
///
/// Holds the search configuration; each call searches the given position
/// from scratch, so one engine can serve any number of games.
///
/// # Example
///
/// ```
/// use kalah::{create_board, AIEngine};
///
/// let mut engine = AIEngine::new();
/// let board = create_board(4, 3).unwrap();
/// if let Some(pit) = engine.get_move(&board) {
///     println!("Play pit {pit}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AIEngine {
    config: SearchConfig,
}

impl AIEngine {
    /// Engine searching [`DEFAULT_DEPTH`] turn switches with default weights.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    #[must_use]
    pub fn with_depth(max_depth: u32) -> Self {
        Self::with_config(SearchConfig::new(max_depth))
    }

    /// Engine with explicit depth and evaluation weights.
    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Best pit for the player on move, `None` if the game is over or the
    /// configuration is unusable.
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<usize> {
        self.get_move_with_stats(board)
            .ok()
            .map(|result| result.best_move)
    }

    /// Best pit with search statistics.
    ///
    /// # Errors
    ///
    /// Propagates [`Searcher::search`] errors: a finished game or an invalid
    /// configuration.
    pub fn get_move_with_stats(&mut self, board: &Board) -> KalahResult<MoveResult> {
        let start = Instant::now();
        let mut searcher = Searcher::new(self.config);
        let result = searcher.search(board)?;
        let time_ms = start.elapsed().as_millis() as u64;

        let move_result = MoveResult::from_search(&result, time_ms);
        info!(
            player = %board.current_player(),
            pit = move_result.best_move,
            score = move_result.score,
            depth = move_result.depth,
            nodes = move_result.nodes,
            time_ms,
            "engine move"
        );
        Ok(move_result)
    }

    /// Set the look-ahead for later searches.
    pub fn set_max_depth(&mut self, depth: u32) {
        self.config.max_depth = depth;
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.config.max_depth
    }

    #[must_use]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{create_board, BoardShape, Player};
    use crate::error::KalahError;
    use crate::eval::EvalWeights;
    use crate::rules::{apply_move, legal_moves, winner};
    use crate::search::best_move;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.max_depth(), DEFAULT_DEPTH);
        assert_eq!(engine.config().weights, None);
    }

    #[test]
    fn test_engine_with_config() {
        let config = SearchConfig::new(3).with_weights(EvalWeights::new(120, 1));
        let mut engine = AIEngine::with_config(config);
        assert_eq!(engine.max_depth(), 3);
        engine.set_max_depth(6);
        assert_eq!(engine.max_depth(), 6);
    }

    #[test]
    fn test_engine_matches_search() {
        let board = create_board(6, 4).unwrap();
        let mut engine = AIEngine::with_depth(4);
        let result = engine.get_move_with_stats(&board).unwrap();
        assert_eq!((result.best_move, result.score), best_move(&board, 4).unwrap());
        assert_eq!(result.depth, 4);
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_engine_on_finished_game() {
        let board = Board::from_layout(
            BoardShape::new(3, 2),
            vec![0, 0, 0, 8, 0, 0, 0, 4],
            Player::One,
        )
        .unwrap();
        let mut engine = AIEngine::new();
        assert_eq!(engine.get_move(&board), None);
        assert!(matches!(
            engine.get_move_with_stats(&board),
            Err(KalahError::NoLegalMove)
        ));
    }

    #[test]
    fn test_engine_plays_full_game() {
        let mut board = create_board(4, 3).unwrap();
        let mut engines = [AIEngine::with_depth(3), AIEngine::with_depth(2)];

        while winner(&board).is_none() {
            let player = board.current_player();
            let pit = engines[player.index()].get_move(&board).unwrap();
            assert!(legal_moves(&board).contains(&pit));
            board = apply_move(&board, pit).unwrap().0;
        }
        assert_eq!(
            board.store(Player::Zero) + board.store(Player::One),
            board.total_stones()
        );
    }
}
