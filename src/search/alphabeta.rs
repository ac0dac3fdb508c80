//! Alpha-Beta search
//!
//! Negamax with alpha-beta pruning over a private scratch board that is
//! mutated with make/unmake, so no node copies the board.
//!
//! # Depth
//!
//! Depth counts turn switches. A move whose last stone lands in the mover's
//! store keeps the same player on move and does not consume depth, so a
//! search at depth `d` may apply many more than `d` moves along one line.
//! Every extra turn banks a stone, so such chains are finite.
//!
//! # Example
//!
//! ```
//! use kalah::create_board;
//! use kalah::search::{SearchConfig, Searcher};
//!
//! let board = create_board(6, 4).unwrap();
//! let mut searcher = Searcher::new(SearchConfig::new(4));
//!
//! let result = searcher.search(&board).unwrap();
//! assert!(board.row_range(board.current_player()).contains(&result.best_move));
//! println!("Best pit: {} (score {})", result.best_move, result.score);
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::Board;
use crate::error::{KalahError, KalahResult};
use crate::eval::{evaluate, EvalWeights, Score};
use crate::rules::{is_terminal, legal_moves, play, unmake_move, MoveRecord};

/// Search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Turn switches to look ahead (at least 1)
    pub max_depth: u32,
    /// Evaluation weights; `None` picks [`EvalWeights::for_board`] per search
    pub weights: Option<EvalWeights>,
}

impl SearchConfig {
    #[inline]
    pub fn new(max_depth: u32) -> Self {
        Self {
            max_depth,
            weights: None,
        }
    }

    #[inline]
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = Some(weights);
        self
    }
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Sibling lists cut short by `alpha >= beta`
    pub cutoffs: u64,
    /// Moves searched that granted an extra turn
    pub extra_turns: u64,
    /// Longest line of applied moves, extra turns included
    pub max_ply: u32,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best pit for the player on move
    pub best_move: usize,
    /// Backed-up value from the mover's point of view
    pub score: i32,
    /// Depth searched
    pub depth: u32,
    /// Total nodes visited, root included
    pub nodes: u64,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// Alpha-beta searcher
pub struct Searcher {
    config: SearchConfig,
    weights: EvalWeights,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            weights: config.weights.unwrap_or_default(),
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Find the best move for the player on move.
    ///
    /// The board is never modified; the search works on its own copy.
    ///
    /// # Errors
    ///
    /// - [`KalahError::InvalidConfiguration`] if `max_depth` is 0 or the
    ///   weights do not fit the board
    /// - [`KalahError::NoLegalMove`] if the game is already over
    pub fn search(&mut self, board: &Board) -> KalahResult<SearchResult> {
        let depth = self.config.max_depth;
        if depth == 0 {
            return Err(KalahError::config("search depth must be at least 1"));
        }
        self.weights = self
            .config
            .weights
            .unwrap_or_else(|| EvalWeights::for_board(board));
        self.weights.validate(board.total_stones())?;
        if is_terminal(board) {
            return Err(KalahError::NoLegalMove);
        }

        self.nodes = 0;
        self.stats = SearchStats::default();
        let start = Instant::now();

        let mut scratch = board.clone();
        let (best_move, score) = self.search_root(&mut scratch, depth)?;
        debug_assert_eq!(&scratch, board);

        let result = SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats,
            elapsed: start.elapsed(),
        };

        debug!(
            player = %board.current_player(),
            depth,
            best_move,
            score,
            nodes = result.nodes,
            cutoffs = result.stats.cutoffs,
            extra_turns = result.stats.extra_turns,
            max_ply = result.stats.max_ply,
            elapsed_us = result.elapsed.as_micros() as u64,
            "search finished"
        );

        Ok(result)
    }

    /// Root: ascending pit order, a later pit replaces the best only when
    /// strictly better, so ties go to the lowest pit.
    fn search_root(&mut self, board: &mut Board, depth: u32) -> KalahResult<(usize, i32)> {
        self.nodes += 1;

        let mut best: Option<(usize, i32)> = None;
        let mut alpha = -Score::INF;
        let beta = Score::INF;

        for pit in legal_moves(board) {
            let record = play(board, pit);
            let score = self.child_score(board, &record, depth, alpha, beta, 1);
            unmake_move(board, &record);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pit, score));
                alpha = alpha.max(score);
            }
        }

        best.ok_or(KalahError::NoLegalMove)
    }

    /// Value of the position reached by `record`, from the mover's side.
    ///
    /// An extra turn keeps the window and the depth; a turn switch negates
    /// both and spends one ply.
    #[inline]
    fn child_score(
        &mut self,
        board: &mut Board,
        record: &MoveRecord,
        depth: u32,
        alpha: i32,
        beta: i32,
        ply: u32,
    ) -> i32 {
        if record.extra_turn {
            self.stats.extra_turns += 1;
            self.alpha_beta(board, depth, alpha, beta, ply)
        } else {
            -self.alpha_beta(board, depth - 1, -beta, -alpha, ply)
        }
    }

    fn alpha_beta(&mut self, board: &mut Board, depth: u32, mut alpha: i32, beta: i32, ply: u32) -> i32 {
        self.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if depth == 0 || is_terminal(board) {
            return evaluate(board, board.current_player(), &self.weights);
        }

        let moves = legal_moves(board);
        if moves.is_empty() {
            // Unreachable on a swept board; score it as it stands
            return evaluate(board, board.current_player(), &self.weights);
        }

        let mut best = -Score::INF;
        for pit in moves {
            let record = play(board, pit);
            let score = self.child_score(board, &record, depth, alpha, beta, ply + 1);
            unmake_move(board, &record);

            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Best pit and its value for the player on move, with default weights.
///
/// # Example
///
/// ```
/// use kalah::{best_move, create_board};
///
/// let board = create_board(6, 4).unwrap();
/// let (pit, _score) = best_move(&board, 3).unwrap();
/// assert_eq!(best_move(&board, 3).unwrap().0, pit);
/// ```
pub fn best_move(board: &Board, max_depth: u32) -> KalahResult<(usize, i32)> {
    Searcher::new(SearchConfig::new(max_depth))
        .search(board)
        .map(|result| (result.best_move, result.score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{create_board, BoardShape, Player};
    use crate::rules::{apply_move, make_move};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Plain minimax over copied boards, same depth rules, no pruning
    fn minimax(board: &Board, depth: u32, weights: &EvalWeights) -> i32 {
        if depth == 0 || is_terminal(board) {
            return evaluate(board, board.current_player(), weights);
        }
        legal_moves(board)
            .into_iter()
            .map(|pit| {
                let (next, record) = apply_move(board, pit).unwrap();
                if record.extra_turn {
                    minimax(&next, depth, weights)
                } else {
                    -minimax(&next, depth - 1, weights)
                }
            })
            .max()
            .unwrap()
    }

    fn minimax_root(board: &Board, depth: u32, weights: &EvalWeights) -> (usize, i32) {
        let mut best: Option<(usize, i32)> = None;
        for pit in legal_moves(board) {
            let (next, record) = apply_move(board, pit).unwrap();
            let score = if record.extra_turn {
                minimax(&next, depth, weights)
            } else {
                -minimax(&next, depth - 1, weights)
            };
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pit, score));
            }
        }
        best.unwrap()
    }

    fn random_positions(shape: BoardShape, count: usize, seed: u64) -> Vec<Board> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut positions = Vec::new();
        while positions.len() < count {
            let mut board = Board::new(shape).unwrap();
            let plies = rng.random_range(0..12);
            for _ in 0..plies {
                let moves = legal_moves(&board);
                if moves.is_empty() {
                    break;
                }
                let pit = moves[rng.random_range(0..moves.len())];
                make_move(&mut board, pit).unwrap();
            }
            if !is_terminal(&board) {
                positions.push(board);
            }
        }
        positions
    }

    #[test]
    fn test_search_opening() {
        let board = create_board(6, 4).unwrap();
        let mut searcher = Searcher::new(SearchConfig::new(3));
        let result = searcher.search(&board).unwrap();
        assert!(board.row_range(Player::Zero).contains(&result.best_move));
        assert!(result.nodes > 1);
        assert_eq!(result.depth, 3);
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = create_board(6, 4).unwrap();
        let first = best_move(&board, 4).unwrap();
        for _ in 0..3 {
            assert_eq!(best_move(&board, 4).unwrap(), first);
        }
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = create_board(6, 4).unwrap().apply_move(0).unwrap();
        let before = board.clone();
        best_move(&board, 5).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_matches_unpruned_minimax() {
        for shape in [BoardShape::new(4, 3), BoardShape::new(3, 4)] {
            for board in random_positions(shape, 12, 11) {
                let weights = EvalWeights::for_board(&board);
                for depth in 1..=4 {
                    let expected = minimax_root(&board, depth, &weights);
                    let got = best_move(&board, depth).unwrap();
                    assert_eq!(got, expected, "depth {depth} on\n{board}");
                }
            }
        }
    }

    #[test]
    fn test_ties_break_to_lowest_pit() {
        // Pits 1 and 2 both pass the store once and leave identical row totals
        let board = Board::from_layout(
            BoardShape::new(3, 2),
            vec![0, 3, 2, 0, 1, 1, 1, 0],
            Player::Zero,
        )
        .unwrap();
        let weights = EvalWeights::for_board(&board);
        let (pit, score) = best_move(&board, 1).unwrap();
        assert_eq!(pit, 1);
        assert_eq!((pit, score), minimax_root(&board, 1, &weights));
    }

    #[test]
    fn test_extra_turn_does_not_consume_depth() {
        // Pit 2 banks one stone and keeps the turn, then pit 0 captures
        // pit 5 and empties player 0's row: a forced win inside depth 1
        let board = Board::from_layout(
            BoardShape::new(3, 2),
            vec![1, 0, 1, 0, 1, 5, 1, 0],
            Player::Zero,
        )
        .unwrap();
        let mut searcher = Searcher::new(SearchConfig::new(1));
        let result = searcher.search(&board).unwrap();

        assert_eq!(result.best_move, 2);
        assert_eq!(result.score, Score::WIN + 5);
        assert!(result.stats.extra_turns >= 1);
        assert!(result.stats.max_ply >= 2);
    }

    #[test]
    fn test_equal_captures_pick_lowest_pit() {
        // Pits 0 and 2 both end in empty pit 4 and capture pit 8
        let board = Board::from_layout(
            BoardShape::new(6, 4),
            vec![4, 4, 2, 4, 0, 4, 0, 4, 4, 4, 4, 4, 4, 0],
            Player::Zero,
        )
        .unwrap();
        let (pit, score) = best_move(&board, 1).unwrap();
        assert_eq!(pit, 0);
        assert_eq!(score, 85 * 5 - 3);
    }

    #[test]
    fn test_depth_zero_rejected() {
        let board = create_board(6, 4).unwrap();
        assert!(matches!(
            best_move(&board, 0),
            Err(KalahError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_terminal_board_rejected() {
        let board = Board::from_layout(
            BoardShape::new(3, 2),
            vec![0, 0, 0, 6, 0, 0, 0, 6],
            Player::Zero,
        )
        .unwrap();
        assert!(matches!(best_move(&board, 3), Err(KalahError::NoLegalMove)));
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let board = create_board(6, 4).unwrap();
        let config = SearchConfig::new(2).with_weights(EvalWeights::new(1, 1));
        let mut searcher = Searcher::new(config);
        assert!(matches!(
            searcher.search(&board),
            Err(KalahError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_custom_weights_used() {
        let board = create_board(6, 4).unwrap();
        let config = SearchConfig::new(2).with_weights(EvalWeights::new(200, 2));
        let mut searcher = Searcher::new(config);
        let result = searcher.search(&board).unwrap();
        let expected = minimax_root(&board, 2, &EvalWeights::new(200, 2));
        assert_eq!((result.best_move, result.score), expected);
    }

    #[test]
    fn test_pruning_cuts_nodes() {
        let board = create_board(6, 4).unwrap();
        let result = Searcher::new(SearchConfig::new(5)).search(&board).unwrap();
        assert!(result.stats.cutoffs > 0);
    }
}
