//! Heuristic evaluation function for Kalah positions
//!
//! Evaluates a position based on:
//! - Game result once the board is terminal
//! - Store difference
//! - Row difference (stones still on each side)

use crate::board::{Board, Player};
use crate::rules::{is_terminal, store_margin};

use super::weights::{EvalWeights, Score};

/// Evaluate the board from the perspective of `player`.
///
/// Returns a score where:
/// - Positive values indicate advantage for `player`
/// - A finished win is `Score::WIN + margin`, a loss `-Score::WIN + margin`,
///   a draw `Score::DRAW`, where `margin` is the final store difference
/// - Otherwise `store * store_diff + row * row_diff`
///
/// The function is antisymmetric: `evaluate(b, p, w) == -evaluate(b, p.opponent(), w)`.
///
/// # Example
///
/// ```
/// use kalah::eval::{evaluate, EvalWeights};
/// use kalah::{create_board, Player};
///
/// let board = create_board(6, 4).unwrap();
/// let weights = EvalWeights::for_board(&board);
/// assert_eq!(evaluate(&board, Player::Zero, &weights), 0);
///
/// let next = board.apply_move(2).unwrap();
/// assert!(evaluate(&next, Player::Zero, &weights) > 0);
/// ```
#[must_use]
pub fn evaluate(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    let margin = store_margin(board, player);

    if is_terminal(board) {
        return match margin {
            m if m > 0 => Score::WIN + m,
            m if m < 0 => -Score::WIN + m,
            _ => Score::DRAW,
        };
    }

    let row_diff = board.row_total(player) as i32 - board.row_total(player.opponent()) as i32;
    weights.store * margin + weights.row * row_diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{create_board, BoardShape};

    fn layout(slots: Vec<u32>, to_move: Player) -> Board {
        Board::from_layout(BoardShape::new(3, 2), slots, to_move).unwrap()
    }

    #[test]
    fn test_evaluate_start_is_zero() {
        let board = create_board(6, 4).unwrap();
        let w = EvalWeights::for_board(&board);
        assert_eq!(evaluate(&board, Player::Zero, &w), 0);
        assert_eq!(evaluate(&board, Player::One, &w), 0);
    }

    #[test]
    fn test_store_dominates_row() {
        // Player 0 is one stone up in store but far behind on the rows
        let board = layout(vec![1, 0, 0, 2, 3, 3, 2, 1], Player::Zero);
        let w = EvalWeights::for_board(&board);
        let score = evaluate(&board, Player::Zero, &w);
        assert_eq!(score, 25 - 7);
        assert!(score > 0);
    }

    #[test]
    fn test_store_lead_beats_widest_row_swing() {
        // `ahead` is one stone up in store with almost everything on the
        // opponent's row; `level` has stores level and almost everything on
        // the evaluated player's row.
        for shape in [
            BoardShape::new(3, 1),
            BoardShape::new(4, 3),
            BoardShape::standard(),
            BoardShape::new(16, 64),
        ] {
            let p = shape.pits_per_side;
            let total = shape.total_stones();

            let mut ahead = vec![0; shape.slot_count()];
            ahead[0] = 1;
            ahead[p] = 1;
            ahead[p + 1] = total - 2;
            let ahead = Board::from_layout(shape, ahead, Player::Zero).unwrap();

            let mut level = vec![0; shape.slot_count()];
            level[0] = total - 1;
            level[p + 1] = 1;
            let level = Board::from_layout(shape, level, Player::Zero).unwrap();

            let w = EvalWeights::for_board(&ahead);
            assert!(
                evaluate(&ahead, Player::Zero, &w) > evaluate(&level, Player::Zero, &w),
                "{total} stones"
            );
            // Same pair from the other side: behind in store is always worse
            assert!(evaluate(&ahead, Player::One, &w) < evaluate(&level, Player::One, &w));
        }
    }

    #[test]
    fn test_antisymmetric() {
        let board = layout(vec![1, 2, 0, 2, 3, 0, 2, 2], Player::One);
        let w = EvalWeights::new(20, 3);
        assert_eq!(
            evaluate(&board, Player::Zero, &w),
            -evaluate(&board, Player::One, &w)
        );
    }

    #[test]
    fn test_terminal_scores() {
        let won = layout(vec![0, 0, 0, 7, 0, 0, 0, 5], Player::One);
        let w = EvalWeights::for_board(&won);
        assert_eq!(evaluate(&won, Player::Zero, &w), Score::WIN + 2);
        assert_eq!(evaluate(&won, Player::One, &w), -Score::WIN - 2);

        let drawn = layout(vec![0, 0, 0, 6, 0, 0, 0, 6], Player::Zero);
        assert_eq!(evaluate(&drawn, Player::Zero, &w), Score::DRAW);
    }

    #[test]
    fn test_win_beats_any_heuristic() {
        let narrow_win = layout(vec![0, 0, 0, 7, 0, 0, 0, 6], Player::Zero);
        let big_lead = layout(vec![1, 0, 0, 11, 1, 0, 0, 0], Player::Zero);
        let w = EvalWeights::for_board(&big_lead);
        assert!(evaluate(&narrow_win, Player::Zero, &w) > evaluate(&big_lead, Player::Zero, &w));
    }
}
