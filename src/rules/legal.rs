//! Move legality
//!
//! A pit may be played when it lies on the row of the player on move and
//! holds at least one stone.

use crate::board::Board;
use crate::error::{IllegalMoveReason, KalahError, KalahResult};

/// Check a pit against the rules, reporting why it cannot be played.
pub fn validate_move(board: &Board, pit: usize) -> KalahResult<()> {
    if pit >= board.slot_count() {
        return Err(KalahError::illegal(pit, IllegalMoveReason::OutOfRange));
    }
    if !board.is_pit(pit) {
        return Err(KalahError::illegal(pit, IllegalMoveReason::Store));
    }
    if board.owner_of(pit) != board.current_player() {
        return Err(KalahError::illegal(pit, IllegalMoveReason::OpponentPit));
    }
    if board.stones(pit) == 0 {
        return Err(KalahError::illegal(pit, IllegalMoveReason::EmptyPit));
    }
    Ok(())
}

#[inline]
pub fn is_valid_move(board: &Board, pit: usize) -> bool {
    validate_move(board, pit).is_ok()
}

/// Non-empty pits of the player on move, ascending.
///
/// Empty exactly when the game is over: a board whose mover has an empty
/// row has already been swept.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    let player = board.current_player();
    board
        .row_range(player)
        .filter(|&pit| board.stones(pit) > 0)
        .collect()
}

#[inline]
pub fn has_legal_move(board: &Board) -> bool {
    !board.is_row_empty(board.current_player())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{create_board, BoardShape, Player};

    #[test]
    fn test_legal_moves_opening() {
        let board = create_board(6, 4).unwrap();
        assert_eq!(legal_moves(&board), vec![0, 1, 2, 3, 4, 5]);
        assert!(has_legal_move(&board));
    }

    #[test]
    fn test_legal_moves_skip_empty_pits() {
        let board = Board::from_layout(
            BoardShape::new(3, 2),
            vec![2, 2, 2, 0, 1, 0, 3, 2],
            Player::One,
        )
        .unwrap();
        assert_eq!(legal_moves(&board), vec![4, 6]);
    }

    #[test]
    fn test_validate_reasons() {
        let board = Board::from_layout(
            BoardShape::new(3, 2),
            vec![2, 0, 2, 0, 1, 1, 1, 0],
            Player::Zero,
        )
        .unwrap();

        let reason = |pit| match validate_move(&board, pit) {
            Err(KalahError::IllegalMove { reason, .. }) => Some(reason),
            _ => None,
        };

        assert_eq!(reason(8), Some(IllegalMoveReason::OutOfRange));
        assert_eq!(reason(3), Some(IllegalMoveReason::Store));
        assert_eq!(reason(7), Some(IllegalMoveReason::Store));
        assert_eq!(reason(5), Some(IllegalMoveReason::OpponentPit));
        assert_eq!(reason(1), Some(IllegalMoveReason::EmptyPit));
        assert_eq!(reason(0), None);
        assert!(is_valid_move(&board, 2));
    }

    #[test]
    fn test_no_moves_when_over() {
        let board = Board::from_layout(
            BoardShape::new(3, 2),
            vec![0, 0, 0, 6, 2, 2, 2, 0],
            Player::Zero,
        )
        .unwrap();
        assert!(legal_moves(&board).is_empty());
        assert!(!has_legal_move(&board));
    }
}
