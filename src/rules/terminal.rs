//! End of game detection
//!
//! The game ends as soon as either row is empty. Whatever remains on the other
//! row is then swept into its owner's store, and the larger store wins.

use std::cmp::Ordering;

use crate::board::{Board, Outcome, Player};

/// Stones moved by the final sweep, enough to undo it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sweep {
    /// Row contents before the sweep, indexed by player
    pub rows: [Vec<u32>; 2],
}

impl Sweep {
    /// Stones added to a player's store by the sweep
    #[inline]
    pub fn banked(&self, player: Player) -> u32 {
        self.rows[player.index()].iter().sum()
    }
}

/// Sweep both rows into their stores if either row is empty.
///
/// Returns `None` when the game is still running. Called after every move and
/// when a position is built from a raw layout.
pub fn sweep_if_over(board: &mut Board) -> Option<Sweep> {
    if !board.is_row_empty(Player::Zero) && !board.is_row_empty(Player::One) {
        return None;
    }

    let rows = Player::BOTH.map(|player| {
        let row = board.row_mut(player);
        let saved = row.to_vec();
        row.fill(0);
        saved
    });
    let sweep = Sweep { rows };
    for player in Player::BOTH {
        let store = board.store_index(player);
        board.add_stones(store, sweep.banked(player));
    }
    Some(sweep)
}

/// Put swept stones back on their rows.
pub(crate) fn undo_sweep(board: &mut Board, sweep: &Sweep) {
    for player in Player::BOTH {
        let store = board.store_index(player);
        board.remove_stones(store, sweep.banked(player));
        board
            .row_mut(player)
            .copy_from_slice(&sweep.rows[player.index()]);
    }
}

/// True once every pit is empty.
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    board.is_row_empty(Player::Zero) && board.is_row_empty(Player::One)
}

/// Store difference from `player`'s point of view
#[inline]
pub fn store_margin(board: &Board, player: Player) -> i32 {
    board.store(player) as i32 - board.store(player.opponent()) as i32
}

/// Result of a finished game, `None` while play continues.
pub fn winner(board: &Board) -> Option<Outcome> {
    if !is_terminal(board) {
        return None;
    }
    Some(match board.store(Player::Zero).cmp(&board.store(Player::One)) {
        Ordering::Greater => Outcome::Winner(Player::Zero),
        Ordering::Less => Outcome::Winner(Player::One),
        Ordering::Equal => Outcome::Draw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{create_board, BoardShape};

    #[test]
    fn test_running_game_not_terminal() {
        let board = create_board(6, 4).unwrap();
        assert!(!is_terminal(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_sweep_moves_remaining_row() {
        let mut board = create_board(3, 2).unwrap();
        for pit in board.row_range(Player::Zero) {
            board.set_stones(pit, 0);
        }
        board.set_stones(3, 6);

        let sweep = sweep_if_over(&mut board).unwrap();
        assert_eq!(sweep.rows[0], vec![0, 0, 0]);
        assert_eq!(sweep.rows[1], vec![2, 2, 2]);
        assert_eq!(sweep.banked(Player::One), 6);
        assert!(is_terminal(&board));
        assert_eq!(board.store(Player::One), 6);
        assert_eq!(winner(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_no_sweep_while_running() {
        let mut board = create_board(6, 4).unwrap();
        let before = board.clone();
        assert!(sweep_if_over(&mut board).is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_sweep_restores() {
        let mut board = create_board(3, 2).unwrap();
        board.set_stones(0, 0);
        board.set_stones(1, 0);
        board.set_stones(2, 0);
        board.set_stones(3, 6);
        let before = board.clone();

        let sweep = sweep_if_over(&mut board).unwrap();
        undo_sweep(&mut board, &sweep);
        assert_eq!(board, before);
    }

    #[test]
    fn test_winner_by_store() {
        let board = Board::from_layout(
            BoardShape::new(3, 2),
            vec![0, 0, 0, 7, 0, 0, 0, 5],
            Player::Zero,
        )
        .unwrap();
        assert_eq!(winner(&board), Some(Outcome::Winner(Player::Zero)));
        assert_eq!(store_margin(&board, Player::Zero), 2);
        assert_eq!(store_margin(&board, Player::One), -2);
    }
}
