//! Capture rule
//!
//! When the last stone of a move lands in a pit on the mover's own row that
//! was empty before it arrived, that stone and everything in the opposite pit
//! go to the mover's store. An empty opposite pit still banks the single stone.

use crate::board::{Board, Player};

/// Stones moved by a capture, enough to undo it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    /// Pit where the last stone landed
    pub pit: usize,
    /// Pit across from `pit`
    pub opposite: usize,
    /// Stones taken from `opposite` (may be 0)
    pub taken: u32,
}

impl Capture {
    /// Stones banked by the capture, including the landing stone
    #[inline]
    pub fn banked(&self) -> u32 {
        self.taken + 1
    }
}

/// Pit in the same column on the other row.
#[inline]
pub fn opposite_pit(board: &Board, pit: usize) -> usize {
    board.opposite(pit)
}

/// Resolve a capture if the last stone of `mover` landed on `last_slot`.
///
/// Must be called right after sowing, before the turn passes.
pub(crate) fn execute_capture(board: &mut Board, mover: Player, last_slot: usize) -> Option<Capture> {
    if !board.is_pit(last_slot) || board.owner_of(last_slot) != mover {
        return None;
    }
    // One stone now means the pit was empty before the last stone arrived
    if board.stones(last_slot) != 1 {
        return None;
    }

    let opposite = board.opposite(last_slot);
    let taken = board.take_stones(opposite);
    board.set_stones(last_slot, 0);
    let store = board.store_index(mover);
    board.add_stones(store, taken + 1);

    Some(Capture {
        pit: last_slot,
        opposite,
        taken,
    })
}

/// Reverse a capture produced by [`execute_capture`].
pub(crate) fn undo_capture(board: &mut Board, mover: Player, capture: &Capture) {
    let store = board.store_index(mover);
    board.remove_stones(store, capture.banked());
    board.set_stones(capture.opposite, capture.taken);
    board.set_stones(capture.pit, 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardShape;

    fn board(slots: Vec<u32>) -> Board {
        Board::from_layout(BoardShape::new(3, 2), slots, Player::Zero).unwrap()
    }

    #[test]
    fn test_capture_takes_opposite() {
        // Last stone just landed on pit 1; opposite is pit 5
        let mut b = board(vec![2, 1, 1, 0, 1, 3, 2, 0]);
        let cap = execute_capture(&mut b, Player::Zero, 1).unwrap();
        assert_eq!(cap, Capture { pit: 1, opposite: 5, taken: 3 });
        assert_eq!(b.stones(1), 0);
        assert_eq!(b.stones(5), 0);
        assert_eq!(b.store(Player::Zero), 4);
        assert_eq!(b.count_stones(), b.total_stones());
    }

    #[test]
    fn test_capture_with_empty_opposite() {
        let mut b = board(vec![2, 1, 1, 0, 1, 0, 2, 0]);
        let cap = execute_capture(&mut b, Player::Zero, 1).unwrap();
        assert_eq!(cap.taken, 0);
        assert_eq!(cap.banked(), 1);
        assert_eq!(b.stones(1), 0);
        assert_eq!(b.store(Player::Zero), 1);
    }

    #[test]
    fn test_no_capture_on_opponent_row() {
        let mut b = board(vec![2, 2, 1, 0, 1, 3, 2, 0]);
        assert!(execute_capture(&mut b, Player::Zero, 4).is_none());
    }

    #[test]
    fn test_no_capture_on_occupied_pit() {
        let mut b = board(vec![2, 2, 1, 0, 1, 3, 2, 0]);
        assert!(execute_capture(&mut b, Player::Zero, 1).is_none());
        assert!(execute_capture(&mut b, Player::Zero, 3).is_none());
    }

    #[test]
    fn test_undo_capture_restores() {
        let mut b = board(vec![2, 1, 1, 0, 1, 3, 2, 0]);
        let before = b.clone();
        let cap = execute_capture(&mut b, Player::Zero, 1).unwrap();
        undo_capture(&mut b, Player::Zero, &cap);
        assert_eq!(b, before);
    }

    #[test]
    fn test_opposite_pit_symmetry() {
        let b = board(vec![2, 1, 1, 0, 1, 3, 2, 0]);
        assert_eq!(opposite_pit(&b, 0), 6);
        assert_eq!(opposite_pit(&b, 2), 4);
    }
}
