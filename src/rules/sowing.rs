//! Sowing and make/unmake
//!
//! A move lifts every stone from one pit and drops them one at a time into the
//! following slots, skipping the opponent's store. [`make_move`] records what
//! it changed in a [`MoveRecord`] so that [`unmake_move`] can restore the board
//! without cloning it.

use super::capture::{execute_capture, undo_capture, Capture};
use super::legal::validate_move;
use super::terminal::{sweep_if_over, undo_sweep, Sweep};
use crate::board::{Board, Player};
use crate::error::KalahResult;

/// Everything a move changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Pit that was played
    pub pit: usize,
    /// Stones lifted from `pit`
    pub sown: u32,
    /// Player who made the move
    pub mover: Player,
    /// Slot that received the last stone
    pub last_slot: usize,
    /// Last stone landed in the mover's store
    pub extra_turn: bool,
    pub capture: Option<Capture>,
    /// Set when the move ended the game
    pub sweep: Option<Sweep>,
}

impl MoveRecord {
    /// Slots that received a stone, in sowing order (with repeats on long laps).
    pub fn sown_slots(&self, board: &Board) -> Vec<usize> {
        let skip = board.store_index(self.mover.opponent());
        let mut slot = self.pit;
        (0..self.sown)
            .map(|_| {
                slot = next_slot(slot, board.slot_count(), skip);
                slot
            })
            .collect()
    }

    /// True when this move finished the game
    #[inline]
    pub fn ended_game(&self) -> bool {
        self.sweep.is_some()
    }
}

#[inline]
fn next_slot(slot: usize, slot_count: usize, skip: usize) -> usize {
    let mut next = (slot + 1) % slot_count;
    if next == skip {
        next = (next + 1) % slot_count;
    }
    next
}

/// Play `pit` in place.
///
/// The board is validated before anything changes, so an illegal pit leaves
/// it untouched.
pub fn make_move(board: &mut Board, pit: usize) -> KalahResult<MoveRecord> {
    validate_move(board, pit)?;
    Ok(play(board, pit))
}

/// Sow an already validated pit. Used by the search on pits taken from
/// [`legal_moves`](super::legal_moves).
pub(crate) fn play(board: &mut Board, pit: usize) -> MoveRecord {
    debug_assert!(super::legal::is_valid_move(board, pit));

    let mover = board.current_player();
    let skip = board.store_index(mover.opponent());
    let slot_count = board.slot_count();

    let sown = board.take_stones(pit);
    let mut slot = pit;
    for _ in 0..sown {
        slot = next_slot(slot, slot_count, skip);
        board.add_stones(slot, 1);
    }

    let extra_turn = slot == board.store_index(mover);
    let capture = if extra_turn {
        None
    } else {
        board.set_current_player(mover.opponent());
        execute_capture(board, mover, slot)
    };
    let sweep = sweep_if_over(board);

    debug_assert_eq!(board.count_stones(), board.total_stones());

    MoveRecord {
        pit,
        sown,
        mover,
        last_slot: slot,
        extra_turn,
        capture,
        sweep,
    }
}

/// Undo a move made by [`make_move`] on the same board.
///
/// Records must be unmade in reverse order of making.
pub fn unmake_move(board: &mut Board, record: &MoveRecord) {
    if let Some(sweep) = &record.sweep {
        undo_sweep(board, sweep);
    }
    if let Some(capture) = &record.capture {
        undo_capture(board, record.mover, capture);
    }

    let skip = board.store_index(record.mover.opponent());
    let slot_count = board.slot_count();
    let mut slot = record.pit;
    for _ in 0..record.sown {
        slot = next_slot(slot, slot_count, skip);
        board.remove_stones(slot, 1);
    }
    // Laps put stones back into the source pit; it is empty again here
    board.set_stones(record.pit, record.sown);
    board.set_current_player(record.mover);

    debug_assert_eq!(board.count_stones(), board.total_stones());
}

/// Play `pit` on a copy, leaving `board` unchanged.
pub fn apply_move(board: &Board, pit: usize) -> KalahResult<(Board, MoveRecord)> {
    validate_move(board, pit)?;
    let mut next = board.clone();
    let record = play(&mut next, pit);
    Ok((next, record))
}

impl Board {
    /// Position after playing `pit`.
    ///
    /// # Example
    ///
    /// ```
    /// use kalah::{create_board, Player};
    ///
    /// let board = create_board(6, 4).unwrap();
    /// let next = board.apply_move(2).unwrap();
    /// // Last stone lands in the store: same player moves again
    /// assert_eq!(next.current_player(), Player::Zero);
    /// assert_eq!(next.store(Player::Zero), 1);
    /// assert_eq!(board.store(Player::Zero), 0);
    /// ```
    pub fn apply_move(&self, pit: usize) -> KalahResult<Board> {
        apply_move(self, pit).map(|(board, _)| board)
    }
}
