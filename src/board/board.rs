//! Board structure with flat slot layout
//!
//! Slots `0..p` are player 0's pits, slot `p` is player 0's store,
//! slots `p+1..2p+1` are player 1's pits and slot `2p+1` is player 1's store.
//! Sowing walks the slots in increasing index order, wrapping at the end.

use std::fmt;
use std::ops::Range;

use super::{BoardShape, Player, MAX_TOTAL_STONES};
use crate::error::{KalahError, KalahResult};

/// Game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Stone counts for every pit and both stores
    slots: Vec<u32>,
    shape: BoardShape,
    current: Player,
    /// Fixed at construction; every move preserves it
    total_stones: u32,
}

impl Board {
    /// Starting layout for `shape`, player 0 to move.
    pub fn new(shape: BoardShape) -> KalahResult<Self> {
        shape.validate()?;
        Ok(Self::starting(shape))
    }

    fn starting(shape: BoardShape) -> Self {
        let p = shape.pits_per_side;
        let mut slots = vec![shape.stones_per_pit; shape.slot_count()];
        slots[p] = 0;
        slots[2 * p + 1] = 0;
        Self {
            slots,
            shape,
            current: Player::Zero,
            total_stones: shape.total_stones(),
        }
    }

    /// Build an arbitrary position.
    ///
    /// `slots` must hold `2 * pits_per_side + 2` counts in the flat layout.
    /// At most [`MAX_TOTAL_STONES`] stones are accepted in total. A position
    /// with an empty row is normalized by sweeping the other row into its
    /// store, so no terminal board ever strands stones.
    pub fn from_layout(shape: BoardShape, slots: Vec<u32>, to_move: Player) -> KalahResult<Self> {
        shape.validate()?;
        if slots.len() != shape.slot_count() {
            return Err(KalahError::config(format!(
                "layout needs {} slots for {} pits per side, got {}",
                shape.slot_count(),
                shape.pits_per_side,
                slots.len()
            )));
        }
        let total: u64 = slots.iter().map(|&n| u64::from(n)).sum();
        let total_stones = u32::try_from(total)
            .ok()
            .filter(|&n| n <= MAX_TOTAL_STONES)
            .ok_or_else(|| {
                KalahError::config(format!(
                    "layout holds {total} stones, at most {MAX_TOTAL_STONES} are supported"
                ))
            })?;
        let mut board = Self {
            slots,
            shape,
            current: to_move,
            total_stones,
        };
        crate::rules::sweep_if_over(&mut board);
        Ok(board)
    }

    #[inline]
    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    #[inline]
    pub fn pits_per_side(&self) -> usize {
        self.shape.pits_per_side
    }

    #[inline]
    pub fn stones_per_pit(&self) -> u32 {
        self.shape.stones_per_pit
    }

    /// Player who must move next
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[inline]
    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current = player;
    }

    /// Total stones on the board and in both stores
    #[inline]
    pub fn total_stones(&self) -> u32 {
        self.total_stones
    }

    /// Number of slots (pits plus stores)
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// All slots in the flat layout
    #[inline]
    pub fn slots(&self) -> &[u32] {
        &self.slots
    }

    /// Stones in a slot (pit or store)
    #[inline]
    pub fn stones(&self, slot: usize) -> u32 {
        self.slots[slot]
    }

    #[inline]
    pub(crate) fn set_stones(&mut self, slot: usize, count: u32) {
        self.slots[slot] = count;
    }

    #[inline]
    pub(crate) fn add_stones(&mut self, slot: usize, count: u32) {
        self.slots[slot] += count;
    }

    #[inline]
    pub(crate) fn remove_stones(&mut self, slot: usize, count: u32) {
        debug_assert!(self.slots[slot] >= count);
        self.slots[slot] -= count;
    }

    /// Empty a slot and return what it held
    #[inline]
    pub(crate) fn take_stones(&mut self, slot: usize) -> u32 {
        std::mem::take(&mut self.slots[slot])
    }

    /// Slot index of a player's store
    #[inline]
    pub fn store_index(&self, player: Player) -> usize {
        let p = self.pits_per_side();
        match player {
            Player::Zero => p,
            Player::One => 2 * p + 1,
        }
    }

    /// Stones banked by a player
    #[inline]
    pub fn store(&self, player: Player) -> u32 {
        self.slots[self.store_index(player)]
    }

    /// Pit indices owned by a player, in sowing order
    #[inline]
    pub fn row_range(&self, player: Player) -> Range<usize> {
        let p = self.pits_per_side();
        match player {
            Player::Zero => 0..p,
            Player::One => p + 1..2 * p + 1,
        }
    }

    /// Stone counts of a player's pits
    #[inline]
    pub fn row(&self, player: Player) -> &[u32] {
        &self.slots[self.row_range(player)]
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, player: Player) -> &mut [u32] {
        let range = self.row_range(player);
        &mut self.slots[range]
    }

    /// Stones left on a player's row
    #[inline]
    pub fn row_total(&self, player: Player) -> u32 {
        self.row(player).iter().sum()
    }

    #[inline]
    pub fn is_row_empty(&self, player: Player) -> bool {
        self.row(player).iter().all(|&n| n == 0)
    }

    /// Check if a slot is a pit (not a store and in range)
    #[inline]
    pub fn is_pit(&self, slot: usize) -> bool {
        let p = self.pits_per_side();
        slot < self.slot_count() && slot != p && slot != 2 * p + 1
    }

    /// Side owning a slot (pit or store)
    #[inline]
    pub fn owner_of(&self, slot: usize) -> Player {
        debug_assert!(slot < self.slot_count());
        if slot <= self.pits_per_side() {
            Player::Zero
        } else {
            Player::One
        }
    }

    /// Pit in the same column on the other row
    #[inline]
    pub fn opposite(&self, pit: usize) -> usize {
        debug_assert!(self.is_pit(pit));
        2 * self.pits_per_side() - pit
    }

    /// Pit index for a player's `column` (0 = first pit in sowing order)
    #[inline]
    pub fn pit_index(&self, player: Player, column: usize) -> usize {
        debug_assert!(column < self.pits_per_side());
        self.row_range(player).start + column
    }

    /// Sum of every slot; equals `total_stones` whenever the board is consistent
    #[inline]
    pub fn count_stones(&self) -> u32 {
        self.slots.iter().sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting(BoardShape::standard())
    }
}

/// Text diagram: player 1's row on top (right to left), stores at the ends.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top: Vec<String> = self
            .row(Player::One)
            .iter()
            .rev()
            .map(|n| format!("[{n:>2}]"))
            .collect();
        let bottom: Vec<String> = self
            .row(Player::Zero)
            .iter()
            .map(|n| format!("[{n:>2}]"))
            .collect();
        let width = top.join("").len();
        writeln!(f, "      {}", top.join(""))?;
        writeln!(
            f,
            "[{:>3}] {:width$} [{:>3}]",
            self.store(Player::One),
            "",
            self.store(Player::Zero),
        )?;
        writeln!(f, "      {}", bottom.join(""))?;
        write!(f, "to move: {}", self.current)
    }
}
