//! Game rules for Kalah
//!
//! This module implements the rule set:
//! - Legal move generation and validation
//! - Sowing with extra turns (last stone in own store)
//! - Capture (last stone in a previously empty own pit)
//! - End of game sweep and winner
//!
//! Every move exists in two forms: [`apply_move`] returns a fresh board and
//! leaves its input alone, while [`make_move`] / [`unmake_move`] mutate a board
//! in place and restore it exactly. The search uses the second form.

pub mod capture;
pub mod legal;
pub mod sowing;
pub mod terminal;

// Re-exports for convenient access
pub use capture::{opposite_pit, Capture};
pub use legal::{has_legal_move, is_valid_move, legal_moves, validate_move};
pub use sowing::{apply_move, make_move, unmake_move, MoveRecord};
pub(crate) use sowing::play;
pub use terminal::{is_terminal, store_margin, sweep_if_over, winner, Sweep};
