//! Evaluation of Kalah positions
//!
//! The static evaluation ranks positions by three terms in strict priority:
//! - Finished games (win, loss or draw)
//! - Store difference
//! - Stones left on each row

pub mod heuristic;
pub mod weights;

pub use heuristic::evaluate;
pub use weights::{EvalWeights, Score};
