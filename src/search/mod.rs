//! Search module for the Kalah AI
//!
//! Contains:
//! - Depth-limited negamax with alpha-beta pruning
//! - Search configuration, statistics and results

pub mod alphabeta;

pub use alphabeta::{best_move, SearchConfig, SearchResult, SearchStats, Searcher};
