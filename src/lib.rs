//! Kalah (Mancala) engine with alpha-beta search
//!
//! Plays the classical two-row, two-store Kalah ruleset on boards of any
//! width (1 to 16 pits per side) and starting stone count:
//! - Sowing counter-clockwise, skipping the opponent's store
//! - Extra turn when the last stone lands in the mover's store
//! - Capture when the last stone lands in an empty pit on the mover's row
//! - Game over as soon as a row is empty; the other row is swept home
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Flat board representation and shape
//! - [`rules`]: Legal moves, sowing with make/unmake, capture, game end
//! - [`eval`]: Position evaluation and weights
//! - [`search`]: Depth-limited negamax with alpha-beta pruning
//! - [`engine`]: AI facade with timing and logging
//! - [`config`]: JSON match configuration
//! - [`simulation`]: Headless AI-vs-AI matches
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use kalah::{apply_move, best_move, create_board, legal_moves, winner, Player};
//!
//! let mut board = create_board(6, 4).unwrap();
//! assert_eq!(legal_moves(&board), vec![0, 1, 2, 3, 4, 5]);
//!
//! // Pit 2 ends in the store: player 0 moves again
//! let (next, record) = apply_move(&board, 2).unwrap();
//! assert!(record.extra_turn);
//! assert_eq!(next.current_player(), Player::Zero);
//! board = next;
//!
//! let (pit, score) = best_move(&board, 4).unwrap();
//! println!("Best pit {pit}, score {score}");
//! assert!(winner(&board).is_none());
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod simulation;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{create_board, Board, BoardShape, Outcome, Player};
pub use config::KalahConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{IllegalMoveReason, KalahError, KalahResult};
pub use eval::{evaluate, EvalWeights};
pub use rules::{
    apply_move, is_terminal, legal_moves, make_move, unmake_move, validate_move, winner, MoveRecord,
};
pub use search::{best_move, SearchConfig, SearchResult, Searcher};
