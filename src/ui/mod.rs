//! GUI module for the Kalah game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::KalahApp;
pub use game_state::{GameState, PlayMode};
