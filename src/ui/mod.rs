//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe. It plays the
//! turn controller role: it owns the board and turn flag and calls into the
//! engine for the automated side.

mod app;
mod board_view;
mod game_state;
pub mod theme;

pub use app::TicTacToeApp;
pub use game_state::{GameState, AI, HUMAN};
