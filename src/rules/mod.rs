//! Game rules for tic-tac-toe
//!
//! Three in a row wins; a full board without a line is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, evaluate, find_winning_line, find_winning_move, Outcome, LINES};
