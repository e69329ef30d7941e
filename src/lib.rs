//! Tic-tac-toe engine with a selectable-strength AI
//!
//! Classic 3x3 tic-tac-toe:
//! - X moves first, players alternate
//! - Three in a row (row, column or diagonal) wins
//! - A full board without a line is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation (nine cells, row-major)
//! - [`rules`]: Win and draw detection
//! - [`search`]: Exhaustive minimax search
//! - [`engine`]: Easy / Medium / Hard move policies
//! - [`ui`]: egui front end acting as the turn controller
//!
//! # Quick Start
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tictactoe::{choose_move, evaluate, Board, Cell, Difficulty, Outcome};
//!
//! let mut board = Board::new();
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! // Human opens in the corner, AI answers as O
//! board.place(0, Cell::X).unwrap();
//! let reply = choose_move(&board, Cell::O, Difficulty::Hard, &mut rng).unwrap();
//! board.place(reply, Cell::O).unwrap();
//!
//! assert_eq!(reply, 4);
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use engine::{choose_move, choose_move_with_stats, AIEngine, Difficulty, MoveResult, SearchType};
pub use error::EngineError;
pub use rules::{evaluate, Outcome};
