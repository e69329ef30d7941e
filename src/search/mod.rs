//! Search module for the tic-tac-toe AI
//!
//! Contains the exhaustive minimax searcher used by the hard difficulty.

pub mod minimax;

pub use minimax::{SearchResult, Searcher, WIN_SCORE};
