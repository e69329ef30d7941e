//! Exhaustive minimax search
//!
//! Plain depth-scored minimax over the whole remaining game tree. There is no
//! pruning, move ordering or transposition table: on a 3x3 board the full
//! tree from an empty position is 549,946 nodes, and the visited node count is
//! part of the result so the exhaustiveness can be checked.
//!
//! # Scoring
//!
//! - Win for the maximizer: `WIN_SCORE - depth`
//! - Win for the minimizer: `-WIN_SCORE + depth`
//! - Draw: `0`
//!
//! Faster wins and slower losses therefore score better.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Cell};
//! use tictactoe::search::Searcher;
//!
//! let board: Board = "XX./.O./...".parse().unwrap();
//! let result = Searcher::new(Cell::O).search(&board);
//! assert_eq!(result.best_move, Some(2));
//! ```

use tracing::debug;

use crate::board::{Board, Cell, TOTAL_CELLS};
use crate::rules::{evaluate, Outcome};

/// Base score of a win found at depth 0
pub const WIN_SCORE: i32 = 10;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` on a terminal board
    pub best_move: Option<usize>,
    /// Score from the maximizer's point of view
    pub score: i32,
    /// Total nodes visited, including the root
    pub nodes: u64,
}

/// Minimax searcher for one side.
///
/// The maximizer is the mark the search picks a move for; its opponent
/// minimizes.
#[derive(Debug, Clone)]
pub struct Searcher {
    maximizer: Cell,
    nodes: u64,
}

impl Searcher {
    pub fn new(maximizer: Cell) -> Self {
        debug_assert!(!maximizer.is_empty());
        Self { maximizer, nodes: 0 }
    }

    #[inline]
    pub fn maximizer(&self) -> Cell {
        self.maximizer
    }

    /// Search the full tree below `board` with the maximizer to move.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let (score, best_move) = self.minimax(board, 0, true);
        let result = SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        };
        debug!(
            maximizer = %self.maximizer,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            "minimax finished"
        );
        result
    }

    fn minimax(&mut self, board: &Board, depth: i32, maximizing: bool) -> (i32, Option<usize>) {
        self.nodes += 1;

        match evaluate(board) {
            Outcome::Win(mark) if mark == self.maximizer => return (WIN_SCORE - depth, None),
            Outcome::Win(_) => return (-WIN_SCORE + depth, None),
            Outcome::Draw => return (0, None),
            Outcome::InProgress => {}
        }

        let mark = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };

        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for idx in 0..TOTAL_CELLS {
            if !board.is_empty(idx) {
                continue;
            }
            let (score, _) = self.minimax(&board.with(idx, mark), depth + 1, !maximizing);
            // Strict comparison keeps the lowest index on ties
            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better {
                best_score = score;
                best_move = Some(idx);
            }
        }

        (best_score, best_move)
    }
}
