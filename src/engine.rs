//! Move selection for the automated player
//!
//! Three difficulty tiers share one entry point:
//!
//! 1. **Easy**: uniform random empty cell
//! 2. **Medium**: random cell, unless the opponent could complete a line next
//!    turn, in which case the first such cell is blocked. Medium never looks
//!    for its own winning move.
//! 3. **Hard**: exhaustive minimax; never loses
//!
//! Randomness always comes from the caller, so a seeded generator makes every
//! tier reproducible.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tictactoe::{choose_move, Board, Cell, Difficulty};
//!
//! let board: Board = "XX./.O./...".parse().unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let idx = choose_move(&board, Cell::O, Difficulty::Medium, &mut rng).unwrap();
//! assert_eq!(idx, 2);
//! ```

use std::time::Instant;

use derive_more::Display;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::board::{Board, Cell};
use crate::error::EngineError;
use crate::rules::{evaluate, find_winning_move, Outcome};
use crate::search::Searcher;

/// Strength of the automated player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, clap::ValueEnum)]
pub enum Difficulty {
    #[display("easy")]
    Easy,
    #[default]
    #[display("medium")]
    Medium,
    #[display("hard")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

/// Which part of a policy produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Uniform random pick
    Random,
    /// Block of the opponent's immediate win
    Defense,
    /// Exhaustive minimax
    Minimax,
}

/// Result of a move selection with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen cell index, always empty on the input board
    pub best_move: usize,
    /// Minimax score, only for `SearchType::Minimax`
    pub score: Option<i32>,
    /// Part of the policy that picked the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn random(idx: usize, time_ms: u64) -> Self {
        Self {
            best_move: idx,
            score: None,
            search_type: SearchType::Random,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn defense(idx: usize, time_ms: u64) -> Self {
        Self {
            best_move: idx,
            score: None,
            search_type: SearchType::Defense,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn minimax(idx: usize, score: i32, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: idx,
            score: Some(score),
            search_type: SearchType::Minimax,
            time_ms,
            nodes,
        }
    }
}

/// Pick a cell for `active` on `board`.
///
/// Fails with `InvalidInput` when `active` is `Cell::Empty` and with
/// `PreconditionViolation` when the game is already decided.
pub fn choose_move<R: Rng>(
    board: &Board,
    active: Cell,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize, EngineError> {
    choose_move_with_stats(board, active, difficulty, rng).map(|result| result.best_move)
}

/// Same as [`choose_move`], also reporting how the move was found.
#[instrument(level = "debug", skip(board, rng), fields(board = %board))]
pub fn choose_move_with_stats<R: Rng>(
    board: &Board,
    active: Cell,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<MoveResult, EngineError> {
    let start = Instant::now();

    if active.is_empty() {
        return Err(EngineError::invalid_input("active mark must be X or O"));
    }
    match evaluate(board) {
        Outcome::InProgress => {}
        outcome => {
            return Err(EngineError::precondition(format!(
                "no legal move, game already ended with {outcome:?}"
            )))
        }
    }

    let result = match difficulty {
        Difficulty::Easy => {
            let idx = random_move(board, rng)?;
            MoveResult::random(idx, elapsed_ms(start))
        }
        Difficulty::Medium => {
            // The random draw happens even when it gets overridden
            let idx = random_move(board, rng)?;
            match find_winning_move(board, active.opponent()) {
                Some(block) => MoveResult::defense(block, elapsed_ms(start)),
                None => MoveResult::random(idx, elapsed_ms(start)),
            }
        }
        Difficulty::Hard => {
            let search = Searcher::new(active).search(board);
            let idx = search
                .best_move
                .ok_or_else(|| EngineError::precondition("search found no move"))?;
            MoveResult::minimax(idx, search.score, elapsed_ms(start), search.nodes)
        }
    };

    debug!(
        best_move = result.best_move,
        search_type = ?result.search_type,
        "move chosen"
    );
    Ok(result)
}

fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Result<usize, EngineError> {
    let empty: Vec<usize> = board.empty_cells().collect();
    if empty.is_empty() {
        return Err(EngineError::precondition("board has no empty cell"));
    }
    Ok(empty[rng.random_range(0..empty.len())])
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Engine owning its random source.
///
/// Holds nothing but the generator; difficulty is passed per call.
///
/// ```
/// use tictactoe::{AIEngine, Board, Cell, Difficulty};
///
/// let mut engine = AIEngine::with_seed(42);
/// let board: Board = "X../.../...".parse().unwrap();
/// assert_eq!(engine.get_move(&board, Cell::O, Difficulty::Hard).unwrap(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct AIEngine<R = StdRng> {
    rng: R,
}

impl AIEngine<StdRng> {
    /// Engine seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Engine with a reproducible random sequence.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for AIEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AIEngine<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn get_move(
        &mut self,
        board: &Board,
        mark: Cell,
        difficulty: Difficulty,
    ) -> Result<usize, EngineError> {
        choose_move(board, mark, difficulty, &mut self.rng)
    }

    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        mark: Cell,
        difficulty: Difficulty,
    ) -> Result<MoveResult, EngineError> {
        choose_move_with_stats(board, mark, difficulty, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_never_returns_occupied_cell() {
        let positions = ["X........", "XO..X....", "XOX.O.X..", "XOXOXO.O.", "OX.XO.X.."];
        let mut rng = rng(1);
        for s in positions {
            let b = board(s);
            for difficulty in Difficulty::ALL {
                for _ in 0..50 {
                    let idx = choose_move(&b, Cell::O, difficulty, &mut rng).unwrap();
                    assert!(b.is_empty(idx), "{difficulty} picked {idx} on {s}");
                }
            }
        }
    }

    #[test]
    fn test_easy_is_roughly_uniform() {
        let mut rng = rng(2024);
        let mut counts = [0u32; TOTAL_CELLS];
        let b = Board::new();
        for _ in 0..9000 {
            counts[choose_move(&b, Cell::X, Difficulty::Easy, &mut rng).unwrap()] += 1;
        }
        for (idx, &count) in counts.iter().enumerate() {
            assert!((800..=1200).contains(&count), "cell {idx} picked {count} times");
        }
    }

    #[test]
    fn test_easy_is_reproducible_with_same_seed() {
        let b = board("X...O....");
        let a: Vec<_> = {
            let mut r = rng(9);
            (0..20)
                .map(|_| choose_move(&b, Cell::X, Difficulty::Easy, &mut r).unwrap())
                .collect()
        };
        let c: Vec<_> = {
            let mut r = rng(9);
            (0..20)
                .map(|_| choose_move(&b, Cell::X, Difficulty::Easy, &mut r).unwrap())
                .collect()
        };
        assert_eq!(a, c);
    }

    #[test]
    fn test_easy_single_empty_cell() {
        let b = board("XOX/OOX/XX.");
        let result = choose_move_with_stats(&b, Cell::O, Difficulty::Easy, &mut rng(0)).unwrap();
        assert_eq!(result.best_move, 8);
        assert_eq!(result.search_type, SearchType::Random);
    }

    #[test]
    fn test_medium_blocks_threat() {
        let b = board("XX./.O./...");
        for seed in 0..20 {
            let result =
                choose_move_with_stats(&b, Cell::O, Difficulty::Medium, &mut rng(seed)).unwrap();
            assert_eq!(result.best_move, 2);
            assert_eq!(result.search_type, SearchType::Defense);
        }
    }

    #[test]
    fn test_medium_blocks_lowest_threat_first() {
        // X threatens 1 and 3
        let b = board("X.X/.O./X.O");
        for seed in 0..20 {
            assert_eq!(
                choose_move(&b, Cell::O, Difficulty::Medium, &mut rng(seed)).unwrap(),
                1
            );
        }
    }

    #[test]
    fn test_medium_defends_instead_of_winning() {
        // O could win at 5 but Medium only looks at X's threat at 2
        let b = board("XX./OO./X..");
        let result = choose_move_with_stats(&b, Cell::O, Difficulty::Medium, &mut rng(3)).unwrap();
        assert_eq!(result.best_move, 2);
        assert_eq!(result.search_type, SearchType::Defense);

        let hard = choose_move(&b, Cell::O, Difficulty::Hard, &mut rng(3)).unwrap();
        assert_eq!(hard, 5);
    }

    #[test]
    fn test_medium_without_threat_matches_easy() {
        // Same seed, no threat: Medium falls back to the same random draw
        let b = board("X...O....");
        for seed in 0..10 {
            let easy = choose_move(&b, Cell::O, Difficulty::Easy, &mut rng(seed)).unwrap();
            let medium =
                choose_move_with_stats(&b, Cell::O, Difficulty::Medium, &mut rng(seed)).unwrap();
            assert_eq!(medium.best_move, easy);
            assert_eq!(medium.search_type, SearchType::Random);
        }
    }

    #[test]
    fn test_medium_defends_for_either_mark() {
        // O threatens the middle column; X on Medium blocks at 7
        let b = board("XO./.O./X..");
        assert_eq!(
            choose_move(&b, Cell::X, Difficulty::Medium, &mut rng(5)).unwrap(),
            7
        );
    }

    #[test]
    fn test_hard_reference_positions() {
        let cases = [
            ("XOX/OXO/...", 6, -8),
            ("XX./OO./X..", 5, 9),
            ("XX./.O./...", 2, 0),
            ("X../.../...", 4, 0),
        ];
        for (s, expected, score) in cases {
            let result =
                choose_move_with_stats(&board(s), Cell::O, Difficulty::Hard, &mut rng(0)).unwrap();
            assert_eq!(result.best_move, expected, "{s}");
            assert_eq!(result.score, Some(score), "{s}");
            assert_eq!(result.search_type, SearchType::Minimax);
            assert!(result.nodes > 0);
        }
    }

    #[test]
    fn test_hard_self_play_is_draw() {
        let mut b = Board::new();
        let mut mark = Cell::X;
        let mut r = rng(0);
        while evaluate(&b) == Outcome::InProgress {
            let idx = choose_move(&b, mark, Difficulty::Hard, &mut r).unwrap();
            b.place(idx, mark).unwrap();
            mark = mark.opponent();
        }
        assert_eq!(evaluate(&b), Outcome::Draw);
        assert_eq!(b, board("XXOOOXXOX"));
    }

    #[test]
    fn test_hard_never_loses_to_random_play() {
        let mut r = rng(77);
        for _ in 0..30 {
            let mut b = Board::new();
            let mut mark = Cell::X;
            while evaluate(&b) == Outcome::InProgress {
                let difficulty = if mark == Cell::X {
                    Difficulty::Easy
                } else {
                    Difficulty::Hard
                };
                let idx = choose_move(&b, mark, difficulty, &mut r).unwrap();
                b.place(idx, mark).unwrap();
                mark = mark.opponent();
            }
            assert_ne!(evaluate(&b), Outcome::Win(Cell::X), "lost on\n{b}");
        }
    }

    #[test]
    fn test_board_unchanged_after_choose_move() {
        let b = board("X../.O./..X");
        let snapshot = b;
        for difficulty in Difficulty::ALL {
            let _ = choose_move(&b, Cell::O, difficulty, &mut rng(11)).unwrap();
            assert_eq!(b, snapshot);
        }
    }

    #[test]
    fn test_rejects_terminal_board() {
        for s in ["XXX/OO./...", "XXOOOXXOX"] {
            for difficulty in Difficulty::ALL {
                let err = choose_move(&board(s), Cell::O, difficulty, &mut rng(0)).unwrap_err();
                assert!(
                    matches!(err, EngineError::PreconditionViolation { .. }),
                    "{s} {difficulty}: {err}"
                );
            }
        }
    }

    #[test]
    fn test_rejects_empty_active_mark() {
        let err = choose_move(&Board::new(), Cell::Empty, Difficulty::Easy, &mut rng(0)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { .. }));
    }

    #[test]
    fn test_engine_wrapper() {
        let mut engine = AIEngine::with_seed(1);
        let b = board("XX./.O./...");
        assert_eq!(engine.get_move(&b, Cell::O, Difficulty::Hard).unwrap(), 2);
        let result = engine
            .get_move_with_stats(&b, Cell::O, Difficulty::Medium)
            .unwrap();
        assert_eq!(result.best_move, 2);
    }

    #[test]
    fn test_difficulty_display_and_default() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }
}
