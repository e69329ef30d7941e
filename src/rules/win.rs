//! Win and draw detection for tic-tac-toe
//!
//! A game ends when one mark fills any of the eight lines, or when the board
//! is full without such a line.

use crate::board::{Board, Cell, TOTAL_CELLS};

/// The eight winning lines, in fixed scan order: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Classification of a board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Win(Cell),
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Classify the board.
///
/// The first completed line in [`LINES`] order decides the winner, so the
/// result is deterministic even on boards no legal game can reach.
pub fn evaluate(board: &Board) -> Outcome {
    match check_winner(board) {
        Some(mark) => Outcome::Win(mark),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

/// Mark owning the first completed line, if any
#[inline]
pub fn check_winner(board: &Board) -> Option<Cell> {
    find_winning_line(board).map(|[a, _, _]| board.get(a))
}

/// First completed line in scan order
pub fn find_winning_line(board: &Board) -> Option<[usize; 3]> {
    LINES.iter().copied().find(|&[a, b, c]| {
        let cell = board.get(a);
        !cell.is_empty() && cell == board.get(b) && cell == board.get(c)
    })
}

/// First empty cell (scanning 0 to 8) where `mark` would complete a line.
///
/// Returns `None` for `Cell::Empty`.
pub fn find_winning_move(board: &Board, mark: Cell) -> Option<usize> {
    if mark.is_empty() {
        return None;
    }
    (0..TOTAL_CELLS)
        .filter(|&idx| board.is_empty(idx))
        .find(|&idx| check_winner(&board.with(idx, mark)) == Some(mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
        assert!(!Outcome::InProgress.is_terminal());
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for mark in [Cell::X, Cell::O] {
                let mut b = Board::new();
                for idx in line {
                    b.set(idx, mark);
                }
                assert_eq!(evaluate(&b), Outcome::Win(mark), "line {line:?}");
                assert_eq!(find_winning_line(&b), Some(line));
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        for s in ["XOXXOOOXX", "XXOOOXXOX", "OXOXXOXOX"] {
            let b = board(s);
            assert_eq!(evaluate(&b), Outcome::Draw, "{s}");
            assert!(evaluate(&b).is_terminal());
        }
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        // Last move completes the anti-diagonal on a full board
        let b = board("XOX/OXO/XOO");
        assert_eq!(evaluate(&b), Outcome::Win(Cell::X));
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Row 0 is X, row 2 is O: unreachable in play, but resolution is fixed
        let b = board("XXX/.../OOO");
        assert_eq!(evaluate(&b), Outcome::Win(Cell::X));
        assert_eq!(find_winning_line(&b), Some([0, 1, 2]));

        // Column 0 and the main diagonal both complete; the column comes first
        let b = board("XOO/XXO/X.X");
        assert_eq!(find_winning_line(&b), Some([0, 3, 6]));
    }

    #[test]
    fn test_partial_line_in_progress() {
        let b = board("XX./OO./...");
        assert_eq!(evaluate(&b), Outcome::InProgress);
        assert_eq!(check_winner(&b), None);
    }

    #[test]
    fn test_find_winning_move() {
        let b = board("XX./OO./X..");
        assert_eq!(find_winning_move(&b, Cell::X), Some(2));
        assert_eq!(find_winning_move(&b, Cell::O), Some(5));
        assert_eq!(find_winning_move(&b, Cell::Empty), None);
        assert_eq!(find_winning_move(&Board::new(), Cell::X), None);
    }

    #[test]
    fn test_find_winning_move_lowest_index_first() {
        // X threatens both index 1 (top row) and index 3 (left column)
        let b = board("X.X/.O./X.O");
        assert_eq!(find_winning_move(&b, Cell::X), Some(1));
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let b = board("XO./.X./..O");
        let snapshot = b;
        let _ = evaluate(&b);
        let _ = find_winning_move(&b, Cell::X);
        assert_eq!(b, snapshot);
    }
}
