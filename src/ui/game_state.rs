//! Game state management for the tic-tac-toe GUI

use tracing::{info, warn};

use crate::rules::{evaluate, find_winning_line, Outcome};
use crate::{AIEngine, Board, Cell, Difficulty, MoveResult};

/// Mark played by the human; it always opens the game.
pub const HUMAN: Cell = Cell::X;
/// Mark played by the engine.
pub const AI: Cell = Cell::O;

/// Main game state
pub struct GameState {
    pub board: Board,
    pub current_turn: Cell,
    pub difficulty: Difficulty,
    pub outcome: Outcome,
    pub last_move: Option<usize>,
    pub move_history: Vec<(usize, Cell)>,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,
    engine: AIEngine,
}

impl GameState {
    pub fn new(difficulty: Difficulty, seed: Option<u64>) -> Self {
        let engine = match seed {
            Some(seed) => AIEngine::with_seed(seed),
            None => AIEngine::new(),
        };
        Self {
            board: Board::new(),
            current_turn: HUMAN,
            difficulty,
            outcome: Outcome::InProgress,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            message: None,
            engine,
        }
    }

    /// Start over with an empty board; difficulty is kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = HUMAN;
        self.outcome = Outcome::InProgress;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.message = None;
        info!(difficulty = %self.difficulty, "new game");
    }

    /// Change difficulty mid-game without restarting
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            info!(from = %self.difficulty, to = %difficulty, "difficulty changed");
            self.difficulty = difficulty;
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_game_over() && self.current_turn == HUMAN
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_game_over() && self.current_turn == AI
    }

    /// Cells of the completed line, for highlighting
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        find_winning_line(&self.board)
    }

    /// Attempt to place the human's mark at `idx`
    pub fn try_place(&mut self, idx: usize) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        self.execute_move(idx)
    }

    /// Let the engine move if it is its turn. Returns whether a move was made.
    pub fn play_ai_turn(&mut self) -> bool {
        if !self.is_ai_turn() {
            return false;
        }

        let result = match self
            .engine
            .get_move_with_stats(&self.board, self.current_turn, self.difficulty)
        {
            Ok(result) => result,
            Err(err) => {
                warn!(%err, "engine could not move");
                self.message = Some(format!("AI error: {err}"));
                return false;
            }
        };

        self.last_ai_result = Some(result);
        match self.execute_move(result.best_move) {
            Ok(()) => true,
            Err(msg) => {
                self.message = Some(msg);
                false
            }
        }
    }

    /// Apply a move for whoever is on turn (human or engine)
    fn execute_move(&mut self, idx: usize) -> Result<(), String> {
        let mark = self.current_turn;
        self.board.place(idx, mark).map_err(|err| err.to_string())?;

        self.move_history.push((idx, mark));
        self.last_move = Some(idx);
        self.message = None;

        self.outcome = evaluate(&self.board);
        match self.outcome {
            Outcome::InProgress => self.current_turn = mark.opponent(),
            outcome => info!(?outcome, moves = self.move_history.len(), "game over"),
        }
        Ok(())
    }

    /// Status line shown above the board
    pub fn status_text(&self) -> String {
        match self.outcome {
            Outcome::Win(mark) => format!("Winner: {mark}"),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.current_turn),
        }
    }
}
