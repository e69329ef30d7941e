//! Board rendering for the tic-tac-toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Cell, Pos, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Cell,
        last_move: Option<usize>,
        winning_line: Option<[usize; 3]>,
        accepts_input: bool,
    ) -> Option<usize> {
        let available_size = ui.available_size();

        // Square board fitting the available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(idx) = last_move {
            self.draw_last_move_marker(&painter, idx);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Hover preview and click
        let mut clicked = None;

        if accepts_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    let idx = pos.to_index();
                    if board.is_empty(idx) {
                        self.draw_hover_preview(&painter, idx, current_turn);
                        if response.clicked() {
                            clicked = Some(idx);
                        }
                    }
                }
            }
        }

        clicked
    }

    /// Draw the two inner vertical and horizontal lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (idx, &cell) in board.cells().iter().enumerate() {
            if !cell.is_empty() {
                self.draw_mark(painter, idx, cell, 255);
            }
        }
    }

    /// Draw X as two strokes and O as a ring
    fn draw_mark(&self, painter: &Painter, idx: usize, cell: Cell, alpha: u8) {
        let center = self.cell_center(idx);
        let r = self.cell_size * MARK_RATIO;

        match cell {
            Cell::X => {
                let color = X_MARK.gamma_multiply(alpha as f32 / 255.0);
                let stroke = Stroke::new(MARK_STROKE_WIDTH, color);
                painter.line_segment([center + Vec2::new(-r, -r), center + Vec2::new(r, r)], stroke);
                painter.line_segment([center + Vec2::new(r, -r), center + Vec2::new(-r, r)], stroke);
            }
            Cell::O => {
                let color = O_MARK.gamma_multiply(alpha as f32 / 255.0);
                painter.circle_stroke(center, r, Stroke::new(MARK_STROKE_WIDTH, color));
            }
            Cell::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, idx: usize) {
        let offset = Vec2::splat(self.cell_size * 0.4);
        painter.circle_filled(
            self.cell_center(idx) - offset,
            LAST_MOVE_MARKER_RADIUS,
            LAST_MOVE_MARKER,
        );
    }

    /// Draw a stroke through the winning line
    fn draw_winning_line(&self, painter: &Painter, line: &[usize; 3]) {
        let stroke = Stroke::new(6.0, WIN_HIGHLIGHT);
        painter.line_segment([self.cell_center(line[0]), self.cell_center(line[2])], stroke);
    }

    /// Faded mark of the player to move
    fn draw_hover_preview(&self, painter: &Painter, idx: usize, turn: Cell) {
        let center = self.cell_center(idx);
        let half = Vec2::splat(self.cell_size * 0.5 - 4.0);
        painter.rect_filled(
            Rect::from_center_size(center, half * 2.0),
            CornerRadius::same(6),
            hover_valid(),
        );
        self.draw_mark(painter, idx, turn, 80);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    pub fn cell_center(&self, idx: usize) -> Pos2 {
        let pos = Pos::from_index(idx);
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 100.0,
            board_rect: Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(332.0)),
        }
    }

    #[test]
    fn test_screen_to_board_roundtrip() {
        let view = view();
        for idx in 0..9 {
            let center = view.cell_center(idx);
            assert_eq!(view.screen_to_board(center).map(Pos::to_index), Some(idx));
        }
    }

    #[test]
    fn test_screen_to_board_outside() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(0.0, 0.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(500.0, 100.0)), None);
    }
}
