//! Main application for the tic-tac-toe GUI

use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::{GameState, AI, HUMAN};
use super::theme::*;
use crate::rules::Outcome;
use crate::{Difficulty, SearchType};

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self {
            state: GameState::new(difficulty, seed),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("You: {HUMAN}  AI: {AI}"));
                });
            });
        });
    }

    /// Render the side panel with status, difficulty and debug info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_difficulty_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = match self.state.outcome {
                Outcome::Win(mark) if mark == HUMAN => STATUS_NORMAL,
                Outcome::Win(_) => STATUS_WARNING,
                Outcome::Draw => TEXT_SECONDARY,
                Outcome::InProgress => TEXT_PRIMARY,
            };
            ui.label(RichText::new(self.state.status_text()).size(18.0).strong().color(color));
        });
    }

    /// Difficulty selector; switching keeps the current game going
    fn render_difficulty_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("DIFFICULTY").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                for difficulty in Difficulty::ALL {
                    let active = self.state.difficulty == difficulty;
                    let fill = if active { BUTTON_ACTIVE } else { BUTTON_BG };
                    let label = RichText::new(difficulty.to_string()).size(12.0).color(TEXT_PRIMARY);
                    if ui.add(egui::Button::new(label).fill(fill)).clicked() {
                        self.state.set_difficulty(difficulty);
                    }
                }
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let label = RichText::new("↻ Restart").size(12.0).color(TEXT_PRIMARY);
            if ui.add(egui::Button::new(label).fill(BUTTON_BG)).clicked() {
                self.state.reset();
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            let kind = match result.search_type {
                SearchType::Random => "Random",
                SearchType::Defense => "Block",
                SearchType::Minimax => "Minimax",
            };
            ui.label(RichText::new(kind).size(11.0).strong().color(STATUS_NORMAL));
            if let Some(score) = result.score {
                ui.label(RichText::new(format!("Score: {score}")).size(10.0).color(TEXT_SECONDARY));
            }
            ui.label(
                RichText::new(format!("{} nodes, {}ms", result.nodes, result.time_ms))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new(format!("→ cell {}", result.best_move))
                    .size(12.0)
                    .strong()
                    .color(WIN_HIGHLIGHT),
            );
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.current_turn,
                self.state.last_move,
                self.state.winning_line(),
                self.state.is_human_turn(),
            );

            if let Some(idx) = clicked {
                if let Err(msg) = self.state.try_place(idx) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }

            // 1/2/3 - Difficulty
            let keys = [egui::Key::Num1, egui::Key::Num2, egui::Key::Num3];
            for (key, difficulty) in keys.into_iter().zip(Difficulty::ALL) {
                if i.key_pressed(key) {
                    self.state.set_difficulty(difficulty);
                }
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The engine answers within the same frame
        if self.state.play_ai_turn() {
            ctx.request_repaint();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Let the engine reply to a click made during this frame
        if self.state.is_ai_turn() {
            ctx.request_repaint();
        }
    }
}
