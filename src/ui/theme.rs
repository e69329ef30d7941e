//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(44, 47, 53);
pub const GRID_LINE: Color32 = Color32::from_rgb(150, 155, 165);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(90, 170, 255);
pub const O_MARK: Color32 = Color32::from_rgb(255, 140, 90);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(200, 200, 200, 40)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const BUTTON_ACTIVE: Color32 = Color32::from_rgb(70, 110, 80);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const STATUS_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const WINDOW_SIZE: [f32; 2] = [720.0, 480.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [560.0, 380.0];
pub const BOARD_MARGIN: f32 = 16.0;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const MARK_RATIO: f32 = 0.3;
pub const MARK_STROKE_WIDTH: f32 = 8.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
