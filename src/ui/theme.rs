//! Theme constants for the checkers GUI

use egui::Color32;

// Board squares
pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(238, 220, 180);
pub const DARK_SQUARE: Color32 = Color32::from_rgb(118, 80, 50);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(70, 45, 25);
pub const COORD_LABEL: Color32 = Color32::from_rgb(160, 165, 175);

// Men
pub const PLAYER_MAN: Color32 = Color32::from_rgb(200, 40, 40);
pub const PLAYER_MAN_HIGHLIGHT: Color32 = Color32::from_rgb(235, 95, 95);
pub const AI_MAN: Color32 = Color32::from_rgb(40, 80, 200);
pub const AI_MAN_HIGHLIGHT: Color32 = Color32::from_rgb(100, 140, 240);
pub const MAN_OUTLINE: Color32 = Color32::from_rgb(20, 20, 25);

// Markers
pub const SELECTED_RING: Color32 = Color32::from_rgb(255, 255, 255);
pub const TARGET_MARKER: Color32 = Color32::from_rgb(250, 220, 40);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(80, 220, 120);
pub const SUGGESTION_MARKER: Color32 = Color32::from_rgb(80, 200, 255);

pub fn hover_square() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 40)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const MAN_RADIUS_RATIO: f32 = 0.38;
pub const TARGET_RADIUS_RATIO: f32 = 0.14;
pub const MARKER_STROKE: f32 = 3.0;
