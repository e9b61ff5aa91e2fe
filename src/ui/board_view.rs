//! Board rendering for the checkers GUI

use crate::{Board, Cell, Move, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the board view needs to know beyond the pieces themselves
pub struct BoardOverlay<'a> {
    pub selected: Option<Pos>,
    pub targets: &'a [Pos],
    pub last_move: Option<Move>,
    pub suggested_move: Option<Move>,
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached square size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        // Fit the board into the available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        self.draw_squares(&painter);
        self.draw_coordinates(&painter);

        if let Some(mv) = overlay.last_move {
            self.draw_move_marker(&painter, mv, LAST_MOVE_MARKER);
        }
        if let Some(mv) = overlay.suggested_move {
            self.draw_move_marker(&painter, mv, SUGGESTION_MARKER);
        }

        self.draw_men(&painter, board);

        if let Some(pos) = overlay.selected {
            let radius = self.cell_size * MAN_RADIUS_RATIO + 3.0;
            painter.circle_stroke(self.board_to_screen(pos), radius, Stroke::new(MARKER_STROKE, SELECTED_RING));
        }
        for &pos in overlay.targets {
            let radius = self.cell_size * TARGET_RADIUS_RATIO;
            painter.circle_filled(self.board_to_screen(pos), radius, TARGET_MARKER);
        }

        if !overlay.interactive {
            return None;
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        painter.rect_filled(self.square_rect(hovered), CornerRadius::ZERO, hover_square());

        if response.clicked() {
            Some(hovered)
        } else {
            None
        }
    }

    fn draw_squares(&self, painter: &Painter) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let color = if pos.is_dark() { DARK_SQUARE } else { LIGHT_SQUARE };
                painter.rect_filled(self.square_rect(pos), CornerRadius::ZERO, color);
            }
        }
    }

    /// Row and column indices, matching the text notation
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);
        let half = BOARD_MARGIN * 0.5;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;
            let label = i.to_string();

            let top = Pos2::new(self.board_rect.min.x + offset, self.board_rect.min.y + half);
            painter.text(top, egui::Align2::CENTER_CENTER, &label, font.clone(), COORD_LABEL);

            let left = Pos2::new(self.board_rect.min.x + half, self.board_rect.min.y + offset);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), COORD_LABEL);
        }
    }

    fn draw_men(&self, painter: &Painter, board: &Board) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let (body, highlight) = match board.get(pos) {
                    Cell::PlayerMan => (PLAYER_MAN, PLAYER_MAN_HIGHLIGHT),
                    Cell::AiMan => (AI_MAN, AI_MAN_HIGHLIGHT),
                    Cell::Empty => continue,
                };
                self.draw_man(painter, pos, body, highlight);
            }
        }
    }

    fn draw_man(&self, painter: &Painter, pos: Pos, body: Color32, highlight: Color32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MAN_RADIUS_RATIO;

        // Shadow
        painter.circle_filled(center + Vec2::new(2.0, 2.0), radius, Color32::from_rgba_unmultiplied(0, 0, 0, 70));

        painter.circle_filled(center, radius, body);
        painter.circle_stroke(center, radius, Stroke::new(1.5, MAN_OUTLINE));
        painter.circle_stroke(center, radius * 0.7, Stroke::new(radius * 0.08, highlight));
    }

    /// Outline both squares of a move
    fn draw_move_marker(&self, painter: &Painter, mv: Move, color: Color32) {
        let stroke = Stroke::new(MARKER_STROKE, color);
        for pos in [mv.from, mv.to] {
            painter.rect_stroke(
                self.square_rect(pos).shrink(MARKER_STROKE),
                CornerRadius::ZERO,
                stroke,
                egui::StrokeKind::Inside,
            );
        }
    }

    fn square_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        Pos::from_signed(row, col)
    }

    /// Convert board position to the center of its square
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.square_rect(pos).center()
    }
}
