//! Main application for the checkers GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{GameMode, GameState, MAX_AI_DEPTH};
use super::theme::*;
use crate::{GameOutcome, Side, WinReason, BOARD_SIZE};

/// Main checkers application
pub struct CheckersApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for CheckersApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

fn side_color(side: Side) -> egui::Color32 {
    match side {
        Side::Player => PLAYER_MAN,
        Side::Ai => AI_MAN,
    }
}

impl CheckersApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Start a new game keeping the configured depth
    fn new_game(&mut self, mode: GameMode) {
        let depth = self.state.ai_depth();
        self.state = GameState::new(mode);
        self.state.set_ai_depth(depth);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs AI)").clicked() {
                        self.new_game(GameMode::PvE);
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP { show_suggestions: false });
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Search Panel (D)");
                    if let GameMode::PvP { show_suggestions } = &mut self.state.mode {
                        ui.checkbox(show_suggestions, "Auto Hints");
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE => "You (red) vs AI (blue)",
                        GameMode::PvP { .. } => "PvP - Hotseat",
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and search stats
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("CHECKERS").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_search_card(ui);
                }

                if let Some(outcome) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Whose turn it is, plus a live timer
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, side_color(turn));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(turn.name()).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if self.state.game_over.is_some() {
                        ("Game over".to_string(), TEXT_SECONDARY)
                    } else if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        let secs = elapsed.as_secs_f32();
                        let color = if secs < 1.0 {
                            TIMER_NORMAL
                        } else if secs < 3.0 {
                            TIMER_WARNING
                        } else {
                            TIMER_CRITICAL
                        };
                        (format!("AI thinking... {secs:.2}s"), color)
                    } else {
                        let secs = self.state.move_timer.elapsed().as_secs_f32();
                        (format!("Your turn {secs:.1}s"), TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Pieces left and captures made per side
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let board = &self.state.board;
            ui.label(
                RichText::new(format!("Player: {}  AI: {}", board.player_score(), board.ai_score()))
                    .size(16.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
            ui.add_space(6.0);
            for side in [Side::Player, Side::Ai] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").size(18.0).color(side_color(side)));
                    ui.label(RichText::new(side.name()).size(13.0).strong().color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{} pieces left", board.count(side)))
                                .size(11.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo (U)").clicked() {
                    self.state.undo();
                }
                if ui.button("Restart (N)").clicked() {
                    self.state.reset();
                }
                if let GameMode::PvP { .. } = self.state.mode {
                    if ui.button("Hint (H)").clicked() {
                        self.state.request_suggestion();
                    }
                }
            });

            ui.add_space(8.0);
            let mut depth = self.state.ai_depth();
            let slider = egui::Slider::new(&mut depth, 1..=MAX_AI_DEPTH).text("AI depth");
            if ui.add_enabled(!self.state.is_ai_thinking(), slider).changed() {
                self.state.set_ai_depth(depth);
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Last search and running totals for this game
    fn render_search_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("SEARCH").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.state.last_ai_result {
                    if let Some(mv) = result.best_move {
                        ui.label(RichText::new(format!("-> {mv}")).size(12.0).strong().color(LAST_MOVE_MARKER));
                    }
                    for line in [
                        format!("Score: {}", result.score),
                        format!("Time: {}ms", result.time_ms),
                        format!("Nodes expanded: {}", result.nodes),
                        format!("Prunes: {}", result.prunes),
                    ] {
                        ui.label(RichText::new(line).size(10.0).color(TEXT_SECONDARY));
                    }
                } else {
                    ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                }

                let session = &self.state.session_stats;
                ui.add_space(6.0);
                ui.label(RichText::new("This game").size(10.0).color(TEXT_MUTED));
                for line in [
                    format!("Nodes expanded: {}", session.nodes_expanded),
                    format!("Prunes: {} ({:.1}%)", session.prunes, session.prune_rate()),
                    format!("Search time: {}ms", session.elapsed.as_millis()),
                ] {
                    ui.label(RichText::new(line).size(10.0).color(TEXT_SECONDARY));
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let reason = match outcome.reason {
            WinReason::AllCaptured => "all pieces captured",
            WinReason::Blocked => "opponent cannot move",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("{} wins!", outcome.winner.name()))
                            .size(18.0)
                            .strong()
                            .color(side_color(outcome.winner)),
                    );
                    ui.label(RichText::new(format!("by {reason}")).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
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

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let targets = self.state.target_squares();
            let overlay = BoardOverlay {
                selected: self.state.selected,
                targets: &targets,
                last_move: self.state.last_move,
                suggested_move: self.state.suggested_move,
                interactive: self.state.game_over.is_none() && self.state.is_human_turn(),
            };

            let clicked = self.board_view.show(ui, &self.state.board, &overlay);

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.click(pos) {
                    self.state.message = Some(msg);
                }
            }

            ui.label(
                RichText::new(format!(
                    "Click one of your men, then a highlighted square. Board is {BOARD_SIZE}x{BOARD_SIZE}, row 0 at the top."
                ))
                .size(11.0)
                .color(TEXT_MUTED),
            );
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle search panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // H - Get hint (PvP mode)
            if i.key_pressed(egui::Key::H) {
                if let GameMode::PvP { .. } = self.state.mode {
                    self.state.request_suggestion();
                }
            }

            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }

            if i.key_pressed(egui::Key::Escape) {
                self.state.selected = None;
            }
        });
    }
}

impl eframe::App for CheckersApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        // Hotseat hints follow the side to move
        if let GameMode::PvP { show_suggestions: true } = self.state.mode {
            if self.state.suggested_move.is_none() && self.state.game_over.is_none() {
                self.state.request_suggestion();
            }
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the timers ticking
        if self.state.game_over.is_none() {
            ctx.request_repaint();
        }
    }
}
