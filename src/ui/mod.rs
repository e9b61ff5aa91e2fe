//! GUI module for the checkers game
//!
//! Native front-end built on egui/eframe. The AI searches on a worker
//! thread so the window stays responsive.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::CheckersApp;
pub use game_state::{GameMode, GameState, MAX_AI_DEPTH};
