//! Checkers GUI
//!
//! A graphical interface for playing checkers against the AI or another
//! player.

use checkers::ui::CheckersApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([860.0, 600.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Checkers Game Agent"),
        ..Default::default()
    };

    eframe::run_native(
        "Checkers",
        options,
        Box::new(|cc| Ok(Box::new(CheckersApp::new(cc)))),
    )
}
