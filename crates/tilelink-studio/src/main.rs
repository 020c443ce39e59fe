mod app;
mod colors;
mod dialogs;
mod events;
mod file_io;
mod loglevel_ext;
mod settings;
mod state;
mod ui;
mod ui_constants;
mod undo_redo;

use eframe::egui;
use state::LinkerApp;

const WINDOW_TITLE: &str = "Tile Link Studio";

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(LinkerApp::default()))),
    )
}
