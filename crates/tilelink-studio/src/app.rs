use crate::state::LinkerApp;
use eframe::egui;
use tilelink_core::{LogLevel, LogSource};

impl eframe::App for LinkerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_console_panel(ctx);
        self.render_canvas_panel(ctx);
        self.render_dialogs(ctx);
        self.handle_keyboard_shortcuts(ctx);
    }
}

impl LinkerApp {
    pub fn undo(&mut self) {
        let Some(board) = self.board.as_mut() else {
            return;
        };
        if let Some(restored) = self.undo_redo.undo(&board.links) {
            board.links = restored;
            self.clear_selection();
            self.log(LogLevel::Info, LogSource::Edit, "Undid last link change");
        }
    }

    pub fn redo(&mut self) {
        let Some(board) = self.board.as_mut() else {
            return;
        };
        if let Some(restored) = self.undo_redo.redo(&board.links) {
            board.links = restored;
            self.clear_selection();
            self.log(LogLevel::Info, LogSource::Edit, "Redid link change");
        }
    }
}
