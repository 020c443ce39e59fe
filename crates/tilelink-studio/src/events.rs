use crate::state::LinkerApp;
use eframe::egui;

impl LinkerApp {
    pub fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let no_mapping_dialog = !self.dialogs.mapping.show;
        let no_status_dialog = !self.dialogs.status.show;
        let dialogs_closed = no_mapping_dialog && no_status_dialog;

        if dialogs_closed && ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Z)) {
            self.undo();
        }

        if dialogs_closed && ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Y)) {
            self.redo();
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.selected_tile.is_some() {
            self.clear_selection();
        }
    }
}
