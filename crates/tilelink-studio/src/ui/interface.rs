use crate::colors::ColorPalette;
use crate::loglevel_ext::LogLevelExt;
use crate::state::{EditMode, LinkerApp};
use crate::ui_constants::UiConstants;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

impl LinkerApp {
    pub fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Load CSV…").clicked() {
                        self.load_csv_flow();
                        ui.close();
                    }
                    if ui.button("Load Background Image…").clicked() {
                        self.load_background_image(ctx);
                        ui.close();
                    }
                    if ui
                        .add_enabled(
                            self.background.is_some(),
                            egui::Button::new("Clear Background"),
                        )
                        .clicked()
                    {
                        self.clear_background();
                        ui.close();
                    }
                    ui.separator();
                    if ui
                        .add_enabled(self.board.is_some(), egui::Button::new("Export CSV…"))
                        .clicked()
                    {
                        self.export_csv();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Fit View").clicked() {
                        self.fit_view_requested = true;
                        ui.close();
                    }
                });

                ui.separator();

                let can_undo = self
                    .board
                    .as_ref()
                    .is_some_and(|b| self.undo_redo.has_undo(&b.links));
                if ui
                    .add_enabled(can_undo, egui::Button::new("⟲ Undo"))
                    .clicked()
                {
                    self.undo();
                }

                let can_redo = self
                    .board
                    .as_ref()
                    .is_some_and(|b| self.undo_redo.has_redo(&b.links));
                if ui
                    .add_enabled(can_redo, egui::Button::new("⟳ Redo"))
                    .clicked()
                {
                    self.redo();
                }

                ui.separator();
                ui.label(format!("{} links", self.link_count()));
            });
        });
    }

    pub fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("side_panel")
            .default_width(UiConstants::LEFT_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.heading("Edit Mode");
                let mut mode_change = None;
                for mode in EditMode::all() {
                    if ui.radio(self.edit_mode == mode, mode.label()).clicked()
                        && self.edit_mode != mode
                    {
                        mode_change = Some(mode);
                    }
                }
                if let Some(mode) = mode_change {
                    self.apply_mode(mode);
                }

                ui.separator();

                if self.edit_mode == EditMode::Auto && self.board.is_some() {
                    self.render_range_sliders(ui);
                    ui.separator();
                }

                if self.edit_mode != EditMode::Auto {
                    match &self.selected_tile {
                        Some(id) => {
                            ui.label(format!("Selected: {id}"));
                            ui.small("Click another tile to apply, Esc to cancel.");
                        }
                        None => {
                            ui.small("Click a tile to select it.");
                        }
                    }
                    ui.separator();
                }

                ui.checkbox(&mut self.settings.show_labels, "Show tile labels");
                ui.checkbox(&mut self.settings.show_grid, "Show grid");

                ui.separator();
                self.render_board_summary(ui);
            });
    }

    /// Min/max distance sliders standing in for a range slider; the
    /// handles are kept ordered after every edit.
    fn render_range_sliders(&mut self, ui: &mut egui::Ui) {
        ui.label("Distance Range");
        let min_response = ui.add(
            egui::Slider::new(&mut self.range_min, 0.0..=self.range_limit)
                .text("min")
                .fixed_decimals(2),
        );
        let max_response = ui.add(
            egui::Slider::new(&mut self.range_max, 0.0..=self.range_limit)
                .text("max")
                .fixed_decimals(2),
        );

        if self.range_min > self.range_max {
            if min_response.changed() {
                self.range_max = self.range_min;
            } else {
                self.range_min = self.range_max;
            }
        }

        if min_response.changed() || max_response.changed() {
            self.recompute_links();
        }
        if min_response.drag_stopped() || max_response.drag_stopped() {
            self.snapshot_links();
        }
    }

    fn render_board_summary(&self, ui: &mut egui::Ui) {
        ui.heading("Board");
        match &self.board {
            Some(board) => {
                ui.label(format!("Tiles: {}", board.tile_count()));
                ui.label(format!("Links: {}", board.links.link_count()));
                ui.label(format!("Start tiles: {}", board.start_tiles().len()));
                if board.dropped_rows() > 0 {
                    ui.label(format!("Dropped rows: {}", board.dropped_rows()));
                }
            }
            None => {
                ui.label("No data loaded");
            }
        }
    }

    pub fn render_console_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("console")
            .resizable(true)
            .default_height(UiConstants::CONSOLE_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Activity");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Clear").clicked() {
                            self.console.clear();
                            self.dialogs.selected_log_entry = None;
                        }
                    });
                });
                ui.separator();

                let row_count = self.console.len();
                let text_height = egui::TextStyle::Body
                    .resolve(ui.style())
                    .size
                    .max(ui.spacing().interact_size.y);
                let available_height = ui.available_height();

                TableBuilder::new(ui)
                    .auto_shrink(false)
                    .stick_to_bottom(true)
                    .striped(row_count > 0)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::initial(90.0).resizable(true))
                    .column(Column::initial(70.0).resizable(true))
                    .column(Column::initial(90.0).resizable(true))
                    .column(Column::remainder().resizable(true))
                    .min_scrolled_height(0.0)
                    .max_scroll_height(available_height)
                    .body(|body| {
                        body.rows(text_height, row_count, |mut row| {
                            let idx = row.index();
                            if let Some(entry) = &self.console.get(idx) {
                                row.col(|ui| {
                                    ui.label(&entry.timestamp);
                                });
                                row.col(|ui| {
                                    ui.colored_label(entry.level.get_color(), entry.level.as_str());
                                });
                                row.col(|ui| {
                                    ui.label(entry.source.as_str());
                                });
                                row.col(|ui| {
                                    let response = ui.add(
                                        egui::Label::new(&entry.message)
                                            .truncate()
                                            .sense(egui::Sense::click()),
                                    );
                                    if response.clicked() {
                                        self.dialogs.selected_log_entry = Some(idx);
                                    }
                                    if response.hovered() {
                                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                                    }
                                });
                            }
                        });
                    });
            });
    }

    pub fn render_dialogs(&mut self, ctx: &egui::Context) {
        self.render_log_entry_dialog(ctx);
        self.render_status_dialog(ctx);
        self.render_mapping_dialog(ctx);
    }

    fn render_log_entry_dialog(&mut self, ctx: &egui::Context) {
        let Some(log_index) = self.dialogs.selected_log_entry else {
            return;
        };
        let mut is_open = true;
        egui::Window::new("Log Message")
            .id(egui::Id::new("log_message_window"))
            .open(&mut is_open)
            .resizable(true)
            .default_width(500.0)
            .show(ctx, |ui| {
                if let Some(entry) = self.console.get(log_index) {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        ui.add(egui::Label::new(&entry.message).selectable(true).wrap());
                    });
                }
            });
        if !is_open {
            self.dialogs.selected_log_entry = None;
        }
    }

    fn render_status_dialog(&mut self, ctx: &egui::Context) {
        if !self.dialogs.status.show {
            return;
        }
        let title = self.dialogs.status.title.clone();
        let message = self.dialogs.status.message.clone();
        let mut close = false;
        egui::Window::new(title)
            .id(egui::Id::new("status_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        close = true;
                    }
                });
            });
        if close {
            self.dialogs.status.show = false;
        }
    }

    fn render_mapping_dialog(&mut self, ctx: &egui::Context) {
        if !self.dialogs.mapping.show {
            return;
        }
        let headers = self.dialogs.mapping.headers.clone();
        let mut confirm = false;
        let mut cancel = false;

        egui::Window::new("Map CSV Columns")
            .id(egui::Id::new("column_mapping_window"))
            .collapsible(false)
            .resizable(false)
            .default_width(UiConstants::MAPPING_DIALOG_WIDTH)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Map your CSV columns to tile fields:");
                ui.add_space(4.0);

                egui::Grid::new("column_mapping_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        column_combo(ui, "Tile ID", &mut self.dialogs.mapping.id, &headers);
                        column_combo(ui, "Top Coordinate", &mut self.dialogs.mapping.top, &headers);
                        column_combo(
                            ui,
                            "Left Coordinate",
                            &mut self.dialogs.mapping.left,
                            &headers,
                        );
                        column_combo(
                            ui,
                            "Width (optional)",
                            &mut self.dialogs.mapping.width,
                            &headers,
                        );
                        column_combo(
                            ui,
                            "Height (optional)",
                            &mut self.dialogs.mapping.height,
                            &headers,
                        );
                        column_combo(
                            ui,
                            "Description (optional)",
                            &mut self.dialogs.mapping.description,
                            &headers,
                        );
                    });

                if let Some(error) = &self.dialogs.mapping.error {
                    ui.add_space(4.0);
                    ui.colored_label(ColorPalette::DIALOG_ERROR, error);
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        confirm = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if confirm {
            self.confirm_column_mapping();
        } else if cancel {
            self.cancel_column_mapping();
        }
    }
}

fn column_combo(ui: &mut egui::Ui, label: &str, value: &mut String, headers: &[String]) {
    ui.label(label);
    let selected = if value.is_empty() { "(none)" } else { value.as_str() };
    egui::ComboBox::from_id_salt(label)
        .selected_text(selected.to_string())
        .width(160.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(value, String::new(), "(none)");
            for header in headers {
                ui.selectable_value(value, header.clone(), header);
            }
        });
    ui.end_row();
}
