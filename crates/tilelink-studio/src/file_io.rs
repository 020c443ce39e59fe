use crate::state::{BackgroundImage, EditMode, LinkerApp};
use eframe::egui;
use tilelink_core::{Board, CoordinateSpace, CoreConstants, LogLevel, LogSource, TileTable};

impl LinkerApp {
    /// Picks a CSV, reads it, and opens the column mapping dialog.
    /// The board is only replaced once the mapping is confirmed.
    pub fn load_csv_flow(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .pick_file()
        else {
            self.log(LogLevel::Warning, LogSource::Load, "No file selected during load.");
            return;
        };

        match TileTable::load(&path) {
            Ok(table) => {
                self.log(
                    LogLevel::Info,
                    LogSource::Load,
                    format!(
                        "Loaded {} rows x {} columns from {}",
                        table.len(),
                        table.headers().len(),
                        path.display()
                    ),
                );
                self.dialogs.mapping.open(table, path);
            }
            Err(e) => {
                self.log(LogLevel::Error, LogSource::Load, format!("{e}"));
                self.dialogs.status.open("Load Failed", e.to_string());
            }
        }
    }

    /// OK handler of the mapping dialog. Leaves the dialog open with
    /// an inline error while the required fields are blank.
    pub fn confirm_column_mapping(&mut self) {
        let Some(mapping) = self.dialogs.mapping.selected_mapping() else {
            return;
        };
        let Some(table) = self.dialogs.mapping.pending_table.take() else {
            self.dialogs.mapping.cancel();
            return;
        };
        let source_path = self.dialogs.mapping.source_path.take();
        self.dialogs.mapping.cancel();

        match Board::from_table(table, mapping) {
            Ok(board) => {
                let dropped = board.dropped_rows();
                let tile_count = board.tile_count();
                let start_count = board.start_tiles().len();

                self.board = Some(board);
                self.background = None;
                self.clear_selection();
                self.edit_mode = EditMode::Auto;
                self.undo_redo.clear_history();

                if dropped > 0 {
                    self.log(
                        LogLevel::Warning,
                        LogSource::Mapping,
                        format!("Dropped {dropped} rows with non-numeric or missing coordinates"),
                    );
                }
                self.log(
                    LogLevel::Info,
                    LogSource::Mapping,
                    format!("Board ready: {tile_count} tiles ({start_count} start)"),
                );

                self.range_limit = CoreConstants::DEFAULT_RANGE_MAX;
                self.range_min = CoreConstants::DEFAULT_RANGE_MIN_VALUE;
                self.range_max = CoreConstants::DEFAULT_RANGE_MAX_VALUE;
                self.reset_range_for_board(CoreConstants::RAW_INITIAL_SPAN_RATIO);

                self.fit_view_requested = true;
                self.recompute_links();
                self.snapshot_links();

                if let Some(path) = source_path {
                    self.log(
                        LogLevel::Info,
                        LogSource::Mapping,
                        format!("Column mapping applied for {}", path.display()),
                    );
                }
            }
            Err(e) => {
                self.log(LogLevel::Error, LogSource::Mapping, format!("{e}"));
                self.dialogs.status.open("Mapping Failed", e.to_string());
            }
        }
    }

    pub fn cancel_column_mapping(&mut self) {
        self.dialogs.mapping.cancel();
        self.log(LogLevel::Warning, LogSource::Mapping, "Column selection cancelled.");
    }

    /// Loads a background image: tiles switch to percent coordinates
    /// scaled to the image's pixel dimensions, and the slider range is
    /// re-derived from those dimensions.
    pub fn load_background_image(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image files", &["png", "jpg", "jpeg", "bmp", "gif"])
            .pick_file()
        else {
            self.log(LogLevel::Warning, LogSource::Image, "No background image selected.");
            return;
        };

        match image::open(&path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [width as usize, height as usize],
                    rgba.as_raw(),
                );
                let texture = ctx.load_texture(
                    "board_background",
                    color_image,
                    egui::TextureOptions::LINEAR,
                );
                self.background = Some(BackgroundImage {
                    texture,
                    size: [width as usize, height as usize],
                });
                self.log(
                    LogLevel::Info,
                    LogSource::Image,
                    format!("Loaded background image {} ({width}x{height})", path.display()),
                );

                if let Some(board) = self.board.as_mut() {
                    board.set_space(CoordinateSpace::ImagePercent {
                        width: f64::from(width),
                        height: f64::from(height),
                    });
                }
                self.reset_range_for_board(CoreConstants::IMAGE_INITIAL_SPAN_RATIO);
                self.fit_view_requested = true;

                if self.board.is_some() {
                    self.recompute_links();
                    self.snapshot_links();
                }
            }
            Err(e) => {
                self.log(
                    LogLevel::Error,
                    LogSource::Image,
                    format!("Failed to load background image: {e}"),
                );
                self.dialogs
                    .status
                    .open("Image Load Failed", e.to_string());
            }
        }
    }

    /// Drops the background and returns tiles to raw coordinates.
    pub fn clear_background(&mut self) {
        if self.background.take().is_none() {
            return;
        }
        self.log(LogLevel::Info, LogSource::Image, "Background image cleared");
        if let Some(board) = self.board.as_mut() {
            board.set_space(CoordinateSpace::Raw);
        }
        self.reset_range_for_board(CoreConstants::RAW_INITIAL_SPAN_RATIO);
        self.fit_view_requested = true;
        if self.board.is_some() {
            self.recompute_links();
            self.snapshot_links();
        }
    }

    pub fn export_csv(&mut self) {
        if self.board.is_none() {
            self.log(
                LogLevel::Warning,
                LogSource::Export,
                "Export attempted with no data loaded.",
            );
            self.dialogs
                .status
                .open("No Data", "Please load a CSV file before exporting.");
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_file_name("tiles_with_prerequisites.csv")
            .save_file()
        else {
            self.log(LogLevel::Warning, LogSource::Export, "Export cancelled by user.");
            return;
        };

        let result = self
            .board
            .as_ref()
            .map(|board| board.export_to_path(&path));
        match result {
            Some(Ok(())) => {
                self.log(
                    LogLevel::Info,
                    LogSource::Export,
                    format!("Exported updated tile data to {}", path.display()),
                );
                self.dialogs.status.open(
                    "Export Complete",
                    format!("Successfully exported updated tile data to:\n{}", path.display()),
                );
            }
            Some(Err(e)) => {
                self.log(LogLevel::Error, LogSource::Export, format!("{e}"));
                self.dialogs.status.open("Export Failed", e.to_string());
            }
            None => {}
        }
    }
}
