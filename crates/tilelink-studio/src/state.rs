use crate::dialogs::DialogState;
use crate::settings::AppSettings;
use crate::undo_redo::UndoRedoManager;
use std::time::Instant;
use tilelink_core::{
    Board, CoreConstants, LogEntry, LogLevel, LogSource, LogStorage, TileId, format_elapsed,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Auto,
    AddLink,
    RemoveLink,
}

impl EditMode {
    pub fn label(&self) -> &str {
        match self {
            EditMode::Auto => "Auto",
            EditMode::AddLink => "Add Link",
            EditMode::RemoveLink => "Remove Link",
        }
    }

    pub fn all() -> [EditMode; 3] {
        [EditMode::Auto, EditMode::AddLink, EditMode::RemoveLink]
    }
}

/// Uploaded background texture plus its pixel dimensions.
pub struct BackgroundImage {
    pub texture: egui::TextureHandle,
    pub size: [usize; 2],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub pan_offset: egui::Vec2,
    pub zoom: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan_offset: egui::Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

pub struct LinkerApp {
    pub board: Option<Board>,
    pub background: Option<BackgroundImage>,
    pub edit_mode: EditMode,
    pub selected_tile: Option<TileId>,
    pub range_min: f64,
    pub range_max: f64,
    pub range_limit: f64,
    pub view: ViewState,
    pub fit_view_requested: bool,
    pub console: LogStorage,
    pub started_at: Instant,
    pub settings: AppSettings,
    pub dialogs: DialogState,
    pub undo_redo: UndoRedoManager,
}

impl Default for LinkerApp {
    fn default() -> Self {
        let mut app = Self {
            board: None,
            background: None,
            edit_mode: EditMode::Auto,
            selected_tile: None,
            range_min: CoreConstants::DEFAULT_RANGE_MIN_VALUE,
            range_max: CoreConstants::DEFAULT_RANGE_MAX_VALUE,
            range_limit: CoreConstants::DEFAULT_RANGE_MAX,
            view: ViewState::default(),
            fit_view_requested: false,
            console: LogStorage::new(),
            started_at: Instant::now(),
            settings: AppSettings::default(),
            dialogs: DialogState::default(),
            undo_redo: UndoRedoManager::new(),
        };
        app.log(
            LogLevel::Info,
            LogSource::System,
            "Started in empty state. Load a CSV to begin.",
        );
        app
    }
}

impl LinkerApp {
    pub fn log(&mut self, level: LogLevel, source: LogSource, message: impl Into<String>) {
        self.console.max_entry_count = self.settings.max_log_entries;
        self.console.push(LogEntry {
            timestamp: format_elapsed(self.started_at.elapsed()),
            level,
            source,
            message: message.into(),
        });
    }

    pub fn clear_selection(&mut self) {
        self.selected_tile = None;
    }

    /// Switches the edit mode. Entering Auto recomputes the links from
    /// the current distance range, discarding manual overrides.
    pub fn apply_mode(&mut self, mode: EditMode) {
        self.edit_mode = mode;
        self.clear_selection();
        self.log(
            LogLevel::Info,
            LogSource::Edit,
            format!("Mode changed to '{}'", mode.label()),
        );
        if mode == EditMode::Auto && self.board.is_some() {
            self.recompute_links();
            self.snapshot_links();
        }
    }

    /// Re-seeds the link set from the distance range sliders.
    pub fn recompute_links(&mut self) {
        let (min, max) = (self.range_min, self.range_max);
        let Some(board) = self.board.as_mut() else {
            return;
        };
        let count = board.relink_in_range(min, max);
        self.log(
            LogLevel::Info,
            LogSource::Linking,
            format!("Auto-linked {count} pairs within [{min:.2}, {max:.2}]"),
        );
    }

    /// Two-click manual linking: first click selects, a second click
    /// on a different tile applies the add/remove, anything else
    /// clears the selection.
    pub fn handle_tile_click(&mut self, clicked: Option<TileId>) {
        if self.edit_mode == EditMode::Auto {
            self.clear_selection();
            return;
        }
        let Some(clicked) = clicked else {
            self.clear_selection();
            return;
        };

        match self.selected_tile.take() {
            None => self.selected_tile = Some(clicked),
            Some(first) if first == clicked => {}
            Some(first) => {
                let Some(board) = self.board.as_mut() else {
                    return;
                };
                let changed = match self.edit_mode {
                    EditMode::AddLink => board.links.add(&first, &clicked),
                    EditMode::RemoveLink => board.links.remove(&first, &clicked),
                    EditMode::Auto => false,
                };
                if changed {
                    let action = if self.edit_mode == EditMode::AddLink {
                        "added"
                    } else {
                        "removed"
                    };
                    self.log(
                        LogLevel::Info,
                        LogSource::Edit,
                        format!("Manually {action} link: {first} <-> {clicked}"),
                    );
                    self.snapshot_links();
                }
            }
        }
    }

    /// Applies the slider maximum suited to the board's current
    /// coordinate space, resetting the handles to the given share.
    pub fn reset_range_for_board(&mut self, span_ratio: f64) {
        let Some(limit) = self.board.as_ref().and_then(Board::suggested_range_max) else {
            return;
        };
        self.range_limit = limit;
        self.range_min = 0.0;
        self.range_max = limit * span_ratio;
    }

    pub fn snapshot_links(&mut self) {
        if let Some(board) = self.board.as_ref() {
            self.undo_redo.add_undo(&board.links);
        }
    }

    pub fn link_count(&self) -> usize {
        self.board.as_ref().map_or(0, |b| b.links.link_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilelink_core::{ColumnMap, TileTable};

    fn str_row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn app_with_line_board() -> LinkerApp {
        let table = TileTable::from_rows(
            vec!["Tile".to_string(), "Top".to_string(), "Left".to_string()],
            vec![
                str_row(&["A", "0", "0"]),
                str_row(&["B", "0", "1"]),
                str_row(&["C", "0", "2"]),
            ],
        );
        let board = Board::from_table(table, ColumnMap::required("Tile", "Top", "Left")).unwrap();
        let mut app = LinkerApp::default();
        app.board = Some(board);
        app.range_min = 0.0;
        app.range_max = 1.0;
        app
    }

    fn id(s: &str) -> TileId {
        TileId::new(s)
    }

    #[test]
    fn test_click_in_auto_mode_only_clears_selection() {
        let mut app = app_with_line_board();
        app.selected_tile = Some(id("A"));
        app.handle_tile_click(Some(id("B")));
        assert_eq!(app.selected_tile, None);
        assert_eq!(app.link_count(), 0);
    }

    #[test]
    fn test_two_clicks_add_a_link() {
        let mut app = app_with_line_board();
        app.edit_mode = EditMode::AddLink;
        app.handle_tile_click(Some(id("A")));
        assert_eq!(app.selected_tile, Some(id("A")));
        app.handle_tile_click(Some(id("C")));
        assert_eq!(app.selected_tile, None);
        assert!(app.board.as_ref().unwrap().links.contains(&id("A"), &id("C")));
    }

    #[test]
    fn test_clicking_same_tile_twice_clears_selection() {
        let mut app = app_with_line_board();
        app.edit_mode = EditMode::AddLink;
        app.handle_tile_click(Some(id("B")));
        app.handle_tile_click(Some(id("B")));
        assert_eq!(app.selected_tile, None);
        assert_eq!(app.link_count(), 0);
    }

    #[test]
    fn test_clicking_empty_space_clears_selection() {
        let mut app = app_with_line_board();
        app.edit_mode = EditMode::RemoveLink;
        app.handle_tile_click(Some(id("A")));
        app.handle_tile_click(None);
        assert_eq!(app.selected_tile, None);
    }

    #[test]
    fn test_remove_mode_unlinks() {
        let mut app = app_with_line_board();
        app.recompute_links();
        assert_eq!(app.link_count(), 2);

        app.edit_mode = EditMode::RemoveLink;
        app.handle_tile_click(Some(id("A")));
        app.handle_tile_click(Some(id("B")));
        assert_eq!(app.link_count(), 1);
        assert!(!app.board.as_ref().unwrap().links.contains(&id("A"), &id("B")));
    }

    #[test]
    fn test_switching_to_auto_discards_manual_links() {
        let mut app = app_with_line_board();
        app.edit_mode = EditMode::AddLink;
        app.handle_tile_click(Some(id("A")));
        app.handle_tile_click(Some(id("C")));
        assert_eq!(app.link_count(), 1);

        app.apply_mode(EditMode::Auto);
        assert!(!app.board.as_ref().unwrap().links.contains(&id("A"), &id("C")));
        assert_eq!(app.link_count(), 2);
    }

    #[test]
    fn test_undo_restores_previous_links() {
        let mut app = app_with_line_board();
        app.snapshot_links();
        app.edit_mode = EditMode::AddLink;
        app.handle_tile_click(Some(id("A")));
        app.handle_tile_click(Some(id("B")));
        assert_eq!(app.link_count(), 1);

        app.undo();
        assert_eq!(app.link_count(), 0);
        app.redo();
        assert_eq!(app.link_count(), 1);
    }

    #[test]
    fn test_reset_range_for_board_uses_extent() {
        let mut app = app_with_line_board();
        app.reset_range_for_board(0.5);
        // Extent is 2.0 wide, limit = 25% of that.
        assert!((app.range_limit - 0.5).abs() < 1e-12);
        assert!((app.range_max - 0.25).abs() < 1e-12);
        assert_eq!(app.range_min, 0.0);
    }
}
