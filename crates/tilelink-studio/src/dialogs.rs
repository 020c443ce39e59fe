use std::path::PathBuf;
use tilelink_core::{ColumnMap, TileTable};

/// Modal column-mapping dialog state. Holds the freshly loaded table
/// until the user confirms or cancels the mapping.
#[derive(Default)]
pub struct ColumnMappingDialog {
    pub show: bool,
    pub headers: Vec<String>,
    pub pending_table: Option<TileTable>,
    pub source_path: Option<PathBuf>,
    pub id: String,
    pub top: String,
    pub left: String,
    pub width: String,
    pub height: String,
    pub description: String,
    pub error: Option<String>,
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl ColumnMappingDialog {
    pub fn open(&mut self, table: TileTable, path: PathBuf) {
        *self = Self {
            show: true,
            headers: table.headers().to_vec(),
            pending_table: Some(table),
            source_path: Some(path),
            ..Self::default()
        };
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// The mapping as currently selected, or None (with the error
    /// message set) while a required field is blank.
    pub fn selected_mapping(&mut self) -> Option<ColumnMap> {
        if self.id.is_empty() || self.top.is_empty() || self.left.is_empty() {
            self.error = Some("Tile ID, Top, and Left columns must be selected.".to_string());
            return None;
        }
        self.error = None;
        Some(ColumnMap {
            id: self.id.clone(),
            top: self.top.clone(),
            left: self.left.clone(),
            width: none_if_empty(&self.width),
            height: none_if_empty(&self.height),
            description: none_if_empty(&self.description),
        })
    }
}

/// Modal message for load/export outcomes.
#[derive(Default)]
pub struct StatusDialog {
    pub show: bool,
    pub title: String,
    pub message: String,
}

impl StatusDialog {
    pub fn open(&mut self, title: &str, message: impl Into<String>) {
        self.show = true;
        self.title = title.to_string();
        self.message = message.into();
    }
}

#[derive(Default)]
pub struct DialogState {
    pub mapping: ColumnMappingDialog,
    pub status: StatusDialog,
    pub selected_log_entry: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog_with_table() -> ColumnMappingDialog {
        let mut dialog = ColumnMappingDialog::default();
        let table = TileTable::from_rows(
            vec!["Tile".to_string(), "Top".to_string(), "Left".to_string()],
            vec![],
        );
        dialog.open(table, PathBuf::from("tiles.csv"));
        dialog
    }

    #[test]
    fn test_open_resets_previous_selection() {
        let mut dialog = dialog_with_table();
        dialog.id = "Tile".to_string();
        dialog.error = Some("old".to_string());

        let table = TileTable::from_rows(vec!["Name".to_string()], vec![]);
        dialog.open(table, PathBuf::from("other.csv"));
        assert!(dialog.show);
        assert!(dialog.id.is_empty());
        assert!(dialog.error.is_none());
        assert_eq!(dialog.headers, vec!["Name"]);
    }

    #[test]
    fn test_selected_mapping_requires_all_required_fields() {
        let mut dialog = dialog_with_table();
        dialog.id = "Tile".to_string();
        dialog.top = "Top".to_string();

        assert!(dialog.selected_mapping().is_none());
        assert!(dialog.error.is_some());

        dialog.left = "Left".to_string();
        let mapping = dialog.selected_mapping().unwrap();
        assert_eq!(mapping.id, "Tile");
        assert_eq!(mapping.width, None);
        assert!(dialog.error.is_none());
    }

    #[test]
    fn test_optional_fields_map_blank_to_none() {
        let mut dialog = dialog_with_table();
        dialog.id = "Tile".to_string();
        dialog.top = "Top".to_string();
        dialog.left = "Left".to_string();
        dialog.description = "Notes".to_string();

        let mapping = dialog.selected_mapping().unwrap();
        assert_eq!(mapping.description, Some("Notes".to_string()));
        assert_eq!(mapping.height, None);
    }

    #[test]
    fn test_cancel_clears_pending_table() {
        let mut dialog = dialog_with_table();
        dialog.cancel();
        assert!(!dialog.show);
        assert!(dialog.pending_table.is_none());
        assert!(dialog.source_path.is_none());
    }
}
