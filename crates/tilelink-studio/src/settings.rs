use crate::ui_constants::UiConstants;
use tilelink_core::CoreConstants;

#[derive(Clone, serde::Serialize, serde::Deserialize)]
pub struct AppSettings {
    pub show_labels: bool,
    pub show_grid: bool,
    pub label_font_size: f32,
    pub max_log_entries: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_labels: true,
            show_grid: true,
            label_font_size: UiConstants::LABEL_FONT_SIZE,
            max_log_entries: CoreConstants::DEFAULT_LOG_ENTRIES,
        }
    }
}
