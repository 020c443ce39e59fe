pub struct UiConstants;

impl UiConstants {
    pub const LEFT_PANEL_WIDTH: f32 = 230.0;
    pub const CONSOLE_HEIGHT: f32 = 160.0;

    pub const TILE_RADIUS: f32 = 5.0;
    pub const SELECTION_RADIUS: f32 = 10.0;
    pub const SELECTION_STROKE_WIDTH: f32 = 2.0;
    pub const LINK_STROKE_WIDTH: f32 = 1.5;

    pub const LABEL_FONT_SIZE: f32 = 10.0;
    pub const LABEL_OFFSET: f32 = 6.0;
    pub const LABEL_PADDING: f32 = 2.0;
    pub const LABEL_CORNER_RADIUS: f32 = 2.0;

    pub const ZOOM_MIN: f32 = 0.05;
    pub const ZOOM_MAX: f32 = 40.0;
    pub const ZOOM_DELTA_MULTIPLIER: f32 = 0.001;
    pub const FIT_VIEW_MARGIN: f32 = 0.9;

    pub const GRID_TARGET_LINES: f32 = 12.0;
    pub const GRID_DASH_LENGTH: f32 = 4.0;
    pub const GRID_DASH_GAP: f32 = 4.0;

    pub const MAPPING_DIALOG_WIDTH: f32 = 360.0;
    pub const EMPTY_HINT_FONT_SIZE: f32 = 16.0;
}
