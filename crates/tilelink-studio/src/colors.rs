use egui::Color32;

pub struct ColorPalette;

impl ColorPalette {
    pub const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(40, 40, 40);
    pub const GRID_LINE: Color32 = Color32::from_rgb(62, 62, 62);
    pub const EMPTY_HINT: Color32 = Color32::from_rgb(140, 140, 140);

    pub const TILE_DOT: Color32 = Color32::from_rgb(90, 150, 230);
    pub const START_TILE_DOT: Color32 = Color32::from_rgb(60, 170, 100);
    pub const LINK_LINE: Color32 = Color32::from_rgba_premultiplied(200, 60, 60, 200);
    pub const SELECTION_RING: Color32 = Color32::from_rgb(0, 220, 220);

    pub const LABEL_TEXT: Color32 = Color32::from_rgb(230, 230, 230);
    pub const LABEL_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(25, 25, 25, 190);

    pub const DIALOG_ERROR: Color32 = Color32::from_rgb(255, 100, 100);
}
