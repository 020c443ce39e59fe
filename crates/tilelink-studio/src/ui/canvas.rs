use crate::colors::ColorPalette;
use crate::state::{LinkerApp, ViewState};
use crate::ui_constants::UiConstants;
use eframe::egui;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Response, Stroke, Ui, Vec2};
use tilelink_core::{Board, CoreConstants, Extent, TileId};

fn to_screen(rect: Rect, view: &ViewState, world: [f64; 2]) -> Pos2 {
    rect.min
        + view.pan_offset
        + egui::vec2(world[0] as f32, world[1] as f32) * view.zoom
}

fn to_world(rect: Rect, view: &ViewState, screen: Pos2) -> [f64; 2] {
    let local = (screen - rect.min - view.pan_offset) / view.zoom;
    [f64::from(local.x), f64::from(local.y)]
}

/// Step size giving a readable number of grid lines: a power of ten
/// times 1, 2, or 5.
fn grid_step(visible_width: f32) -> f32 {
    let raw = visible_width / UiConstants::GRID_TARGET_LINES;
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10.0_f32.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized < 1.5 {
        1.0
    } else if normalized < 3.5 {
        2.0
    } else if normalized < 7.5 {
        5.0
    } else {
        10.0
    };
    magnitude * factor
}

impl LinkerApp {
    pub fn render_canvas_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;

            painter.rect_filled(rect, 0.0, ColorPalette::CANVAS_BACKGROUND);

            if self.board.is_none() && self.background.is_none() {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "Load a CSV to begin",
                    FontId::proportional(UiConstants::EMPTY_HINT_FONT_SIZE),
                    ColorPalette::EMPTY_HINT,
                );
                return;
            }

            if self.fit_view_requested {
                self.fit_view(rect);
                self.fit_view_requested = false;
            }

            self.handle_view_input(ui, &response, rect);

            if let Some(bg) = &self.background {
                let image_rect = Rect::from_min_max(
                    to_screen(rect, &self.view, [0.0, 0.0]),
                    to_screen(rect, &self.view, [bg.size[0] as f64, bg.size[1] as f64]),
                );
                painter.image(
                    bg.texture.id(),
                    image_rect,
                    Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
            }

            if self.settings.show_grid {
                self.draw_grid(&painter, rect);
            }

            let mut clicked: Option<Option<TileId>> = None;
            if let Some(board) = &self.board {
                draw_links(&painter, rect, &self.view, board);
                draw_tiles(&painter, rect, &self.view, board);
                if self.settings.show_labels {
                    draw_labels(
                        &painter,
                        rect,
                        &self.view,
                        board,
                        self.settings.label_font_size,
                    );
                }
                if let Some(selected) = &self.selected_tile
                    && let Some(center) = board.center_of(selected)
                {
                    painter.circle_stroke(
                        to_screen(rect, &self.view, center),
                        UiConstants::SELECTION_RADIUS,
                        Stroke::new(
                            UiConstants::SELECTION_STROKE_WIDTH,
                            ColorPalette::SELECTION_RING,
                        ),
                    );
                }

                if response.clicked()
                    && let Some(pointer) = response.interact_pointer_pos()
                {
                    let world = to_world(rect, &self.view, pointer);
                    let visible_world_width = f64::from(rect.width() / self.view.zoom);
                    let tolerance = visible_world_width * CoreConstants::CLICK_TOLERANCE_RATIO;
                    clicked = Some(
                        board
                            .tile_at(world[0], world[1], tolerance)
                            .map(|t| t.id.clone()),
                    );
                }
            }

            if let Some(clicked) = clicked {
                self.handle_tile_click(clicked);
            }
        });
    }

    /// Scroll-wheel zoom about the cursor; pan with middle mouse or
    /// space + primary drag.
    fn handle_view_input(&mut self, ui: &Ui, response: &Response, rect: Rect) {
        if response.hovered() {
            let scroll_delta = ui.input(|i| i.raw_scroll_delta.y);
            if scroll_delta != 0.0
                && let Some(mouse_pos) = ui.ctx().pointer_hover_pos()
            {
                let old_zoom = self.view.zoom;
                let zoom_delta = scroll_delta * UiConstants::ZOOM_DELTA_MULTIPLIER * old_zoom;
                self.view.zoom = (old_zoom + zoom_delta)
                    .clamp(UiConstants::ZOOM_MIN, UiConstants::ZOOM_MAX);

                // Keep the world point under the cursor fixed.
                let world = to_world(rect, &ViewState { zoom: old_zoom, ..self.view }, mouse_pos);
                let after = to_screen(rect, &self.view, world);
                self.view.pan_offset += mouse_pos - after;
            }
        }

        let is_panning = ui.input(|i| {
            i.pointer.button_down(egui::PointerButton::Middle)
                || (i.pointer.button_down(egui::PointerButton::Primary)
                    && i.key_down(egui::Key::Space))
        });
        if is_panning && response.dragged() {
            self.view.pan_offset += response.drag_delta();
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        }
    }

    /// Frames the background image if present, otherwise the tile
    /// extent. Degenerate content resets to the identity view.
    fn fit_view(&mut self, rect: Rect) {
        let content = if let Some(bg) = &self.background {
            Some(Extent {
                min: [0.0, 0.0],
                max: [bg.size[0] as f64, bg.size[1] as f64],
            })
        } else {
            self.board.as_ref().and_then(Board::extent)
        };

        let Some(content) = content else {
            self.view = ViewState::default();
            return;
        };

        let content_size = egui::vec2(
            (content.width() as f32).max(f32::EPSILON),
            (content.height() as f32).max(f32::EPSILON),
        );
        let zoom = (rect.width() / content_size.x)
            .min(rect.height() / content_size.y)
            .clamp(UiConstants::ZOOM_MIN, UiConstants::ZOOM_MAX)
            * UiConstants::FIT_VIEW_MARGIN;
        let content_min = egui::vec2(content.min[0] as f32, content.min[1] as f32);
        self.view.zoom = zoom;
        self.view.pan_offset = (rect.size() - content_size * zoom) / 2.0 - content_min * zoom;
    }

    fn draw_grid(&self, painter: &Painter, rect: Rect) {
        let view = &self.view;
        let world_min = to_world(rect, view, rect.min);
        let world_max = to_world(rect, view, rect.max);
        let step = grid_step((world_max[0] - world_min[0]) as f32);
        if step <= 0.0 {
            return;
        }

        let stroke = Stroke::new(1.0, ColorPalette::GRID_LINE);
        let mut x = (world_min[0] as f32 / step).floor() * step;
        while f64::from(x) <= world_max[0] {
            let top = to_screen(rect, view, [f64::from(x), world_min[1]]);
            let bottom = to_screen(rect, view, [f64::from(x), world_max[1]]);
            painter.extend(egui::Shape::dashed_line(
                &[top, bottom],
                stroke,
                UiConstants::GRID_DASH_LENGTH,
                UiConstants::GRID_DASH_GAP,
            ));
            x += step;
        }
        let mut y = (world_min[1] as f32 / step).floor() * step;
        while f64::from(y) <= world_max[1] {
            let left = to_screen(rect, view, [world_min[0], f64::from(y)]);
            let right = to_screen(rect, view, [world_max[0], f64::from(y)]);
            painter.extend(egui::Shape::dashed_line(
                &[left, right],
                stroke,
                UiConstants::GRID_DASH_LENGTH,
                UiConstants::GRID_DASH_GAP,
            ));
            y += step;
        }
    }
}

fn draw_links(painter: &Painter, rect: Rect, view: &ViewState, board: &Board) {
    for (a, b) in board.links.edges() {
        let (Some(from), Some(to)) = (board.center_of(a), board.center_of(b)) else {
            continue;
        };
        painter.line_segment(
            [to_screen(rect, view, from), to_screen(rect, view, to)],
            Stroke::new(UiConstants::LINK_STROKE_WIDTH, ColorPalette::LINK_LINE),
        );
    }
}

fn draw_tiles(painter: &Painter, rect: Rect, view: &ViewState, board: &Board) {
    for (tile, center) in board.tiles().iter().zip(board.centers()) {
        let color = if board.start_tiles().contains(&tile.id) {
            ColorPalette::START_TILE_DOT
        } else {
            ColorPalette::TILE_DOT
        };
        painter.circle_filled(to_screen(rect, view, *center), UiConstants::TILE_RADIUS, color);
    }
}

fn draw_labels(painter: &Painter, rect: Rect, view: &ViewState, board: &Board, font_size: f32) {
    for (tile, center) in board.tiles().iter().zip(board.centers()) {
        let pos = to_screen(rect, view, *center);
        let galley = painter.layout_no_wrap(
            tile.id.to_string(),
            FontId::proportional(font_size),
            ColorPalette::LABEL_TEXT,
        );
        let text_pos = pos
            + Vec2::new(
                UiConstants::LABEL_OFFSET,
                -UiConstants::LABEL_OFFSET - galley.size().y,
            );
        let background = Rect::from_min_size(text_pos, galley.size())
            .expand(UiConstants::LABEL_PADDING);
        painter.rect_filled(
            background,
            UiConstants::LABEL_CORNER_RADIUS,
            ColorPalette::LABEL_BACKGROUND,
        );
        painter.galley(text_pos, galley, ColorPalette::LABEL_TEXT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_screen_round_trip() {
        let rect = Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(800.0, 600.0));
        let view = ViewState {
            pan_offset: egui::vec2(30.0, -20.0),
            zoom: 2.5,
        };
        let world = [12.0, 34.0];
        let round_tripped = to_world(rect, &view, to_screen(rect, &view, world));
        assert!((round_tripped[0] - world[0]).abs() < 1e-4);
        assert!((round_tripped[1] - world[1]).abs() < 1e-4);
    }

    #[test]
    fn test_grid_step_is_round() {
        assert_eq!(grid_step(120.0), 10.0);
        assert_eq!(grid_step(60.0), 5.0);
        assert_eq!(grid_step(25.0), 2.0);
        assert_eq!(grid_step(1200.0), 100.0);
    }

    #[test]
    fn test_grid_step_handles_degenerate_input() {
        assert_eq!(grid_step(0.0), 1.0);
        assert_eq!(grid_step(-5.0), 1.0);
    }
}
