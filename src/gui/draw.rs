use super::{App, Config};
use crate::NiceInt;
use eframe::egui::{vec2, Painter, Rect, RichText, Sense, Ui};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    pub(super) fn draw_status(&mut self, ui: &mut Ui) {
        let state = if self.is_paused { "paused" } else { "running" };
        let text = format!(
            "Generation: {}   Population: {}   Cell size: {}px   Update: {:.3} ms   FPS: {:3}   [{}]",
            NiceInt::from(self.generation),
            NiceInt::from_usize(self.population),
            self.viewport.cell_pixel_size(),
            self.last_update_duration * 1e3,
            self.fps_limiter.fps().round() as u32,
            state,
        );
        ui.label(Self::new_text(&text));
    }

    /// Fits the viewport to the board area, handles clicks and paints the visible cells.
    pub(super) fn draw_board(&mut self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let area = response.rect;
        let board = self.life_engine.size();

        let window_px = (area.width() as i64, area.height() as i64);
        if window_px != self.window_px {
            self.window_px = window_px;
            self.viewport.resize_window(window_px.0, window_px.1);
            self.viewport.clamp_to(board);
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - area.min;
                let (x, y) = self
                    .viewport
                    .screen_to_board(offset.x as i64, offset.y as i64);
                self.life_engine.toggle_cell(x, y);
                self.population = self.life_engine.population();
            }
        }

        self.paint_cells(&painter, area);
    }

    fn paint_cells(&self, painter: &Painter, area: Rect) {
        let cell = self.viewport.cell_pixel_size();
        let to_screen = |column: i64, row: i64| {
            area.min + vec2((column * cell) as f32, (row * cell) as f32)
        };

        // the board itself, everything around it keeps the panel color
        let board = self.life_engine.size();
        let board_rect = Rect::from_min_max(
            to_screen(-self.viewport.camera_x(), -self.viewport.camera_y()),
            to_screen(
                board.columns as i64 - self.viewport.camera_x(),
                board.rows as i64 - self.viewport.camera_y(),
            ),
        );
        painter.rect_filled(board_rect.intersect(area), 0., Config::DEAD_COLOR);

        let size = vec2(cell as f32, cell as f32);
        for (row, column, x, y) in self.viewport.visible_cells() {
            if self.life_engine.cell_alive(x, y) {
                let rect = Rect::from_min_size(to_screen(column, row), size);
                painter.rect_filled(rect, 0., Config::ALIVE_COLOR);
            }
        }
    }
}
