use eframe::egui::Color32;
use std::time::Duration;

pub struct Config;

impl Config {
    pub const MAX_FPS: f64 = 60.;
    /// Minimal time between two generations.
    pub const REFRESH_INTERVAL: Duration = Duration::from_millis(100);

    pub const CELL_SIZE: i64 = 10;
    pub const ZOOM_STEP: i64 = 1;

    pub const STATUS_BAR_HEIGHT: f32 = 24.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const ALIVE_COLOR: Color32 = Color32::WHITE;
    pub const DEAD_COLOR: Color32 = Color32::BLACK;
    pub const OUTSIDE_COLOR: Color32 = Color32::from_gray(40);
}
