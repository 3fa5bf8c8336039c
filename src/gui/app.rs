use super::Config;
use crate::{FpsLimiter, LifeEngine, TickTimer, Viewport, ViewportLimits};
use eframe::egui::{CentralPanel, Context, Frame, Key, TopBottomPanel, ViewportCommand};
use log::{error, info};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

pub struct App {
    pub(super) life_engine: LifeEngine, // Conway's GoL board.
    pub(super) viewport: Viewport,      // Visible part of the board.
    pub(super) rng: ChaCha8Rng,         // Source of random populations.
    pub(super) living_cells: usize,     // Population used when repopulating.
    pub(super) is_paused: bool,
    pub(super) do_one_step: bool, // Do one step and pause.
    pub(super) generation: u64,
    pub(super) population: usize,
    pub(super) last_update_duration: f64, // Duration of the last advance in seconds.
    pub(super) window_px: (i64, i64),     // Size of the board area the viewport was fitted to.
    pub(super) tick_timer: TickTimer,
    pub(super) fps_limiter: FpsLimiter,
}

impl App {
    pub fn new(life_engine: LifeEngine, rng: ChaCha8Rng, living_cells: usize) -> Self {
        Self {
            population: life_engine.population(),
            life_engine,
            viewport: Viewport::new(0, 0, Config::CELL_SIZE, ViewportLimits::default()),
            rng,
            living_cells,
            is_paused: false,
            do_one_step: false,
            generation: 0,
            last_update_duration: 0.,
            window_px: (0, 0),
            tick_timer: TickTimer::new(Config::REFRESH_INTERVAL),
            fps_limiter: FpsLimiter::new(Config::MAX_FPS),
        }
    }

    fn repopulate(&mut self) {
        match self
            .life_engine
            .repopulate(self.living_cells, &mut self.rng)
        {
            Ok(()) => {
                self.generation = 0;
                self.population = self.life_engine.population();
            }
            Err(e) => error!("cannot repopulate the board: {}", e),
        }
    }

    fn update_engine(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }
        if !self.do_one_step && !self.tick_timer.tick(Instant::now()) {
            return;
        }

        let timer = Instant::now();
        self.population = self.life_engine.advance();
        self.last_update_duration = timer.elapsed().as_secs_f64();
        self.generation += 1;
        self.do_one_step = false;

        if self.population == 0 {
            info!("all cells died at generation {}", self.generation);
            self.is_paused = true;
        }
    }

    /// Returns `true` if the user asked to quit.
    fn handle_keys(&mut self, ctx: &Context) -> bool {
        let board = self.life_engine.size();
        let mut repopulate = false;
        let quit = ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.is_paused = !self.is_paused;
            }
            if input.key_pressed(Key::N) && self.is_paused {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::K) {
                self.life_engine.kill_all();
                self.population = 0;
            }
            if input.key_pressed(Key::R) {
                repopulate = true;
            }

            let (mut dx, mut dy) = (0, 0);
            if input.key_pressed(Key::ArrowLeft) {
                dx -= 1;
            }
            if input.key_pressed(Key::ArrowRight) {
                dx += 1;
            }
            if input.key_pressed(Key::ArrowUp) {
                dy -= 1;
            }
            if input.key_pressed(Key::ArrowDown) {
                dy += 1;
            }
            if (dx, dy) != (0, 0) {
                self.viewport.pan_steps(dx, dy, board);
            }

            let mut zoom = 0;
            if input.key_pressed(Key::Plus) || input.key_pressed(Key::Equals) {
                zoom += Config::ZOOM_STEP;
            }
            if input.key_pressed(Key::Minus) {
                zoom -= Config::ZOOM_STEP;
            }
            if input.raw_scroll_delta.y != 0. {
                zoom += Config::ZOOM_STEP * input.raw_scroll_delta.y.signum() as i64;
            }
            if zoom != 0 {
                self.viewport.zoom(zoom, board);
            }

            input.key_pressed(Key::Q)
        });
        if repopulate {
            self.repopulate();
        }
        quit
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.handle_keys(ctx) {
            ctx.send_viewport_cmd(ViewportCommand::Close);
            return;
        }

        TopBottomPanel::bottom("status")
            .exact_height(Config::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| self.draw_status(ui));

        CentralPanel::default()
            .frame(Frame::default().fill(Config::OUTSIDE_COLOR))
            .show(ctx, |ui| {
                ctx.request_repaint();
                self.draw_board(ui);
                self.update_engine();
            });

        self.fps_limiter.delay();
    }
}
