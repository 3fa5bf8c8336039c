#![warn(clippy::all)]

use anyhow::{anyhow, Context, Result};
use conway_board::{App, LaunchArgs, LifeEngine, USAGE};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::init();

    let args = LaunchArgs::parse(std::env::args().skip(1)).context(USAGE)?;
    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let life = LifeEngine::new(
        args.board_size,
        args.board_size,
        args.living_cells,
        &mut rng,
    )?;

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1280., 800.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(life, rng, args.living_cells)))),
    )
    .map_err(|e| anyhow!("window closed with an error: {}", e))
}
