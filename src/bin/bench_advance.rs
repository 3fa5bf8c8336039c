use conway_board::LifeEngine;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

const SIDE: usize = 2048;
const FILL_RATE: f64 = 0.3;
const GENERATIONS: u32 = 16;

fn main() -> anyhow::Result<()> {
    let timer = Instant::now();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let living_cells = (SIDE as f64 * SIDE as f64 * FILL_RATE) as usize;
    let mut engine = LifeEngine::new(SIDE, SIDE, living_cells, &mut rng)?;
    println!("Time on building field: {:?}", timer.elapsed());

    let timer = Instant::now();
    let mut population = 0;
    for _ in 0..GENERATIONS {
        population = engine.advance();
    }
    println!(
        "Time per generation: {:?} (population {})",
        timer.elapsed() / GENERATIONS,
        population
    );
    Ok(())
}
