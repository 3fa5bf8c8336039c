use super::LifeEngine;
use crate::EngineError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SEED: u64 = 42;

/// Builds a board from rows of `#` (alive) and `.` (dead).
fn from_picture(picture: &[&str]) -> LifeEngine {
    let mut life = LifeEngine::blank(picture.len(), picture[0].len()).unwrap();
    for (y, row) in picture.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            life.set_cell(x as i64, y as i64, c == '#');
        }
    }
    life
}

fn to_picture(life: &LifeEngine) -> Vec<String> {
    (0..life.rows() as i64)
        .map(|y| {
            (0..life.columns() as i64)
                .map(|x| if life.cell_alive(x, y) { '#' } else { '.' })
                .collect()
        })
        .collect()
}

#[test]
fn test_rule_for_every_neighbor_count() {
    let neighbors = [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)];
    for n in 0..=8 {
        for center in [false, true] {
            let mut life = LifeEngine::blank(3, 3).unwrap();
            for &(x, y) in &neighbors[..n] {
                life.set_cell(x, y, true);
            }
            life.set_cell(1, 1, center);

            assert_eq!(life.live_neighbors(1, 1) as usize, n);
            let expected = n == 3 || (center && n == 2);
            assert_eq!(
                life.next_state(1, 1),
                expected,
                "neighbors: {}, alive: {}",
                n,
                center
            );
            life.advance();
            assert_eq!(life.cell_alive(1, 1), expected);
        }
    }
}

#[test]
fn test_dead_board_stays_dead() {
    let mut life = LifeEngine::blank(16, 9).unwrap();
    for _ in 0..10 {
        assert_eq!(life.advance(), 0);
    }
    assert_eq!(life.population(), 0);
}

#[test]
fn test_isolated_cell_dies() {
    let mut life = from_picture(&["...", ".#.", "..."]);
    assert_eq!(life.advance(), 0);
    assert_eq!(to_picture(&life), ["...", "...", "..."]);
}

#[test]
fn test_block_is_still() {
    let picture = ["......", "......", "..##..", "..##..", "......", "......"];
    let mut life = from_picture(&picture);
    for _ in 0..3 {
        assert_eq!(life.advance(), 4);
        assert_eq!(to_picture(&life), picture);
    }
}

#[test]
fn test_blinker_has_period_two() {
    let horizontal = [".....", ".....", ".###.", ".....", "....."];
    let vertical = [".....", "..#..", "..#..", "..#..", "....."];
    let mut life = from_picture(&horizontal);

    assert_eq!(life.advance(), 3);
    assert_eq!(to_picture(&life), vertical);
    assert_eq!(life.advance(), 3);
    assert_eq!(to_picture(&life), horizontal);
}

#[test]
fn test_border_is_dead_not_wrapped() {
    let mut life = from_picture(&[".###.", ".....", ".....", "....."]);
    assert_eq!(life.advance(), 2);
    assert_eq!(to_picture(&life), ["..#..", "..#..", ".....", "....."]);

    // a block in the corner is still a still life
    let corner = ["##...", "##...", ".....", "....."];
    let mut life = from_picture(&corner);
    assert_eq!(life.advance(), 4);
    assert_eq!(to_picture(&life), corner);
}

#[test]
fn test_advance_keeps_extent() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let mut life = LifeEngine::new(7, 11, 30, &mut rng).unwrap();
    for _ in 0..5 {
        let living = life.advance();
        assert_eq!((life.rows(), life.columns()), (7, 11));
        assert_eq!(living, life.population());
    }
}

#[test]
fn test_population_is_exact() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for count in [0, 1, 17, 50, 99, 100] {
        let life = LifeEngine::new(10, 10, count, &mut rng).unwrap();
        assert_eq!(life.population(), count);
    }
}

#[test]
fn test_population_over_capacity() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    assert_eq!(
        LifeEngine::new(4, 4, 17, &mut rng).unwrap_err(),
        EngineError::InvalidPopulation {
            requested: 17,
            capacity: 16
        }
    );

    let mut life = LifeEngine::new(4, 4, 5, &mut rng).unwrap();
    let before = to_picture(&life);
    assert!(life.repopulate(20, &mut rng).is_err());
    assert_eq!(to_picture(&life), before);
}

#[test]
fn test_same_seed_same_board() {
    let a = LifeEngine::new(20, 30, 150, &mut ChaCha8Rng::seed_from_u64(SEED)).unwrap();
    let b = LifeEngine::new(20, 30, 150, &mut ChaCha8Rng::seed_from_u64(SEED)).unwrap();
    assert_eq!(to_picture(&a), to_picture(&b));
}

#[test]
fn test_repopulate_discards_old_cells() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let mut life = LifeEngine::blank(8, 8).unwrap();
    for x in 0..8 {
        life.set_cell(x, 0, true);
    }
    life.repopulate(3, &mut rng).unwrap();
    assert_eq!(life.population(), 3);

    life.repopulate(0, &mut rng).unwrap();
    assert_eq!(life.population(), 0);
}

#[test]
fn test_editing_between_generations() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let mut life = LifeEngine::new(6, 6, 12, &mut rng).unwrap();
    let before = to_picture(&life);
    for y in -1..=6 {
        for x in -1..=6 {
            life.toggle_cell(x, y);
            life.toggle_cell(x, y);
        }
    }
    assert_eq!(to_picture(&life), before);

    assert!(life.set_cell(5, 5, true));
    assert!(!life.set_cell(6, 5, true));
    assert!(!life.cell_alive(6, 5));

    life.kill_all();
    assert_eq!(life.population(), 0);
}
