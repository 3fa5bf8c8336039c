use super::GridStore;
use crate::EngineError;
use log::{info, trace};
use rand::Rng;

/// Extent of a board, detached from the engine that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardSize {
    pub rows: usize,
    pub columns: usize,
}

/// Conway's Game of Life (B3/S23) on a fixed board whose border is dead.
#[derive(Clone, Debug)]
pub struct LifeEngine {
    current: GridStore,
    rows: usize,
    columns: usize,
}

impl LifeEngine {
    /// Create a board with no live cells.
    pub fn blank(rows: usize, columns: usize) -> Result<Self, EngineError> {
        Ok(Self {
            current: GridStore::new(rows, columns)?,
            rows,
            columns,
        })
    }

    /// Create a board with exactly `living_cell_count` distinct live cells
    /// chosen uniformly at random.
    ///
    /// Fails with [`EngineError::InvalidPopulation`] if `living_cell_count`
    /// exceeds `rows * columns`.
    pub fn new<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        living_cell_count: usize,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let mut engine = Self::blank(rows, columns)?;
        engine.populate(living_cell_count, rng)?;
        info!(
            "created {}x{} board with {} living cells",
            rows, columns, living_cell_count
        );
        Ok(engine)
    }

    /// Discard every cell and sample a fresh population of the same extent.
    pub fn repopulate<R: Rng + ?Sized>(
        &mut self,
        living_cell_count: usize,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        self.populate(living_cell_count, rng)?;
        info!("repopulated board with {} living cells", living_cell_count);
        Ok(())
    }

    fn populate<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        let capacity = self.capacity();
        if count > capacity {
            return Err(EngineError::InvalidPopulation {
                requested: count,
                capacity,
            });
        }
        let mut fresh = self.current.blank_like();
        sample_cells(&mut fresh, count, rng);
        self.current = fresh;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn size(&self) -> BoardSize {
        BoardSize {
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Total number of cells.
    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.current.population()
    }

    pub fn cell_alive(&self, x: i64, y: i64) -> bool {
        self.current.get(x, y)
    }

    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) -> bool {
        self.current.set(x, y, alive)
    }

    pub fn toggle_cell(&mut self, x: i64, y: i64) -> bool {
        self.current.toggle(x, y)
    }

    pub fn kill_all(&mut self) {
        self.current.clear_all();
    }

    /// Live cells among the 8 neighbors; cells beyond the border count as dead.
    pub fn live_neighbors(&self, x: i64, y: i64) -> u8 {
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if (dx, dy) != (0, 0) && self.current.get(x + dx, y + dy) {
                    count += 1;
                }
            }
        }
        count
    }

    /// State of the cell in the next generation.
    pub fn next_state(&self, x: i64, y: i64) -> bool {
        match self.live_neighbors(x, y) {
            3 => true,
            2 => self.current.get(x, y),
            _ => false,
        }
    }

    /// Compute the next generation and return its population.
    ///
    /// Every cell is evaluated against the current generation; the result is
    /// written to a scratch store that replaces the current one afterwards.
    pub fn advance(&mut self) -> usize {
        let mut next = self.current.blank_like();
        let mut living = 0;
        for y in 0..self.rows as i64 {
            for x in 0..self.columns as i64 {
                if next.set(x, y, self.next_state(x, y)) {
                    living += 1;
                }
            }
        }
        self.current = next;
        trace!("advanced generation, {} living cells", living);
        living
    }
}

/// Marks `count` distinct dead cells alive, resampling on collision.
fn sample_cells<R: Rng + ?Sized>(grid: &mut GridStore, count: usize, rng: &mut R) {
    let columns = grid.columns();
    let capacity = grid.rows() * columns;
    let mut placed = 0;
    while placed < count {
        let i = rng.gen_range(0..capacity);
        let (x, y) = ((i % columns) as i64, (i / columns) as i64);
        if !grid.get(x, y) {
            grid.set(x, y, true);
            placed += 1;
        }
    }
}
