use crate::EngineError;

/// Bit-packed cell storage: one bit per cell, row-major.
///
/// Cell `(x, y)` is bit `y * columns + x`, stored in byte `i / 8` under the
/// mask `1 << (i % 8)`. Trailing bits of the last byte are never written.
#[derive(Clone, PartialEq, Eq)]
pub struct GridStore {
    bits: Vec<u8>,
    rows: usize,
    columns: usize,
}

impl GridStore {
    /// Create a board of dead cells.
    pub fn new(rows: usize, columns: usize) -> Result<Self, EngineError> {
        if rows == 0 || columns == 0 {
            return Err(EngineError::InvalidDimensions { rows, columns });
        }
        let byte_len = rows
            .checked_mul(columns)
            .map(|cells| cells.div_ceil(8))
            .ok_or(EngineError::Allocation { rows, columns })?;

        let mut bits = Vec::new();
        bits.try_reserve_exact(byte_len)
            .map_err(|_| EngineError::Allocation { rows, columns })?;
        bits.resize(byte_len, 0);

        Ok(Self {
            bits,
            rows,
            columns,
        })
    }

    /// A dead store with the same extent, reusing the already validated size.
    pub(super) fn blank_like(&self) -> Self {
        Self {
            bits: vec![0; self.bits.len()],
            rows: self.rows,
            columns: self.columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Length of the backing buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `(byte, mask)` of the cell, or `None` outside the board.
    fn locate(&self, x: i64, y: i64) -> Option<(usize, u8)> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.columns)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.rows)?;
        let i = y * self.columns + x;
        Some((i / 8, 1 << (i % 8)))
    }

    /// Cell state; everything outside the board is dead.
    pub fn get(&self, x: i64, y: i64) -> bool {
        match self.locate(x, y) {
            Some((byte, mask)) => self.bits[byte] & mask != 0,
            None => false,
        }
    }

    /// Writes one cell and returns the written state (`false` outside the board).
    pub fn set(&mut self, x: i64, y: i64, alive: bool) -> bool {
        let Some((byte, mask)) = self.locate(x, y) else {
            return false;
        };
        if alive {
            self.bits[byte] |= mask;
        } else {
            self.bits[byte] &= !mask;
        }
        alive
    }

    /// Flips one cell and returns its new state (`false` outside the board).
    pub fn toggle(&mut self, x: i64, y: i64) -> bool {
        let Some((byte, mask)) = self.locate(x, y) else {
            return false;
        };
        self.bits[byte] ^= mask;
        self.bits[byte] & mask != 0
    }

    pub fn clear_all(&mut self) {
        self.bits.fill(0);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }
}

impl std::fmt::Debug for GridStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "GridStore {}x{}", self.rows, self.columns)?;
        for y in 0..self.rows as i64 {
            for x in 0..self.columns as i64 {
                f.write_str(if self.get(x, y) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
