use thiserror::Error;

/// Failures of board construction.
///
/// Coordinates outside the board are never an error: reads report a dead cell
/// and writes are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Storage for a `rows x columns` board could not be obtained.
    #[error("cannot allocate a {rows}x{columns} board")]
    Allocation { rows: usize, columns: usize },

    /// More living cells were requested than the board has cells.
    #[error("requested {requested} living cells, but the board only has {capacity}")]
    InvalidPopulation { requested: usize, capacity: usize },

    /// A board needs at least one row and one column.
    #[error("invalid board dimensions {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },
}
