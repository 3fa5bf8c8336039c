mod grid;
mod life;
#[cfg(test)]
mod tests;

pub use grid::GridStore;
pub use life::{BoardSize, LifeEngine};
