mod engine;
mod error;
mod gui;
mod utils;
mod viewport;

pub use engine::{BoardSize, GridStore, LifeEngine};
pub use error::EngineError;
pub use gui::{App, Config};
pub use utils::{FpsLimiter, LaunchArgs, NiceInt, TickTimer, USAGE};
pub use viewport::{Viewport, ViewportLimits};
