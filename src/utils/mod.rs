mod args;
mod format_int;
mod fps_limit;

pub use args::{LaunchArgs, USAGE};
pub use format_int::NiceInt;
pub use fps_limit::{FpsLimiter, TickTimer};
