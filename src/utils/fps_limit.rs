use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Sleeps at the end of a frame so that frames are not drawn faster than `max_fps`.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FpsLimiter {
    pub fn new(max_fps: f64) -> Self {
        Self {
            target_frametime: Duration::from_secs_f64(1. / max_fps),
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }

    /// Smoothed frame rate over the recent frames.
    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    pub fn delay(&mut self) {
        let before_wait = self.frame_timer.elapsed();
        if self.target_frametime > before_wait {
            sleep(self.target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;
        self.frame_timer = Instant::now();
    }
}

/// Gates generation advances to at most one per `interval`.
pub struct TickTimer {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl TickTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    /// Returns `true` and restarts the interval if it has elapsed since the last tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.last_tick {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last_tick = Some(now);
                true
            }
        }
    }
}
