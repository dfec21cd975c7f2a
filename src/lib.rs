pub mod app;
pub mod board;
pub mod collision;
pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod render;
pub mod screens;
pub mod sound;
pub mod systems;
pub mod ui;

#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

/// Gates logic and drawing to a fixed frame interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    interval: Duration,
    last_frame: Option<Instant>,
}

impl FrameClock {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_frame: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True, and marks a frame as run, when at least one interval has passed
    /// since the last frame. The first call is always ready.
    pub fn ready(&mut self, now: Instant) -> bool {
        let due = self
            .last_frame
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval);

        if due {
            self.last_frame = Some(now);
        }
        due
    }

    /// Time left until the next frame is due.
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Duration {
        self.last_frame.map_or(Duration::ZERO, |last| {
            self.interval
                .saturating_sub(now.saturating_duration_since(last))
        })
    }
}
