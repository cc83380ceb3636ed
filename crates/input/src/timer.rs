//! Timers driving the game loop.
//!
//! [`RepeatingTimer`] turns elapsed time into drop-ticks with an accumulator, so a
//! slow frame catches up instead of losing ticks. [`FrameClock`] paces the loop.

use std::time::{Duration, Instant};

/// Fires once per `interval_ms`; the interval is fixed at construction.
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    interval_ms: u32,
    accumulator_ms: u32,
}

impl RepeatingTimer {
    /// Zero intervals are bumped to 1 ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulator_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Advance by `elapsed_ms`; returns how many times the timer fired.
    pub fn update(&mut self, elapsed_ms: u32) -> u32 {
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        let fired = self.accumulator_ms / self.interval_ms;
        self.accumulator_ms -= fired * self.interval_ms;
        fired
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
    }
}

/// Fixed-rate frame pacing.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(frames_per_second: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / frames_per_second.max(1),
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time left in the current frame
    pub fn remaining(&self) -> Duration {
        self.frame.saturating_sub(self.last.elapsed())
    }

    /// Sleep out the rest of the frame; returns the full time since the previous call.
    pub fn wait(&mut self) -> Duration {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed
    }
}
