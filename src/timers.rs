//! Fixed-interval ticks driven by the frame loop
//!
//! egui only runs code when a frame is drawn, so periodic work is polled:
//! each frame asks every [`Ticker`] whether it is due, and the app schedules a
//! repaint for the soonest pending tick.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last: start,
        }
    }

    /// True at most once per interval; the next tick is scheduled from the
    /// previous deadline so ticks do not drift with frame timing
    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) < self.interval {
            return false;
        }
        self.last += self.interval;
        // Skip missed ticks after a long stall (e.g. system sleep)
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
        }
        true
    }

    /// Time until the next tick is due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last))
    }
}
