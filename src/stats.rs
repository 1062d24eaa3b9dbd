//! Session usage counters
//!
//! Not persisted: counts start at zero and the start instant is captured when
//! the dashboard is created.

use std::time::Instant;

use crate::constants::timing::MS_PER_MINUTE;

#[derive(Debug, Clone)]
pub struct SessionStats {
    clicks: u64,
    searches: u64,
    started: Instant,
}

impl SessionStats {
    pub fn new(started: Instant) -> Self {
        Self {
            clicks: 0,
            searches: 0,
            started,
        }
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    pub fn searches(&self) -> u64 {
        self.searches
    }

    pub fn record_click(&mut self) -> u64 {
        self.clicks += 1;
        self.clicks
    }

    pub fn record_search(&mut self) -> u64 {
        self.searches += 1;
        self.searches
    }

    /// Whole minutes since session start; `now` before the start counts as zero
    pub fn elapsed_minutes(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_millis() / MS_PER_MINUTE) as u64
    }
}
