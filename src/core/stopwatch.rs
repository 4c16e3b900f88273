// src/core/stopwatch.rs
//
// Display-only elapsed time for one session. Sampled by the UI tick;
// nothing gates on it.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stopwatch {
    started: Option<Instant>,
    elapsed: Duration,
}

impl Stopwatch {
    /// Restart from zero. Replaces any running measurement.
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
        self.elapsed = Duration::ZERO;
    }

    pub fn sample(&mut self, now: Instant) {
        if let Some(t0) = self.started {
            self.elapsed = now.saturating_duration_since(t0);
        }
    }

    /// Take a last sample and freeze.
    pub fn stop(&mut self, now: Instant) -> Duration {
        self.sample(now);
        self.started = None;
        self.elapsed
    }

    #[inline] pub fn is_running(&self) -> bool { self.started.is_some() }
    #[inline] pub fn elapsed(&self) -> Duration { self.elapsed }
}
