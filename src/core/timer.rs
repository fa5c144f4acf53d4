//! Two independent clocks: a wall-clock spawn timer and a fixed-rate tick clock.

use std::time::{Duration, Instant};

/// Fires once per elapsed period of real time, regardless of how many ticks
/// ran in between.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    period: Duration,
    accumulated: Duration,
}

impl SpawnTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accumulated: Duration::ZERO,
        }
    }

    /// Feed elapsed time and return how many periods completed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.accumulated += elapsed;
        let mut fired = 0;
        while self.accumulated >= self.period {
            self.accumulated -= self.period;
            fired += 1;
        }
        fired
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

/// Caps the loop at a fixed rate by reporting how long to wait before the
/// next tick may start.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    frame_start: Instant,
    last_poll: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        let now = Instant::now();
        Self {
            frame,
            frame_start: now,
            last_poll: now,
        }
    }

    /// Mark the start of a tick.
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Time remaining in the current tick before the next one may start.
    pub fn remaining(&self) -> Duration {
        self.frame.saturating_sub(self.frame_start.elapsed())
    }

    /// Real time since the previous call, for feeding a [`SpawnTimer`].
    pub fn take_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_poll);
        self.last_poll = now;
        elapsed
    }
}
