//! Monotonic clocks and frame-rate tracking

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of monotonic time, measured from the clock's own origin
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Real time, backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Time that only moves when told to (scripted runs, tests)
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Jump forward to `t`; never moves backward
    pub fn advance_to(&self, t: Duration) {
        if t > self.now.get() {
            self.now.set(t);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Counts frames drawn over one-second windows
#[derive(Debug, Clone, Default)]
pub struct FrameCounter {
    window_start: Option<Duration>,
    frames: u32,
    fps: u32,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame drawn at `now`. Returns the frame count of the window
    /// that just closed, once per second.
    pub fn frame(&mut self, now: Duration) -> Option<u32> {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;

        if now.saturating_sub(start) >= Duration::from_secs(1) {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start = Some(now);
            return Some(self.fps);
        }
        None
    }

    /// Frames counted in the last complete window
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_is_monotonic() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_millis(250));
        clock.advance_to(Duration::from_millis(100));
        assert_eq!(clock.now(), Duration::from_millis(250));
        clock.advance_to(Duration::from_secs(4));
        assert_eq!(clock.now(), Duration::from_secs(4));
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_frame_counter_reports_each_second() {
        let mut counter = FrameCounter::new();
        let mut reports = Vec::new();
        // 30 frames per second for just over two seconds
        for i in 0..=61u64 {
            if let Some(fps) = counter.frame(Duration::from_millis(i * 1000 / 30 + 1)) {
                reports.push(fps);
            }
        }
        assert_eq!(reports.len(), 2);
        assert_eq!(counter.fps(), reports[1]);
        assert!(reports.iter().all(|&fps| (30..=31).contains(&fps)));
    }
}
