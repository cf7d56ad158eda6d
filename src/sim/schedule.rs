//! One-shot deferred reset
//!
//! Times are monotonic clock readings (`Duration` since the clock's origin),
//! so the simulation never reads wall time itself.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A single pending reset, fired at most once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetTimer {
    due_at: Option<Duration>,
}

impl ResetTimer {
    pub fn new() -> Self {
        Self { due_at: None }
    }

    /// Arm the timer to fire `delay` after `now`. Re-arming replaces any
    /// pending deadline.
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        self.due_at = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.due_at = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    pub fn due_at(&self) -> Option<Duration> {
        self.due_at
    }

    /// Time left until the deadline (zero once overdue)
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.due_at.map(|due| due.saturating_sub(now))
    }

    /// Returns true exactly once, on the first poll at or after the deadline
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.due_at {
            Some(due) if now >= due => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_at_deadline() {
        let mut timer = ResetTimer::new();
        assert!(!timer.poll(Duration::from_secs(100)));

        timer.schedule(Duration::from_millis(500), Duration::from_millis(3000));
        assert_eq!(timer.due_at(), Some(Duration::from_millis(3500)));
        assert!(!timer.poll(Duration::from_millis(3499)));
        assert!(timer.poll(Duration::from_millis(3500)));
        assert!(!timer.poll(Duration::from_millis(4000)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_cancel() {
        let mut timer = ResetTimer::new();
        timer.schedule(Duration::ZERO, Duration::from_secs(3));
        timer.cancel();
        assert!(!timer.poll(Duration::from_secs(10)));
    }

    #[test]
    fn test_remaining_saturates() {
        let mut timer = ResetTimer::new();
        assert_eq!(timer.remaining(Duration::ZERO), None);
        timer.schedule(Duration::ZERO, Duration::from_secs(3));
        assert_eq!(timer.remaining(Duration::from_secs(1)), Some(Duration::from_secs(2)));
        assert_eq!(timer.remaining(Duration::from_secs(5)), Some(Duration::ZERO));
    }
}
