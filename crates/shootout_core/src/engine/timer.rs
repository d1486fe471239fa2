//! Tick countdowns
//!
//! All waiting in the engine is a countdown advanced once per
//! `MatchEngine::advance_tick()`; nothing reads the wall clock.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickTimer {
    remaining: u32,
}

impl TickTimer {
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    /// An already-expired timer.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn expired(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whole seconds left, rounded up (`ceil(remaining / ticks_per_second)`).
    pub fn seconds_left(&self, ticks_per_second: u32) -> u32 {
        if ticks_per_second == 0 {
            return 0;
        }
        self.remaining.div_ceil(ticks_per_second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_expires_after_n_ticks() {
        let mut timer = TickTimer::new(3);
        assert!(!timer.expired());
        timer.tick();
        timer.tick();
        assert!(!timer.expired());
        timer.tick();
        assert!(timer.expired());
        timer.tick();
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_seconds_left_rounds_up() {
        assert_eq!(TickTimer::new(180).seconds_left(60), 3);
        assert_eq!(TickTimer::new(179).seconds_left(60), 3);
        assert_eq!(TickTimer::new(120).seconds_left(60), 2);
        assert_eq!(TickTimer::new(1).seconds_left(60), 1);
        assert_eq!(TickTimer::idle().seconds_left(60), 0);
    }
}
