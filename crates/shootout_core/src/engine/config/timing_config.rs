use serde::{Deserialize, Serialize};

/// Countdown lengths, in ticks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Host update rate; used to turn ticks into countdown seconds (기본: 60)
    pub ticks_per_second: u32,
    /// "GOAL!" / "SAVED!" hold after each kick (기본: 60 = 1s)
    pub outcome_hold_ticks: u32,
    /// Delay before the computer kicks (기본: 180 = 3s)
    pub opponent_prep_ticks: u32,
    /// "SUDDEN DEATH!" hold (기본: 120 = 2s)
    pub sudden_death_hold_ticks: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60,
            outcome_hold_ticks: 60,
            opponent_prep_ticks: 180,
            sudden_death_hold_ticks: 120,
        }
    }
}

impl TimingConfig {
    /// Minimal holds for headless runs.
    pub fn quick() -> Self {
        Self {
            ticks_per_second: 60,
            outcome_hold_ticks: 1,
            opponent_prep_ticks: 1,
            sudden_death_hold_ticks: 1,
        }
    }
}
