//! # Engine Configuration
//!
//! All tuning constants live here so presets can swap them wholesale.
//!
//! ## 사용법
//! ```rust
//! use shootout_core::engine::config::EngineConfig;
//!
//! let classic = EngineConfig::default();
//! let headless = EngineConfig::quick();
//! assert!(classic.validate().is_ok() && headless.validate().is_ok());
//! ```

mod difficulty;
mod motion_config;
mod pitch_config;
mod timing_config;

pub use difficulty::{Difficulty, MatchConfig};
pub use motion_config::MotionConfig;
pub use pitch_config::PitchConfig;
pub use timing_config::TimingConfig;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShootoutError};

/// Full engine tuning
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub pitch: PitchConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

impl EngineConfig {
    /// Full-speed presentation pacing (기본)
    pub fn classic() -> Self {
        Self::default()
    }

    /// Headless pacing: same geometry and motion, near-zero holds.
    pub fn quick() -> Self {
        Self { timing: TimingConfig::quick(), ..Self::default() }
    }

    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: EngineConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(ShootoutError::InvalidConfig(msg.to_string()));

        let goal = &self.pitch.goal;
        if goal.size.width <= 0.0 || goal.size.height <= 0.0 {
            return invalid("goal must have a positive size");
        }
        let base = self.pitch.keeper_base_size;
        if base.width <= 0.0 || base.height <= 0.0 {
            return invalid("goalkeeper must have a positive size");
        }
        // Largest keeper any difficulty produces.
        let largest = self.pitch.keeper_base_size.scaled(1.3);
        if largest.width > goal.size.width || largest.height > goal.size.height {
            return invalid("goalkeeper does not fit inside the goal");
        }
        if self.pitch.computer_shot_inset < 0.0
            || self.pitch.computer_shot_inset * 2.0 >= goal.size.width.min(goal.size.height)
        {
            return invalid("computer shot inset leaves no target area");
        }
        if self.motion.ball_speed <= 0.0 || self.motion.keeper_speed <= 0.0 {
            return invalid("speeds must be positive");
        }
        if self.motion.arrival_threshold <= 0.0 {
            return invalid("arrival threshold must be positive");
        }
        if self.timing.ticks_per_second == 0 {
            return invalid("ticks_per_second must be positive");
        }
        Ok(())
    }
}

// ========== Tests ==========
