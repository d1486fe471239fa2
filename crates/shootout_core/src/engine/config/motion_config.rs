use serde::{Deserialize, Serialize};

/// Straight-line motion parameters (units per tick)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Ball speed (기본: 15)
    pub ball_speed: f32,
    /// Goalkeeper dive speed (기본: 10)
    pub keeper_speed: f32,
    /// Distance under which a mover counts as arrived (기본: 10)
    pub arrival_threshold: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self { ball_speed: 15.0, keeper_speed: 10.0, arrival_threshold: 10.0 }
    }
}
