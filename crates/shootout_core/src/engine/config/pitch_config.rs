//! Pitch layout: goal mouth, penalty spot, goalkeeper base size.

use serde::{Deserialize, Serialize};

use crate::engine::types::{Rect, Size, Vec2};

/// Playfield geometry in screen units (800 x 600 canvas)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitchConfig {
    /// Goal mouth; top-left origin (기본: 200,50 400x200)
    pub goal: Rect,
    /// Penalty spot, where the ball rests between kicks (기본: 400,500)
    pub penalty_spot: Vec2,
    /// Goalkeeper box at 1.0x (기본: 80x120)
    pub keeper_base_size: Size,
    /// Ball radius, drawing only (기본: 15)
    pub ball_radius: f32,
    /// Computer shots land at least this far inside each goal edge (기본: 20)
    pub computer_shot_inset: f32,
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            goal: Rect::new(200.0, 50.0, 400.0, 200.0),
            penalty_spot: Vec2::new(400.0, 500.0),
            keeper_base_size: Size::new(80.0, 120.0),
            ball_radius: 15.0,
            computer_shot_inset: 20.0,
        }
    }
}

impl PitchConfig {
    /// Region the computer aims at.
    pub fn computer_target_area(&self) -> Rect {
        self.goal.inset(self.computer_shot_inset)
    }
}
