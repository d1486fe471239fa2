//! Computer decisions: where it shoots and where its goalkeeper dives.
//!
//! The engine only talks to [`KickPlanner`], so tests can script exact
//! targets. [`SeededPlanner`] is the uniform-random default.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::types::{Rect, Vec2};

pub trait KickPlanner: Send {
    /// Computer shot target, anywhere in `area` (edges included).
    fn pick_shot_target(&mut self, area: Rect) -> Vec2;

    /// Top-left corner the computer goalkeeper dives to, anywhere in `area`
    /// (edges included).
    fn pick_keeper_dive(&mut self, area: Rect) -> Vec2;
}

/// Uniform picks on the integer grid, driven by a seeded ChaCha8 stream.
#[derive(Debug, Clone)]
pub struct SeededPlanner {
    rng: ChaCha8Rng,
}

impl SeededPlanner {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    fn pick_in(&mut self, area: Rect) -> Vec2 {
        Vec2::new(
            uniform_grid(&mut self.rng, area.left(), area.right()),
            uniform_grid(&mut self.rng, area.top(), area.bottom()),
        )
    }
}

impl KickPlanner for SeededPlanner {
    fn pick_shot_target(&mut self, area: Rect) -> Vec2 {
        self.pick_in(area)
    }

    fn pick_keeper_dive(&mut self, area: Rect) -> Vec2 {
        self.pick_in(area)
    }
}

/// Uniform integer in `[lo, hi]`; falls back to `lo` for an empty range.
pub fn uniform_grid<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    let lo_i = lo.ceil() as i32;
    let hi_i = hi.floor() as i32;
    if hi_i < lo_i {
        return lo;
    }
    rng.gen_range(lo_i..=hi_i) as f32
}
