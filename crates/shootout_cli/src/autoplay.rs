//! Automated human player for headless runs.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use shootout_core::engine::planner::uniform_grid;
use shootout_core::{MatchEngine, Phase, Rect, Side, Vec2};

/// Shoots at a random point inside the goal and drags its goalkeeper to a
/// random spot once per computer kick.
pub struct AutoHuman {
    rng: ChaCha8Rng,
    dragged: bool,
}

impl AutoHuman {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), dragged: false }
    }

    /// Issue whatever input the current frame calls for.
    pub fn act(&mut self, engine: &mut MatchEngine) {
        let state = engine.state();
        match (state.phase, state.turn) {
            (Phase::AwaitingKick, Side::Human) => {
                let target = self.pick(engine.goal().inset(1.0));
                engine.submit_human_shot(target);
                self.dragged = false;
            }
            (Phase::PreparingOpponentKick, Side::Computer) if !self.dragged => {
                let area = engine.goal().placement_area(engine.defending_keeper_size());
                let spot = self.pick(area);
                engine.move_defending_goalkeeper(spot);
                self.dragged = true;
            }
            _ => {}
        }
    }

    fn pick(&mut self, area: Rect) -> Vec2 {
        Vec2::new(
            uniform_grid(&mut self.rng, area.left(), area.right()),
            uniform_grid(&mut self.rng, area.top(), area.bottom()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shootout_core::{Difficulty, EngineConfig, MatchConfig};

    #[test]
    fn test_auto_human_finishes_matches() {
        for seed in 0..10 {
            let mut engine = MatchEngine::with_config(
                EngineConfig::quick(),
                MatchConfig::new(Difficulty::Normal, seed),
            )
            .unwrap();
            let mut human = AutoHuman::new(seed);
            for _ in 0..1_000_000 {
                if engine.state().is_finished() {
                    break;
                }
                human.act(&mut engine);
                engine.advance_tick();
            }
            assert!(engine.result().is_some(), "seed {seed} did not finish");
        }
    }
}
