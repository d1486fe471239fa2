//! Point-to-point motion
//!
//! Ball and goalkeeper both travel in straight lines at a constant speed per
//! tick. A mover counts as arrived once it is closer than the arrival
//! threshold; the final position is not snapped onto the target.

use super::types::Vec2;

/// Below this length a direction vector is treated as zero.
const EPSILON: f32 = 0.0001;

/// Result of a single motion step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub position: Vec2,
    pub arrived: bool,
}

/// Advance `current` toward `target` by `speed` units.
///
/// Returns the unchanged position with `arrived = true` when the distance is
/// already below `threshold` (this includes the zero-distance case).
pub fn advance(current: Vec2, target: Vec2, speed: f32, threshold: f32) -> Step {
    let delta = Vec2::new(target.x - current.x, target.y - current.y);
    let distance = delta.length();

    if distance < threshold || distance < EPSILON {
        return Step { position: current, arrived: true };
    }

    let dir = delta.normalize();
    Step {
        position: Vec2::new(current.x + dir.x * speed, current.y + dir.y * speed),
        arrived: false,
    }
}

/// A position with an optional destination. `target == None` means stationary.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Mover {
    pub position: Vec2,
    pub target: Option<Vec2>,
}

impl Mover {
    pub fn at(position: Vec2) -> Self {
        Self { position, target: None }
    }

    pub fn is_moving(&self) -> bool {
        self.target.is_some()
    }

    /// Move one tick toward the target. Returns true on the tick the mover
    /// arrives; the target is cleared at that point.
    pub fn step(&mut self, speed: f32, threshold: f32) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let step = advance(self.position, target, speed, threshold);
        self.position = step.position;
        if step.arrived {
            self.target = None;
        }
        step.arrived
    }

    /// Teleport and stop.
    pub fn reset(&mut self, position: Vec2) {
        self.position = position;
        self.target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 10.0;

    #[test]
    fn test_first_step_moves_by_speed() {
        let step = advance(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), 15.0, THRESHOLD);
        assert_eq!(step.position, Vec2::new(15.0, 0.0));
        assert!(!step.arrived);
    }

    #[test]
    fn test_converges_then_reports_arrived() {
        let target = Vec2::new(100.0, 0.0);
        let mut pos = Vec2::new(0.0, 0.0);
        let mut steps = 0;
        loop {
            let step = advance(pos, target, 15.0, THRESHOLD);
            if step.arrived {
                assert_eq!(step.position, pos, "arrival must not move");
                break;
            }
            pos = step.position;
            steps += 1;
            assert!(steps < 20, "motion did not converge");
        }
        assert!(pos.distance(&target) < THRESHOLD);
        // 0 -> 15 -> ... -> 90 -> 105
        assert_eq!(steps, 7);
    }

    #[test]
    fn test_zero_distance_is_arrived() {
        let p = Vec2::new(42.0, 7.0);
        let step = advance(p, p, 15.0, 0.0);
        assert!(step.arrived);
        assert_eq!(step.position, p);
    }

    #[test]
    fn test_diagonal_step_length() {
        let step = advance(Vec2::new(0.0, 0.0), Vec2::new(30.0, 40.0), 10.0, THRESHOLD);
        assert!((step.position.x - 6.0).abs() < 1e-4);
        assert!((step.position.y - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_mover_clears_target_on_arrival() {
        let mut mover = Mover::at(Vec2::new(0.0, 0.0));
        mover.target = Some(Vec2::new(25.0, 0.0));

        assert!(!mover.step(10.0, THRESHOLD));
        assert!(!mover.step(10.0, THRESHOLD));
        assert!(mover.step(10.0, THRESHOLD));
        assert!(!mover.is_moving());
        assert!(!mover.step(10.0, THRESHOLD));
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any start/target pair settles within a bounded number of steps
            #[test]
            fn prop_always_arrives(
                sx in -500.0f32..500.0, sy in -500.0f32..500.0,
                tx in -500.0f32..500.0, ty in -500.0f32..500.0,
            ) {
                let target = Vec2::new(tx, ty);
                let mut pos = Vec2::new(sx, sy);
                let bound = (pos.distance(&target) / 15.0).ceil() as usize + 2;
                let mut arrived = false;
                for _ in 0..bound {
                    let step = advance(pos, target, 15.0, THRESHOLD);
                    pos = step.position;
                    if step.arrived {
                        arrived = true;
                        break;
                    }
                }
                prop_assert!(arrived);
                prop_assert!(pos.distance(&target) < THRESHOLD);
            }
        }
    }
}
