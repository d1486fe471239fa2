//! Goal / save resolution for a settled ball.

use serde::{Deserialize, Serialize};

use super::types::{Rect, Vec2};

/// Outcome of a single kick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KickOutcome {
    Scored,
    Missed,
}

impl KickOutcome {
    pub fn is_goal(self) -> bool {
        matches!(self, KickOutcome::Scored)
    }

    /// Banner shown while the outcome is held on screen.
    pub fn message(self) -> &'static str {
        match self {
            KickOutcome::Scored => "GOAL!",
            KickOutcome::Missed => "SAVED!",
        }
    }
}

/// A kick scores iff the ball is strictly inside the goal and strictly outside
/// the goalkeeper box. Edges count as outside for both rectangles.
pub fn resolve(ball: Vec2, goal: Rect, keeper: Rect) -> KickOutcome {
    let in_goal = goal.contains_strict(ball);
    let blocked = keeper.contains_strict(ball);

    if in_goal && !blocked {
        KickOutcome::Scored
    } else {
        KickOutcome::Missed
    }
}
