//! Read-only presentation queries.
//!
//! Everything a host needs to draw a frame, derived from `MatchState` without
//! mutating it.

use serde::{Deserialize, Serialize};

use super::match_state::{KickResult, MatchResult, Phase, Side, MAX_ROUNDS, SUDDEN_DEATH_PAGE};
use super::types::{Rect, Size, Vec2};
use super::MatchEngine;

/// Results table as shown on screen: regulation rounds, or the current
/// sudden-death page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub sudden_death: bool,
    /// Round number of the first column
    pub first_round: u32,
    pub human: Vec<KickResult>,
    pub computer: Vec<KickResult>,
}

/// One frame of match state for hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub phase: Phase,
    pub turn: Side,
    pub difficulty: String,
    pub human_score: u32,
    pub computer_score: u32,
    pub round_label: String,
    pub turn_banner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome_message: Option<String>,
    pub table: TableView,
    pub ball: Vec2,
    pub ball_radius: f32,
    /// Top-left corner of the defending goalkeeper
    pub keeper: Vec2,
    pub keeper_size: Size,
    pub goal: Rect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
}

impl MatchEngine {
    pub fn snapshot(&self) -> MatchSnapshot {
        let state = self.state();
        MatchSnapshot {
            tick: state.tick,
            phase: state.phase,
            turn: state.turn,
            difficulty: self.difficulty_label().to_string(),
            human_score: state.score(Side::Human),
            computer_score: state.score(Side::Computer),
            round_label: self.round_label(),
            turn_banner: self.turn_banner(),
            outcome_message: self.outcome_message(),
            table: self.table_view(),
            ball: state.ball.position,
            ball_radius: self.config().pitch.ball_radius,
            keeper: state.keeper.position,
            keeper_size: self.defending_keeper_size(),
            goal: self.goal(),
            result: state.result.clone(),
        }
    }

    /// Centre-screen message, if any.
    ///
    /// Finished: headline and reason on two lines. Otherwise "SUDDEN DEATH!"
    /// during the transition hold, or the last kick's outcome.
    pub fn outcome_message(&self) -> Option<String> {
        let state = self.state();
        if let Some(result) = &state.result {
            return Some(format!("{}\n{}", result.verdict.headline(), result.reason));
        }
        if state.phase == Phase::SuddenDeathTransition {
            return Some("SUDDEN DEATH!".to_string());
        }
        state.last_outcome.map(|o| o.message().to_string())
    }

    pub fn turn_banner(&self) -> String {
        let state = self.state();
        match (state.turn, state.phase) {
            (Side::Computer, Phase::PreparingOpponentKick) => {
                format!("Get ready! CPU kicks in {}...", self.countdown_seconds())
            }
            (Side::Human, _) => "Player's Kick".to_string(),
            (Side::Computer, _) => "CPU's Kick".to_string(),
        }
    }

    pub fn round_label(&self) -> String {
        let state = self.state();
        if state.is_sudden_death {
            format!("Sudden Death: Round {}", state.sudden_death_round)
        } else {
            format!("Round: {}/{}", state.round, MAX_ROUNDS)
        }
    }

    /// Whole seconds left before the computer kicks (0 outside preparation).
    pub fn countdown_seconds(&self) -> u32 {
        let state = self.state();
        if state.phase != Phase::PreparingOpponentKick {
            return 0;
        }
        state.opponent_prep.seconds_left(self.config().timing.ticks_per_second)
    }

    pub fn difficulty_label(&self) -> &'static str {
        self.difficulty().label()
    }

    pub fn table_view(&self) -> TableView {
        let state = self.state();
        if state.is_sudden_death {
            let round = state.sudden_death_round;
            let (human, computer) = state.sudden_death.page(round);
            let first_round = round.saturating_sub(1) / SUDDEN_DEATH_PAGE * SUDDEN_DEATH_PAGE + 1;
            TableView {
                sudden_death: true,
                first_round,
                human: human.to_vec(),
                computer: computer.to_vec(),
            }
        } else {
            TableView {
                sudden_death: false,
                first_round: 1,
                human: state.regulation.human.to_vec(),
                computer: state.regulation.computer.to_vec(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{Difficulty, MatchConfig};

    fn engine() -> MatchEngine {
        MatchEngine::new(MatchConfig::new(Difficulty::Normal, 11))
    }

    #[test]
    fn test_initial_labels() {
        let engine = engine();
        assert_eq!(engine.round_label(), "Round: 1/5");
        assert_eq!(engine.turn_banner(), "Player's Kick");
        assert_eq!(engine.difficulty_label(), "Normal");
        assert_eq!(engine.outcome_message(), None);
        assert_eq!(engine.countdown_seconds(), 0);
    }

    #[test]
    fn test_initial_snapshot() {
        let snap = engine().snapshot();
        assert_eq!(snap.phase, Phase::AwaitingKick);
        assert_eq!(snap.ball, Vec2::new(400.0, 500.0));
        // 80x120 keeper centred in the 400x200 goal at (200, 50).
        assert_eq!(snap.keeper, Vec2::new(360.0, 90.0));
        assert_eq!(snap.keeper_size, Size::new(80.0, 120.0));
        assert_eq!(snap.table.human.len(), 5);
        assert!(snap.table.human.iter().all(|r| *r == KickResult::NotTaken));
        assert!(snap.result.is_none());
    }

    #[test]
    fn test_snapshot_serializes_without_empty_fields() {
        let json = serde_json::to_value(engine().snapshot()).unwrap();
        assert_eq!(json["phase"], "awaiting_kick");
        assert_eq!(json["turn"], "human");
        assert!(json.get("result").is_none());
        assert!(json.get("outcome_message").is_none());
    }
}
