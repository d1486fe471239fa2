use serde::{Deserialize, Serialize};

use super::match_state::{MatchResult, Side};
use super::outcome::KickOutcome;
use super::types::Vec2;

/// Match event, stamped with the tick it happened on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    KickTaken {
        tick: u64,
        kicker: Side,
        target: Vec2,
    },
    KickResolved {
        tick: u64,
        kicker: Side,
        outcome: KickOutcome,
        /// Regulation round, or sudden-death round once sudden death started
        round: u32,
        sudden_death: bool,
        human_score: u32,
        computer_score: u32,
    },
    SuddenDeathStarted {
        tick: u64,
    },
    MatchFinished {
        tick: u64,
        result: MatchResult,
    },
}

impl MatchEvent {
    pub fn tick(&self) -> u64 {
        match self {
            MatchEvent::KickTaken { tick, .. }
            | MatchEvent::KickResolved { tick, .. }
            | MatchEvent::SuddenDeathStarted { tick }
            | MatchEvent::MatchFinished { tick, .. } => *tick,
        }
    }

    /// One-line log rendering
    pub fn describe(&self) -> String {
        let who = |side: &Side| match side {
            Side::Human => "Player",
            Side::Computer => "CPU",
        };
        match self {
            MatchEvent::KickTaken { tick, kicker, target } => {
                format!("[{tick:>5}] {} shoots at ({:.0}, {:.0})", who(kicker), target.x, target.y)
            }
            MatchEvent::KickResolved {
                tick,
                kicker,
                outcome,
                round,
                sudden_death,
                human_score,
                computer_score,
            } => {
                let stage = if *sudden_death { "SD round" } else { "round" };
                format!(
                    "[{tick:>5}] {} {} ({stage} {round}) - {human_score}:{computer_score}",
                    who(kicker),
                    outcome.message()
                )
            }
            MatchEvent::SuddenDeathStarted { tick } => format!("[{tick:>5}] SUDDEN DEATH!"),
            MatchEvent::MatchFinished { tick, result } => {
                format!("[{tick:>5}] {} {}", result.verdict.headline(), result.reason)
            }
        }
    }
}
