//! Match State
//!
//! The single mutable record of a shootout. Only `MatchEngine` writes to it;
//! hosts read it (or a `MatchSnapshot`) for display.

use serde::{Deserialize, Serialize};

use super::motion::Mover;
use super::outcome::KickOutcome;
use super::timer::TickTimer;

/// Regulation length: kicks per side before sudden death.
pub const MAX_ROUNDS: u8 = 5;

/// Sudden-death rounds shown per results-table page.
pub const SUDDEN_DEATH_PAGE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Kick cycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the kicker (`MatchState::turn`) to shoot
    AwaitingKick,
    BallInFlight,
    /// "GOAL!" / "SAVED!" hold
    ShowingOutcome,
    /// Countdown before the computer's kick
    PreparingOpponentKick,
    /// "SUDDEN DEATH!" hold
    SuddenDeathTransition,
    Finished,
}

/// One cell of a results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KickResult {
    #[default]
    NotTaken,
    Scored,
    Missed,
}

impl From<KickOutcome> for KickResult {
    fn from(outcome: KickOutcome) -> Self {
        match outcome {
            KickOutcome::Scored => KickResult::Scored,
            KickOutcome::Missed => KickResult::Missed,
        }
    }
}

impl KickResult {
    pub fn is_scored(self) -> bool {
        matches!(self, KickResult::Scored)
    }

    /// Table glyph: O for a goal, X for a miss, blank otherwise.
    pub fn glyph(self) -> &'static str {
        match self {
            KickResult::NotTaken => "",
            KickResult::Scored => "O",
            KickResult::Missed => "X",
        }
    }
}

/// Fixed five-round regulation table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegulationTable {
    pub human: [KickResult; MAX_ROUNDS as usize],
    pub computer: [KickResult; MAX_ROUNDS as usize],
}

impl RegulationTable {
    pub fn record(&mut self, side: Side, round: u8, result: KickResult) {
        let idx = usize::from(round.saturating_sub(1)).min(MAX_ROUNDS as usize - 1);
        match side {
            Side::Human => self.human[idx] = result,
            Side::Computer => self.computer[idx] = result,
        }
    }

    pub fn goals(&self, side: Side) -> u32 {
        let row = match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        };
        row.iter().filter(|r| r.is_scored()).count() as u32
    }
}

/// Sudden-death results.
///
/// The full history is kept; the visible table is a page of at most
/// `SUDDEN_DEATH_PAGE` rounds that restarts empty every fifth round.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuddenDeathLog {
    human: Vec<KickResult>,
    computer: Vec<KickResult>,
}

impl SuddenDeathLog {
    /// Open a new round with `NotTaken` placeholders.
    pub fn open_round(&mut self) {
        self.human.push(KickResult::NotTaken);
        self.computer.push(KickResult::NotTaken);
    }

    /// Record a kick for 1-based sudden-death `round`.
    pub fn record(&mut self, side: Side, round: u32, result: KickResult) {
        let idx = round.saturating_sub(1) as usize;
        let row = match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        };
        if row.len() <= idx {
            row.resize(idx + 1, KickResult::NotTaken);
        }
        row[idx] = result;
    }

    pub fn result(&self, side: Side, round: u32) -> KickResult {
        let idx = round.saturating_sub(1) as usize;
        let row = match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        };
        row.get(idx).copied().unwrap_or_default()
    }

    pub fn rounds_opened(&self) -> usize {
        self.human.len()
    }

    pub fn goals(&self, side: Side) -> u32 {
        let row = match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        };
        row.iter().filter(|r| r.is_scored()).count() as u32
    }

    /// Visible page (human row, computer row) for the current `round`.
    pub fn page(&self, round: u32) -> (&[KickResult], &[KickResult]) {
        let start = (round.saturating_sub(1) / SUDDEN_DEATH_PAGE * SUDDEN_DEATH_PAGE) as usize;
        let end = start + SUDDEN_DEATH_PAGE as usize;
        (Self::window(&self.human, start, end), Self::window(&self.computer, start, end))
    }

    fn window(row: &[KickResult], start: usize, end: usize) -> &[KickResult] {
        row.get(start..end.min(row.len())).unwrap_or(&[])
    }
}

/// Terminal verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    HumanWins,
    ComputerWins,
    Draw,
}

impl Verdict {
    pub fn headline(self) -> &'static str {
        match self {
            Verdict::HumanWins => "PLAYER WINS!",
            Verdict::ComputerWins => "CPU WINS!",
            Verdict::Draw => "IT'S A DRAW!",
        }
    }
}

/// Verdict plus the explanation line shown under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub verdict: Verdict,
    pub reason: String,
    pub human_score: u32,
    pub computer_score: u32,
}

/// Runtime match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub human_score: u32,
    pub computer_score: u32,
    /// 1..=MAX_ROUNDS; frozen at MAX_ROUNDS once sudden death starts
    pub round: u8,
    pub turn: Side,
    pub phase: Phase,
    pub ball: Mover,
    /// Top-left corner of the defending goalkeeper's box
    pub keeper: Mover,
    pub is_sudden_death: bool,
    /// 1-based; 0 until sudden death starts
    pub sudden_death_round: u32,
    pub regulation: RegulationTable,
    pub sudden_death: SuddenDeathLog,
    pub last_outcome: Option<KickOutcome>,
    pub outcome_hold: TickTimer,
    pub opponent_prep: TickTimer,
    pub transition_hold: TickTimer,
    pub result: Option<MatchResult>,
    /// Ticks since the match started
    pub tick: u64,
}

impl MatchState {
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human_score,
            Side::Computer => self.computer_score,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Defending side for the kick currently in progress.
    pub fn defender(&self) -> Side {
        self.turn.opponent()
    }

    /// Goals recorded in the results tables; always equals the score.
    pub fn recorded_goals(&self, side: Side) -> u32 {
        self.regulation.goals(side) + self.sudden_death.goals(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regulation_record_and_count() {
        let mut table = RegulationTable::default();
        table.record(Side::Human, 1, KickResult::Scored);
        table.record(Side::Human, 2, KickResult::Missed);
        table.record(Side::Computer, 1, KickResult::Scored);
        table.record(Side::Computer, 5, KickResult::Scored);

        assert_eq!(table.goals(Side::Human), 1);
        assert_eq!(table.goals(Side::Computer), 2);
        assert_eq!(table.human[2], KickResult::NotTaken);
    }

    #[test]
    fn test_sudden_death_page_restarts_every_five_rounds() {
        let mut log = SuddenDeathLog::default();
        for round in 1..=6u32 {
            log.open_round();
            log.record(Side::Human, round, KickResult::Scored);
            if round < 6 {
                log.record(Side::Computer, round, KickResult::Scored);
            }
        }

        let (h, c) = log.page(5);
        assert_eq!(h.len(), 5);
        assert_eq!(c.len(), 5);

        let (h, c) = log.page(6);
        assert_eq!(h, &[KickResult::Scored]);
        assert_eq!(c, &[KickResult::NotTaken]);

        // Earlier pages stay capped once later rounds exist.
        let (h, c) = log.page(2);
        assert_eq!(h.len(), 5);
        assert_eq!(c, &[KickResult::Scored; 5]);

        assert!(log.page(11).0.is_empty());

        // History is never dropped.
        assert_eq!(log.goals(Side::Human), 6);
        assert_eq!(log.goals(Side::Computer), 5);
        assert_eq!(log.rounds_opened(), 6);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(KickResult::Scored.glyph(), "O");
        assert_eq!(KickResult::Missed.glyph(), "X");
        assert_eq!(KickResult::NotTaken.glyph(), "");
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Human.opponent(), Side::Computer);
        assert_eq!(Side::Computer.opponent(), Side::Human);
    }
}
