//! Penalty shootout match engine
//!
//! `MatchEngine` owns the one `MatchState` of a match and is driven by the
//! host: one `advance_tick()` per frame, plus input commands in between.
//!
//! Kick cycle:
//! `AwaitingKick -> BallInFlight -> ShowingOutcome -> (AwaitingKick |
//! PreparingOpponentKick -> AwaitingKick | SuddenDeathTransition | Finished)`

pub mod command;
pub mod config;
pub mod events;
pub mod match_state;
pub mod motion;
pub mod outcome;
pub mod planner;
pub mod rules;
pub mod timer;
pub mod types;
pub mod view;


pub use command::{CommandOutcome, CommandQueue, IgnoreReason, MatchCommand};
pub use config::{Difficulty, EngineConfig, MatchConfig};
pub use events::MatchEvent;
pub use match_state::{
    KickResult, MatchResult, MatchState, Phase, RegulationTable, Side, SuddenDeathLog, Verdict,
    MAX_ROUNDS,
};
pub use outcome::KickOutcome;
pub use planner::{KickPlanner, SeededPlanner};
pub use types::{Rect, Size, Vec2};
pub use view::MatchSnapshot;

use std::fmt;

use tracing::{debug, info, trace};

use crate::error::Result;
use motion::Mover;
use rules::{Checkpoint, Decision};
use timer::TickTimer;

pub struct MatchEngine {
    config: EngineConfig,
    match_config: MatchConfig,
    state: MatchState,
    planner: Box<dyn KickPlanner>,
    events: Vec<MatchEvent>,
}

impl fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchEngine")
            .field("match_config", &self.match_config)
            .field("state", &self.state)
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl MatchEngine {
    /// Classic tuning, seeded random computer.
    pub fn new(match_config: MatchConfig) -> Self {
        let config = EngineConfig::classic();
        let planner = Box::new(SeededPlanner::new(match_config.seed));
        Self::build(config, match_config, planner)
    }

    /// Custom tuning, seeded random computer.
    pub fn with_config(config: EngineConfig, match_config: MatchConfig) -> Result<Self> {
        config.validate()?;
        let planner = Box::new(SeededPlanner::new(match_config.seed));
        Ok(Self::build(config, match_config, planner))
    }

    /// Custom tuning and a caller-supplied computer.
    pub fn with_planner(
        config: EngineConfig,
        match_config: MatchConfig,
        planner: Box<dyn KickPlanner>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, match_config, planner))
    }

    fn build(config: EngineConfig, match_config: MatchConfig, planner: Box<dyn KickPlanner>) -> Self {
        let state = Self::fresh_state(&config, &match_config);
        info!(
            difficulty = match_config.difficulty.label(),
            seed = match_config.seed,
            "match started"
        );
        Self { config, match_config, state, planner, events: Vec::new() }
    }

    fn fresh_state(config: &EngineConfig, match_config: &MatchConfig) -> MatchState {
        let pitch = &config.pitch;
        // Human kicks first, so the computer's goalkeeper stands in goal.
        let keeper_size = match_config.computer_keeper_size(pitch.keeper_base_size);
        MatchState {
            human_score: 0,
            computer_score: 0,
            round: 1,
            turn: Side::Human,
            phase: Phase::AwaitingKick,
            ball: Mover::at(pitch.penalty_spot),
            keeper: Mover::at(pitch.goal.centered_origin(keeper_size)),
            is_sudden_death: false,
            sudden_death_round: 0,
            regulation: RegulationTable::default(),
            sudden_death: SuddenDeathLog::default(),
            last_outcome: None,
            outcome_hold: TickTimer::idle(),
            opponent_prep: TickTimer::idle(),
            transition_hold: TickTimer::idle(),
            result: None,
            tick: 0,
        }
    }

    // ========== Commands ==========

    /// Discard the current match and start a new one. The planner keeps its
    /// random stream, so consecutive matches differ.
    pub fn start_match(&mut self, difficulty: Difficulty) {
        self.match_config.difficulty = difficulty;
        self.state = Self::fresh_state(&self.config, &self.match_config);
        self.events.clear();
        info!(difficulty = difficulty.label(), "match restarted");
    }

    /// Human shoots at `target`. Only accepted on the human's turn while
    /// waiting for the kick, and only strictly inside the goal.
    pub fn submit_human_shot(&mut self, target: Vec2) -> CommandOutcome {
        if self.state.is_finished() {
            return self.ignore("submit_human_shot", IgnoreReason::MatchFinished);
        }
        if self.state.phase != Phase::AwaitingKick || self.state.turn != Side::Human {
            return self.ignore("submit_human_shot", IgnoreReason::WrongPhase);
        }
        let goal = self.config.pitch.goal;
        if !goal.contains_strict(target) {
            return self.ignore("submit_human_shot", IgnoreReason::OutsideGoal);
        }

        let dive_area = goal.placement_area(self.keeper_size(Side::Computer));
        let dive = self.planner.pick_keeper_dive(dive_area);

        self.state.last_outcome = None;
        self.state.ball.target = Some(target);
        self.state.keeper.target = Some(dive);
        self.state.phase = Phase::BallInFlight;
        debug!(x = target.x, y = target.y, dive_x = dive.x, dive_y = dive.y, "human kick");
        self.emit(MatchEvent::KickTaken { tick: self.state.tick, kicker: Side::Human, target });
        CommandOutcome::Accepted
    }

    /// Human moves their goalkeeper (top-left corner), clamped so the whole
    /// box stays inside the goal. Only while the computer is kicking and the
    /// ball is not in the air.
    pub fn move_defending_goalkeeper(&mut self, point: Vec2) -> CommandOutcome {
        if self.state.is_finished() {
            return self.ignore("move_defending_goalkeeper", IgnoreReason::MatchFinished);
        }
        if self.state.turn != Side::Computer {
            return self.ignore("move_defending_goalkeeper", IgnoreReason::HumanNotDefending);
        }
        if self.state.phase == Phase::BallInFlight {
            return self.ignore("move_defending_goalkeeper", IgnoreReason::WrongPhase);
        }
        if !point.x.is_finite() || !point.y.is_finite() {
            return self.ignore("move_defending_goalkeeper", IgnoreReason::NonFinitePoint);
        }

        let area = self.config.pitch.goal.placement_area(self.keeper_size(Side::Human));
        self.state.keeper.reset(area.clamp(point));
        CommandOutcome::Accepted
    }

    fn ignore(&self, command: &'static str, reason: IgnoreReason) -> CommandOutcome {
        trace!(command, ?reason, phase = ?self.state.phase, "command ignored");
        CommandOutcome::Ignored(reason)
    }

    // ========== Tick ==========

    /// Advance the simulation by one fixed step.
    pub fn advance_tick(&mut self) {
        if self.state.is_finished() {
            return;
        }
        self.state.tick += 1;

        match self.state.phase {
            Phase::AwaitingKick => {
                if self.state.turn == Side::Computer {
                    self.take_computer_kick();
                }
            }
            Phase::BallInFlight => {
                let motion = &self.config.motion;
                let arrived = self.state.ball.step(motion.ball_speed, motion.arrival_threshold);
                if arrived {
                    self.resolve_kick();
                }
                self.step_keeper();
            }
            Phase::ShowingOutcome => {
                self.step_keeper();
                self.state.outcome_hold.tick();
                if self.state.outcome_hold.expired() {
                    self.conclude_kick();
                }
            }
            Phase::PreparingOpponentKick => {
                self.state.opponent_prep.tick();
                if self.state.opponent_prep.expired() {
                    self.end_preparation();
                }
            }
            Phase::SuddenDeathTransition => {
                self.state.transition_hold.tick();
                if self.state.transition_hold.expired() {
                    self.state.phase = Phase::AwaitingKick;
                }
            }
            Phase::Finished => {}
        }
    }

    /// Run up to `max_ticks` ticks, stopping early once finished.
    /// Returns the number of ticks advanced.
    pub fn run_ticks(&mut self, max_ticks: u64) -> u64 {
        let mut advanced = 0;
        while advanced < max_ticks && !self.state.is_finished() {
            self.advance_tick();
            advanced += 1;
        }
        advanced
    }

    fn step_keeper(&mut self) {
        let motion = &self.config.motion;
        self.state.keeper.step(motion.keeper_speed, motion.arrival_threshold);
    }

    fn take_computer_kick(&mut self) {
        let target = self.planner.pick_shot_target(self.config.pitch.computer_target_area());
        self.state.last_outcome = None;
        self.state.ball.target = Some(target);
        // The human steers this goalkeeper directly.
        self.state.keeper.target = None;
        self.state.phase = Phase::BallInFlight;
        debug!(x = target.x, y = target.y, "computer kick");
        self.emit(MatchEvent::KickTaken { tick: self.state.tick, kicker: Side::Computer, target });
    }

    fn resolve_kick(&mut self) {
        let kicker = self.state.turn;
        let keeper_box =
            Rect::from_origin(self.state.keeper.position, self.keeper_size(kicker.opponent()));
        let outcome = outcome::resolve(self.state.ball.position, self.config.pitch.goal, keeper_box);

        let result = KickResult::from(outcome);
        let state = &mut self.state;
        let round = if state.is_sudden_death {
            state.sudden_death.record(kicker, state.sudden_death_round, result);
            state.sudden_death_round
        } else {
            state.regulation.record(kicker, state.round, result);
            u32::from(state.round)
        };
        if outcome.is_goal() {
            match kicker {
                Side::Human => state.human_score += 1,
                Side::Computer => state.computer_score += 1,
            }
        }
        debug_assert_eq!(state.human_score, state.recorded_goals(Side::Human));
        debug_assert_eq!(state.computer_score, state.recorded_goals(Side::Computer));

        state.last_outcome = Some(outcome);
        state.outcome_hold = TickTimer::new(self.config.timing.outcome_hold_ticks);
        state.phase = Phase::ShowingOutcome;

        debug!(
            ?kicker,
            ?outcome,
            round,
            human = state.human_score,
            computer = state.computer_score,
            "kick resolved"
        );
        let event = MatchEvent::KickResolved {
            tick: state.tick,
            kicker,
            outcome,
            round,
            sudden_death: state.is_sudden_death,
            human_score: state.human_score,
            computer_score: state.computer_score,
        };
        self.emit(event);
    }

    /// Outcome hold elapsed: decide, then open the next kick.
    fn conclude_kick(&mut self) {
        let state = &self.state;
        let decision = if state.is_sudden_death {
            if state.turn == Side::Computer {
                let round = state.sudden_death_round;
                match rules::sudden_death_verdict(
                    state.sudden_death.result(Side::Human, round),
                    state.sudden_death.result(Side::Computer, round),
                ) {
                    Some(_) => Decision::Finish,
                    None => Decision::Continue,
                }
            } else {
                Decision::Continue
            }
        } else {
            let checkpoint = match state.turn {
                Side::Human => Checkpoint::AfterHumanKick,
                Side::Computer => Checkpoint::AfterComputerKick,
            };
            rules::regulation_decision(checkpoint, state.human_score, state.computer_score, state.round)
        };

        match decision {
            Decision::Finish => self.finish(),
            Decision::SuddenDeath => self.start_sudden_death(),
            Decision::Continue => self.advance_turn(),
        }
    }

    fn advance_turn(&mut self) {
        let state = &mut self.state;
        match state.turn {
            Side::Computer => {
                if state.is_sudden_death {
                    state.sudden_death_round += 1;
                    state.sudden_death.open_round();
                } else {
                    if state.round >= MAX_ROUNDS {
                        self.finish();
                        return;
                    }
                    state.round += 1;
                }
                state.turn = Side::Human;
                state.phase = Phase::AwaitingKick;
            }
            Side::Human => {
                state.turn = Side::Computer;
                state.opponent_prep = TickTimer::new(self.config.timing.opponent_prep_ticks);
                state.phase = Phase::PreparingOpponentKick;
            }
        }
        self.reset_for_next_kick();
    }

    fn end_preparation(&mut self) {
        let state = &self.state;
        if !state.is_sudden_death
            && rules::regulation_decision(
                Checkpoint::BeforeComputerKick,
                state.human_score,
                state.computer_score,
                state.round,
            ) == Decision::Finish
        {
            self.finish();
            return;
        }
        self.state.phase = Phase::AwaitingKick;
    }

    fn start_sudden_death(&mut self) {
        let state = &mut self.state;
        state.is_sudden_death = true;
        state.sudden_death_round = 1;
        state.sudden_death.open_round();
        state.turn = Side::Human;
        state.transition_hold = TickTimer::new(self.config.timing.sudden_death_hold_ticks);
        state.phase = Phase::SuddenDeathTransition;
        self.reset_for_next_kick();

        info!(score = self.state.human_score, "regulation tied, sudden death");
        self.emit(MatchEvent::SuddenDeathStarted { tick: self.state.tick });
    }

    /// Ball back on the spot, the next defender's goalkeeper centered.
    fn reset_for_next_kick(&mut self) {
        let pitch = &self.config.pitch;
        let keeper_size = self.keeper_size(self.state.turn.opponent());
        self.state.last_outcome = None;
        self.state.ball.reset(pitch.penalty_spot);
        self.state.keeper.reset(pitch.goal.centered_origin(keeper_size));
    }

    fn finish(&mut self) {
        if self.state.result.is_some() {
            self.state.phase = Phase::Finished;
            return;
        }
        let state = &self.state;
        let verdict = rules::verdict_from_scores(state.human_score, state.computer_score);
        let reason = rules::describe_result(
            verdict,
            state.is_sudden_death,
            state.round,
            state.sudden_death_round,
        );
        let result = MatchResult {
            verdict,
            reason,
            human_score: state.human_score,
            computer_score: state.computer_score,
        };

        info!(?verdict, reason = %result.reason, "match finished");
        self.state.result = Some(result.clone());
        self.state.phase = Phase::Finished;
        self.emit(MatchEvent::MatchFinished { tick: self.state.tick, result });
    }

    fn emit(&mut self, event: MatchEvent) {
        self.events.push(event);
    }

    // ========== Queries ==========

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn match_config(&self) -> &MatchConfig {
        &self.match_config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.match_config.difficulty
    }

    pub fn goal(&self) -> Rect {
        self.config.pitch.goal
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.state.result.as_ref()
    }

    /// Goalkeeper box size for the keeper controlled by `side`.
    pub fn keeper_size(&self, side: Side) -> Size {
        let base = self.config.pitch.keeper_base_size;
        match side {
            Side::Human => self.match_config.human_keeper_size(base),
            Side::Computer => self.match_config.computer_keeper_size(base),
        }
    }

    /// Size of the goalkeeper currently in goal.
    pub fn defending_keeper_size(&self) -> Size {
        self.keeper_size(self.state.defender())
    }

    /// Take all events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[MatchEvent] {
        &self.events
    }
}
