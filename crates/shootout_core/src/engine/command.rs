//! Host Commands
//!
//! Inputs a host can send between ticks. Every command is either applied or
//! ignored with a reason; ignored commands never touch the match state.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::config::Difficulty;
use super::MatchEngine;
use super::types::Vec2;

/// Command payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum MatchCommand {
    /// 유저 슈팅 (골대 안쪽 좌표)
    SubmitShot { x: f32, y: f32 },
    /// 유저 골키퍼 이동 (좌상단 좌표)
    MoveKeeper { x: f32, y: f32 },
    /// 새 경기 시작
    StartMatch {
        #[serde(default)]
        difficulty: Difficulty,
    },
    /// 틱 진행 (기본: 1)
    Advance {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ticks: Option<u32>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Not accepted in the current phase or turn
    WrongPhase,
    /// Shot target on or outside the goal frame
    OutsideGoal,
    MatchFinished,
    /// Goalkeeper input while the human is kicking
    HumanNotDefending,
    /// NaN or infinite coordinates
    NonFinitePoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Accepted,
    Ignored(IgnoreReason),
}

impl CommandOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, CommandOutcome::Accepted)
    }

    pub fn reason(self) -> Option<IgnoreReason> {
        match self {
            CommandOutcome::Accepted => None,
            CommandOutcome::Ignored(reason) => Some(reason),
        }
    }
}

/// Command queue (FIFO)
#[derive(Debug, Default)]
pub struct CommandQueue {
    queue: VecDeque<MatchCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self { queue: VecDeque::new() }
    }

    pub fn enqueue(&mut self, cmd: MatchCommand) {
        self.queue.push_back(cmd);
    }

    pub fn pop_front(&mut self) -> Option<MatchCommand> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl MatchEngine {
    /// Apply a single command.
    pub fn apply(&mut self, cmd: &MatchCommand) -> CommandOutcome {
        match *cmd {
            MatchCommand::SubmitShot { x, y } => self.submit_human_shot(Vec2::new(x, y)),
            MatchCommand::MoveKeeper { x, y } => self.move_defending_goalkeeper(Vec2::new(x, y)),
            MatchCommand::StartMatch { difficulty } => {
                self.start_match(difficulty);
                CommandOutcome::Accepted
            }
            MatchCommand::Advance { ticks } => {
                if self.state().is_finished() {
                    return CommandOutcome::Ignored(IgnoreReason::MatchFinished);
                }
                self.run_ticks(u64::from(ticks.unwrap_or(1)));
                CommandOutcome::Accepted
            }
        }
    }

    /// Drain `queue` in order, returning one outcome per command.
    pub fn apply_queued(&mut self, queue: &mut CommandQueue) -> Vec<CommandOutcome> {
        let mut outcomes = Vec::with_capacity(queue.len());
        while let Some(cmd) = queue.pop_front() {
            outcomes.push(self.apply(&cmd));
        }
        outcomes
    }
}
