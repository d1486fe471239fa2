//! Difficulty levels and per-match settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::types::Size;
use crate::error::ShootoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    /// Size factor for the goalkeeper the human controls.
    pub fn human_keeper_scale(self) -> f32 {
        match self {
            Difficulty::Easy => 1.3,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 0.7,
        }
    }

    /// Size factor for the goalkeeper the computer controls.
    pub fn computer_keeper_scale(self) -> f32 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ShootoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "0" => Ok(Difficulty::Easy),
            "normal" | "1" => Ok(Difficulty::Normal),
            "hard" | "2" => Ok(Difficulty::Hard),
            _ => Err(ShootoutError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Per-match settings; immutable once the match starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchConfig {
    pub difficulty: Difficulty,
    /// Seed for the computer's shot and dive choices
    #[serde(default)]
    pub seed: u64,
}

impl MatchConfig {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self { difficulty, seed }
    }

    pub fn human_keeper_size(&self, base: Size) -> Size {
        base.scaled(self.difficulty.human_keeper_scale())
    }

    pub fn computer_keeper_size(&self, base: Size) -> Size {
        base.scaled(self.difficulty.computer_keeper_scale())
    }
}
