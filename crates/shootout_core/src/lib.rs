//! # shootout_core - Deterministic Penalty Shootout Engine
//!
//! Human vs computer penalty shootout, simulated in fixed ticks.
//!
//! ## Features
//! - Tick-driven state machine (no wall clock, no threads)
//! - Seeded computer decisions (same seed + same inputs = same match)
//! - Five-round regulation with early finish, then sudden death
//! - JSON bridge for hosts (`api` module)
//!
//! ## Usage
//! ```rust
//! use shootout_core::{Difficulty, MatchConfig, MatchEngine, Vec2};
//!
//! let mut engine = MatchEngine::new(MatchConfig::new(Difficulty::Normal, 42));
//! assert!(engine.submit_human_shot(Vec2::new(300.0, 120.0)).is_accepted());
//! for _ in 0..120 {
//!     engine.advance_tick();
//! }
//! assert_eq!(engine.state().round, 1);
//! ```

pub mod api;
pub mod engine;
pub mod error;

pub use api::{apply_command_json, snapshot_json, CommandRequest, CommandResponse};
pub use engine::{
    CommandOutcome, CommandQueue, Difficulty, EngineConfig, IgnoreReason, KickOutcome,
    KickPlanner, KickResult, MatchCommand, MatchConfig, MatchEngine, MatchEvent, MatchResult,
    MatchSnapshot, MatchState, Phase, Rect, SeededPlanner, Side, Size, Vec2, Verdict,
};
pub use error::{Result, ShootoutError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON bridge schema version
pub const SCHEMA_VERSION: u8 = 1;
