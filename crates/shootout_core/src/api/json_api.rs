use serde::{Deserialize, Serialize};

use crate::engine::{IgnoreReason, MatchCommand, MatchEngine, MatchSnapshot};
use crate::error::{Result, ShootoutError};
use crate::SCHEMA_VERSION;

/// Host command envelope.
///
/// `{"schema_version": 1, "cmd": "submit_shot", "x": 300, "y": 120}`;
/// `schema_version` may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<u8>,
    #[serde(flatten)]
    pub command: MatchCommand,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub schema_version: u8,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<IgnoreReason>,
    pub snapshot: MatchSnapshot,
}

/// Apply one JSON command and return the response with a fresh snapshot.
///
/// Malformed payloads are `InvalidCommand`; a command the engine ignores is
/// still a successful response with `accepted: false`.
pub fn apply_command_json(engine: &mut MatchEngine, request_json: &str) -> Result<String> {
    let request: CommandRequest = serde_json::from_str(request_json)
        .map_err(|e| ShootoutError::InvalidCommand(e.to_string()))?;

    if let Some(found) = request.schema_version {
        if found != SCHEMA_VERSION {
            return Err(ShootoutError::SchemaVersion { found, expected: SCHEMA_VERSION });
        }
    }

    let outcome = engine.apply(&request.command);
    let response = CommandResponse {
        schema_version: SCHEMA_VERSION,
        accepted: outcome.is_accepted(),
        reason: outcome.reason(),
        snapshot: engine.snapshot(),
    };
    Ok(serde_json::to_string(&response)?)
}

/// Current snapshot as JSON.
pub fn snapshot_json(engine: &MatchEngine) -> Result<String> {
    Ok(serde_json::to_string(&engine.snapshot())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Difficulty, MatchConfig};
    use serde_json::Value;

    fn engine() -> MatchEngine {
        MatchEngine::new(MatchConfig::new(Difficulty::Normal, 5))
    }

    #[test]
    fn test_accepted_shot() {
        let mut engine = engine();
        let out = apply_command_json(
            &mut engine,
            r#"{"schema_version":1,"cmd":"submit_shot","x":300,"y":120}"#,
        )
        .unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(v["schema_version"], 1);
        assert_eq!(v["accepted"], true);
        assert!(v.get("reason").is_none());
        assert_eq!(v["snapshot"]["phase"], "ball_in_flight");
    }

    #[test]
    fn test_ignored_command_reports_reason() {
        let mut engine = engine();
        let out = apply_command_json(&mut engine, r#"{"cmd":"submit_shot","x":5,"y":5}"#).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(v["accepted"], false);
        assert_eq!(v["reason"], "outside_goal");
        assert_eq!(v["snapshot"]["phase"], "awaiting_kick");
    }

    #[test]
    fn test_advance_and_restart() {
        let mut engine = engine();
        apply_command_json(&mut engine, r#"{"cmd":"advance","ticks":10}"#).unwrap();
        assert_eq!(engine.state().tick, 10);

        let out =
            apply_command_json(&mut engine, r#"{"cmd":"start_match","difficulty":"easy"}"#).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["snapshot"]["difficulty"], "Easy");
        assert_eq!(v["snapshot"]["tick"], 0);
    }

    #[test]
    fn test_bad_payloads() {
        let mut engine = engine();

        let err = apply_command_json(&mut engine, r#"{"cmd":"dance"}"#).unwrap_err();
        assert!(matches!(err, ShootoutError::InvalidCommand(_)));
        assert!(err.is_recoverable());

        let err = apply_command_json(&mut engine, "not json").unwrap_err();
        assert!(matches!(err, ShootoutError::InvalidCommand(_)));

        let err =
            apply_command_json(&mut engine, r#"{"schema_version":9,"cmd":"advance"}"#).unwrap_err();
        assert!(matches!(err, ShootoutError::SchemaVersion { found: 9, expected: 1 }));
        assert!(!err.is_recoverable());
        assert_eq!(engine.state().tick, 0);
    }

    #[test]
    fn test_snapshot_json() {
        let v: Value = serde_json::from_str(&snapshot_json(&engine()).unwrap()).unwrap();
        assert_eq!(v["round_label"], "Round: 1/5");
        assert_eq!(v["turn_banner"], "Player's Kick");
        assert_eq!(v["goal"]["origin"]["x"], 200.0);
    }
}
