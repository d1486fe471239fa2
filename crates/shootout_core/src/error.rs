use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShootoutError {
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("Invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ShootoutError {
    /// Errors the host can recover from by resending a corrected request.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ShootoutError::UnknownDifficulty(_) => true,
            ShootoutError::InvalidCommand(_) => true,
            ShootoutError::Serialization(_) => true,
            ShootoutError::SchemaVersion { .. } => false,
            ShootoutError::InvalidConfig(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShootoutError>;
