//! Error types for the drill engine.

use thiserror::Error;

/// Invalid session configuration, either from `Settings::validate` or from
/// parsing raw menu input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
    #[error("table range {0} is too large")]
    TableRangeTooLarge(u32),
    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfBounds { field: &'static str, value: u32, min: u32, max: u32 },
    #[error("unknown game mode: {0:?}")]
    UnknownMode(String),
}

/// Errors emitted by `PracticeSession`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("a session is already in progress")]
    AlreadyRunning,
    #[error("no session has been started")]
    NotStarted,
    #[error("session already ended")]
    Ended,
}
