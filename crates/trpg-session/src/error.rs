//! Error types for session bookkeeping.

use thiserror::Error;

use trpg_initiative::InitiativeError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while managing a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No session has been created yet.
    #[error("no session found. Run: trpg session new <title>")]
    NoSession,

    /// The session exists but has been closed.
    #[error("session is closed. Run: trpg session new <title>")]
    SessionClosed,

    /// No encounter is in progress.
    #[error("no encounter. Run: trpg enc start")]
    NoEncounter,

    /// A dice formula could not be parsed.
    #[error("invalid formula: {0}")]
    InvalidFormula(String),

    /// An export format name was not recognized.
    #[error("unsupported format: \"{0}\". Use: md, json")]
    UnsupportedFormat(String),

    /// Initiative tracker error.
    #[error("{0}")]
    Initiative(#[from] InitiativeError),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored file could not be read or written as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file is malformed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
