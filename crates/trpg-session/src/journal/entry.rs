//! Session log entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format used for timestamps in exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which part of the log an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Mechanical events: dice rolls, rounds, expiring effects.
    System,
    /// Story beats written by the table.
    Narrative,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::Narrative => write!(f, "narrative"),
        }
    }
}

/// A single line in the session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Section of the log.
    pub channel: Channel,
    /// Log text.
    pub text: String,
    /// Scene label for narrative lines.
    pub scene: Option<String>,
    /// When the line was recorded, to the second.
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// The timestamp formatted for export.
    pub fn stamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
