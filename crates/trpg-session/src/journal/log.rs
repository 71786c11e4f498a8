//! Session log storage and export.

use std::str::FromStr;

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::entry::{Channel, LogEntry};
use crate::error::{SessionError, SessionResult};

/// Output format for a log export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Markdown with one section per channel.
    Markdown,
    /// A JSON array of entries.
    Json,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(SessionError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// A chronological log of session events.
///
/// Recording the same channel and text again within the dedup window is a
/// no-op, so repeated commands do not flood the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    entries: Vec<LogEntry>,
    dedup_seconds: u32,
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::with_dedup_seconds(2)
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    channel: Channel,
    text: &'a str,
    scene: Option<&'a str>,
    timestamp: String,
}

impl SessionLog {
    /// Create an empty log with a two-second dedup window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log with the given dedup window (0 disables).
    pub fn with_dedup_seconds(seconds: u32) -> Self {
        Self {
            entries: Vec::new(),
            dedup_seconds: seconds,
        }
    }

    /// Change the dedup window.
    pub fn set_dedup_seconds(&mut self, seconds: u32) {
        self.dedup_seconds = seconds;
    }

    /// Record a line at the given time. Returns false if it was a duplicate.
    pub fn add(
        &mut self,
        channel: Channel,
        text: impl Into<String>,
        scene: Option<String>,
        at: DateTime<Utc>,
    ) -> bool {
        let text = text.into();
        let timestamp = at.with_nanosecond(0).unwrap_or(at);
        if self.is_duplicate(channel, &text, timestamp) {
            tracing::debug!(%channel, text = %text, "skipping duplicate log line");
            return false;
        }
        self.entries.push(LogEntry {
            channel,
            text,
            scene,
            timestamp,
        });
        true
    }

    /// Record a system line now.
    pub fn system(&mut self, text: impl Into<String>) -> bool {
        self.add(Channel::System, text, None, Utc::now())
    }

    /// Record a narrative line now.
    pub fn narrative(&mut self, text: impl Into<String>, scene: Option<String>) -> bool {
        self.add(Channel::Narrative, text, scene, Utc::now())
    }

    /// Entries sorted by timestamp; equal timestamps keep recording order.
    pub fn entries(&self) -> Vec<&LogEntry> {
        let mut sorted: Vec<&LogEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.timestamp);
        sorted
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export in the given format.
    pub fn export(&self, format: ExportFormat) -> SessionResult<String> {
        match format {
            ExportFormat::Markdown => Ok(self.export_markdown()),
            ExportFormat::Json => self.export_json(),
        }
    }

    /// Export as Markdown with a System and a Narrative section.
    pub fn export_markdown(&self) -> String {
        let mut system = Vec::new();
        let mut narrative = Vec::new();
        for entry in self.entries() {
            match entry.channel {
                Channel::System => system.push(format!("- {} {}", entry.stamp(), entry.text)),
                Channel::Narrative => {
                    let line = match &entry.scene {
                        Some(scene) => format!("- {} [{scene}] {}", entry.stamp(), entry.text),
                        None => format!("- {} {}", entry.stamp(), entry.text),
                    };
                    narrative.push(line);
                }
            }
        }

        let mut lines = vec!["# Session Log".to_string(), String::new()];
        lines.push("## System".to_string());
        lines.extend(system);
        lines.push(String::new());
        lines.push("## Narrative".to_string());
        lines.extend(narrative);
        lines.push(String::new());
        lines.join("\n")
    }

    /// Export as a pretty-printed JSON array.
    pub fn export_json(&self) -> SessionResult<String> {
        let lines: Vec<JsonLine<'_>> = self
            .entries()
            .into_iter()
            .map(|e| JsonLine {
                channel: e.channel,
                text: &e.text,
                scene: e.scene.as_deref(),
                timestamp: e.stamp(),
            })
            .collect();
        Ok(serde_json::to_string_pretty(&lines)?)
    }

    fn is_duplicate(&self, channel: Channel, text: &str, at: DateTime<Utc>) -> bool {
        if self.dedup_seconds == 0 {
            return false;
        }
        // Entries may be recorded out of time order, so check them all.
        let window = Duration::seconds(i64::from(self.dedup_seconds));
        self.entries.iter().any(|e| {
            e.channel == channel
                && e.text == text
                && e.timestamp >= at - window
                && e.timestamp <= at + window
        })
    }
}
