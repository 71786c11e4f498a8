//! Session metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a session is still accepting play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// The session is in progress.
    Open,
    /// The session has been wrapped up.
    Closed,
}

/// A play session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMeta {
    /// Session title.
    pub title: String,
    /// Open or closed.
    pub status: SessionStatus,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
}

impl SessionMeta {
    /// Start a new open session. A blank title becomes "Untitled".
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let title = match title.trim() {
            "" => "Untitled".to_string(),
            trimmed => trimmed.to_string(),
        };
        Self {
            title,
            status: SessionStatus::Open,
            created_at: Utc::now(),
        }
    }

    /// Whether the session is open.
    pub fn is_open(&self) -> bool {
        self.status == SessionStatus::Open
    }

    /// Mark the session closed.
    pub fn close(&mut self) {
        self.status = SessionStatus::Closed;
    }

    /// A filesystem-friendly name derived from the title.
    pub fn slug(&self) -> String {
        let mut slug = String::new();
        for c in self.title.chars() {
            if c.is_alphanumeric() {
                slug.extend(c.to_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        let slug = slug.trim_end_matches('-');
        if slug.is_empty() {
            "session".to_string()
        } else {
            slug.to_string()
        }
    }
}
