//! On-disk persistence for a session, its encounter, and its log.
//!
//! Layout under the home directory:
//!
//! ```text
//! session.json      session metadata
//! initiative.json   the running encounter's tracker
//! log.json          the session log
//! exports/          rendered log exports
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use trpg_initiative::Tracker;

use crate::error::{SessionError, SessionResult};
use crate::journal::{ExportFormat, SessionLog};
use crate::session::SessionMeta;

const SESSION_FILE: &str = "session.json";
const TRACKER_FILE: &str = "initiative.json";
const LOG_FILE: &str = "log.json";
const EXPORT_DIR: &str = "exports";

/// File-backed storage rooted at a home directory.
#[derive(Debug, Clone)]
pub struct Store {
    home: PathBuf,
}

impl Store {
    /// Open a store, creating the home directory if needed.
    pub fn open(home: impl Into<PathBuf>) -> SessionResult<Self> {
        let home = home.into();
        fs::create_dir_all(&home)?;
        Ok(Self { home })
    }

    /// The home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Load the session, whether open or closed.
    pub fn load_session(&self) -> SessionResult<SessionMeta> {
        self.read_json(SESSION_FILE)?.ok_or(SessionError::NoSession)
    }

    /// Load the session, failing if it has been closed.
    pub fn open_session(&self) -> SessionResult<SessionMeta> {
        let session = self.load_session()?;
        if !session.is_open() {
            return Err(SessionError::SessionClosed);
        }
        Ok(session)
    }

    /// Save session metadata.
    pub fn save_session(&self, session: &SessionMeta) -> SessionResult<()> {
        self.write_json(SESSION_FILE, session)
    }

    /// Whether an encounter is in progress.
    pub fn has_tracker(&self) -> bool {
        self.home.join(TRACKER_FILE).exists()
    }

    /// Load the running encounter's tracker.
    pub fn load_tracker(&self) -> SessionResult<Tracker> {
        self.read_json(TRACKER_FILE)?.ok_or(SessionError::NoEncounter)
    }

    /// Save the running encounter's tracker.
    pub fn save_tracker(&self, tracker: &Tracker) -> SessionResult<()> {
        self.write_json(TRACKER_FILE, tracker)
    }

    /// Discard the running encounter. Returns false if there was none.
    pub fn clear_tracker(&self) -> SessionResult<bool> {
        let path = self.home.join(TRACKER_FILE);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        debug!(path = %path.display(), "removed encounter");
        Ok(true)
    }

    /// Load the session log, or an empty one if nothing was logged yet.
    pub fn load_log(&self) -> SessionResult<SessionLog> {
        Ok(self.read_json(LOG_FILE)?.unwrap_or_default())
    }

    /// Save the session log.
    pub fn save_log(&self, log: &SessionLog) -> SessionResult<()> {
        self.write_json(LOG_FILE, log)
    }

    /// Render the session log to `exports/<session-slug>.<ext>`.
    pub fn export(&self, format: ExportFormat) -> SessionResult<PathBuf> {
        let session = self.load_session()?;
        let content = self.load_log()?.export(format)?;
        let dir = self.home.join(EXPORT_DIR);
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}.{}", session.slug(), format.extension()));
        fs::write(&path, content)?;
        info!(path = %path.display(), "exported session log");
        Ok(path)
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> SessionResult<Option<T>> {
        let path = self.home.join(name);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> SessionResult<()> {
        let path = self.home.join(name);
        fs::write(&path, serde_json::to_string_pretty(value)?)?;
        debug!(path = %path.display(), "saved");
        Ok(())
    }
}
