//! Configuration for session storage and tracker behavior.
//!
//! The home directory comes from `TRPG_HOME`, falling back to `~/.trpg`.
//! An optional `config.toml` there may override the remaining settings:
//!
//! ```toml
//! log_dedup_seconds = 2
//! delay_policy = "hold"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use trpg_initiative::{DelayPolicy, TrackerConfig};

use crate::error::SessionResult;

/// Environment variable naming the home directory.
pub const HOME_ENV: &str = "TRPG_HOME";

/// Name of the optional configuration file inside the home directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Configuration for a session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory holding session files and exports.
    pub home: PathBuf,
    /// Window in which identical log lines are recorded only once (0 disables).
    pub log_dedup_seconds: u32,
    /// Policy for delayed entries at a round wrap.
    pub delay_policy: DelayPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            home: default_home(),
            log_dedup_seconds: 2,
            delay_policy: DelayPolicy::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    log_dedup_seconds: Option<u32>,
    delay_policy: Option<DelayPolicy>,
}

impl SessionConfig {
    /// Resolve the home directory from the environment and read its config file.
    pub fn load() -> SessionResult<Self> {
        let home = std::env::var_os(HOME_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_home);
        Self::from_home(home)
    }

    /// Use the given home directory and read its config file, if any.
    pub fn from_home(home: impl Into<PathBuf>) -> SessionResult<Self> {
        let config = Self::default().with_home(home);
        let path = config.home.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(config);
        }
        let file: ConfigFile = toml::from_str(&std::fs::read_to_string(&path)?)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config.apply(file))
    }

    /// Set the home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = home.into();
        self
    }

    /// Set the log deduplication window.
    pub fn with_dedup_seconds(mut self, seconds: u32) -> Self {
        self.log_dedup_seconds = seconds;
        self
    }

    /// Set the delay policy.
    pub fn with_delay_policy(mut self, policy: DelayPolicy) -> Self {
        self.delay_policy = policy;
        self
    }

    /// Tracker configuration derived from these settings.
    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig::default().with_delay_policy(self.delay_policy)
    }

    /// The home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    fn apply(mut self, file: ConfigFile) -> Self {
        if let Some(seconds) = file.log_dedup_seconds {
            self.log_dedup_seconds = seconds;
        }
        if let Some(policy) = file.delay_policy {
            self.delay_policy = policy;
        }
        self
    }
}

fn default_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".trpg")
}
