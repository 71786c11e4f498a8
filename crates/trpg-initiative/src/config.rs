//! Tracker configuration.

use serde::{Deserialize, Serialize};

/// What happens to entries that are still delayed when the round wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DelayPolicy {
    /// Delayed entries rejoin at their natural slot in the next round.
    #[default]
    RejoinNextRound,
    /// Delayed entries stay out of rotation until resumed.
    Hold,
}

impl std::fmt::Display for DelayPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RejoinNextRound => write!(f, "rejoin-next-round"),
            Self::Hold => write!(f, "hold"),
        }
    }
}

impl std::str::FromStr for DelayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rejoin-next-round" | "rejoin" => Ok(Self::RejoinNextRound),
            "hold" => Ok(Self::Hold),
            other => Err(format!(
                "unknown delay policy: \"{other}\". Use: rejoin-next-round, hold"
            )),
        }
    }
}

/// Configuration for a [`Tracker`](crate::Tracker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Policy for entries left delayed across a round wrap.
    pub delay_policy: DelayPolicy,
}

impl TrackerConfig {
    /// Set the delay policy.
    pub fn with_delay_policy(mut self, policy: DelayPolicy) -> Self {
        self.delay_policy = policy;
        self
    }
}
