//! Read-only snapshots of a tracker and restore-by-replay.

use serde::{Deserialize, Serialize};

use crate::config::TrackerConfig;
use crate::error::{InitiativeError, InitiativeResult};
use crate::tracker::Tracker;

/// A pure-value view of a tracker, suitable for display and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerState {
    /// Current round; 0 before the encounter starts.
    pub round: u32,
    /// Name of the entry whose turn it is, if any.
    pub current: Option<String>,
    /// Entries in turn order.
    pub entries: Vec<EntryState>,
}

/// Snapshot of one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryState {
    /// Entry name.
    pub name: String,
    /// Initiative value.
    pub value: i32,
    /// Whether the entry is out of rotation.
    pub delayed: bool,
    /// Active effects.
    pub effects: Vec<EffectState>,
}

/// Snapshot of one effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectState {
    /// Effect name.
    pub name: String,
    /// Round boundaries left.
    pub remaining_rounds: u32,
}

impl Tracker {
    /// Take a snapshot of the tracker.
    pub fn state(&self) -> TrackerState {
        TrackerState {
            round: self.round,
            current: self.current().map(|e| e.name.clone()),
            entries: self
                .entries
                .iter()
                .map(|entry| EntryState {
                    name: entry.name.clone(),
                    value: entry.value,
                    delayed: entry.delayed,
                    effects: entry
                        .effects
                        .iter()
                        .map(|effect| EffectState {
                            name: effect.name.clone(),
                            remaining_rounds: effect.remaining_rounds,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Rebuild a tracker from a snapshot by replaying `add` in snapshot order.
    ///
    /// Tie-break order is taken from the snapshot order. An entry that had
    /// been resumed out of its natural slot returns to that slot.
    pub fn restore(state: &TrackerState, config: TrackerConfig) -> InitiativeResult<Self> {
        let mut tracker = Self::with_config(config);
        for entry in &state.entries {
            tracker.add(entry.name.clone(), entry.value)?;
            for effect in &entry.effects {
                tracker.add_effect(&entry.name, effect.name.clone(), effect.remaining_rounds)?;
            }
        }
        for snapshot in state.entries.iter().filter(|e| e.delayed) {
            if let Some(entry) = tracker.entries.iter_mut().find(|e| e.name == snapshot.name) {
                entry.delayed = true;
            }
        }
        tracker.round = state.round;
        if let Some(name) = state.current.as_ref().filter(|_| state.round > 0) {
            let current = tracker
                .get(name)
                .filter(|e| e.is_eligible())
                .ok_or_else(|| InitiativeError::NotFound(name.clone()))?;
            tracker.current = Some(current.id);
        }
        Ok(tracker)
    }
}
