//! Tracked participants.

use serde::{Deserialize, Serialize};

use crate::effect::Effect;

/// Stable identity of an entry within one tracker.
///
/// This is the entry's insertion sequence number: assigned once by
/// [`Tracker::add`](crate::Tracker::add), never reused, and the tie-break
/// between entries with equal initiative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A participant in the initiative order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Identity and insertion sequence.
    pub id: EntryId,
    /// Display name, unique within the tracker.
    pub name: String,
    /// Initiative score (higher goes first).
    pub value: i32,
    /// Whether the entry has stepped out of the rotation.
    pub delayed: bool,
    /// Timed effects, in the order they were attached.
    pub effects: Vec<Effect>,
}

impl Entry {
    pub(crate) fn new(id: EntryId, name: String, value: i32) -> Self {
        Self {
            id,
            name,
            value,
            delayed: false,
            effects: Vec::new(),
        }
    }

    /// Whether this entry takes turns.
    pub fn is_eligible(&self) -> bool {
        !self.delayed
    }

    /// Find an effect on this entry by name.
    pub fn effect(&self, name: &str) -> Option<&Effect> {
        self.effects.iter().find(|e| e.name == name)
    }
}
