//! The initiative tracker: entry store, turn cursor, and delay/resume.
//!
//! Entries are kept sorted by initiative (descending), ties broken by
//! insertion order. The cursor references the current entry by identity,
//! so removals and reinsertions never shift it onto the wrong participant.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{DelayPolicy, TrackerConfig};
use crate::effect::Expiry;
use crate::entry::{Entry, EntryId};
use crate::error::{InitiativeError, InitiativeResult};

/// Coarse state of a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// `start` has not been called since creation or the last reset.
    NotStarted,
    /// Turns are being taken.
    InRound,
    /// Started, but no entry is eligible for a turn.
    AllDelayed,
}

/// Outcome of a call that may move the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TurnChange {
    /// Name of the entry whose turn it is now, if any.
    pub current: Option<String>,
    /// Round number after the call.
    pub round: u32,
    /// Whether the call began a new round (start or forward wrap).
    pub new_round: bool,
    /// Effects that expired at the round boundary crossed by this call.
    pub expired: Vec<Expiry>,
}

/// Initiative order for one encounter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tracker {
    pub(crate) entries: Vec<Entry>,
    pub(crate) round: u32,
    pub(crate) current: Option<EntryId>,
    pub(crate) next_seq: u64,
    pub(crate) config: TrackerConfig,
}

impl Tracker {
    /// Create an empty tracker with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tracker with the given configuration.
    pub fn with_config(config: TrackerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The tracker's configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// All entries in turn order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of tracked entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current round number; 0 before `start`.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// The entry whose turn it is.
    pub fn current(&self) -> Option<&Entry> {
        let id = self.current?;
        self.entries.iter().find(|e| e.id == id)
    }

    /// Coarse state of the tracker.
    pub fn phase(&self) -> Phase {
        if self.round == 0 {
            Phase::NotStarted
        } else if self.entries.iter().any(Entry::is_eligible) {
            Phase::InRound
        } else {
            Phase::AllDelayed
        }
    }

    /// Add a participant.
    ///
    /// Equal initiative values keep first-added-first-acts order.
    pub fn add(&mut self, name: impl Into<String>, value: i32) -> InitiativeResult<()> {
        let name = name.into();
        if self.position(&name).is_some() {
            return Err(InitiativeError::DuplicateName(name));
        }
        let id = EntryId(self.next_seq);
        self.next_seq += 1;
        debug!(name = %name, value, seq = id.0, "adding entry");
        self.entries.push(Entry::new(id, name, value));
        self.sort_entries();
        Ok(())
    }

    /// Remove a participant.
    ///
    /// Removing the current entry hands the cursor to the nearest eligible
    /// entry before it, so the next `next()` lands on the removed entry's
    /// successor.
    pub fn remove(&mut self, name: &str) -> InitiativeResult<()> {
        let idx = self
            .position(name)
            .ok_or_else(|| InitiativeError::NotFound(name.to_string()))?;
        if self.current == Some(self.entries[idx].id) {
            self.current = self.entries[..idx]
                .iter()
                .rev()
                .find(|e| e.is_eligible())
                .map(|e| e.id);
        }
        self.entries.remove(idx);
        if self.entries.is_empty() {
            self.current = None;
        }
        debug!(name, "removed entry");
        Ok(())
    }

    /// Change a participant's initiative value and re-sort.
    ///
    /// The insertion sequence is kept, so tie precedence does not change.
    pub fn update(&mut self, name: &str, value: i32) -> InitiativeResult<()> {
        let idx = self
            .position(name)
            .ok_or_else(|| InitiativeError::NotFound(name.to_string()))?;
        self.entries[idx].value = value;
        self.sort_entries();
        debug!(name, value, "updated entry");
        Ok(())
    }

    /// Begin round 1 with the first eligible entry.
    ///
    /// Does nothing on an empty tracker. Calling it again restarts at
    /// round 1 in natural order.
    pub fn start(&mut self) -> TurnChange {
        if self.entries.is_empty() {
            return self.turn_change(false, Vec::new());
        }
        self.sort_entries();
        self.round = 1;
        self.current = self.first_eligible_from(0);
        debug!(current = ?self.current, "encounter started");
        self.turn_change(true, Vec::new())
    }

    /// Advance to the next eligible entry.
    ///
    /// Wrapping past the last eligible entry starts a new round and ticks
    /// effects exactly once. On a tracker that has not started this is
    /// equivalent to [`start`](Self::start).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> TurnChange {
        if self.round == 0 {
            return self.start();
        }
        self.advance()
    }

    /// Step back to the previous eligible entry.
    ///
    /// Wrapping backward lowers the round, never below 1. Effects are not
    /// touched.
    pub fn prev(&mut self) -> TurnChange {
        if self.round == 0 {
            return self.turn_change(false, Vec::new());
        }
        let last_eligible = self
            .entries
            .iter()
            .rposition(Entry::is_eligible)
            .map(|i| self.entries[i].id);
        let Some(pos) = self.current_position() else {
            self.current = last_eligible;
            return self.turn_change(false, Vec::new());
        };
        if let Some(i) = self.entries[..pos].iter().rposition(Entry::is_eligible) {
            self.current = Some(self.entries[i].id);
            return self.turn_change(false, Vec::new());
        }
        self.round = self.round.saturating_sub(1).max(1);
        self.current = last_eligible;
        debug!(round = self.round, "stepped back across round boundary");
        self.turn_change(false, Vec::new())
    }

    /// Take an entry out of the rotation.
    ///
    /// Delaying the current entry passes the turn on immediately.
    pub fn delay(&mut self, name: &str) -> InitiativeResult<TurnChange> {
        let idx = self
            .position(name)
            .filter(|&i| !self.entries[i].delayed)
            .ok_or_else(|| InitiativeError::NotFound(name.to_string()))?;
        self.entries[idx].delayed = true;
        debug!(name, "entry delayed");
        if self.current == Some(self.entries[idx].id) {
            return Ok(self.advance());
        }
        Ok(self.turn_change(false, Vec::new()))
    }

    /// Bring a delayed entry back into the current round.
    ///
    /// The entry is placed directly after the current entry regardless of
    /// its initiative value, so it acts next. Between turns (the current
    /// entry was removed from the front) it goes to the front and the
    /// following `next()` reaches it. When every other entry is delayed it
    /// becomes current where it stands. Before `start` the flag is simply
    /// cleared.
    pub fn resume(&mut self, name: &str) -> InitiativeResult<TurnChange> {
        let idx = self
            .position(name)
            .filter(|&i| self.entries[i].delayed)
            .ok_or_else(|| InitiativeError::NotFound(name.to_string()))?;
        if self.round == 0 {
            self.entries[idx].delayed = false;
            return Ok(self.turn_change(false, Vec::new()));
        }
        let mut entry = self.entries.remove(idx);
        entry.delayed = false;
        let id = entry.id;
        match self.current_position() {
            Some(pos) => self.entries.insert(pos + 1, entry),
            None if self.entries.iter().any(Entry::is_eligible) => self.entries.insert(0, entry),
            None => {
                self.entries.insert(idx, entry);
                self.current = Some(id);
            }
        }
        debug!(name, "entry resumed");
        Ok(self.turn_change(false, Vec::new()))
    }

    /// Drop all entries and return to the not-started state.
    ///
    /// Insertion sequence numbers keep counting up.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.round = 0;
        self.current = None;
        debug!("tracker reset");
    }

    fn advance(&mut self) -> TurnChange {
        let from = self.current_position().map_or(0, |pos| pos + 1);
        if let Some(id) = self.first_eligible_from(from) {
            self.current = Some(id);
            return self.turn_change(false, Vec::new());
        }
        if !self.entries.iter().any(Entry::is_eligible) {
            self.current = None;
            debug!(round = self.round, "no eligible entries");
            return self.turn_change(false, Vec::new());
        }
        self.wrap_round()
    }

    fn wrap_round(&mut self) -> TurnChange {
        self.round += 1;
        if self.config.delay_policy == DelayPolicy::RejoinNextRound {
            for entry in self.entries.iter_mut().filter(|e| e.delayed) {
                debug!(name = %entry.name, "delayed entry rejoins");
                entry.delayed = false;
            }
        }
        self.sort_entries();
        let expired = self.tick_effects();
        self.current = self.first_eligible_from(0);
        debug!(round = self.round, expired = expired.len(), "new round");
        self.turn_change(true, expired)
    }

    fn sort_entries(&mut self) {
        self.entries
            .sort_by(|a, b| b.value.cmp(&a.value).then(a.id.cmp(&b.id)));
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    fn current_position(&self) -> Option<usize> {
        let id = self.current?;
        self.entries.iter().position(|e| e.id == id)
    }

    fn first_eligible_from(&self, from: usize) -> Option<EntryId> {
        self.entries
            .get(from..)?
            .iter()
            .find(|e| e.is_eligible())
            .map(|e| e.id)
    }

    fn turn_change(&self, new_round: bool, expired: Vec<Expiry>) -> TurnChange {
        TurnChange {
            current: self.current().map(|e| e.name.clone()),
            round: self.round,
            new_round,
            expired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(names: &[(&str, i32)]) -> Tracker {
        let mut tracker = Tracker::new();
        for (name, value) in names {
            tracker.add(*name, *value).unwrap();
        }
        tracker
    }

    fn order(tracker: &Tracker) -> Vec<&str> {
        tracker.entries().iter().map(|e| e.name.as_str()).collect()
    }

    fn current(tracker: &Tracker) -> Option<&str> {
        tracker.current().map(|e| e.name.as_str())
    }

    #[test]
    fn add_sorts_descending_with_stable_ties() {
        let tracker = tracker_with(&[("Alpha", 10), ("Bravo", 10), ("Zed", 20), ("Charlie", 10)]);
        assert_eq!(order(&tracker), vec!["Zed", "Alpha", "Bravo", "Charlie"]);
        assert_eq!(tracker.phase(), Phase::NotStarted);
        assert_eq!(tracker.round(), 0);
    }

    #[test]
    fn add_duplicate_name_fails() {
        let mut tracker = tracker_with(&[("Rogue", 15)]);
        assert_eq!(
            tracker.add("Rogue", 3),
            Err(InitiativeError::DuplicateName("Rogue".to_string()))
        );
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.get("Rogue").unwrap().value, 15);
    }

    #[test]
    fn negative_initiative_sorts_last() {
        let tracker = tracker_with(&[("Slime", -2), ("Rat", 3)]);
        assert_eq!(order(&tracker), vec!["Rat", "Slime"]);
    }

    #[test]
    fn start_empty_is_noop() {
        let mut tracker = Tracker::new();
        let change = tracker.start();
        assert_eq!(change.round, 0);
        assert!(!change.new_round);
        assert!(change.current.is_none());
        assert_eq!(tracker.phase(), Phase::NotStarted);
    }

    #[test]
    fn start_skips_delayed_entries() {
        let mut tracker = tracker_with(&[("Rogue", 18), ("Mage", 14)]);
        tracker.delay("Rogue").unwrap();
        let change = tracker.start();
        assert_eq!(change.current.as_deref(), Some("Mage"));
        assert_eq!(change.round, 1);
        assert!(change.new_round);
    }

    #[test]
    fn next_before_start_starts() {
        let mut tracker = tracker_with(&[("A", 15), ("B", 12)]);
        let change = tracker.next();
        assert_eq!(change.current.as_deref(), Some("A"));
        assert_eq!(tracker.round(), 1);
    }

    #[test]
    fn next_wraps_and_increments_round() {
        let mut tracker = tracker_with(&[("A", 15), ("B", 12), ("C", 10)]);
        tracker.start();
        assert!(!tracker.next().new_round);
        assert!(!tracker.next().new_round);
        let change = tracker.next();
        assert!(change.new_round);
        assert_eq!(change.round, 2);
        assert_eq!(change.current.as_deref(), Some("A"));
    }

    #[test]
    fn single_entry_wraps_every_call() {
        let mut tracker = tracker_with(&[("Solo", 5)]);
        tracker.start();
        assert_eq!(tracker.next().round, 2);
        assert_eq!(tracker.next().round, 3);
        assert_eq!(current(&tracker), Some("Solo"));
    }

    #[test]
    fn prev_steps_back_and_clamps_round() {
        let mut tracker = tracker_with(&[("A", 15), ("B", 12), ("C", 10)]);
        tracker.start();
        for _ in 0..3 {
            tracker.next();
        }
        assert_eq!(tracker.round(), 2);

        let change = tracker.prev();
        assert_eq!(change.round, 1);
        assert_eq!(change.current.as_deref(), Some("C"));
        assert!(!change.new_round);

        for _ in 0..10 {
            tracker.prev();
        }
        assert_eq!(tracker.round(), 1);
    }

    #[test]
    fn prev_does_not_tick_effects() {
        let mut tracker = tracker_with(&[("A", 15), ("B", 12)]);
        tracker.add_effect("A", "Bless", 1).unwrap();
        tracker.start();
        let change = tracker.prev();
        assert!(change.expired.is_empty());
        assert!(tracker.get("A").unwrap().effect("Bless").is_some());
    }

    #[test]
    fn prev_before_start_is_noop() {
        let mut tracker = tracker_with(&[("A", 15)]);
        assert!(tracker.prev().current.is_none());
        assert_eq!(tracker.round(), 0);
    }

    #[test]
    fn delay_current_passes_turn() {
        let mut tracker = tracker_with(&[("Rogue", 18), ("Mage", 14), ("Orc", 10)]);
        tracker.start();
        let change = tracker.delay("Rogue").unwrap();
        assert_eq!(change.current.as_deref(), Some("Mage"));
        assert_eq!(change.round, 1);
        assert!(tracker.get("Rogue").unwrap().delayed);
    }

    #[test]
    fn delay_other_entry_keeps_current() {
        let mut tracker = tracker_with(&[("Rogue", 18), ("Mage", 14), ("Orc", 10)]);
        tracker.start();
        let change = tracker.delay("Orc").unwrap();
        assert_eq!(change.current.as_deref(), Some("Rogue"));
        tracker.next();
        assert_eq!(tracker.next().current.as_deref(), Some("Rogue"));
        assert_eq!(tracker.round(), 2);
    }

    #[test]
    fn delay_twice_is_not_found() {
        let mut tracker = tracker_with(&[("Rogue", 18), ("Mage", 14)]);
        tracker.start();
        tracker.delay("Mage").unwrap();
        let before = tracker.clone();
        assert_eq!(
            tracker.delay("Mage"),
            Err(InitiativeError::NotFound("Mage".to_string()))
        );
        assert_eq!(tracker, before);
    }

    #[test]
    fn delaying_every_entry_reaches_all_delayed() {
        let mut tracker = tracker_with(&[("A", 15), ("B", 12)]);
        tracker.start();
        tracker.delay("B").unwrap();
        let change = tracker.delay("A").unwrap();
        assert!(change.current.is_none());
        assert_eq!(change.round, 1);
        assert!(!change.new_round);
        assert_eq!(tracker.phase(), Phase::AllDelayed);

        let change = tracker.next();
        assert!(change.current.is_none());
        assert_eq!(change.round, 1);
        assert!(tracker.prev().current.is_none());
    }

    #[test]
    fn resume_from_all_delayed_becomes_current() {
        let mut tracker = tracker_with(&[("A", 15), ("B", 12)]);
        tracker.start();
        tracker.delay("A").unwrap();
        tracker.delay("B").unwrap();

        let change = tracker.resume("B").unwrap();
        assert_eq!(change.current.as_deref(), Some("B"));
        assert_eq!(tracker.phase(), Phase::InRound);
    }

    #[test]
    fn resume_places_after_current() {
        let mut tracker = tracker_with(&[("A", 20), ("B", 15), ("C", 10), ("D", 5)]);
        tracker.start();
        tracker.delay("A").unwrap();
        assert_eq!(current(&tracker), Some("B"));
        tracker.next();
        assert_eq!(current(&tracker), Some("C"));

        tracker.resume("A").unwrap();
        assert_eq!(order(&tracker), vec!["B", "C", "A", "D"]);
        assert_eq!(current(&tracker), Some("C"));
        assert_eq!(tracker.next().current.as_deref(), Some("A"));
        assert_eq!(tracker.next().current.as_deref(), Some("D"));
    }

    #[test]
    fn resume_deviation_ends_at_round_wrap() {
        let mut tracker = tracker_with(&[("A", 20), ("B", 15), ("C", 10)]);
        tracker.start();
        tracker.delay("A").unwrap();
        tracker.next();
        tracker.resume("A").unwrap();
        assert_eq!(order(&tracker), vec!["B", "C", "A"]);

        tracker.next();
        let change = tracker.next();
        assert!(change.new_round);
        assert_eq!(order(&tracker), vec!["A", "B", "C"]);
        assert_eq!(change.current.as_deref(), Some("A"));
    }

    #[test]
    fn resume_between_turns_goes_first_without_skipping() {
        let mut tracker = tracker_with(&[("A", 20), ("B", 15), ("C", 10)]);
        tracker.start();
        tracker.delay("C").unwrap();
        tracker.remove("A").unwrap();
        assert!(tracker.current().is_none());

        let change = tracker.resume("C").unwrap();
        assert_eq!(change.current, None);
        assert_eq!(order(&tracker), vec!["C", "B"]);
        assert_eq!(tracker.phase(), Phase::InRound);

        let mut acted = Vec::new();
        loop {
            let change = tracker.next();
            if change.new_round {
                break;
            }
            acted.extend(change.current);
        }
        assert_eq!(acted, vec!["C", "B"]);
        assert_eq!(tracker.round(), 2);
    }

    #[test]
    fn resume_not_delayed_is_not_found() {
        let mut tracker = tracker_with(&[("A", 20), ("B", 15)]);
        tracker.start();
        let before = tracker.clone();
        assert_eq!(
            tracker.resume("A"),
            Err(InitiativeError::NotFound("A".to_string()))
        );
        assert_eq!(tracker, before);
        assert_eq!(
            tracker.resume("Nobody"),
            Err(InitiativeError::NotFound("Nobody".to_string()))
        );
    }

    #[test]
    fn resume_before_start_keeps_natural_slot() {
        let mut tracker = tracker_with(&[("A", 20), ("B", 15)]);
        tracker.delay("A").unwrap();
        tracker.resume("A").unwrap();
        assert_eq!(order(&tracker), vec!["A", "B"]);
        assert_eq!(tracker.start().current.as_deref(), Some("A"));
    }

    #[test]
    fn delayed_entry_rejoins_next_round_by_default() {
        let mut tracker = tracker_with(&[("Rogue", 18), ("Mage", 14), ("Orc", 10)]);
        tracker.start();
        tracker.delay("Rogue").unwrap();
        tracker.next();
        let change = tracker.next();
        assert_eq!(change.round, 2);
        assert_eq!(change.current.as_deref(), Some("Rogue"));
        assert!(!tracker.get("Rogue").unwrap().delayed);
    }

    #[test]
    fn hold_policy_keeps_entry_delayed() {
        let config = TrackerConfig::default().with_delay_policy(DelayPolicy::Hold);
        let mut tracker = Tracker::with_config(config);
        for (name, value) in [("Rogue", 18), ("Mage", 14), ("Orc", 10)] {
            tracker.add(name, value).unwrap();
        }
        tracker.start();
        tracker.delay("Rogue").unwrap();
        tracker.next();
        let change = tracker.next();
        assert_eq!(change.round, 2);
        assert_eq!(change.current.as_deref(), Some("Mage"));
        assert!(tracker.get("Rogue").unwrap().delayed);
    }

    #[test]
    fn delaying_last_eligible_wraps() {
        let mut tracker = tracker_with(&[("A", 15), ("B", 12)]);
        tracker.add_effect("A", "Bless", 1).unwrap();
        tracker.start();
        tracker.next();
        let change = tracker.delay("B").unwrap();
        assert!(change.new_round);
        assert_eq!(change.round, 2);
        assert_eq!(change.current.as_deref(), Some("A"));
        assert_eq!(change.expired.len(), 1);
    }

    #[test]
    fn remove_before_current_keeps_current() {
        let mut tracker = tracker_with(&[("A", 15), ("B", 12), ("C", 10)]);
        tracker.start();
        tracker.next();
        tracker.next();
        tracker.remove("A").unwrap();
        assert_eq!(current(&tracker), Some("C"));
    }

    #[test]
    fn remove_current_hands_turn_to_successor_on_next() {
        let mut tracker = tracker_with(&[("A", 15), ("B", 12), ("C", 10)]);
        tracker.start();
        tracker.next();
        tracker.remove("B").unwrap();
        assert_eq!(current(&tracker), Some("A"));
        let change = tracker.next();
        assert_eq!(change.current.as_deref(), Some("C"));
        assert_eq!(change.round, 1);
    }

    #[test]
    fn remove_first_current_then_next_stays_in_round() {
        let mut tracker = tracker_with(&[("A", 15), ("B", 12)]);
        tracker.start();
        tracker.remove("A").unwrap();
        assert!(tracker.current().is_none());
        assert_eq!(tracker.phase(), Phase::InRound);
        let change = tracker.next();
        assert_eq!(change.current.as_deref(), Some("B"));
        assert_eq!(change.round, 1);
    }

    #[test]
    fn remove_last_entry_clears_cursor() {
        let mut tracker = tracker_with(&[("A", 15)]);
        tracker.start();
        tracker.remove("A").unwrap();
        assert!(tracker.is_empty());
        assert!(tracker.current().is_none());
        assert_eq!(tracker.phase(), Phase::AllDelayed);
    }

    #[test]
    fn remove_missing_leaves_state_untouched() {
        let mut tracker = tracker_with(&[("A", 15), ("B", 12)]);
        tracker.start();
        let before = tracker.clone();
        assert_eq!(
            tracker.remove("Nobody"),
            Err(InitiativeError::NotFound("Nobody".to_string()))
        );
        assert_eq!(tracker, before);
    }

    #[test]
    fn update_resorts_and_keeps_tie_precedence() {
        let mut tracker = tracker_with(&[("A", 10), ("B", 12), ("C", 8)]);
        tracker.update("C", 12).unwrap();
        assert_eq!(order(&tracker), vec!["B", "C", "A"]);
        tracker.update("A", 12).unwrap();
        assert_eq!(order(&tracker), vec!["A", "B", "C"]);
    }

    #[test]
    fn update_keeps_current_by_identity() {
        let mut tracker = tracker_with(&[("A", 15), ("B", 12), ("C", 10)]);
        tracker.start();
        tracker.next();
        tracker.update("B", 30).unwrap();
        assert_eq!(current(&tracker), Some("B"));
        assert_eq!(order(&tracker), vec!["B", "A", "C"]);
    }

    #[test]
    fn update_missing_fails() {
        let mut tracker = Tracker::new();
        assert_eq!(
            tracker.update("Ghost", 3),
            Err(InitiativeError::NotFound("Ghost".to_string()))
        );
    }

    #[test]
    fn update_missing_leaves_started_tracker_untouched() {
        let mut tracker = tracker_with(&[("A", 15), ("B", 12)]);
        tracker.start();
        tracker.next();
        let before = tracker.clone();
        assert_eq!(
            tracker.update("Ghost", 30),
            Err(InitiativeError::NotFound("Ghost".to_string()))
        );
        assert_eq!(tracker, before);
    }

    #[test]
    fn reset_returns_to_not_started() {
        let mut tracker = tracker_with(&[("A", 15), ("B", 12)]);
        tracker.start();
        tracker.next();
        tracker.reset();
        assert!(tracker.is_empty());
        assert_eq!(tracker.round(), 0);
        assert_eq!(tracker.phase(), Phase::NotStarted);

        tracker.add("C", 1).unwrap();
        assert_eq!(tracker.get("C").unwrap().id, EntryId(2));
    }

    #[test]
    fn restart_returns_to_round_one() {
        let mut tracker = tracker_with(&[("A", 15), ("B", 12)]);
        tracker.start();
        tracker.next();
        tracker.next();
        let change = tracker.start();
        assert_eq!(change.round, 1);
        assert_eq!(change.current.as_deref(), Some("A"));
    }

    #[test]
    fn tracker_serde_roundtrip() {
        let mut tracker = tracker_with(&[("A", 20), ("B", 15), ("C", 10)]);
        tracker.start();
        tracker.delay("A").unwrap();
        tracker.next();
        tracker.resume("A").unwrap();

        let json = serde_json::to_string(&tracker).unwrap();
        let restored: Tracker = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, tracker);
        assert_eq!(order(&restored), vec!["B", "C", "A"]);
    }
}
