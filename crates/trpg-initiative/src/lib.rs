//! Initiative and turn-order tracking for tabletop RPG encounters.
//!
//! A [`Tracker`] orders combat participants by initiative, advances turns
//! and rounds, lets a participant delay its turn and re-enter later in the
//! same round, and counts down timed effects once per round boundary.
//!
//! The tracker performs no I/O. Callers persist it (it is serde-serializable)
//! or read a [`TrackerState`] snapshot for display.

pub mod config;
pub mod effect;
pub mod entry;
pub mod error;
pub mod snapshot;
pub mod tracker;

pub use config::{DelayPolicy, TrackerConfig};
pub use effect::{Effect, Expiry};
pub use entry::{Entry, EntryId};
pub use error::{InitiativeError, InitiativeResult};
pub use snapshot::{EffectState, EntryState, TrackerState};
pub use tracker::{Phase, Tracker, TurnChange};
