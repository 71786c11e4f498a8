//! Timed effects and the per-round countdown.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{InitiativeError, InitiativeResult};
use crate::tracker::Tracker;

/// A named, timed modifier attached to an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    /// Display name (e.g. "Poison", "Bless").
    pub name: String,
    /// Round boundaries left before the effect expires.
    pub remaining_rounds: u32,
}

impl Effect {
    /// Create an effect lasting the given number of rounds.
    pub fn new(name: impl Into<String>, remaining_rounds: u32) -> Self {
        Self {
            name: name.into(),
            remaining_rounds,
        }
    }
}

/// An effect that ran out at a round boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiry {
    /// Name of the entry the effect was attached to.
    pub entry: String,
    /// Name of the expired effect.
    pub effect: String,
}

impl std::fmt::Display for Expiry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} expired on {}", self.effect, self.entry)
    }
}

impl Tracker {
    /// Attach a timed effect to an entry.
    ///
    /// Attaching an effect the entry already carries resets its countdown.
    pub fn add_effect(
        &mut self,
        entry: &str,
        effect: impl Into<String>,
        rounds: u32,
    ) -> InitiativeResult<()> {
        let target = self
            .entries
            .iter_mut()
            .find(|e| e.name == entry)
            .ok_or_else(|| InitiativeError::NotFound(entry.to_string()))?;
        let effect = effect.into();
        debug!(entry, effect = %effect, rounds, "attaching effect");
        if let Some(existing) = target.effects.iter_mut().find(|e| e.name == effect) {
            existing.remaining_rounds = rounds;
        } else {
            target.effects.push(Effect::new(effect, rounds));
        }
        Ok(())
    }

    /// Detach an effect from an entry before it runs out.
    pub fn remove_effect(&mut self, entry: &str, effect: &str) -> InitiativeResult<()> {
        let target = self
            .entries
            .iter_mut()
            .find(|e| e.name == entry)
            .ok_or_else(|| InitiativeError::NotFound(entry.to_string()))?;
        let before = target.effects.len();
        target.effects.retain(|e| e.name != effect);
        if target.effects.len() == before {
            return Err(InitiativeError::EffectNotFound {
                entry: entry.to_string(),
                effect: effect.to_string(),
            });
        }
        Ok(())
    }

    /// Count every effect down by one round and drop those that reach zero.
    ///
    /// Runs once per forward round wrap. Delayed entries tick too.
    pub(crate) fn tick_effects(&mut self) -> Vec<Expiry> {
        let mut expired = Vec::new();
        for entry in &mut self.entries {
            for effect in &mut entry.effects {
                effect.remaining_rounds = effect.remaining_rounds.saturating_sub(1);
            }
            let name = &entry.name;
            entry.effects.retain(|effect| {
                if effect.remaining_rounds > 0 {
                    return true;
                }
                debug!(entry = %name, effect = %effect.name, "effect expired");
                expired.push(Expiry {
                    entry: name.clone(),
                    effect: effect.name.clone(),
                });
                false
            });
        }
        expired
    }
}
