//! Error types for the initiative tracker.

/// Errors returned by tracker operations.
///
/// A failed call never leaves the tracker partially modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitiativeError {
    /// An entry with this name is already being tracked.
    #[error("entry '{0}' already exists")]
    DuplicateName(String),

    /// No entry with this name exists, or it is not in the state the
    /// operation requires (delaying an already delayed entry, resuming one
    /// that is not delayed).
    #[error("entry '{0}' not found")]
    NotFound(String),

    /// The entry exists but carries no effect with this name.
    #[error("effect '{effect}' not found on '{entry}'")]
    EffectNotFound {
        /// Name of the entry that was searched.
        entry: String,
        /// Name of the missing effect.
        effect: String,
    },
}

/// Convenience result type for tracker operations.
pub type InitiativeResult<T> = Result<T, InitiativeError>;
