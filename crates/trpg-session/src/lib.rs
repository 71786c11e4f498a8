//! Session bookkeeping around the initiative tracker.
//!
//! Provides a dice-formula roller, a deduplicating session log with
//! Markdown and JSON export, session metadata, configuration, and the
//! on-disk [`Store`] that persists all of it between CLI invocations.

pub mod config;
pub mod dice;
pub mod error;
pub mod journal;
pub mod session;
pub mod store;

pub use config::SessionConfig;
pub use dice::{DiceFormula, FormulaRoll};
pub use error::{SessionError, SessionResult};
pub use journal::{Channel, ExportFormat, LogEntry, SessionLog};
pub use session::{SessionMeta, SessionStatus};
pub use store::Store;
