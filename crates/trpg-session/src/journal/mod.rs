//! Session log: timestamped system and narrative lines with export.

pub mod entry;
pub mod log;

pub use entry::{Channel, LogEntry};
pub use log::{ExportFormat, SessionLog};
