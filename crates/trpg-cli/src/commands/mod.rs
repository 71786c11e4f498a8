pub mod encounter;
pub mod export;
pub mod initiative;
pub mod log;
pub mod roll;
pub mod session;

use colored::Colorize;
use trpg_initiative::{Phase, Tracker, TurnChange};
use trpg_session::{SessionConfig, SessionLog, SessionResult, Store};

/// Resolved configuration and the store it points at.
pub struct Context {
    config: SessionConfig,
    store: Store,
}

impl Context {
    pub fn load() -> SessionResult<Self> {
        let config = SessionConfig::load()?;
        tracing::debug!(home = %config.home.display(), "using session home");
        let store = Store::open(config.home.clone())?;
        Ok(Self { config, store })
    }

    /// The session log with the configured dedup window applied.
    fn log(&self) -> SessionResult<SessionLog> {
        let mut log = self.store.load_log()?;
        log.set_dedup_seconds(self.config.log_dedup_seconds);
        Ok(log)
    }

    fn empty_log(&self) -> SessionLog {
        SessionLog::with_dedup_seconds(self.config.log_dedup_seconds)
    }

    fn new_tracker(&self) -> Tracker {
        Tracker::with_config(self.config.tracker_config())
    }

    /// Append system lines to the session log.
    fn record<I>(&self, lines: I) -> SessionResult<()>
    where
        I: IntoIterator<Item = String>,
    {
        let mut lines = lines.into_iter().peekable();
        if lines.peek().is_none() {
            return Ok(());
        }
        let mut log = self.log()?;
        for line in lines {
            log.system(line);
        }
        self.store.save_log(&log)
    }
}

/// Print a turn change and return the lines worth keeping in the log.
fn report(change: &TurnChange, phase: Phase) -> Vec<String> {
    let mut lines = Vec::new();

    if change.new_round {
        let line = format!("Round {} begins", change.round);
        println!("  {}", line.bold());
        lines.push(line);
    }

    for expiry in &change.expired {
        let line = expiry.to_string();
        println!("  {}", line.yellow());
        lines.push(line);
    }

    match &change.current {
        Some(name) => println!("  Turn: {} (round {})", name.green().bold(), change.round),
        None => match phase {
            Phase::AllDelayed => println!("  {}", "No one can act".dimmed()),
            Phase::InRound => println!("  {}", "Between turns: next picks up the order".dimmed()),
            Phase::NotStarted => {}
        },
    }

    lines
}
