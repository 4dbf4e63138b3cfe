pub mod config;
pub mod settings;
pub mod stats;
pub mod timer;

use pomodesk_core::ports::{NoopNotifier, NullDisplay};
use pomodesk_core::{Config, PomodoroSession, SqliteStore};

/// A session over the on-disk store with no notifier or display attached,
/// for commands that read or edit state without running the clock.
pub fn open_quiet_session(
) -> Result<PomodoroSession<SqliteStore, NoopNotifier, NullDisplay>, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = SqliteStore::open()?;
    Ok(PomodoroSession::load(
        store,
        NoopNotifier,
        NullDisplay,
        config.stats.daily_goal,
    ))
}
