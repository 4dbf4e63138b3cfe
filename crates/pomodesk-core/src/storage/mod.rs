mod config;
pub mod database;
pub mod memory;

pub use config::{Config, NotificationsConfig, StatsConfig, TimerConfig};
pub use database::SqliteStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{Result, StoreError};
use crate::settings::PomodoroSettings;
use crate::stats::DailyStats;

/// Key of the persisted [`PomodoroSettings`] blob.
pub const SETTINGS_KEY: &str = "pomodoroSettings";
/// Key of the persisted [`DailyStats`] blob.
pub const STATS_KEY: &str = "pomodoroStats";

/// Returns the data directory.
///
/// `POMODESK_DATA_DIR` wins if set. Otherwise `~/.config/pomodesk[-dev]/`,
/// with the `-dev` suffix when `POMODESK_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("POMODESK_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("POMODESK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("pomodesk-dev")
            } else {
                base_dir.join("pomodesk")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StoreError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

/// String key to JSON string value store.
///
/// Implementations are used from a single thread; writes are synchronous.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite `key` with `value`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KvStore + ?Sized> KvStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Typed access to the settings blob.
pub trait SettingsStore {
    /// Never fails: unreadable or corrupt data yields clamped defaults.
    fn load_settings(&self) -> PomodoroSettings;

    fn save_settings(&self, settings: &PomodoroSettings) -> Result<(), StoreError>;
}

/// Typed access to the stats blob.
pub trait StatsStore {
    /// Never fails: unreadable or corrupt data yields a fresh day.
    /// The daily rollover for `today` is already applied.
    fn load_stats(&self, today: NaiveDate, default_goal: u32) -> DailyStats;

    fn save_stats(&self, stats: &DailyStats) -> Result<(), StoreError>;
}

fn read_blob<S: KvStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "failed to read from store, treating as absent");
            None
        }
    }
}

fn write_blob<S: KvStore + ?Sized, T: serde::Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let json =
        serde_json::to_string(value).map_err(|e| StoreError::QueryFailed(e.to_string()))?;
    store.set(key, &json)
}

impl<S: KvStore + ?Sized> SettingsStore for S {
    fn load_settings(&self) -> PomodoroSettings {
        PomodoroSettings::from_json(read_blob(self, SETTINGS_KEY).as_deref())
    }

    fn save_settings(&self, settings: &PomodoroSettings) -> Result<(), StoreError> {
        write_blob(self, SETTINGS_KEY, settings)
    }
}

impl<S: KvStore + ?Sized> StatsStore for S {
    fn load_stats(&self, today: NaiveDate, default_goal: u32) -> DailyStats {
        DailyStats::from_json(read_blob(self, STATS_KEY).as_deref(), today, default_goal)
    }

    fn save_stats(&self, stats: &DailyStats) -> Result<(), StoreError> {
        write_blob(self, STATS_KEY, stats)
    }
}
