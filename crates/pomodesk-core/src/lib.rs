//! # Pomodesk Core Library
//!
//! This library provides the pomodoro session engine behind Pomodesk: phase
//! timing, the work/short-break/long-break cycle, day-scoped statistics, and
//! persisted settings. Hosts (the CLI, or any UI) drive it and render it.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a tick-driven state machine that requires the caller
//!   to invoke `tick()` once per second while running. It performs no I/O
//!   and returns the effects it needs carried out.
//! - **Session**: the runtime that owns an engine plus its ports (key-value
//!   store, notifier, display) and performs those effects.
//! - **Storage**: key-value persistence of JSON blobs (in-memory or SQLite)
//!   and TOML-based host configuration.
//!
//! ## Key Components
//!
//! - [`PomodoroEngine`]: core state machine
//! - [`PomodoroSession`]: engine wired to its ports
//! - [`DailyStats`]: today's counters and the recent-session log
//! - [`PomodoroSettings`]: phase durations
//! - [`Config`]: host configuration

pub mod display;
pub mod error;
pub mod events;
pub mod ports;
pub mod session;
pub mod settings;
pub mod stats;
pub mod storage;
pub mod timer;

pub use display::{format_clock, Notice, Snapshot, TimerStatus};
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use events::{Effect, Event};
pub use ports::{DisplaySink, NotificationPermission, Notifier};
pub use session::PomodoroSession;
pub use settings::{PomodoroSettings, SettingField};
pub use stats::{DailyStats, SessionRecord};
pub use storage::{Config, KvStore, MemoryStore, SettingsStore, SqliteStore, StatsStore};
pub use timer::{EngineState, PomodoroEngine, PomodoroPhase};
