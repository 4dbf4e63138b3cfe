use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::display::{Notice, Snapshot};
use crate::settings::{PomodoroSettings, SettingField};
use crate::stats::DailyStats;
use crate::timer::PomodoroPhase;

/// Every state change of the engine produces an Event.
/// Hosts print or forward them; the display sink may subscribe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        phase: PomodoroPhase,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        phase: PomodoroPhase,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        phase: PomodoroPhase,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    PhaseCompleted {
        finished: PomodoroPhase,
        duration_min: u32,
        next: PomodoroPhase,
        completed_work_count: u32,
        at: DateTime<Utc>,
    },
    SettingsAdjusted {
        field: SettingField,
        settings: PomodoroSettings,
        at: DateTime<Utc>,
    },
}

/// Side effects requested by the engine.
///
/// The engine never performs I/O itself; the runtime carries these out in
/// order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Overwrite the persisted settings blob.
    SaveSettings(PomodoroSettings),
    /// Overwrite the persisted stats blob.
    SaveStats(DailyStats),
    /// Redraw the timer.
    Render(Snapshot),
    /// Phase finished: toast, and OS notification if permitted.
    Announce(Notice),
    /// Ask for notification permission if the user has not decided yet.
    RequestPermission,
    Emit(Event),
}
