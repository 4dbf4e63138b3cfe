use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::PomodoroPhase;

/// One completed phase. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "type")]
    phase: PomodoroPhase,
    #[serde(rename = "duration")]
    duration_minutes: u32,
    /// RFC 3339 completion instant.
    #[serde(rename = "timestamp")]
    completed_at: DateTime<Utc>,
    /// Local `HH:MM` label for the recent-sessions list.
    #[serde(rename = "time")]
    time_label: String,
}

impl SessionRecord {
    pub fn new(phase: PomodoroPhase, duration_minutes: u32, at: DateTime<Local>) -> Self {
        Self {
            phase,
            duration_minutes,
            completed_at: at.with_timezone(&Utc),
            time_label: at.format("%H:%M").to_string(),
        }
    }

    pub fn phase(&self) -> PomodoroPhase {
        self.phase
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    pub fn time_label(&self) -> &str {
        &self.time_label
    }
}
