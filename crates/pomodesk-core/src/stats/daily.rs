//! Day-scoped pomodoro statistics.
//!
//! The counters cover "today" only. Rollover is lazy: it happens when the
//! blob is loaded, never on a background clock, so a process left running
//! past midnight keeps counting into the previous day until its next load.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::SessionRecord;
use crate::timer::PomodoroPhase;

/// Maximum number of session records kept, newest first.
pub const SESSION_LOG_CAP: usize = 20;

pub const DEFAULT_DAILY_GOAL: u32 = 8;

/// Local calendar date label, e.g. `Mon Oct 19 2026`.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

fn default_daily_goal() -> u32 {
    DEFAULT_DAILY_GOAL
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    #[serde(rename = "completedPomodoros", default)]
    completed_pomodoros: u32,
    #[serde(rename = "totalFocusTime", default)]
    total_focus_minutes: u32,
    #[serde(default)]
    sessions: Vec<SessionRecord>,
    #[serde(rename = "lastDate", default)]
    last_date: String,
    #[serde(rename = "dailyGoal", default = "default_daily_goal")]
    daily_goal: u32,
}

impl DailyStats {
    pub fn new(today: NaiveDate, daily_goal: u32) -> Self {
        Self {
            completed_pomodoros: 0,
            total_focus_minutes: 0,
            sessions: Vec::new(),
            last_date: date_label(today),
            daily_goal,
        }
    }

    /// Parse a persisted blob and apply the daily rollover.
    ///
    /// Absent or corrupt input starts a fresh day with `default_goal`.
    pub fn from_json(json: Option<&str>, today: NaiveDate, default_goal: u32) -> Self {
        let mut stats = match json.map(serde_json::from_str::<DailyStats>) {
            None => Self::new(today, default_goal),
            Some(Ok(stats)) => stats,
            Some(Err(e)) => {
                warn!(error = %e, "ignoring corrupt pomodoro stats, starting fresh");
                Self::new(today, default_goal)
            }
        };
        stats.sessions.truncate(SESSION_LOG_CAP);
        stats.rollover(today);
        stats
    }

    /// Zero the day-scoped counters if the stored date is not `today`.
    ///
    /// Returns whether a rollover happened.
    pub fn rollover(&mut self, today: NaiveDate) -> bool {
        let label = date_label(today);
        if self.last_date == label {
            return false;
        }
        debug!(from = %self.last_date, to = %label, "daily stats rollover");
        self.completed_pomodoros = 0;
        self.total_focus_minutes = 0;
        self.sessions.clear();
        self.last_date = label;
        true
    }

    /// Prepend a record for a finished phase, evicting the oldest past the cap.
    pub fn record_completion(
        &mut self,
        phase: PomodoroPhase,
        duration_minutes: u32,
        at: DateTime<Local>,
    ) -> &SessionRecord {
        self.sessions
            .insert(0, SessionRecord::new(phase, duration_minutes, at));
        self.sessions.truncate(SESSION_LOG_CAP);
        &self.sessions[0]
    }

    /// Count one finished work phase of `minutes`.
    pub fn credit_work(&mut self, minutes: u32) {
        self.completed_pomodoros = self.completed_pomodoros.saturating_add(1);
        self.total_focus_minutes = self.total_focus_minutes.saturating_add(minutes);
    }

    /// Mark the blob as belonging to `today` without touching counters.
    pub fn stamp(&mut self, today: NaiveDate) {
        self.last_date = date_label(today);
    }

    /// Share of the daily goal reached, 0.0 ..= 1.0.
    pub fn progress_fraction(&self) -> f64 {
        if self.daily_goal == 0 {
            return 0.0;
        }
        (f64::from(self.completed_pomodoros) / f64::from(self.daily_goal)).min(1.0)
    }

    /// The `n` most recent records, newest first.
    pub fn recent(&self, n: usize) -> &[SessionRecord] {
        &self.sessions[..n.min(self.sessions.len())]
    }

    pub fn completed_pomodoros(&self) -> u32 {
        self.completed_pomodoros
    }

    pub fn total_focus_minutes(&self) -> u32 {
        self.total_focus_minutes
    }

    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn last_date(&self) -> &str {
        &self.last_date
    }

    pub fn daily_goal(&self) -> u32 {
        self.daily_goal
    }
}
