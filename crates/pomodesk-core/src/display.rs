//! Payloads handed to the display sink and the notifier.

use serde::{Deserialize, Serialize};

use crate::timer::PomodoroPhase;

/// Coarse status shown under the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    /// Not running, full phase remaining.
    Ready,
    Running,
    /// Not running, part of the phase already elapsed.
    Paused,
}

impl TimerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TimerStatus::Ready => "Ready",
            TimerStatus::Running => "Running",
            TimerStatus::Paused => "Paused",
        }
    }
}

/// Everything a UI needs to draw the timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: PomodoroPhase,
    pub phase_label: String,
    pub icon: String,
    pub status: TimerStatus,
    pub remaining_secs: u32,
    pub total_secs: u32,
    /// `MM:SS`
    pub clock: String,
    /// Elapsed share of the current phase, for the progress ring.
    pub progress: f64,
    pub completed_work_count: u32,
}

/// Title and body for the OS notification and the in-app toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    /// Announcement for the end of `finished`.
    pub fn phase_finished(finished: PomodoroPhase) -> Self {
        let (title, body) = match finished {
            PomodoroPhase::Work => (
                "🍅 Work session complete!",
                "Nice work finishing a pomodoro. Time for a break.",
            ),
            PomodoroPhase::ShortBreak => (
                "☕ Short break is over!",
                "Break's done. Ready for the next pomodoro?",
            ),
            PomodoroPhase::LongBreak => (
                "🌟 Long break is over!",
                "Rested up. Time to start a new work cycle.",
            ),
        };
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Format seconds as `MM:SS`. Minutes are not wrapped at 60.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
