use serde::{Deserialize, Serialize};

/// Number of completed work phases between long breaks.
pub const LONG_BREAK_INTERVAL: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PomodoroPhase {
    #[default]
    Work,
    ShortBreak,
    LongBreak,
}

impl PomodoroPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PomodoroPhase::Work => "work",
            PomodoroPhase::ShortBreak => "short-break",
            PomodoroPhase::LongBreak => "long-break",
        }
    }

    /// Human-readable label shown next to the countdown.
    pub fn label(&self) -> &'static str {
        match self {
            PomodoroPhase::Work => "Work time",
            PomodoroPhase::ShortBreak => "Short break",
            PomodoroPhase::LongBreak => "Long break",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PomodoroPhase::Work => "🍅",
            PomodoroPhase::ShortBreak => "☕",
            PomodoroPhase::LongBreak => "🌟",
        }
    }

    /// Phase that follows this one.
    ///
    /// `completed_work_count` must already include the work phase that just
    /// finished when `self` is `Work`.
    pub fn next(&self, completed_work_count: u32) -> PomodoroPhase {
        match self {
            PomodoroPhase::Work if completed_work_count % LONG_BREAK_INTERVAL == 0 => {
                PomodoroPhase::LongBreak
            }
            PomodoroPhase::Work => PomodoroPhase::ShortBreak,
            PomodoroPhase::ShortBreak | PomodoroPhase::LongBreak => PomodoroPhase::Work,
        }
    }
}
