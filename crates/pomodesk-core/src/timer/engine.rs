//! Pomodoro engine implementation.
//!
//! The engine is a tick-driven state machine. It does not use internal
//! threads or timers - the host calls `tick()` once per second while the
//! engine is running and owns the actual scheduling primitive.
//!
//! ## State Transitions
//!
//! ```text
//! Work -> ShortBreak -> Work -> ... -> Work (4th) -> LongBreak -> Work
//! ```
//!
//! with an orthogonal running/paused flag. Completing a phase always leaves
//! the engine paused at the start of the next phase.
//!
//! Every command returns the [`Effect`]s the caller must carry out. The
//! engine itself never touches storage or the UI.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = PomodoroEngine::new(settings, stats);
//! let effects = engine.start();
//! // Once per second:
//! let effects = engine.tick();
//! ```

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::PomodoroPhase;
use crate::display::{format_clock, Notice, Snapshot, TimerStatus};
use crate::events::{Effect, Event};
use crate::settings::{PomodoroSettings, SettingField};
use crate::stats::DailyStats;

/// Mutable timer state. Owned by a single [`PomodoroEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    pub phase: PomodoroPhase,
    /// Seconds left in the current phase. Expiry is exactly 0.
    pub remaining_secs: u32,
    /// Work phases finished since the engine was created. Drives the long
    /// break rule and is never reset.
    pub completed_work_count: u32,
    pub running: bool,
}

/// Core pomodoro engine.
#[derive(Debug, Clone)]
pub struct PomodoroEngine {
    settings: PomodoroSettings,
    state: EngineState,
    stats: DailyStats,
}

impl PomodoroEngine {
    /// Create an engine paused at the start of a work phase.
    pub fn new(settings: PomodoroSettings, stats: DailyStats) -> Self {
        let settings = settings.clamped();
        let phase = PomodoroPhase::Work;
        Self {
            state: EngineState {
                phase,
                remaining_secs: settings.seconds_for(phase),
                completed_work_count: 0,
                running: false,
            },
            settings,
            stats,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn settings(&self) -> &PomodoroSettings {
        &self.settings
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn stats(&self) -> &DailyStats {
        &self.stats
    }

    pub fn phase(&self) -> PomodoroPhase {
        self.state.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.state.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Full length of the current phase in seconds.
    pub fn total_secs(&self) -> u32 {
        self.settings.seconds_for(self.state.phase)
    }

    /// 0.0 .. 1.0 elapsed share of the current phase.
    pub fn phase_progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        let elapsed = total.saturating_sub(self.state.remaining_secs);
        (f64::from(elapsed) / f64::from(total)).clamp(0.0, 1.0)
    }

    pub fn status(&self) -> TimerStatus {
        if self.state.running {
            TimerStatus::Running
        } else if self.state.remaining_secs < self.total_secs() {
            TimerStatus::Paused
        } else {
            TimerStatus::Ready
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let phase = self.state.phase;
        Snapshot {
            phase,
            phase_label: phase.label().into(),
            icon: phase.icon().into(),
            status: self.status(),
            remaining_secs: self.state.remaining_secs,
            total_secs: self.total_secs(),
            clock: format_clock(self.state.remaining_secs),
            progress: self.phase_progress(),
            completed_work_count: self.state.completed_work_count,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Vec<Effect> {
        if self.state.running {
            return Vec::new();
        }
        self.state.running = true;
        debug!(phase = self.state.phase.as_str(), remaining = self.state.remaining_secs, "timer started");
        vec![
            Effect::RequestPermission,
            Effect::Emit(Event::TimerStarted {
                phase: self.state.phase,
                remaining_secs: self.state.remaining_secs,
                at: Utc::now(),
            }),
            Effect::Render(self.snapshot()),
        ]
    }

    pub fn pause(&mut self) -> Vec<Effect> {
        if !self.state.running {
            return Vec::new();
        }
        self.state.running = false;
        debug!(phase = self.state.phase.as_str(), remaining = self.state.remaining_secs, "timer paused");
        vec![
            Effect::Emit(Event::TimerPaused {
                phase: self.state.phase,
                remaining_secs: self.state.remaining_secs,
                at: Utc::now(),
            }),
            Effect::Render(self.snapshot()),
        ]
    }

    /// Start when paused, pause when running.
    pub fn toggle(&mut self) -> Vec<Effect> {
        if self.state.running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Stop and rewind the current phase. The phase itself is kept.
    pub fn reset(&mut self) -> Vec<Effect> {
        self.state.running = false;
        self.state.remaining_secs = self.total_secs();
        vec![
            Effect::Emit(Event::TimerReset {
                phase: self.state.phase,
                remaining_secs: self.state.remaining_secs,
                at: Utc::now(),
            }),
            Effect::Render(self.snapshot()),
        ]
    }

    /// Change one duration by `delta` minutes. Ignored while running.
    ///
    /// If `field` drives the current phase, the countdown is rewound to the
    /// new full duration.
    pub fn adjust(&mut self, field: SettingField, delta: i32) -> Vec<Effect> {
        if self.state.running {
            return Vec::new();
        }
        self.settings = self.settings.adjusted(field, delta);
        if field == SettingField::for_phase(self.state.phase) {
            self.state.remaining_secs = self.total_secs();
        }
        vec![
            Effect::SaveSettings(self.settings),
            Effect::Emit(Event::SettingsAdjusted {
                field,
                settings: self.settings,
                at: Utc::now(),
            }),
            Effect::Render(self.snapshot()),
        ]
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> Vec<Effect> {
        self.tick_at(Local::now())
    }

    /// [`tick`](Self::tick) with an explicit wall clock, used to stamp the
    /// session record if this tick finishes the phase.
    pub fn tick_at(&mut self, now: DateTime<Local>) -> Vec<Effect> {
        if !self.state.running {
            return Vec::new();
        }
        self.state.remaining_secs = self.state.remaining_secs.saturating_sub(1);
        if self.state.remaining_secs == 0 {
            return self.complete_phase(now);
        }
        vec![Effect::Render(self.snapshot())]
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete_phase(&mut self, now: DateTime<Local>) -> Vec<Effect> {
        let finished = self.state.phase;
        let duration_min = self.settings.minutes_for(finished);

        self.state.running = false;
        self.stats.record_completion(finished, duration_min, now);
        if finished == PomodoroPhase::Work {
            self.state.completed_work_count = self.state.completed_work_count.saturating_add(1);
            self.stats.credit_work(duration_min);
        }

        let next = finished.next(self.state.completed_work_count);
        self.state.phase = next;
        self.state.remaining_secs = self.total_secs();
        self.stats.stamp(now.date_naive());

        debug!(
            finished = finished.as_str(),
            next = next.as_str(),
            completed_work = self.state.completed_work_count,
            "phase completed"
        );

        vec![
            Effect::Emit(Event::PhaseCompleted {
                finished,
                duration_min,
                next,
                completed_work_count: self.state.completed_work_count,
                at: now.with_timezone(&Utc),
            }),
            Effect::SaveStats(self.stats.clone()),
            Effect::Announce(Notice::phase_finished(finished)),
            Effect::Render(self.snapshot()),
        ]
    }
}
