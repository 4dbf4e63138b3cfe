//! Session runtime: a [`PomodoroEngine`] wired to its ports.
//!
//! The engine decides, the session performs. Each command forwards to the
//! engine and then carries out the returned effects in order: persistence
//! writes are best-effort (failures are logged and dropped), rendering goes
//! to the display sink, completion notices go to the toast and, when
//! permitted, to the OS notifier.

use chrono::{DateTime, Local, NaiveDate};
use tracing::{debug, warn};

use crate::display::Snapshot;
use crate::events::{Effect, Event};
use crate::ports::{DisplaySink, NotificationPermission, Notifier};
use crate::settings::SettingField;
use crate::stats::DailyStats;
use crate::storage::{KvStore, SettingsStore, StatsStore};
use crate::timer::PomodoroEngine;

pub struct PomodoroSession<S, N, D> {
    engine: PomodoroEngine,
    store: S,
    notifier: N,
    display: D,
}

impl<S, N, D> PomodoroSession<S, N, D>
where
    S: KvStore,
    N: Notifier,
    D: DisplaySink,
{
    /// Load settings and stats from `store` for the current local day.
    pub fn load(store: S, notifier: N, display: D, default_goal: u32) -> Self {
        Self::load_on(store, notifier, display, Local::now().date_naive(), default_goal)
    }

    /// Load as if today were `today`. Stats from any other day are rolled
    /// over; the rollover is not written back until the next completion.
    pub fn load_on(store: S, notifier: N, display: D, today: NaiveDate, default_goal: u32) -> Self {
        let settings = store.load_settings();
        let stats = store.load_stats(today, default_goal);
        debug!(
            work = settings.work_minutes,
            short_break = settings.short_break_minutes,
            long_break = settings.long_break_minutes,
            completed_today = stats.completed_pomodoros(),
            "pomodoro session loaded"
        );
        Self {
            engine: PomodoroEngine::new(settings, stats),
            store,
            notifier,
            display,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn engine(&self) -> &PomodoroEngine {
        &self.engine
    }

    pub fn stats(&self) -> &DailyStats {
        self.engine.stats()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    // ── Commands ─────────────────────────────────────────────────────
    //
    // Each returns the events emitted while handling it.

    pub fn start(&mut self) -> Vec<Event> {
        let effects = self.engine.start();
        self.apply(effects)
    }

    pub fn pause(&mut self) -> Vec<Event> {
        let effects = self.engine.pause();
        self.apply(effects)
    }

    pub fn toggle(&mut self) -> Vec<Event> {
        let effects = self.engine.toggle();
        self.apply(effects)
    }

    pub fn reset(&mut self) -> Vec<Event> {
        let effects = self.engine.reset();
        self.apply(effects)
    }

    pub fn adjust(&mut self, field: SettingField, delta: i32) -> Vec<Event> {
        let effects = self.engine.adjust(field, delta);
        self.apply(effects)
    }

    pub fn tick(&mut self) -> Vec<Event> {
        let effects = self.engine.tick();
        self.apply(effects)
    }

    pub fn tick_at(&mut self, now: DateTime<Local>) -> Vec<Event> {
        let effects = self.engine.tick_at(now);
        self.apply(effects)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn apply(&mut self, effects: Vec<Effect>) -> Vec<Event> {
        let mut events = Vec::new();
        for effect in effects {
            match effect {
                Effect::SaveSettings(settings) => {
                    if let Err(e) = self.store.save_settings(&settings) {
                        warn!(error = %e, "failed to persist pomodoro settings");
                    }
                }
                Effect::SaveStats(stats) => {
                    if let Err(e) = self.store.save_stats(&stats) {
                        warn!(error = %e, "failed to persist pomodoro stats");
                    }
                }
                Effect::Render(snapshot) => self.display.render(&snapshot),
                Effect::Announce(notice) => {
                    self.display.toast(&notice);
                    if self.notifier.permission() == NotificationPermission::Granted {
                        if let Err(e) = self.notifier.notify(&notice) {
                            warn!(error = %e, "failed to show notification");
                        }
                    }
                }
                Effect::RequestPermission => {
                    if self.notifier.permission() == NotificationPermission::Default {
                        let answer = self.notifier.request_permission();
                        debug!(?answer, "notification permission requested");
                    }
                }
                Effect::Emit(event) => {
                    self.display.event(&event);
                    events.push(event);
                }
            }
        }
        events
    }
}
