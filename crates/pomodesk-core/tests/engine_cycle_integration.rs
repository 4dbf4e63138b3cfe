//! Integration tests for the pomodoro cycle.
//!
//! Drives a full session through the public API: phase sequencing, timing,
//! settings adjustment, and what ends up in the store.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use pomodesk_core::ports::{NullDisplay, RecordingDisplay, RecordingNotifier};
use pomodesk_core::settings::{LONG_BREAK_RANGE, SHORT_BREAK_RANGE, WORK_RANGE};
use pomodesk_core::storage::STATS_KEY;
use pomodesk_core::{
    DailyStats, DisplaySink, KvStore, MemoryStore, NotificationPermission, Notifier,
    PomodoroEngine, PomodoroPhase, PomodoroSession, PomodoroSettings, SettingField, StatsStore,
};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
}

fn at(h: u32, m: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 7, h, m, 0).unwrap()
}

fn run_phase(engine: &mut PomodoroEngine, now: DateTime<Local>) {
    engine.start();
    while engine.is_running() {
        engine.tick_at(now);
    }
}

fn run_session_phase<S: KvStore, N: Notifier, D: DisplaySink>(
    session: &mut PomodoroSession<S, N, D>,
    now: DateTime<Local>,
) {
    session.start();
    while session.engine().is_running() {
        session.tick_at(now);
    }
}

#[test]
fn test_work_sessions_one_to_five() {
    let mut engine = PomodoroEngine::new(PomodoroSettings::default(), DailyStats::new(today(), 8));

    let mut after_work = Vec::new();
    for n in 1..=5 {
        assert_eq!(engine.phase(), PomodoroPhase::Work, "work #{n} starts in Work");
        run_phase(&mut engine, at(9, 0));
        after_work.push(engine.phase());
        run_phase(&mut engine, at(9, 30));
    }

    assert_eq!(
        after_work,
        vec![
            PomodoroPhase::ShortBreak,
            PomodoroPhase::ShortBreak,
            PomodoroPhase::ShortBreak,
            PomodoroPhase::LongBreak,
            PomodoroPhase::ShortBreak,
        ]
    );
    assert_eq!(engine.stats().completed_pomodoros(), 5);
    assert_eq!(engine.stats().total_focus_minutes(), 125);
}

#[test]
fn test_reset_does_not_restart_long_break_count() {
    let mut engine = PomodoroEngine::new(PomodoroSettings::default(), DailyStats::new(today(), 8));
    for _ in 0..3 {
        run_phase(&mut engine, at(10, 0));
        engine.reset();
        run_phase(&mut engine, at(10, 0));
    }
    run_phase(&mut engine, at(10, 0));
    assert_eq!(engine.phase(), PomodoroPhase::LongBreak);
}

#[test]
fn test_exact_tick_count_for_default_work_phase() {
    let mut engine = PomodoroEngine::new(PomodoroSettings::default(), DailyStats::new(today(), 8));
    engine.start();
    let mut ticks = 0;
    while engine.phase() == PomodoroPhase::Work {
        engine.tick_at(at(11, 0));
        ticks += 1;
    }
    assert_eq!(ticks, 1500);
    assert_eq!(engine.phase(), PomodoroPhase::ShortBreak);
    assert_eq!(engine.stats().total_focus_minutes(), 25);
    assert_eq!(engine.stats().completed_pomodoros(), 1);
}

#[test]
fn test_adjust_respects_running_flag() {
    let mut session = PomodoroSession::load_on(
        MemoryStore::new(),
        RecordingNotifier::default(),
        NullDisplay,
        today(),
        8,
    );

    session.start();
    assert!(session.adjust(SettingField::Work, 1).is_empty());
    assert_eq!(session.engine().settings().work_minutes, 25);

    session.pause();
    session.adjust(SettingField::Work, 1);
    assert_eq!(session.engine().settings().work_minutes, 26);

    for _ in 0..100 {
        session.adjust(SettingField::Work, 1);
    }
    assert_eq!(session.engine().settings().work_minutes, 60);
}

#[test]
fn test_settings_survive_reload() {
    let store = MemoryStore::new();
    {
        let mut session =
            PomodoroSession::load_on(&store, RecordingNotifier::default(), NullDisplay, today(), 8);
        session.adjust(SettingField::LongBreak, 5);
        session.adjust(SettingField::ShortBreak, -2);
    }

    let session = PomodoroSession::load_on(&store, RecordingNotifier::default(), NullDisplay, today(), 8);
    assert_eq!(session.engine().settings().long_break_minutes, 20);
    assert_eq!(session.engine().settings().short_break_minutes, 3);
    assert_eq!(session.engine().remaining_secs(), 25 * 60);
}

#[test]
fn test_stats_survive_reload_same_day() {
    let store = MemoryStore::new();
    {
        let mut session =
            PomodoroSession::load_on(&store, RecordingNotifier::default(), NullDisplay, today(), 8);
        run_session_phase(&mut session, at(14, 0));
        run_session_phase(&mut session, at(14, 25));
    }

    let session = PomodoroSession::load_on(&store, RecordingNotifier::default(), NullDisplay, today(), 8);
    assert_eq!(session.stats().completed_pomodoros(), 1);
    assert_eq!(session.stats().sessions().len(), 2);
    assert_eq!(session.stats().sessions()[0].phase(), PomodoroPhase::ShortBreak);
    assert_eq!(session.stats().sessions()[1].time_label(), "14:00");
}

#[test]
fn test_completion_drives_notifier_and_toast() {
    let mut session = PomodoroSession::load_on(
        MemoryStore::new(),
        RecordingNotifier::answering(NotificationPermission::Granted),
        RecordingDisplay::default(),
        today(),
        8,
    );
    run_session_phase(&mut session, at(15, 0));

    let delivered = &session.notifier().delivered;
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0], session.display().toasts[0]);
    let last = session.display().last_frame().unwrap();
    assert_eq!(last.phase, PomodoroPhase::ShortBreak);
    assert_eq!(last.clock, "05:00");
    assert_eq!(last.progress, 0.0);
}

#[test]
fn test_session_log_cap_through_store() {
    let store = MemoryStore::new();
    let settings = PomodoroSettings {
        work_minutes: 1,
        short_break_minutes: 1,
        long_break_minutes: 1,
    };
    let mut engine = PomodoroEngine::new(settings, DailyStats::new(today(), 8));
    for i in 0..30 {
        run_phase(&mut engine, at(16, i));
    }
    store.save_stats(engine.stats()).unwrap();

    let blob = store.get(STATS_KEY).unwrap().unwrap();
    let saved: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(saved["sessions"].as_array().unwrap().len(), 20);
    assert_eq!(saved["sessions"][0]["time"], "16:29");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn reset_restores_full_duration_in_every_phase(
        work in WORK_RANGE,
        short_break in SHORT_BREAK_RANGE,
        long_break in LONG_BREAK_RANGE,
        partial in 1u32..60u32,
    ) {
        let settings = PomodoroSettings {
            work_minutes: work,
            short_break_minutes: short_break,
            long_break_minutes: long_break,
        };
        let mut engine = PomodoroEngine::new(settings, DailyStats::new(today(), 8));

        // Work, break x3, Work, LongBreak, then Work again.
        let mut seen = Vec::new();
        for _ in 0..9 {
            let phase = engine.phase();
            seen.push(phase);

            engine.start();
            for _ in 0..partial.min(engine.total_secs() - 1) {
                engine.tick_at(at(8, 30));
            }
            engine.reset();
            prop_assert_eq!(engine.phase(), phase);
            prop_assert_eq!(engine.remaining_secs(), settings.minutes_for(phase) * 60);
            prop_assert!(!engine.is_running());

            run_phase(&mut engine, at(8, 0));
        }

        prop_assert_eq!(seen[1], PomodoroPhase::ShortBreak);
        prop_assert_eq!(seen[7], PomodoroPhase::LongBreak);
        prop_assert_eq!(seen[8], PomodoroPhase::Work);
    }

    #[test]
    fn remaining_never_exceeds_phase_total(
        work in WORK_RANGE,
        ticks in 0u32..4000u32,
    ) {
        let settings = PomodoroSettings { work_minutes: work, ..PomodoroSettings::default() };
        let mut engine = PomodoroEngine::new(settings, DailyStats::new(today(), 8));
        engine.start();
        for _ in 0..ticks {
            if !engine.is_running() {
                engine.start();
            }
            engine.tick_at(at(12, 0));
            prop_assert!(engine.remaining_secs() > 0);
            prop_assert!(engine.remaining_secs() <= engine.total_secs());
        }
    }

    #[test]
    fn session_log_never_exceeds_cap(completions in 0usize..60) {
        let mut stats = DailyStats::new(today(), 8);
        for i in 0..completions {
            stats.record_completion(PomodoroPhase::Work, (i + 1) as u32, at(13, 0));
        }
        prop_assert_eq!(stats.sessions().len(), completions.min(20));
        if completions > 0 {
            prop_assert_eq!(stats.sessions()[0].duration_minutes(), completions as u32);
        }
    }
}
