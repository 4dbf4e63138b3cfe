use std::future::Future;
use std::time::Duration;

use clap::Subcommand;
use pomodesk_core::{Config, DisplaySink, Event, KvStore, Notifier, PomodoroSession, SqliteStore};
use tokio::time::MissedTickBehavior;

use crate::host::{DesktopNotifier, Output, TerminalDisplay};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run phases in the foreground, one tick per second. Ctrl-C pauses and exits.
    Run {
        /// Stop after this many completed phases (default: 1, or unbounded
        /// when `timer.auto_advance` is set)
        #[arg(long)]
        phases: Option<u32>,
        /// Print engine events as JSON lines instead of a status line
        #[arg(long)]
        json: bool,
    },
    /// Print the initial timer snapshot as JSON
    Status,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Run { phases, json } => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(run_foreground(phases, json))
        }
        TimerAction::Status => {
            let session = super::open_quiet_session()?;
            println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
            Ok(())
        }
    }
}

async fn run_foreground(phases: Option<u32>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = SqliteStore::open()?;
    let output = if json {
        Output::JsonEvents
    } else {
        Output::StatusLine
    };
    let mut session = PomodoroSession::load(
        store,
        DesktopNotifier::new(config.notifications.enabled),
        TerminalDisplay::new(output, config.notifications.sound),
        config.stats.daily_goal,
    );

    let budget = phases.unwrap_or(if config.timer.auto_advance { u32::MAX } else { 1 });
    if budget == 0 {
        return Ok(());
    }
    tracing::info!(phases = budget, "timer running");
    drive(&mut session, budget, tokio::signal::ctrl_c()).await;
    session.display_mut().finish();
    Ok(())
}

/// Tick `session` once per second until `budget` phases have completed or
/// `shutdown` resolves. Shutdown pauses the running phase.
async fn drive<S, N, D, F>(session: &mut PomodoroSession<S, N, D>, mut budget: u32, shutdown: F)
where
    S: KvStore,
    N: Notifier,
    D: DisplaySink,
    F: Future,
{
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of an interval completes immediately.
    interval.tick().await;

    tokio::pin!(shutdown);

    session.start();
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let events = session.tick();
                if events.iter().any(|e| matches!(e, Event::PhaseCompleted { .. })) {
                    budget -= 1;
                    if budget == 0 {
                        break;
                    }
                    session.start();
                }
            }
            _ = &mut shutdown => {
                session.pause();
                tracing::info!("interrupted, timer paused");
                break;
            }
        }
    }
}
