use clap::Subcommand;
use serde::Serialize;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's counters and goal progress
    Today,
    /// Most recent completed phases, newest first
    Sessions {
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TodaySummary<'a> {
    date: &'a str,
    completed_pomodoros: u32,
    total_focus_minutes: u32,
    daily_goal: u32,
    progress: f64,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let session = super::open_quiet_session()?;
    let stats = session.stats();

    match action {
        StatsAction::Today => {
            let summary = TodaySummary {
                date: stats.last_date(),
                completed_pomodoros: stats.completed_pomodoros(),
                total_focus_minutes: stats.total_focus_minutes(),
                daily_goal: stats.daily_goal(),
                progress: stats.progress_fraction(),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Sessions { limit } => {
            println!("{}", serde_json::to_string_pretty(stats.recent(limit))?);
        }
    }
    Ok(())
}
