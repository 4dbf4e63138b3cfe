//! Statistics for completed pomodoro phases.
//!
//! [`DailyStats`] holds today's counters and a short, newest-first log of
//! [`SessionRecord`]s.

mod daily;
mod record;

pub use daily::{date_label, DailyStats, DEFAULT_DAILY_GOAL, SESSION_LOG_CAP};
pub use record::SessionRecord;
