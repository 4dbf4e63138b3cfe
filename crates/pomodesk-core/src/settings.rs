//! Pomodoro durations and their valid ranges.
//!
//! Settings are persisted as a single JSON blob
//! (`{"workTime": 25, "shortBreak": 5, "longBreak": 15}`) and are always
//! clamped into range on the way in, so a hand-edited or stale blob can never
//! produce a zero-length or oversized phase.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ValidationError;
use crate::timer::PomodoroPhase;

pub const WORK_RANGE: RangeInclusive<u32> = 1..=60;
pub const SHORT_BREAK_RANGE: RangeInclusive<u32> = 1..=30;
pub const LONG_BREAK_RANGE: RangeInclusive<u32> = 1..=60;

/// One adjustable duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingField {
    Work,
    ShortBreak,
    LongBreak,
}

impl SettingField {
    pub fn range(&self) -> RangeInclusive<u32> {
        match self {
            SettingField::Work => WORK_RANGE,
            SettingField::ShortBreak => SHORT_BREAK_RANGE,
            SettingField::LongBreak => LONG_BREAK_RANGE,
        }
    }

    /// The field that configures the duration of `phase`.
    pub fn for_phase(phase: PomodoroPhase) -> Self {
        match phase {
            PomodoroPhase::Work => SettingField::Work,
            PomodoroPhase::ShortBreak => SettingField::ShortBreak,
            PomodoroPhase::LongBreak => SettingField::LongBreak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingField::Work => "work",
            SettingField::ShortBreak => "shortBreak",
            SettingField::LongBreak => "longBreak",
        }
    }
}

impl FromStr for SettingField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" | "workTime" => Ok(SettingField::Work),
            "shortBreak" | "short-break" | "short_break" => Ok(SettingField::ShortBreak),
            "longBreak" | "long-break" | "long_break" => Ok(SettingField::LongBreak),
            other => Err(ValidationError::InvalidValue {
                field: "setting".into(),
                message: format!("unknown setting '{other}' (expected work, shortBreak or longBreak)"),
            }),
        }
    }
}

/// Phase durations in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroSettings {
    #[serde(rename = "workTime", default = "default_work")]
    pub work_minutes: u32,
    #[serde(rename = "shortBreak", default = "default_short_break")]
    pub short_break_minutes: u32,
    #[serde(rename = "longBreak", default = "default_long_break")]
    pub long_break_minutes: u32,
}

fn default_work() -> u32 {
    25
}
fn default_short_break() -> u32 {
    5
}
fn default_long_break() -> u32 {
    15
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            work_minutes: default_work(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
        }
    }
}

impl PomodoroSettings {
    /// Parse a persisted blob. Absent or corrupt input yields the defaults.
    pub fn from_json(json: Option<&str>) -> Self {
        let Some(json) = json else {
            return Self::default();
        };
        match serde_json::from_str::<PomodoroSettings>(json) {
            Ok(settings) => settings.clamped(),
            Err(e) => {
                warn!(error = %e, "ignoring corrupt pomodoro settings, using defaults");
                Self::default()
            }
        }
    }

    /// Copy with every field forced into its valid range.
    pub fn clamped(self) -> Self {
        Self {
            work_minutes: clamp(self.work_minutes, WORK_RANGE),
            short_break_minutes: clamp(self.short_break_minutes, SHORT_BREAK_RANGE),
            long_break_minutes: clamp(self.long_break_minutes, LONG_BREAK_RANGE),
        }
    }

    pub fn get(&self, field: SettingField) -> u32 {
        match field {
            SettingField::Work => self.work_minutes,
            SettingField::ShortBreak => self.short_break_minutes,
            SettingField::LongBreak => self.long_break_minutes,
        }
    }

    /// Copy with `delta` added to `field`, clamped into range.
    pub fn adjusted(self, field: SettingField, delta: i32) -> Self {
        let current = i64::from(self.get(field));
        let range = field.range();
        let value = (current + i64::from(delta))
            .clamp(i64::from(*range.start()), i64::from(*range.end())) as u32;

        let mut next = self;
        match field {
            SettingField::Work => next.work_minutes = value,
            SettingField::ShortBreak => next.short_break_minutes = value,
            SettingField::LongBreak => next.long_break_minutes = value,
        }
        next
    }

    pub fn minutes_for(&self, phase: PomodoroPhase) -> u32 {
        self.get(SettingField::for_phase(phase))
    }

    pub fn seconds_for(&self, phase: PomodoroPhase) -> u32 {
        self.minutes_for(phase).saturating_mul(60)
    }
}

fn clamp(value: u32, range: RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_blob_uses_defaults() {
        let s = PomodoroSettings::from_json(None);
        assert_eq!(s, PomodoroSettings::default());
        assert_eq!(s.work_minutes, 25);
        assert_eq!(s.short_break_minutes, 5);
        assert_eq!(s.long_break_minutes, 15);
    }

    #[test]
    fn corrupt_blob_uses_defaults() {
        let s = PomodoroSettings::from_json(Some("{not json"));
        assert_eq!(s, PomodoroSettings::default());

        let s = PomodoroSettings::from_json(Some(r#"{"workTime": "long"}"#));
        assert_eq!(s, PomodoroSettings::default());
    }

    #[test]
    fn out_of_range_blob_is_clamped() {
        let s = PomodoroSettings::from_json(Some(
            r#"{"workTime": 90, "shortBreak": 0, "longBreak": 61}"#,
        ));
        assert_eq!(s.work_minutes, 60);
        assert_eq!(s.short_break_minutes, 1);
        assert_eq!(s.long_break_minutes, 60);
    }

    #[test]
    fn partial_blob_fills_missing_fields() {
        let s = PomodoroSettings::from_json(Some(r#"{"workTime": 50}"#));
        assert_eq!(s.work_minutes, 50);
        assert_eq!(s.short_break_minutes, 5);
        assert_eq!(s.long_break_minutes, 15);
    }

    #[test]
    fn adjusted_clamps_at_both_ends() {
        let s = PomodoroSettings::default();
        assert_eq!(s.adjusted(SettingField::Work, 100).work_minutes, 60);
        assert_eq!(s.adjusted(SettingField::Work, -100).work_minutes, 1);
        assert_eq!(s.adjusted(SettingField::ShortBreak, 40).short_break_minutes, 30);
        assert_eq!(s.adjusted(SettingField::LongBreak, -1).long_break_minutes, 14);
    }

    #[test]
    fn adjusted_touches_only_named_field() {
        let s = PomodoroSettings::default().adjusted(SettingField::ShortBreak, 2);
        assert_eq!(s.work_minutes, 25);
        assert_eq!(s.short_break_minutes, 7);
        assert_eq!(s.long_break_minutes, 15);
    }

    #[test]
    fn serializes_with_storage_keys() {
        let json = serde_json::to_value(PomodoroSettings::default()).unwrap();
        assert_eq!(json["workTime"], 25);
        assert_eq!(json["shortBreak"], 5);
        assert_eq!(json["longBreak"], 15);
    }

    #[test]
    fn field_parsing_accepts_host_spellings() {
        assert_eq!("work".parse::<SettingField>().unwrap(), SettingField::Work);
        assert_eq!(
            "short-break".parse::<SettingField>().unwrap(),
            SettingField::ShortBreak
        );
        assert_eq!(
            "longBreak".parse::<SettingField>().unwrap(),
            SettingField::LongBreak
        );
        assert!("lunch".parse::<SettingField>().is_err());
    }
}
