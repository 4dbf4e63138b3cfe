//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own data directory.

use std::path::Path;
use std::process::Command;

/// Run a CLI command in `data_dir` and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_pomodesk-cli"))
        .args(args)
        .env("POMODESK_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("stdout is JSON")
}

#[test]
fn test_settings_show_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["settings", "show"]);
    assert_eq!(code, 0);
    let settings = json(&stdout);
    assert_eq!(settings["workTime"], 25);
    assert_eq!(settings["shortBreak"], 5);
    assert_eq!(settings["longBreak"], 15);
}

#[test]
fn test_settings_adjust_persists_and_clamps() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["settings", "adjust", "shortBreak", "-2"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["shortBreak"], 3);

    let (_, _, code) = run_cli(dir.path(), &["settings", "adjust", "work", "100"]);
    assert_eq!(code, 0);

    let (stdout, _, _) = run_cli(dir.path(), &["settings", "show"]);
    let settings = json(&stdout);
    assert_eq!(settings["workTime"], 60);
    assert_eq!(settings["shortBreak"], 3);
}

#[test]
fn test_settings_adjust_unknown_field_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["settings", "adjust", "lunch", "5"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("lunch"), "stderr: {stderr}");
}

#[test]
fn test_stats_today_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["stats", "today"]);
    assert_eq!(code, 0);
    let today = json(&stdout);
    assert_eq!(today["completedPomodoros"], 0);
    assert_eq!(today["totalFocusMinutes"], 0);
    assert_eq!(today["dailyGoal"], 8);
    assert_eq!(today["progress"], 0.0);
}

#[test]
fn test_stats_sessions_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["stats", "sessions", "--limit", "5"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout), serde_json::json!([]));
}

#[test]
fn test_config_set_then_get() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "set", "stats.daily_goal", "12"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "stats.daily_goal"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "12");

    // The configured goal seeds fresh stats.
    let (stdout, _, _) = run_cli(dir.path(), &["stats", "today"]);
    assert_eq!(json(&stdout)["dailyGoal"], 12);
}

#[test]
fn test_config_unknown_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["config", "get", "theme"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"), "stderr: {stderr}");
}

#[test]
fn test_config_reset_restores_defaults() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["config", "set", "notifications.sound", "false"]);
    let (_, _, code) = run_cli(dir.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "notifications.sound"]);
    assert_eq!(stdout.trim(), "true");
}

#[test]
fn test_timer_status_reflects_settings() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["settings", "adjust", "work", "-15"]);
    let (stdout, _, code) = run_cli(dir.path(), &["timer", "status"]);
    assert_eq!(code, 0);
    let snapshot = json(&stdout);
    assert_eq!(snapshot["phase"], "work");
    assert_eq!(snapshot["status"], "ready");
    assert_eq!(snapshot["clock"], "10:00");
    assert_eq!(snapshot["remaining_secs"], 600);
}

#[test]
fn test_timer_run_zero_phases_exits_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["timer", "run", "--phases", "0"]);
    assert_eq!(code, 0);
}
