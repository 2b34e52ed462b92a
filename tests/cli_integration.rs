/// CLI integration tests for wellplan.
///
/// Each test spawns the compiled binary and points `WELLPLAN_HOME` at a
/// fresh `TempDir` so runs never touch the developer's `~/.wellplan`.
use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const DAY: &str = "2026-03-02";

// ── helpers ──────────────────────────────────────────────────────────────────

fn cmd_in(dir: &TempDir) -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("wellplan");
    c.env("WELLPLAN_HOME", dir.path());
    c.env_remove("WELLPLAN_LOG");
    c
}

fn init_dir(dir: &TempDir) {
    cmd_in(dir).arg("init").assert().success();
}

fn parse_json(output: &assert_cmd::assert::Assert) -> Value {
    let bytes = output.get_output().stdout.clone();
    serde_json::from_slice(&bytes).expect("stdout is not valid JSON")
}

fn parse_stderr_json(output: &assert_cmd::assert::Assert) -> Value {
    let bytes = output.get_output().stderr.clone();
    serde_json::from_slice(&bytes).expect("stderr is not valid JSON")
}

// ── init / config ────────────────────────────────────────────────────────────

#[test]
fn test_init_creates_config_and_db() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config initialized"));
    assert!(dir.path().join("config.toml").exists());
    assert!(dir.path().join("data.db").exists());

    // Idempotent
    cmd_in(&dir).arg("init").assert().success();
}

#[test]
fn test_config_set_and_show() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    cmd_in(&dir)
        .args(["config", "set", "profile.user_id", "alice"])
        .assert()
        .success();

    let assert = cmd_in(&dir).args(["config", "show"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["config"]["profile"]["user_id"], "alice");
}

#[test]
fn test_config_set_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    let assert = cmd_in(&dir)
        .args(["config", "set", "nope", "1"])
        .assert()
        .failure();
    let json = parse_stderr_json(&assert);
    assert_eq!(json["status"], "error");
    assert_eq!(json["error"]["code"], "general_error");
}

// ── plan lifecycle ───────────────────────────────────────────────────────────

#[test]
fn test_plan_today_without_plan_is_not_found() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    let assert = cmd_in(&dir)
        .args(["plan", "today", "--date", DAY])
        .assert()
        .failure();
    let json = parse_stderr_json(&assert);
    assert_eq!(json["command"], "plan");
    assert_eq!(json["error"]["code"], "not_found");
}

#[test]
fn test_plan_generate_start_complete_flow() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir)
        .args(["plan", "generate", "--date", DAY])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["plan"]["status"], "Scheduled");
    assert_eq!(json["data"]["plan"]["date"], DAY);
    assert_eq!(json["data"]["plan"]["items"][0]["type"], "Workout");

    for expected in ["InProgress", "InProgress"] {
        let assert = cmd_in(&dir)
            .args(["plan", "start", "--date", DAY])
            .assert()
            .success();
        assert_eq!(parse_json(&assert)["data"]["status"], expected);
    }

    let assert = cmd_in(&dir)
        .args(["plan", "complete", "--date", DAY])
        .assert()
        .success();
    assert_eq!(parse_json(&assert)["data"]["status"], "Completed");

    // Starting a completed plan leaves it completed
    let assert = cmd_in(&dir)
        .args(["plan", "start", "--date", DAY])
        .assert()
        .success();
    assert_eq!(parse_json(&assert)["data"]["status"], "Completed");
}

#[test]
fn test_plan_week_and_regenerate() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir)
        .args(["plan", "week", "--date", DAY])
        .assert()
        .success();
    let json = parse_json(&assert);
    let days = json["data"]["week"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert!(days.iter().all(|d| d["plan"].is_null()));

    let assert = cmd_in(&dir)
        .args(["plan", "regenerate", "--date", DAY])
        .assert()
        .success();
    let json = parse_json(&assert);
    let days = json["data"]["week"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["date"], DAY);
    assert_eq!(days[6]["date"], "2026-03-08");
    assert!(days.iter().all(|d| d["plan"]["items"].as_array().unwrap().len() == 3));
}

#[test]
fn test_plan_week_human_output() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    cmd_in(&dir)
        .args(["plan", "regenerate", "--date", DAY])
        .assert()
        .success();
    cmd_in(&dir)
        .args(["plan", "week", "--date", DAY, "--human"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-03-08"))
        .stdout(predicate::str::contains("Scheduled"));
}

#[test]
fn test_plans_are_scoped_to_user_flag() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    cmd_in(&dir)
        .args(["plan", "generate", "--date", DAY, "--user", "alice"])
        .assert()
        .success();
    cmd_in(&dir)
        .args(["plan", "today", "--date", DAY, "--user", "alice"])
        .assert()
        .success();
    cmd_in(&dir)
        .args(["plan", "today", "--date", DAY])
        .assert()
        .failure();
}

#[test]
fn test_empty_user_flag_is_invalid_input() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    let assert = cmd_in(&dir)
        .args(["--user", "  ", "plan", "today", "--date", DAY])
        .assert()
        .failure();
    assert_eq!(parse_stderr_json(&assert)["error"]["code"], "invalid_input");
}

// ── metrics / dashboard ──────────────────────────────────────────────────────

#[test]
fn test_log_and_list_metrics() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir)
        .args(["log", "hr", "72", "--date", DAY])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["entry"]["metricType"], "HR");

    let assert = cmd_in(&dir)
        .args(["log", "--batch", "steps:500,sleep:80"])
        .assert()
        .success();
    assert_eq!(parse_json(&assert)["data"]["ingested"], 2);

    let assert = cmd_in(&dir).args(["metrics"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["samples"].as_array().unwrap().len(), 3);
}

#[test]
fn test_log_negative_steps_is_invalid_input() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    let assert = cmd_in(&dir)
        .args(["log", "steps", "-10"])
        .assert()
        .failure();
    assert_eq!(parse_stderr_json(&assert)["error"]["code"], "invalid_input");
}

#[test]
fn test_steps_upsert_and_dashboard_score() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["plan", "generate", "--date", DAY])
        .assert()
        .success();
    cmd_in(&dir)
        .args(["steps", "4000", "--date", DAY])
        .assert()
        .success();
    let assert = cmd_in(&dir)
        .args(["steps", "10000", "--date", DAY])
        .assert()
        .success();
    assert_eq!(parse_json(&assert)["data"]["steps"], 10000);
    cmd_in(&dir)
        .args(["log", "sleep", "80", "--date", DAY])
        .assert()
        .success();

    let assert = cmd_in(&dir)
        .args(["dashboard", "--date", DAY])
        .assert()
        .success();
    let json = parse_json(&assert);
    let data = &json["data"];
    assert_eq!(data["today_steps"], 10000);
    // Moderate template: 35 workout minutes
    assert_eq!(data["active_minutes"], 35);
    assert_eq!(data["sleep_avg"], 80);
    // 0.3*100 + 0.2*70 + 0.5*80
    assert_eq!(data["score"], 84);
    assert_eq!(data["caption"], "excellent");
}

#[test]
fn test_dashboard_counts_steps_logged_today_in_any_timezone() {
    // Evening in EST5 and morning in a UTC+13 zone both fall on a different
    // UTC date for part of the day.
    for tz in ["EST5", "NZT-13", "UTC0"] {
        let dir = TempDir::new().unwrap();
        init_dir(&dir);
        cmd_in(&dir)
            .env("TZ", tz)
            .args(["log", "steps", "500"])
            .assert()
            .success();

        let assert = cmd_in(&dir).env("TZ", tz).arg("dashboard").assert().success();
        let json = parse_json(&assert);
        assert_eq!(json["data"]["today_steps"], 500, "TZ={}", tz);
    }
}

// ── coach ────────────────────────────────────────────────────────────────────

#[test]
fn test_nudge_and_recommendations() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir).arg("nudge").assert().success();
    let json = parse_json(&assert);
    assert!(
        json["data"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Quick win")
    );

    let assert = cmd_in(&dir).arg("recommendations").assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["recommendations"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["recommendations"][0]["context"], "nudge");
}

#[test]
fn test_feedback_rpe_out_of_range() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    cmd_in(&dir)
        .args(["feedback", "--rpe", "6", "--mood", "tired"])
        .assert()
        .success();
    let assert = cmd_in(&dir)
        .args(["feedback", "--rpe", "12"])
        .assert()
        .failure();
    assert_eq!(parse_stderr_json(&assert)["error"]["code"], "invalid_input");
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wellplan"));
}
