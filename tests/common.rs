#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, SecondsFormat, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wg() -> Command {
    cargo_bin_cmd!("weightgoal")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_weightgoal.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh DB (test mode: config file untouched)
pub fn init_db(db_path: &str) {
    wg().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// RFC 3339 timestamp `days` from now, in storage format
pub fn days_from_now(days: i64) -> String {
    (Utc::now() + Duration::days(days)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `show --json` output parsed as JSON
pub fn show_json(db_path: &str) -> serde_json::Value {
    let out = wg()
        .args(["--db", db_path, "show", "--json"])
        .output()
        .expect("failed to run show --json");
    assert!(out.status.success());
    serde_json::from_slice(&out.stdout).expect("show --json did not print JSON")
}
