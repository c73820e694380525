#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Local, NaiveDateTime, TimeZone};
use punchclock::models::entry::Entry;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// `punch` binary isolated from the user's config and environment
pub fn punch() -> Command {
    let mut cmd = cargo_bin_cmd!("punch");
    cmd.env_remove("PUNCH_FILE")
        .env_remove("PUNCH_LOG")
        .env("PUNCH_CONFIG", std::env::temp_dir().join("punchclock_tests_missing.yml"));
    cmd
}

/// Fresh temp dir with a store path inside it (the store itself is not created)
pub fn setup_store() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("clock_log.json");
    (dir, path.to_string_lossy().to_string())
}

pub fn seed_store(path: &str, json: &str) {
    fs::write(path, json).expect("seed store");
}

pub fn read_entries(path: &str) -> Vec<Entry> {
    let content = fs::read_to_string(path).expect("read store");
    serde_json::from_str(&content).expect("parse store")
}

pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("config.yml");
    fs::write(&path, yaml).expect("write config");
    path
}

/// Epoch seconds of a local wall-clock time given as `YYYY-MM-DD HH:MM:SS`
pub fn local_ts(s: &str) -> f64 {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("parse datetime");
    let dt = Local
        .from_local_datetime(&naive)
        .single()
        .expect("unambiguous local time");
    dt.timestamp() as f64
}

pub fn closed(clock_in: &str, clock_out: &str) -> String {
    format!(
        r#"{{"clock_in": {}, "clock_out": {}}}"#,
        local_ts(clock_in),
        local_ts(clock_out)
    )
}
