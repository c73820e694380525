use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{punch, read_entries, seed_store, setup_store};

#[test]
fn test_clock_in_appends_open_entry() {
    let (_dir, store) = setup_store();

    punch()
        .args(["--file", &store, "--clock-in"])
        .assert()
        .success()
        .stdout(contains("Clocked in at"));

    let entries = read_entries(&store);
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_open());
    assert_eq!(entries[0].clock_out.secs(), -1.0);
    assert!(entries[0].notes.is_none());
}

#[test]
fn test_clock_in_with_notes() {
    let (_dir, store) = setup_store();

    punch()
        .args(["-f", &store, "-i", "-n", "fixing the parser"])
        .assert()
        .success();

    let entries = read_entries(&store);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].notes.as_deref(), Some("fixing the parser"));
}

#[test]
fn test_clock_in_appends_after_closed_entries() {
    let (_dir, store) = setup_store();
    seed_store(
        &store,
        r#"[{"clock_in": 1000.0, "clock_out": 2000.0}, {"clock_in": 3000.0, "clock_out": 4000.0}]"#,
    );

    punch().args(["-f", &store, "-i"]).assert().success();

    let entries = read_entries(&store);
    assert_eq!(entries.len(), 3);
    assert_eq!(entries.iter().filter(|e| e.is_open()).count(), 1);
    assert!(entries[2].is_open());
    assert_eq!(entries[0].clock_out.secs(), 2000.0);
    assert_eq!(entries[1].clock_out.secs(), 4000.0);
}

#[test]
fn test_clock_in_while_open_fails_and_keeps_log() {
    let (_dir, store) = setup_store();
    let seeded = r#"[{"clock_in": 1000.0, "clock_out": 2000.0}, {"clock_in": 3000.0, "clock_out": -1}]"#;
    seed_store(&store, seeded);

    punch()
        .args(["-f", &store, "-i"])
        .assert()
        .failure()
        .stderr(contains("Already clocked in"));

    assert_eq!(fs::read_to_string(&store).unwrap(), seeded);
}

#[test]
fn test_clock_out_closes_most_recent_only() {
    let (_dir, store) = setup_store();
    // storage order is not chronological
    seed_store(
        &store,
        r#"[{"clock_in": 5000.0, "clock_out": -1}, {"clock_in": 1000.0, "clock_out": 1500.0, "notes": "morning"}]"#,
    );

    punch()
        .args(["-f", &store, "-o", "-n", "done"])
        .assert()
        .success()
        .stdout(contains("Clocked out at"));

    let entries = read_entries(&store);
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].clock_in.secs(), 1000.0);
    assert_eq!(entries[0].clock_out.secs(), 1500.0);
    assert_eq!(entries[0].notes.as_deref(), Some("morning"));

    assert_eq!(entries[1].clock_in.secs(), 5000.0);
    assert!(!entries[1].is_open());
    assert!(entries[1].clock_out.secs() >= entries[1].clock_in.secs());
    assert_eq!(entries[1].notes.as_deref(), Some("done"));
}

#[test]
fn test_clock_out_keeps_notes_when_none_given() {
    let (_dir, store) = setup_store();
    seed_store(
        &store,
        r#"[{"clock_in": 1000.0, "clock_out": -1, "notes": "standup"}]"#,
    );

    punch().args(["-f", &store, "-o"]).assert().success();

    let entries = read_entries(&store);
    assert_eq!(entries[0].notes.as_deref(), Some("standup"));
    assert!(!entries[0].is_open());
}

#[test]
fn test_clock_out_without_open_entry_fails() {
    let (_dir, store) = setup_store();
    let seeded = r#"[{"clock_in": 1000.0, "clock_out": 2000.0}]"#;
    seed_store(&store, seeded);

    punch()
        .args(["-f", &store, "-o"])
        .assert()
        .failure()
        .stderr(contains("Not clocked in"));

    assert_eq!(fs::read_to_string(&store).unwrap(), seeded);
}

#[test]
fn test_clock_out_on_empty_log_fails() {
    let (_dir, store) = setup_store();

    punch()
        .args(["-f", &store, "-o"])
        .assert()
        .failure()
        .stderr(contains("Not clocked in"));
}

#[test]
fn test_full_punch_cycle() {
    let (_dir, store) = setup_store();

    punch().args(["-f", &store, "-i"]).assert().success();
    punch().args(["-f", &store, "-o"]).assert().success();
    punch().args(["-f", &store, "-i", "-n", "afternoon"]).assert().success();

    let entries = read_entries(&store);
    assert_eq!(entries.len(), 2);
    assert!(!entries[0].is_open());
    assert!(entries[1].is_open());
    assert!(entries[1].clock_in.secs() >= entries[0].clock_out.secs());
}

#[test]
fn test_conflicting_flags_do_not_touch_store() {
    let (_dir, store) = setup_store();

    punch()
        .args(["-f", &store, "--clock-in", "--clock-out"])
        .assert()
        .failure()
        .stderr(contains("Cannot clock both in and out"));

    assert!(!Path::new(&store).exists());
}

#[cfg(unix)]
#[test]
fn test_runtime_errors_exit_255() {
    let (_dir, store) = setup_store();

    punch().args(["-f", &store, "-i", "-o"]).assert().code(255);
    punch().args(["-f", &store, "-o"]).assert().code(255);
}

#[test]
fn test_notes_require_a_punch() {
    let (_dir, store) = setup_store();

    punch()
        .args(["-f", &store, "-n", "orphan note"])
        .assert()
        .failure();

    assert!(!Path::new(&store).exists());
}

#[test]
fn test_store_path_from_env() {
    let (_dir, store) = setup_store();

    punch()
        .env("PUNCH_FILE", &store)
        .arg("-i")
        .assert()
        .success();

    assert_eq!(read_entries(&store).len(), 1);
}

#[test]
fn test_store_path_from_config() {
    let (dir, store) = setup_store();
    let cfg = common::write_config(dir.path(), &format!("store: {store}\n"));

    punch()
        .args(["--config", &cfg.to_string_lossy(), "-i"])
        .assert()
        .success();

    assert_eq!(read_entries(&store).len(), 1);
}

#[test]
fn test_reset_then_raw_view_is_empty() {
    let (_dir, store) = setup_store();
    seed_store(&store, r#"[{"clock_in": 1000.0, "clock_out": 2000.0}]"#);

    punch()
        .args(["-f", &store, "--reset"])
        .assert()
        .success()
        .stdout(contains("Log reset"));

    let out = punch()
        .args(["-f", &store, "--view", "raw"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
}

#[test]
fn test_reset_creates_missing_store() {
    let (_dir, store) = setup_store();

    punch().args(["-f", &store, "-r"]).assert().success();

    assert!(read_entries(&store).is_empty());
}

#[test]
fn test_status_reports_state() {
    let (_dir, store) = setup_store();

    punch()
        .args(["-f", &store])
        .assert()
        .success()
        .stdout(contains("Not clocked in"));

    punch().args(["-f", &store, "-i"]).assert().success();

    punch()
        .args(["-f", &store])
        .assert()
        .success()
        .stdout(contains("Clocked in since"));
}

#[test]
fn test_invalid_log_is_rejected_on_punch() {
    let (_dir, store) = setup_store();
    seed_store(
        &store,
        r#"[{"clock_in": 1000.0, "clock_out": -1}, {"clock_in": 2000.0, "clock_out": -1}]"#,
    );

    punch()
        .args(["-f", &store, "-o"])
        .assert()
        .failure()
        .stderr(contains("Invalid log"));
}

#[test]
fn test_corrupt_store_fails() {
    let (_dir, store) = setup_store();
    seed_store(&store, "not json");

    punch()
        .args(["-f", &store, "-i"])
        .assert()
        .failure()
        .stderr(contains("Corrupt store file"));
}

#[test]
fn test_punch_keeps_other_entries_byte_for_byte() {
    let (_dir, store) = setup_store();
    seed_store(
        &store,
        r#"[
            {"clock_in": 1658322749.1405447, "clock_out": 1658326349.9618483, "notes": "legacy"},
            {"clock_in": 1700000000, "clock_out": 1700003600, "tag": "x"},
            {"clock_in": 1700010000, "clock_out": -1}
        ]"#,
    );

    punch().args(["-f", &store, "-o"]).assert().success();

    let content = fs::read_to_string(&store).unwrap();
    assert!(content.contains("\"clock_in\": 1658322749.1405447,"));
    assert!(content.contains("\"clock_out\": 1658326349.9618483,"));
    assert!(content.contains("\"clock_in\": 1700000000,"));
    assert!(content.contains("\"clock_out\": 1700003600,"));
    assert!(content.contains("\"tag\": \"x\""));
    // the closed session keeps its integer start
    assert!(content.contains("\"clock_in\": 1700010000,"));
    assert!(!content.contains("1700000000.0"));

    let entries = read_entries(&store);
    assert_eq!(entries[1].extra.get("tag").and_then(|v| v.as_str()), Some("x"));
    assert!(!entries[2].is_open());
}

#[test]
fn test_concurrent_clock_ins_open_one_session() {
    let (_dir, store) = setup_store();
    seed_store(&store, "[]");

    let handles: Vec<_> = (0..12)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || {
                punch()
                    .args(["-f", &store, "-i"])
                    .output()
                    .expect("run punch")
            })
        })
        .collect();

    let outputs: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("join punch thread"))
        .collect();

    let successes = outputs.iter().filter(|o| o.status.success()).count();
    assert_eq!(successes, 1);

    for out in outputs.iter().filter(|o| !o.status.success()) {
        assert!(String::from_utf8_lossy(&out.stderr).contains("Already clocked in"));
    }

    let entries = read_entries(&store);
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_open());
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_store_path_is_used_as_given() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join(OsStr::from_bytes(b"clock\xfflog.json"));

    punch().arg("-f").arg(&store).arg("-i").assert().success();

    assert!(store.exists());
    let content = fs::read_to_string(&store).unwrap();
    assert!(content.contains("\"clock_out\": -1"));
}
