//! Integration tests for toggle, set and get

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{daymark_cmd, daymark_in};

fn init(temp: &TempDir) {
    daymark_cmd().arg("init").arg(temp.path()).assert().success();
}

#[test]
fn test_toggle_cycles_through_states() {
    let temp = TempDir::new().unwrap();
    init(&temp);

    for expected in ["● marked", "✕ unmarked", "· empty", "● marked"] {
        daymark_in(temp.path())
            .arg("toggle")
            .arg("2025-01-15")
            .assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "Wed 2025-01-15  {}",
                expected
            )));
    }
}

#[test]
fn test_toggle_defaults_to_today() {
    let temp = TempDir::new().unwrap();
    init(&temp);

    daymark_in(temp.path())
        .arg("toggle")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fri 2025-01-17  ● marked"));
}

#[test]
fn test_toggle_relative_references() {
    let temp = TempDir::new().unwrap();
    init(&temp);

    daymark_in(temp.path())
        .arg("toggle")
        .arg("yesterday")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-16"));

    daymark_in(temp.path())
        .arg("toggle")
        .arg("last friday")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-10"));
}

#[test]
fn test_set_and_get() {
    let temp = TempDir::new().unwrap();
    init(&temp);

    daymark_in(temp.path())
        .arg("set")
        .arg("monday")
        .arg("N")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mon 2025-01-13  ✕ unmarked"));

    daymark_in(temp.path())
        .arg("get")
        .arg("2025-01-13")
        .assert()
        .success()
        .stdout(predicate::str::contains("unmarked"));

    daymark_in(temp.path())
        .arg("set")
        .arg("2025-01-13")
        .arg("empty")
        .assert()
        .success();

    daymark_in(temp.path())
        .arg("get")
        .arg("2025-01-13")
        .assert()
        .success()
        .stdout(predicate::str::contains("· empty"));
}

#[test]
fn test_persisted_document_format() {
    let temp = TempDir::new().unwrap();
    init(&temp);

    daymark_in(temp.path())
        .args(["set", "2025-01-17", "marked"])
        .assert()
        .success();
    daymark_in(temp.path())
        .args(["set", "2025-01-16", "unmarked"])
        .assert()
        .success();

    let raw = fs::read_to_string(temp.path().join(".daymark/data/daymark%3Av1.json")).unwrap();
    assert_eq!(
        raw,
        r#"{"version":1,"entries":{"2025-01-16":"N","2025-01-17":"P"}}"#
    );
}

#[test]
fn test_custom_storage_key() {
    let temp = TempDir::new().unwrap();
    init(&temp);

    daymark_cmd()
        .current_dir(temp.path())
        .args(["config", "storage_key", "kpt:v1"])
        .assert()
        .success();

    daymark_in(temp.path())
        .args(["set", "today", "P"])
        .assert()
        .success();

    assert!(temp.path().join(".daymark/data/kpt%3Av1.json").exists());
    assert!(!temp.path().join(".daymark/data/daymark%3Av1.json").exists());
}

#[test]
fn test_invalid_day_reference() {
    let temp = TempDir::new().unwrap();
    init(&temp);

    daymark_in(temp.path())
        .arg("toggle")
        .arg("someday")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid day: 'someday'"));
}

#[test]
fn test_invalid_state() {
    let temp = TempDir::new().unwrap();
    init(&temp);

    daymark_in(temp.path())
        .args(["set", "today", "maybe"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Valid states"));
}

#[test]
fn test_invalid_as_of() {
    let temp = TempDir::new().unwrap();
    init(&temp);

    daymark_cmd()
        .current_dir(temp.path())
        .args(["--as-of", "17-01-2025", "toggle"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}
