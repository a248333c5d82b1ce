//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_lounge, lounge_cmd, lounge_in};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    lounge_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized lounge"));

    assert!(temp.path().join(".lounge").is_dir());

    let content = fs::read_to_string(temp.path().join(".lounge/config.toml")).unwrap();
    assert!(content.contains("default_minutes = 10"));
    assert!(content.contains("sound = true"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = init_lounge();

    lounge_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_config_get_and_set() {
    let temp = init_lounge();

    lounge_in(temp.path())
        .args(["config", "default_minutes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10"));

    lounge_in(temp.path())
        .args(["config", "default_minutes", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set default_minutes = 20"));

    lounge_in(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_minutes = 20"))
        .stdout(predicate::str::contains("sound = true"));
}

#[test]
fn test_config_rejects_out_of_range_minutes() {
    let temp = init_lounge();

    lounge_in(temp.path())
        .args(["config", "default_minutes", "500"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("between 1 and 120"));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = init_lounge();

    lounge_in(temp.path())
        .args(["config", "created", "2020-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_commands_outside_lounge_fail() {
    let temp = TempDir::new().unwrap();

    lounge_in(temp.path())
        .args(["journal", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("lounge init"));
}

#[test]
fn test_lounge_root_env_var() {
    let temp = init_lounge();
    let elsewhere = TempDir::new().unwrap();

    lounge_in(elsewhere.path())
        .env("LOUNGE_ROOT", temp.path())
        .args(["journal", "add", "from afar"])
        .assert()
        .success();

    assert!(temp.path().join(".lounge/journal.json").exists());
}

#[test]
fn test_discovers_root_from_subdirectory() {
    let temp = init_lounge();
    let nested = temp.path().join("notes").join("deep");
    fs::create_dir_all(&nested).unwrap();

    lounge_in(&nested)
        .args(["mood", "log", "calm"])
        .assert()
        .success();

    assert!(temp.path().join(".lounge/moods.json").exists());
}
