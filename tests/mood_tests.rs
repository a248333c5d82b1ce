//! Integration tests for mood commands

#![allow(deprecated)]

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;

mod common;
use common::{init_lounge, lounge_cmd, lounge_in};

fn mood_slot(root: &Path) -> Vec<Value> {
    let content = fs::read_to_string(root.join(".lounge/moods.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_log_mood_with_note() {
    let temp = init_lounge();

    lounge_in(temp.path())
        .args(["mood", "log", "calm", "--note", "tea in the garden"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged 😌 Calm"));

    let moods = mood_slot(temp.path());
    assert_eq!(moods.len(), 1);
    assert_eq!(moods[0]["mood"], "calm");
    assert_eq!(moods[0]["note"], "tea in the garden");
    assert!(moods[0]["timestamp"].is_string());
}

#[test]
fn test_unknown_mood_is_rejected() {
    let temp = init_lounge();

    lounge_in(temp.path())
        .args(["mood", "log", "grumpy"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Valid moods"));

    assert!(!temp.path().join(".lounge/moods.json").exists());
}

#[test]
fn test_history_is_capped_at_thirty() {
    let temp = init_lounge();

    for i in 0..32 {
        lounge_in(temp.path())
            .args(["mood", "log", "happy", "--note", &format!("n{}", i)])
            .assert()
            .success();
    }

    let moods = mood_slot(temp.path());
    assert_eq!(moods.len(), 30);
    assert_eq!(moods[0]["note"], "n31");
    assert_eq!(moods[29]["note"], "n2");
}

#[test]
fn test_history_shows_recent_ten_by_default() {
    let temp = init_lounge();

    for i in 0..12 {
        lounge_in(temp.path())
            .args(["mood", "log", "tired", "--note", &format!("note-{:02}", i)])
            .assert()
            .success();
    }

    lounge_in(temp.path())
        .args(["mood", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("note-11"))
        .stdout(predicate::str::contains("note-02"))
        .stdout(predicate::str::contains("note-01").not());
}

#[test]
fn test_stats() {
    let temp = init_lounge();

    for mood in ["anxious", "happy", "amazing"] {
        lounge_in(temp.path())
            .args(["mood", "log", mood])
            .assert()
            .success();
    }

    lounge_in(temp.path())
        .args(["mood", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moods logged:   3"))
        .stdout(predicate::str::contains("Positive vibes: 67%"))
        .stdout(predicate::str::contains("Current mood:   Amazing"));
}

#[test]
fn test_empty_stats() {
    let temp = init_lounge();

    lounge_in(temp.path())
        .args(["mood", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No moods logged yet"));
}

#[test]
fn test_list_moods() {
    lounge_cmd()
        .args(["mood", "list-moods"])
        .assert()
        .success()
        .stdout(predicate::str::contains("amazing"))
        .stdout(predicate::str::contains("Feeling restless"));
}

#[test]
fn test_history_limit_zero_is_rejected() {
    let temp = init_lounge();

    lounge_in(temp.path())
        .args(["mood", "history", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}
