//! Integration tests for the `jornada` CLI binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn jornada(save: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jornada").unwrap();
    cmd.arg("--save")
        .arg(save)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn read_save(path: &Path) -> serde_json::Value {
    let text = fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn create_list_and_exit() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("players.json");

    jornada(&save)
        .write_stdin("1\nAna\n4\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana (Vecino, level 1) HP 80/80 joins the roster."))
        .stdout(predicate::str::contains("80/80"))
        .stdout(predicate::str::contains("Progress saved"));

    let value = read_save(&save);
    assert_eq!(value["version"], 1);
    assert_eq!(value["characters"][0]["name"], "Ana");
    assert_eq!(value["characters"][0]["role"], "Vecino");
    assert_eq!(value["characters"][0]["inventory"]["medkit"], 2);
}

#[test]
fn end_of_input_saves() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("players.json");

    jornada(&save).write_stdin("1\nBeto\n2\n").assert().success();

    let value = read_save(&save);
    assert_eq!(value["characters"][0]["name"], "Beto");
    assert_eq!(value["characters"][0]["role"], "Narco");
}

#[test]
fn bad_menu_input_reprompts() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("players.json");

    jornada(&save)
        .write_stdin("9\nabc\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter a number between 1 and 7."))
        .stdout(predicate::str::contains("No characters yet."));
}

#[test]
fn corrupt_save_starts_empty() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("players.json");
    fs::write(&save, "this is not json").unwrap();

    jornada(&save)
        .write_stdin("2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 character(s) loaded."));

    let value = read_save(&save);
    assert_eq!(value["characters"].as_array().unwrap().len(), 0);
}

#[test]
fn rename_and_delete() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("players.json");

    jornada(&save)
        .write_stdin("1\nAna\n1\n1\nBeto\n3\n5\n1\nCarla\n6\n2\n7\n")
        .assert()
        .success();

    let value = read_save(&save);
    let characters = value["characters"].as_array().unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0]["name"], "Carla");
    assert_eq!(characters[0]["role"], "Gobierno");
}

#[test]
fn seeded_campaign_session_progresses() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("players.json");

    // Create a Gobierno, start the campaign, then let input run out: the
    // remaining decisions default to attacking and moving on.
    jornada(&save)
        .args(["--seed", "42"])
        .write_stdin("1\nAna\n1\n3\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chapter 1/12"))
        .stdout(predicate::str::contains("Rival lookouts appears"));

    let value = read_save(&save);
    let ana = &value["characters"][0];
    assert!(ana["chapter"].as_u64().unwrap() >= 1);
    assert!(ana["hp"].as_i64().unwrap() >= 1);
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        let dir = TempDir::new().unwrap();
        let save = dir.path().join("players.json");
        jornada(&save)
            .args(["--seed", "7"])
            .write_stdin("1\nAna\n4\n3\n1\n")
            .assert()
            .success();
        let mut value = read_save(&save);
        value["saved_at"] = serde_json::Value::Null;
        value
    };
    assert_eq!(run(), run());
}
