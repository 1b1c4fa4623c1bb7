//! Exit codes and error messages for invalid input and broken state.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tea(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tea").unwrap();
    cmd.current_dir(dir.path())
        .env("TEA_CONFIG", config_file(dir))
        .env("TEA_TEMPLATES_DIR", dir.path().join("templates"))
        .env_remove("RUST_LOG");
    cmd
}

fn config_file(dir: &TempDir) -> PathBuf {
    dir.path().join("config.toml")
}

fn corrupt_config(dir: &TempDir) {
    fs::write(config_file(dir), "LANGUAGE = \n[[[").unwrap();
}

#[test]
fn no_arguments_is_usage_error() {
    let dir = TempDir::new().unwrap();
    tea(&dir).assert().code(2);
}

#[test]
fn missing_name_without_terminal() {
    let dir = TempDir::new().unwrap();

    tea(&dir)
        .args(["new", ".", "-t", "empty"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing required value: project name"))
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn missing_type_without_terminal() {
    let dir = TempDir::new().unwrap();

    tea(&dir)
        .args(["new", ".", "-n", "demo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--type"));
}

#[test]
fn unsupported_type_changes_nothing() {
    let dir = TempDir::new().unwrap();

    tea(&dir)
        .args(["new", ".", "--new", "-n", "demo", "-t", "rust", "-y"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported project type 'rust'"))
        .stderr(predicate::str::contains("tea types"));

    assert!(!dir.path().join("demo").exists());
}

#[test]
fn invalid_project_name() {
    let dir = TempDir::new().unwrap();

    tea(&dir)
        .args(["new", ".", "--new", "-n", ".hidden", "-t", "empty", "-y"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));

    assert!(!dir.path().join(".hidden").exists());
}

#[test]
fn base_path_that_is_a_file_fails_stage() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("occupied"), "x").unwrap();

    tea(&dir)
        .args(["new", "occupied", "-n", "demo", "-t", "empty", "-y"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project directory"));
}

#[test]
fn info_without_manifest_is_not_found() {
    let dir = TempDir::new().unwrap();

    tea(&dir)
        .args(["info", "."])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(".teaproject"));
}

#[test]
fn unknown_config_key() {
    let dir = TempDir::new().unwrap();

    tea(&dir)
        .args(["config", "get", "EDITOR"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown configuration key 'EDITOR'"));
}

#[test]
fn corrupt_config_is_fatal_for_reads() {
    let dir = TempDir::new().unwrap();
    corrupt_config(&dir);

    tea(&dir)
        .args(["config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("corrupt"));
}

#[test]
fn corrupt_config_stops_new_before_any_work() {
    let dir = TempDir::new().unwrap();
    corrupt_config(&dir);

    tea(&dir)
        .args(["new", "-n", "demo", "-t", "empty", "-y"])
        .assert()
        .code(4);

    let before = fs::read_to_string(config_file(&dir)).unwrap();
    assert_eq!(before, "LANGUAGE = \n[[[");
}

#[test]
fn corrupt_config_stops_new_with_explicit_path() {
    let dir = TempDir::new().unwrap();
    corrupt_config(&dir);
    fs::create_dir(dir.path().join("work")).unwrap();

    tea(&dir)
        .args(["new", "work", "--new", "-n", "demo", "-t", "empty", "-y"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("corrupt"));

    assert!(!dir.path().join("work/demo").exists());
}

#[test]
fn invalid_name_is_reported_before_other_inputs() {
    let dir = TempDir::new().unwrap();

    tea(&dir)
        .args(["new", ".", "-n", ".hidden"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"))
        .stderr(predicate::str::contains("--type").not());
}

#[test]
fn corrupt_config_can_still_be_located_and_reset() {
    let dir = TempDir::new().unwrap();
    corrupt_config(&dir);

    tea(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    tea(&dir).args(["config", "reset"]).assert().success();

    tea(&dir)
        .args(["config", "get", "LANGUAGE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AUTO"));
}

#[test]
fn verbose_flag_drops_hint() {
    let dir = TempDir::new().unwrap();

    tea(&dir)
        .args(["-v", "info", "."])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}
