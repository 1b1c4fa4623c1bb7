//! End-to-end tests for the `tea` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Isolated working directory, config file, template root and PATH.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("bin")).unwrap();
        Self { dir }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn config_file(&self) -> PathBuf {
        self.root().join("config").join("config.toml")
    }

    fn templates(&self) -> PathBuf {
        self.root().join("templates")
    }

    fn tea(&self) -> Command {
        let mut cmd = Command::cargo_bin("tea").unwrap();
        cmd.current_dir(self.root())
            .env("TEA_CONFIG", self.config_file())
            .env("TEA_TEMPLATES_DIR", self.templates())
            .env("PATH", self.root().join("bin"))
            .env_remove("RUST_LOG");
        cmd
    }

    fn seed_web_template(&self) {
        let web = self.templates().join("web");
        fs::create_dir_all(web.join("css")).unwrap();
        fs::write(web.join("index.html"), "<h1>hi</h1>").unwrap();
        fs::write(web.join("css").join("style.css"), "body {}").unwrap();
    }

    #[cfg(unix)]
    fn install_fake_uv(&self, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let uv = self.root().join("bin").join("uv");
        fs::write(&uv, format!("#!/bin/sh\n{script}\n")).unwrap();
        fs::set_permissions(&uv, fs::Permissions::from_mode(0o755)).unwrap();
    }
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let sandbox = Sandbox::new();
    sandbox
        .tea()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("types"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_flag() {
    let sandbox = Sandbox::new();
    sandbox
        .tea()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn types_lists_every_project_type() {
    let sandbox = Sandbox::new();
    sandbox
        .tea()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("empty"))
        .stdout(predicate::str::contains("python"))
        .stdout(predicate::str::contains("web"));
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn empty_project_in_new_subdirectory() {
    let sandbox = Sandbox::new();
    let base = sandbox.root().join("x");

    sandbox
        .tea()
        .args(["new", "x", "--new", "-n", "demo", "-t", "empty", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cd "))
        .stdout(predicate::str::contains("code ."));

    let project = base.join("demo");
    let manifest = fs::read_to_string(project.join(".teaproject")).unwrap();
    assert!(manifest.contains("name: demo"));
    assert!(manifest.contains("type: empty"));
    assert!(manifest.contains("description: No description provided."));

    let readme = fs::read_to_string(project.join("README.md")).unwrap();
    assert!(readme.starts_with("# demo"));
    assert!(!readme.contains("{{"));

    let mut entries: Vec<_> = fs::read_dir(&project)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    entries.sort();
    assert_eq!(entries, vec![".teaproject", "README.md"]);
}

#[test]
fn path_without_new_initializes_in_place() {
    let sandbox = Sandbox::new();
    let base = sandbox.root().join("here");
    fs::create_dir_all(&base).unwrap();

    sandbox
        .tea()
        .args(["new", "here", "-n", "demo", "-t", "empty", "-d", "In place", "-y"])
        .assert()
        .success();

    assert!(base.join(".teaproject").is_file());
    assert!(!base.join("demo").exists());
    let readme = fs::read_to_string(base.join("README.md")).unwrap();
    assert!(readme.contains("In place"));
}

#[test]
fn no_path_uses_configured_projects_directory() {
    let sandbox = Sandbox::new();
    let projects = sandbox.root().join("projects");

    sandbox
        .tea()
        .args(["config", "set", "PROJECTS_DIRECTORY"])
        .arg(&projects)
        .assert()
        .success();

    sandbox
        .tea()
        .args(["new", "-n", "demo", "-t", "empty", "-y"])
        .assert()
        .success();

    assert!(projects.join("demo").join(".teaproject").is_file());
}

#[test]
fn python_without_uv_writes_main_py() {
    let sandbox = Sandbox::new();

    sandbox
        .tea()
        .args(["new", ".", "--new", "-n", "py", "-t", "python", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("`uv` not found"));

    let project = sandbox.root().join("py");
    assert!(project.join("main.py").is_file());
    assert!(project.join("README.md").is_file());
    assert!(!project.join("pyproject.toml").exists());
}

#[cfg(unix)]
#[test]
fn python_with_uv_runs_init_then_sync() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_uv(r#"echo "$1" >> calls.log"#);

    sandbox
        .tea()
        .args(["new", ".", "--new", "-n", "py", "-t", "python", "-y"])
        .assert()
        .success();

    let project = sandbox.root().join("py");
    let calls = fs::read_to_string(project.join("calls.log")).unwrap();
    assert_eq!(calls, "init\nsync\n");
    assert!(!project.join("main.py").exists());
}

#[test]
fn web_copies_template_tree() {
    let sandbox = Sandbox::new();
    sandbox.seed_web_template();

    sandbox
        .tea()
        .args(["new", ".", "--new", "-n", "site", "-t", "web", "-y"])
        .assert()
        .success();

    let project = sandbox.root().join("site");
    assert_eq!(
        fs::read_to_string(project.join("index.html")).unwrap(),
        "<h1>hi</h1>"
    );
    assert!(project.join("css").join("style.css").is_file());
    assert!(project.join(".teaproject").is_file());
}

#[test]
fn web_without_template_warns_and_succeeds() {
    let sandbox = Sandbox::new();

    sandbox
        .tea()
        .args(["new", ".", "--new", "-n", "site", "-t", "web", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));

    let project = sandbox.root().join("site");
    assert!(project.join(".teaproject").is_file());
    assert!(!project.join("index.html").exists());
}

#[test]
fn no_readme_flag_skips_readme() {
    let sandbox = Sandbox::new();

    sandbox
        .tea()
        .args(["new", ".", "--new", "-n", "demo", "-t", "empty", "--no-readme", "-y"])
        .assert()
        .success();

    let project = sandbox.root().join("demo");
    assert!(!project.join("README.md").exists());
    let manifest = fs::read_to_string(project.join(".teaproject")).unwrap();
    assert!(manifest.contains("readme: false"));
}

#[test]
fn rerun_overwrites_manifest() {
    let sandbox = Sandbox::new();

    for description in ["first", "second"] {
        sandbox
            .tea()
            .args(["new", ".", "--new", "-n", "demo", "-t", "empty", "-y", "-d"])
            .arg(description)
            .assert()
            .success();
    }

    let manifest = fs::read_to_string(sandbox.root().join("demo").join(".teaproject")).unwrap();
    assert!(manifest.contains("description: second"));
}

#[test]
fn json_output_reports_every_stage() {
    let sandbox = Sandbox::new();

    let output = sandbox
        .tea()
        .args(["--output-format", "json", "new", ".", "--new", "-n", "demo", "-t", "empty"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["success"], true);
    assert_eq!(report["rolled_back"], false);
    let stages: Vec<&str> = report["stages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["stage"].as_str().unwrap())
        .collect();
    assert_eq!(
        stages,
        vec!["resolve-path", "write-manifest", "apply-template", "generate-readme"]
    );
}

#[cfg(unix)]
#[test]
fn failing_uv_reports_failure_and_keeps_directory() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_uv("exit 1");

    sandbox
        .tea()
        .args(["new", ".", "--new", "-n", "py", "-t", "python", "-y"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("uv init"));

    let project = sandbox.root().join("py");
    assert!(project.join(".teaproject").is_file());
    assert!(project.join("README.md").is_file());
}

#[cfg(unix)]
#[test]
fn rollback_removes_fresh_directory() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_uv("exit 1");

    sandbox
        .tea()
        .args(["new", ".", "--new", "-n", "py", "-t", "python", "--rollback", "-y"])
        .assert()
        .code(1);

    assert!(!sandbox.root().join("py").exists());
}

// ── info ──────────────────────────────────────────────────────────────────────

#[test]
fn info_prints_manifest_fields() {
    let sandbox = Sandbox::new();

    sandbox
        .tea()
        .args(["new", ".", "--new", "-n", "demo", "-t", "empty", "-d", "Hello", "-y"])
        .assert()
        .success();

    sandbox
        .tea()
        .args(["info", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("empty"))
        .stdout(predicate::str::contains("Hello"));
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn first_config_read_seeds_the_file() {
    let sandbox = Sandbox::new();
    assert!(!sandbox.config_file().exists());

    sandbox
        .tea()
        .args(["config", "get", "LANGUAGE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AUTO"));

    let content = fs::read_to_string(sandbox.config_file()).unwrap();
    assert!(content.contains("LANGUAGE"));
    assert!(content.contains("PROJECTS_DIRECTORY"));
}

#[test]
fn config_set_then_get() {
    let sandbox = Sandbox::new();

    sandbox
        .tea()
        .args(["config", "set", "LANGUAGE", "de"])
        .assert()
        .success();

    sandbox
        .tea()
        .args(["config", "get", "language"])
        .assert()
        .success()
        .stdout(predicate::str::diff("de\n"));
}

#[test]
fn config_list_shows_both_keys() {
    let sandbox = Sandbox::new();

    sandbox
        .tea()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LANGUAGE = AUTO"))
        .stdout(predicate::str::contains("PROJECTS_DIRECTORY = "));
}

#[test]
fn config_path_prints_location_without_creating_it() {
    let sandbox = Sandbox::new();

    sandbox
        .tea()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    assert!(!sandbox.config_file().exists());
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn bash_completions_mention_binary() {
    let sandbox = Sandbox::new();
    sandbox
        .tea()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tea"));
}
