//! Behavioral specifications for the verdict CLI.
//!
//! These tests are black-box: they invoke the CLI binary in a scratch
//! project and verify stdout, stderr, and exit codes. Commands that
//! would hand off to the library's node entry points are exercised at
//! the unit level instead, so no node or npm install is required here.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

use prelude::*;

#[test]
fn help_exits_successfully() {
    Project::with_library("4.1.0")
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("verdict"));
}

#[test]
fn help_lists_the_registered_commands() {
    Project::with_library("4.1.0")
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicates::str::contains("init")
                .and(predicates::str::contains("run"))
                .and(predicates::str::contains("serve")),
        );
}

#[test]
fn version_flag_exits_successfully() {
    Project::with_library("4.1.0").cmd().arg("--version").assert().success();
}

#[test]
fn version_command_reports_the_installed_library() {
    Project::with_library("4.1.0")
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicates::str::contains("verdict 4.1.0"));
}

#[test]
fn three_series_library_selects_the_v3_adapter() {
    // The 3.x scaffold lands under tests/, unlike the 4.x one.
    let project = Project::with_library("3.5.0");
    project.cmd().arg("init").assert().success();
    assert!(project.path().join("tests/verdict.json").exists());
    assert!(!project.path().join("verdict.json").exists());
}

#[test]
fn four_series_library_selects_the_v4_adapter() {
    let project = Project::with_library("4.1.0");
    project.cmd().arg("init").assert().success();
    assert!(project.path().join("verdict.json").exists());
}

#[test]
fn prerelease_of_a_supported_series_is_accepted() {
    Project::with_library("4.2.0-beta.3")
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicates::str::contains("4.2.0-beta.3"));
}

#[test]
fn unsupported_version_names_required_and_installed() {
    Project::with_library("2.0.0")
        .cmd()
        .arg("version")
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("2.0.0").and(predicates::str::contains("3.0.0")));
}

#[test]
fn missing_library_prompts_before_failing() {
    Project::empty()
        .cmd()
        .arg("version")
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("Install it now?"));
}

#[test]
fn declined_install_fails_with_manual_instructions() {
    Project::empty()
        .cmd()
        .arg("version")
        .write_stdin("skip\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("npm install verdict"));
}

#[test]
fn init_scaffolds_the_default_browser() {
    let project = Project::with_library("4.1.0");
    project.cmd().arg("init").assert().success();
    let config = std::fs::read_to_string(project.path().join("verdict.json")).unwrap();
    assert!(config.contains("chrome"));
}

#[test]
fn init_scaffolds_the_requested_browser() {
    let project = Project::with_library("4.1.0");
    project
        .cmd()
        .args(["init", "--browser", "firefox"])
        .assert()
        .success();
    let config = std::fs::read_to_string(project.path().join("verdict.json")).unwrap();
    assert!(config.contains("firefox"));
}

#[test]
fn init_refuses_to_overwrite_an_existing_config() {
    let project = Project::with_library("4.1.0");
    project.cmd().arg("init").assert().success();
    project
        .cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists"));
}

#[test]
fn init_rejects_unknown_browsers() {
    Project::with_library("4.1.0")
        .cmd()
        .args(["init", "--browser", "netscape"])
        .assert()
        .failure();
}

#[test]
fn unknown_command_prints_help_and_fails() {
    Project::with_library("4.1.0")
        .cmd()
        .arg("bogus")
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("unknown command: bogus"));
}

#[test]
fn help_for_a_single_command_shows_its_options() {
    Project::with_library("4.1.0")
        .cmd()
        .args(["help", "run"])
        .assert()
        .success()
        .stdout(predicates::str::contains("--suites").and(predicates::str::contains("--config")));
}
