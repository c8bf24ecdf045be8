//! Error Handling Tests
//!
//! Failures must print a single `Error:` line and exit with status 1.

use assert_cmd::Command;
use gviz_testing::TestWorld;
use predicates::prelude::*;

#[test]
#[allow(deprecated)]
fn test_missing_file_reports_error() {
    let world = TestWorld::new();
    let mut cmd = Command::cargo_bin("gviz").unwrap();
    world.configure_command(&mut cmd);

    cmd.args(["render", "missing.html"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Failed to load page"));
}

#[test]
#[allow(deprecated)]
fn test_invalid_config_reports_error() {
    let world = TestWorld::new()
        .with_sample_page("log.html")
        .with_config("[layout]\nwidth = \"wide\"\n");
    let mut cmd = Command::cargo_bin("gviz").unwrap();
    world.configure_command(&mut cmd);

    cmd.args(["render", "log.html"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
#[allow(deprecated)]
fn test_show_requires_terminal() {
    let world = TestWorld::new().with_sample_page("log.html");
    let mut cmd = Command::cargo_bin("gviz").unwrap();
    world.configure_command(&mut cmd);

    cmd.args(["show", "log.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
#[allow(deprecated)]
fn test_unknown_format_rejected() {
    let mut cmd = Command::cargo_bin("gviz").unwrap();
    cmd.args(["render", "x.html", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}
