// Integration tests for the risk-lab CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and side effects.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Builds a Command for the risk-lab binary with an isolated HOME so a
/// user-global config never leaks into the run.
fn risk_lab(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("risk-lab").expect("binary should exist");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_version_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    risk_lab(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("risk-lab"));
}

#[test]
fn cli_help_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    risk_lab(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("color risk scoring"));
}

#[test]
fn check_accepts_builtin_config() {
    let home = TempDir::new().expect("temp dir should be created");
    risk_lab(&home)
        .arg("check")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "config ok: 12 attributes, 5 rules, A <= 34, B <= 64",
        ));
}

#[test]
fn options_lists_catalog_with_weights() {
    let home = TempDir::new().expect("temp dir should be created");
    risk_lab(&home)
        .arg("options")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("CCT (Lighting, weight 0.30)"))
        .stdout(predicate::str::contains("Area_Size (bonus only)"))
        .stdout(predicate::str::contains("Fabric"));
}

#[test]
fn verbose_and_quiet_conflict() {
    let home = TempDir::new().expect("temp dir should be created");
    risk_lab(&home)
        .args(["-v", "-q", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn malformed_assignment_is_a_runtime_failure() {
    let home = TempDir::new().expect("temp dir should be created");
    risk_lab(&home)
        .args(["evaluate", "--set", "CRI"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("expected ATTRIBUTE=VALUE"));
}
