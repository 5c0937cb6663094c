//! CLI integration tests for pwd-gauge.
//!
//! Only paths that exit before the report window opens are covered here.

use std::process::Command;

fn pwd_gauge_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pwd-gauge"))
}

#[test]
fn test_cli_help() {
    let output = pwd_gauge_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute pwd-gauge");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pwd-gauge"));
    assert!(stdout.contains("<PASSWORD>"));
}

#[test]
fn test_cli_version() {
    let output = pwd_gauge_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute pwd-gauge");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_missing_password() {
    let output = pwd_gauge_cmd()
        .output()
        .expect("Failed to execute pwd-gauge");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<PASSWORD>"));
    // Fails before scoring starts
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Analyzing"));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    let output = pwd_gauge_cmd()
        .args(["--json", "Password1!"])
        .output()
        .expect("Failed to execute pwd-gauge");

    assert!(!output.status.success());
}
