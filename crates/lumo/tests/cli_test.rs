//! Integration tests for the `lumo` binary.
//!
//! These validate argument parsing, help output, shell completions, the
//! reserved no-op commands, and startup error handling — all without a
//! live lights service.
#![allow(clippy::unwrap_used)]

use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `lumo` binary with env isolation.
///
/// Clears all `LUMO_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn lumo_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("lumo").unwrap();
    cmd.env("HOME", "/tmp/lumo-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/lumo-cli-test-nonexistent")
        .env_remove("LUMO_TOKEN")
        .env_remove("LUMO_API_URL")
        .env_remove("LUMO_OUTPUT")
        .env_remove("LUMO_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = lumo_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    lumo_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("light bulbs")
            .and(predicate::str::contains("list"))
            .and(predicate::str::contains("toggle"))
            .and(predicate::str::contains("bri")),
    );
}

#[test]
fn test_version_flag() {
    lumo_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lumo"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    lumo_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    lumo_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Reserved commands ───────────────────────────────────────────────

// `hue`/`kel`/`sat` are recognized and acknowledged without needing a
// token -- they never construct a request and never fail.

#[test]
fn test_hue_is_acknowledged_noop() {
    lumo_cmd()
        .args(["hue", "d073d5000001", "120"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not implemented"));
}

#[test]
fn test_kel_is_acknowledged_noop() {
    lumo_cmd()
        .args(["kel", "d073d5000001", "3500"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not implemented"));
}

#[test]
fn test_sat_is_acknowledged_noop() {
    lumo_cmd()
        .args(["sat", "d073d5000001", "0.5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not implemented"));
}

#[test]
fn test_quiet_silences_reserved_ack() {
    lumo_cmd()
        .args(["--quiet", "hue"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = lumo_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_list_without_token_is_fatal() {
    let output = lumo_cmd().arg("list").output().unwrap();
    assert_eq!(output.status.code(), Some(3), "Expected auth exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("token"),
        "Expected error mentioning the token:\n{text}"
    );
}

#[test]
fn test_toggle_requires_at_least_one_bulb() {
    let output = lumo_cmd().arg("toggle").output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
}

#[test]
fn test_bri_rejects_non_numeric_value_before_any_request() {
    // The API URL points at a closed local port: if the parse guard ever
    // let the request through, this would fail differently.
    let output = lumo_cmd()
        .args([
            "--token",
            "dummy",
            "--api-url",
            "http://127.0.0.1:9",
            "bri",
            "d073d5000001",
            "abc",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("brightness"),
        "Expected a brightness parse diagnostic:\n{text}"
    );
}

#[test]
fn test_bri_requires_bulb_and_value() {
    let output = lumo_cmd()
        .args(["--token", "dummy", "bri", "d073d5000001"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
}
