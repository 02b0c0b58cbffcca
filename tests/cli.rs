//! Integration tests for top-level CLI behavior.
//!
//! These never need a reachable store: failures under test happen either in
//! argument handling or before the first network round trip.

use std::process::Command;

fn run_idbench(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_idbench");
    Command::new(bin)
        .args(args)
        // An unparseable URI makes connection attempts fail immediately
        // instead of waiting out server selection against localhost.
        .env("MONGODB_URI", "definitely-not-a-mongodb-uri")
        .output()
        .expect("failed to run idbench binary")
}

#[test]
fn help_lists_both_subcommands() {
    let output = run_idbench(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("run"));
    assert!(stdout.contains("ping"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_idbench(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn run_rejects_zero_batch_size_before_connecting() {
    let output = run_idbench(&["run", "--count", "1000", "--batch-size", "0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("batch size"));
}

#[test]
fn run_surfaces_connection_failure() {
    let output = run_idbench(&["run", "--count", "100", "--batch-size", "10"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("cannot connect"));
}

#[test]
fn ping_surfaces_connection_failure() {
    let output = run_idbench(&["ping"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("cannot connect"));
}
