// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completion command specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn relnotes() -> Command {
    cargo_bin_cmd!("relnotes")
}

// =============================================================================
// Parameterized tests for shell completion generation
// =============================================================================

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_non_empty_output(shell: &str) {
    let output = relnotes().args(["completion", shell]).output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "Completion output should not be empty");
}

#[test]
fn completion_bash_contains_commands() {
    let output = relnotes().args(["completion", "bash"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    for command in ["build", "defects", "completion"] {
        assert!(
            stdout.contains(command),
            "Bash completion should mention '{}'",
            command
        );
    }
}

#[test]
fn completion_zsh_generates_valid_script() {
    relnotes()
        .args(["completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef relnotes"));
}

// =============================================================================
// Error handling
// =============================================================================

#[test]
fn completion_without_shell_fails() {
    relnotes().arg("completion").assert().failure();
}

#[test]
fn completion_invalid_shell_fails() {
    relnotes()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
