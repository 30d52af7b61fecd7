// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Defects command specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use common::*;

#[yare::parameterized(
    comma = { &["Defect_2, Defect_1"], "Defect_1\nDefect_2\n" },
    whitespace = { &["defect_2   DEFECT_1"], "Defect_1\nDefect_2\n" },
    several_args = { &["Defect_1", "defect_1,Defect_3"], "Defect_1\nDefect_3\n" },
    blank = { &["  ,  "], "" },
)]
fn defects_from_arguments(texts: &[&str], expected: &str) {
    let temp = TempDir::new().unwrap();
    relnotes(temp.path())
        .arg("defects")
        .args(texts)
        .assert()
        .success()
        .stdout(expected.to_string());
}

#[test]
fn defects_from_stdin() {
    let temp = TempDir::new().unwrap();
    relnotes(temp.path())
        .arg("defects")
        .write_stdin("Defect_5\ndefect_4, Defect_5\n")
        .assert()
        .success()
        .stdout("Defect_4\nDefect_5\n");
}

#[test]
fn defects_needs_no_config() {
    let temp = TempDir::new().unwrap();
    relnotes(temp.path())
        .args(["defects", "Defect_1"])
        .current_dir(temp.path())
        .assert()
        .success();
}
