// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const SNAPSHOT: &str = r#"{
  "category_names": ["Bug", "Feature", "InvalidByStatus"],
  "external": {
    "Bug": [
      { "issue": { "key": "PROJ-1", "status": "Closed", "summary": "Crash on start" },
        "defect_id": "defect_7",
        "release_notes": "Fixed a crash on start." }
    ],
    "Feature": [
      { "issue": { "key": "PROJ-4", "status": "Done" } }
    ]
  },
  "internal": {
    "Bug": [
      { "issue": { "key": "PROJ-2", "status": "Resolved" } }
    ],
    "InvalidByStatus": [
      { "issue": { "key": "PROJ-3", "status": "Open" }, "status_ok": false }
    ]
  },
  "commits": [
    { "id": "abc123", "message": "Fix crash", "defect_id": "Defect_9, Defect_7" }
  ],
  "known_issues": [
    { "issue": { "key": "PROJ-9", "status": "Open" } }
  ],
  "release": {
    "version": "1.2.0",
    "branch": "main",
    "commit_tag1": { "tag": "v1.1.0" },
    "commit_tag2": { "tag": "v1.2.0" },
    "commits_count": 1
  },
  "errors": {}
}"#;

/// Command for the relnotes binary with an isolated user config directory.
pub fn relnotes(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("relnotes");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Temp dir holding `snapshot.json` and a `relnotes.toml` with `extra` lines.
pub fn project(extra: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("snapshot.json"), SNAPSHOT).unwrap();
    std::fs::write(
        temp.path().join("relnotes.toml"),
        format!(
            "jira_url = \"https://jira.example.com\"\nreport_directory = \"out\"\n{}",
            extra
        ),
    )
    .unwrap();
    temp
}

pub fn read_json(path: PathBuf) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
