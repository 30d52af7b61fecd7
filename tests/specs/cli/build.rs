// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build command specs.
//!
//! - writes the internal report, and the external one when client facing
//! - honors --out, --config and release_version
//! - reports configuration and snapshot problems with exit code 1

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use common::*;

// =============================================================================
// Successful builds
// =============================================================================

#[test]
fn build_writes_internal_report() {
    let temp = project("");

    relnotes(temp.path())
        .args(["build", "snapshot.json"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Internal release notes 1.2.0"))
        .stdout(predicate::str::contains("Wrote "));

    let out = temp.path().join("out");
    assert!(out.join("1_2_0_INTERNAL.json").exists());
    assert!(!out.join("1_2_0.json").exists());
}

#[test]
fn build_client_facing_writes_both_reports() {
    let temp = project("client_facing = true");

    relnotes(temp.path())
        .args(["build", "snapshot.json"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Internal release notes 1.2.0"))
        .stdout(predicate::str::contains("External release notes 1.2.0"));

    let external = read_json(temp.path().join("out/1_2_0.json"));
    assert_eq!(external["model"]["audience"], "external");
    assert_eq!(
        external["model"]["unique_keys"],
        serde_json::json!(["PROJ-1", "PROJ-4"])
    );
    assert_eq!(
        external["model"]["internal_issues_by_category"],
        serde_json::json!({})
    );
}

#[test]
fn build_internal_model_content() {
    let temp = project("known_issues = 'project = PROJ AND status = \"Open\"'");

    relnotes(temp.path())
        .args(["build", "snapshot.json"])
        .current_dir(temp.path())
        .assert()
        .success();

    let report = read_json(temp.path().join("out/1_2_0_INTERNAL.json"));
    let model = &report["model"];
    assert_eq!(
        model["unique_keys"],
        serde_json::json!(["PROJ-1", "PROJ-2", "PROJ-3", "PROJ-4"])
    );
    assert_eq!(
        model["unique_defects"],
        serde_json::json!(["Defect_7", "Defect_9"])
    );
    assert_eq!(
        model["ordered_category_names"],
        serde_json::json!(["InvalidByStatus", "Bug", "Feature"])
    );
    assert_eq!(
        model["jql_link"],
        "https://jira.example.com/issues/?jql=id%20in%20(PROJ-1%2C%20PROJ-2%2C%20PROJ-3%2C%20PROJ-4)"
    );
    assert_eq!(
        model["known_issues_jql_link"],
        "https://jira.example.com/issues/?jql=project%20=%20PROJ%20AND%20status%20=%20%22Open%22"
    );
}

#[test]
fn build_json_output_lists_written_reports() {
    let temp = project("client_facing = true");

    let output = relnotes(temp.path())
        .args(["build", "snapshot.json", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let written: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let written = written.as_array().unwrap();
    assert_eq!(written.len(), 2);
    assert_eq!(written[0]["audience"], "internal");
    assert!(written[0]["path"]
        .as_str()
        .unwrap()
        .ends_with("1_2_0_INTERNAL.json"));
    assert_eq!(written[1]["audience"], "external");
}

#[test]
fn build_out_flag_overrides_report_directory() {
    let temp = project("");

    relnotes(temp.path())
        .args(["build", "snapshot.json", "--out", "elsewhere"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("elsewhere/1_2_0_INTERNAL.json").exists());
    assert!(!temp.path().join("out").exists());
}

#[test]
fn build_release_version_override() {
    let temp = project("release_version = \"1.2.1\"");

    relnotes(temp.path())
        .args(["build", "snapshot.json"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Internal release notes 1.2.1"));

    assert!(temp.path().join("out/1_2_1_INTERNAL.json").exists());
}

#[test]
fn build_explicit_config_path() {
    let temp = project("");
    std::fs::write(
        temp.path().join("ci.toml"),
        "jira_url = \"https://ci.example.com\"\nreport_directory = \"ci-out\"\n",
    )
    .unwrap();

    relnotes(temp.path())
        .args(["build", "snapshot.json", "--config", "ci.toml"])
        .current_dir(temp.path())
        .assert()
        .success();

    let report = read_json(temp.path().join("ci-out/1_2_0_INTERNAL.json"));
    assert!(report["model"]["jql_link"]
        .as_str()
        .unwrap()
        .starts_with("https://ci.example.com/issues/"));
}

// dirs resolves the user config dir from XDG_CONFIG_HOME on Linux only.
#[cfg(target_os = "linux")]
#[test]
fn build_uses_user_config_dir() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("snapshot.json"), SNAPSHOT).unwrap();
    let user_dir = temp.path().join(".config/relnotes");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        "jira_url = \"https://jira.example.com\"\nreport_directory = \"user-out\"\n",
    )
    .unwrap();

    relnotes(temp.path())
        .args(["build", "snapshot.json"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("user-out/1_2_0_INTERNAL.json").exists());
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn build_without_config_fails_with_hint() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("snapshot.json"), SNAPSHOT).unwrap();

    relnotes(temp.path())
        .args(["build", "snapshot.json"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: no configuration found"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn build_missing_snapshot_fails() {
    let temp = project("");

    relnotes(temp.path())
        .args(["build", "absent.json"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("snapshot not found"));
}

#[test]
fn build_incomplete_snapshot_lists_missing_fields() {
    let temp = project("");
    std::fs::write(temp.path().join("partial.json"), r#"{ "category_names": [] }"#).unwrap();

    relnotes(temp.path())
        .args(["build", "partial.json"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "external, commits, known_issues, release, errors",
        ));
}

#[test]
fn build_rejects_issues_under_error_only_key() {
    let temp = project("");
    let snapshot = SNAPSHOT.replace("\"Feature\": [", "\"Generic\": [");
    std::fs::write(temp.path().join("bad.json"), snapshot).unwrap();

    relnotes(temp.path())
        .args(["build", "bad.json"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Generic"));

    assert!(!temp.path().join("out").exists());
}

#[test]
fn build_blank_jira_url_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("snapshot.json"), SNAPSHOT).unwrap();
    std::fs::write(temp.path().join("relnotes.toml"), "jira_url = \"\"\n").unwrap();

    relnotes(temp.path())
        .args(["build", "snapshot.json"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("jira_url is required"));
}
