// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input types for report construction.
//!
//! This module contains the records handed over by the collectors: Issue,
//! ReportIssueEntry, CommitEntry, CommitTag and ReleaseInfo, plus the
//! Audience a report is built for.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::defect::extract_defect_ids;
use crate::error::{Error, Result};

/// Who a report is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    /// Full detail, for the team shipping the release.
    Internal,
    /// Client-facing subset.
    External,
}

impl Audience {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Internal => "internal",
            Audience::External => "external",
        }
    }

    /// Returns the human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Audience::Internal => "Internal",
            Audience::External => "External",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Audience {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "internal" => Ok(Audience::Internal),
            "external" => Ok(Audience::External),
            _ => Err(Error::InvalidAudience(s.to_string())),
        }
    }
}

/// An issue as fetched from the tracker.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Issue {
    /// Tracker key (e.g. `PROJ-12`).
    pub key: String,
    /// Workflow status as named by the tracker.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
    /// Other tracker fields, passed through untouched.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

impl Issue {
    /// Creates an issue with no summary, type or extra fields.
    pub fn new(key: String, status: String) -> Self {
        Issue {
            key,
            status,
            summary: None,
            issue_type: None,
            fields: BTreeMap::new(),
        }
    }
}

/// An issue as it appears in the release notes.
///
/// Equality, ordering and hashing are by value, so two entries built from the
/// same data collapse into one inside a set. Defect ids are extracted from the
/// raw `defect_id` text once, at construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawReportIssueEntry")]
pub struct ReportIssueEntry {
    pub issue: Issue,
    #[serde(skip_serializing_if = "Option::is_none")]
    defect_id: Option<String>,
    defect_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_in_version: Option<String>,
    pub fix_versions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_of_change: Option<String>,
    pub pull_request_ids: BTreeSet<String>,
    pub status_ok: bool,
    /// Copy of `issue.status`, kept for templates.
    pub status: String,
}

impl ReportIssueEntry {
    /// Creates an entry for `issue`, extracting defect ids from `defect_id`.
    pub fn new(issue: Issue, defect_id: Option<String>) -> Self {
        let defect_ids = extract_defect_ids(defect_id.as_deref());
        let status = issue.status.clone();
        ReportIssueEntry {
            issue,
            defect_id,
            defect_ids,
            release_notes: None,
            url: None,
            fixed_in_version: None,
            fix_versions: Vec::new(),
            impact: None,
            details_of_change: None,
            pull_request_ids: BTreeSet::new(),
            status_ok: true,
            status,
        }
    }

    /// Sets the release notes text (builder pattern).
    pub fn with_release_notes(mut self, release_notes: Option<String>) -> Self {
        self.release_notes = release_notes;
        self
    }

    /// Sets the reference URL (builder pattern).
    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    /// Sets the fixed-in version and fix-version labels (builder pattern).
    pub fn with_versions(mut self, fixed_in: Option<String>, fix_versions: Vec<String>) -> Self {
        self.fixed_in_version = fixed_in;
        self.fix_versions = fix_versions;
        self
    }

    /// Sets the impact and details-of-change texts (builder pattern).
    pub fn with_change_details(mut self, impact: Option<String>, details: Option<String>) -> Self {
        self.impact = impact;
        self.details_of_change = details;
        self
    }

    /// Sets the pull request ids (builder pattern).
    pub fn with_pull_request_ids(mut self, ids: BTreeSet<String>) -> Self {
        self.pull_request_ids = ids;
        self
    }

    /// Sets the status-OK flag (builder pattern).
    pub fn with_status_ok(mut self, status_ok: bool) -> Self {
        self.status_ok = status_ok;
        self
    }

    /// Raw defect-id text as received.
    pub fn defect_id(&self) -> Option<&str> {
        self.defect_id.as_deref()
    }

    /// Defect ids extracted from the raw text, in order of appearance.
    pub fn defect_ids(&self) -> &[String] {
        &self.defect_ids
    }

    pub fn key(&self) -> &str {
        &self.issue.key
    }
}

#[derive(Deserialize)]
struct RawReportIssueEntry {
    issue: Issue,
    #[serde(default)]
    defect_id: Option<String>,
    #[serde(default)]
    release_notes: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    fixed_in_version: Option<String>,
    #[serde(default)]
    fix_versions: Vec<String>,
    #[serde(default)]
    impact: Option<String>,
    #[serde(default)]
    details_of_change: Option<String>,
    #[serde(default)]
    pull_request_ids: BTreeSet<String>,
    #[serde(default = "default_status_ok")]
    status_ok: bool,
    #[serde(default)]
    status: Option<String>,
}

fn default_status_ok() -> bool {
    true
}

impl From<RawReportIssueEntry> for ReportIssueEntry {
    fn from(raw: RawReportIssueEntry) -> Self {
        let mut entry = ReportIssueEntry::new(raw.issue, raw.defect_id)
            .with_release_notes(raw.release_notes)
            .with_url(raw.url)
            .with_versions(raw.fixed_in_version, raw.fix_versions)
            .with_change_details(raw.impact, raw.details_of_change)
            .with_pull_request_ids(raw.pull_request_ids)
            .with_status_ok(raw.status_ok);
        if let Some(status) = raw.status {
            entry.status = status;
        }
        entry
    }
}

/// A commit in the release range, with the defect ids its message refers to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawCommitEntry")]
pub struct CommitEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub message: String,
    defect_ids: Vec<String>,
}

impl CommitEntry {
    /// Creates a commit entry, extracting defect ids from `defect_id`.
    pub fn new(id: Option<String>, message: String, defect_id: Option<&str>) -> Self {
        CommitEntry {
            id,
            message,
            defect_ids: extract_defect_ids(defect_id),
        }
    }

    pub fn defect_ids(&self) -> &[String] {
        &self.defect_ids
    }
}

#[derive(Deserialize)]
struct RawCommitEntry {
    #[serde(default)]
    id: Option<String>,
    message: String,
    #[serde(default)]
    defect_id: Option<String>,
}

impl From<RawCommitEntry> for CommitEntry {
    fn from(raw: RawCommitEntry) -> Self {
        CommitEntry::new(raw.id, raw.message, raw.defect_id.as_deref())
    }
}

/// One end of the commit range a release covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitTag {
    #[serde(default)]
    pub commit_id: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

impl CommitTag {
    pub fn new(commit_id: Option<String>, tag: Option<String>) -> Self {
        CommitTag { commit_id, tag }
    }
}

impl fmt::Display for CommitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.tag, &self.commit_id) {
            (Some(tag), _) => write!(f, "{tag}"),
            (None, Some(id)) => write!(f, "{id}"),
            (None, None) => write!(f, "-"),
        }
    }
}

/// Version-control metadata for the release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    pub version: String,
    pub branch: String,
    pub commit_tag1: CommitTag,
    pub commit_tag2: CommitTag,
    pub commits_count: usize,
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
