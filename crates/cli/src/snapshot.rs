// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot files: the collected tracker and commit data of one release.
//!
//! Every field is optional at the serde level so that a partial snapshot is
//! reported with the full list of missing inputs instead of the first one.

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use rn_core::{
    CategoryMapping, CommitEntry, ErrorFacet, ReleaseInfo, ReportInputs, ReportIssueEntry,
};

use crate::config::Config;
use crate::error::{Error, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    #[serde(default)]
    pub category_names: Option<Vec<String>>,
    #[serde(default)]
    pub external: Option<CategoryMapping>,
    #[serde(default)]
    pub internal: Option<CategoryMapping>,
    #[serde(default)]
    pub commits: Option<Vec<CommitEntry>>,
    #[serde(default)]
    pub known_issues: Option<BTreeSet<ReportIssueEntry>>,
    #[serde(default)]
    pub release: Option<ReleaseInfo>,
    #[serde(default)]
    pub errors: Option<BTreeMap<ErrorFacet, String>>,
}

impl Snapshot {
    /// Reads a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::SnapshotNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;
        serde_json::from_str(&content).map_err(|e| Error::InvalidSnapshot {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Assembles model inputs, taking settings and the version override from `config`.
    pub fn into_inputs(self, config: &Config) -> Result<ReportInputs> {
        let mut builder = ReportInputs::builder().settings(config.settings());

        if let Some(names) = self.category_names {
            builder = builder.category_names(names);
        }
        if let Some(external) = self.external {
            builder = builder.external(external);
        }
        if let Some(internal) = self.internal {
            builder = builder.internal(internal);
        }
        if let Some(commits) = self.commits {
            builder = builder.commits(commits);
        }
        if let Some(known_issues) = self.known_issues {
            builder = builder.known_issues(known_issues);
        }
        if let Some(mut release) = self.release {
            if let Some(version) = &config.release_version {
                tracing::debug!(from = %release.version, to = %version, "overriding release version");
                release.version = version.clone();
            }
            builder = builder.release(release);
        }
        if let Some(errors) = self.errors {
            builder = builder.errors(errors);
        }

        Ok(builder.build()?)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
