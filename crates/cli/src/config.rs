// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report configuration.
//!
//! Configuration is a TOML file with:
//! - `jira_url`: issue-tracker base URL (required)
//! - `known_issues`: raw JQL filter selecting the known issues
//! - `fix_versions`: fix-version labels of the release
//! - `client_facing`: also build the external report
//! - `report_directory`: where reports are written
//! - `release_version`: overrides the version found in the snapshot

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use rn_core::ReportSettings;

use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "relnotes.toml";
const USER_CONFIG_DIR: &str = "relnotes";
const USER_CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_REPORT_DIR: &str = "relnotes-report";

/// Report configuration loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Issue-tracker base URL, e.g. `https://jira.example.com`.
    pub jira_url: String,
    /// Raw JQL filter for issues to list regardless of the commit range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub known_issues: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fix_versions: Vec<String>,
    /// Build the client-facing report next to the internal one.
    #[serde(default)]
    pub client_facing: bool,
    /// Output directory (relative to the working directory or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_version: Option<String>,
}

impl Config {
    /// Creates a config with only the tracker URL set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldRequired`] if `jira_url` is blank.
    pub fn new(jira_url: String) -> Result<Self> {
        let config = Config {
            jira_url,
            known_issues: None,
            fix_versions: Vec::new(),
            client_facing: false,
            report_directory: None,
            release_version: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.jira_url.trim().is_empty() {
            return Err(Error::FieldRequired { field: "jira_url" });
        }
        Ok(())
    }

    /// The model-facing subset of the configuration.
    pub fn settings(&self) -> ReportSettings {
        let known_issues = self
            .known_issues
            .as_deref()
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
            .map(str::to_string);
        let fix_versions: BTreeSet<String> = self
            .fix_versions
            .iter()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();

        ReportSettings::new(self.jira_url.trim().to_string())
            .with_known_issues_filter(known_issues)
            .with_fix_versions(fix_versions)
    }

    /// Output directory, defaulting to a directory under the system temp dir.
    pub fn report_directory(&self) -> PathBuf {
        match &self.report_directory {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => std::env::temp_dir().join(DEFAULT_REPORT_DIR),
        }
    }
}

/// Locates the configuration file.
///
/// An explicit path must exist. Otherwise `relnotes.toml` in `cwd` is used,
/// then `relnotes/config.toml` in the user config directory.
pub fn find_config(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(Error::ConfigNotFound {
            searched: path.display().to_string(),
        });
    }

    let mut candidates = vec![cwd.join(CONFIG_FILE_NAME)];
    if let Some(user_path) = user_config_path() {
        candidates.push(user_path);
    }

    if let Some(found) = candidates.iter().find(|path| path.is_file()) {
        return Ok(found.clone());
    }

    Err(Error::ConfigNotFound {
        searched: candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
