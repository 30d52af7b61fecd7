// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The report model consumed by rendering.
//!
//! A [`ReportModel`] is built once per audience from [`ReportInputs`]. All
//! derived values (unique defects, unique keys and the two search links) are
//! computed in the constructor and never change afterwards.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::category::{
    is_invalid_category, ordered_category_names, CategoryKind, CategoryMapping, ErrorFacet,
    INVALID_BY_FIX_VERSION, INVALID_BY_STATUS,
};
use crate::error::{Error, Result};
use crate::issue::{Audience, CommitEntry, ReleaseInfo, ReportIssueEntry};
use crate::merge::{merge, unique_defects, unique_keys};
use crate::query::{by_keys_link, by_raw_filter_link};
use crate::status_index::InvalidStatusIndex;

static NO_ISSUES: BTreeSet<ReportIssueEntry> = BTreeSet::new();

/// Configuration values the model depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSettings {
    /// Issue-tracker base URL, e.g. `https://jira.example.com`.
    pub jira_url: String,
    /// Raw JQL filter selecting the known issues.
    pub known_issues_filter: Option<String>,
    pub fix_versions: BTreeSet<String>,
}

impl ReportSettings {
    pub fn new(jira_url: String) -> Self {
        ReportSettings {
            jira_url,
            known_issues_filter: None,
            fix_versions: BTreeSet::new(),
        }
    }

    /// Sets the known-issues filter (builder pattern).
    pub fn with_known_issues_filter(mut self, filter: Option<String>) -> Self {
        self.known_issues_filter = filter;
        self
    }

    /// Sets the fix versions (builder pattern).
    pub fn with_fix_versions(mut self, fix_versions: BTreeSet<String>) -> Self {
        self.fix_versions = fix_versions;
        self
    }
}

/// Everything a report model is built from.
#[derive(Debug, Clone)]
pub struct ReportInputs {
    /// Category names in categorizer order.
    pub category_names: Vec<String>,
    pub external: CategoryMapping,
    pub internal: CategoryMapping,
    /// Commits in the release range, in log order.
    pub commits: Vec<CommitEntry>,
    pub known_issues: BTreeSet<ReportIssueEntry>,
    pub release: ReleaseInfo,
    pub settings: ReportSettings,
    /// Error messages from data collection, by facet. Absent means no error.
    pub errors: BTreeMap<ErrorFacet, String>,
}

impl ReportInputs {
    pub fn builder() -> ReportInputsBuilder {
        ReportInputsBuilder::default()
    }
}

/// Collects [`ReportInputs`] piece by piece.
///
/// [`build`](Self::build) reports every missing field at once. The internal
/// mapping is optional and defaults to empty.
#[derive(Debug, Clone, Default)]
pub struct ReportInputsBuilder {
    category_names: Option<Vec<String>>,
    external: Option<CategoryMapping>,
    internal: Option<CategoryMapping>,
    commits: Option<Vec<CommitEntry>>,
    known_issues: Option<BTreeSet<ReportIssueEntry>>,
    release: Option<ReleaseInfo>,
    settings: Option<ReportSettings>,
    errors: Option<BTreeMap<ErrorFacet, String>>,
}

impl ReportInputsBuilder {
    pub fn category_names(mut self, names: Vec<String>) -> Self {
        self.category_names = Some(names);
        self
    }

    pub fn external(mut self, mapping: CategoryMapping) -> Self {
        self.external = Some(mapping);
        self
    }

    pub fn internal(mut self, mapping: CategoryMapping) -> Self {
        self.internal = Some(mapping);
        self
    }

    pub fn commits(mut self, commits: Vec<CommitEntry>) -> Self {
        self.commits = Some(commits);
        self
    }

    pub fn known_issues(mut self, known_issues: BTreeSet<ReportIssueEntry>) -> Self {
        self.known_issues = Some(known_issues);
        self
    }

    pub fn release(mut self, release: ReleaseInfo) -> Self {
        self.release = Some(release);
        self
    }

    pub fn settings(mut self, settings: ReportSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn errors(mut self, errors: BTreeMap<ErrorFacet, String>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Returns the inputs, or [`Error::MissingInput`] naming every unset field.
    pub fn build(self) -> Result<ReportInputs> {
        let mut missing = Vec::new();
        let category_names = require(self.category_names, "category_names", &mut missing);
        let external = require(self.external, "external", &mut missing);
        let commits = require(self.commits, "commits", &mut missing);
        let known_issues = require(self.known_issues, "known_issues", &mut missing);
        let release = require(self.release, "release", &mut missing);
        let settings = require(self.settings, "settings", &mut missing);
        let errors = require(self.errors, "errors", &mut missing);

        match (
            category_names,
            external,
            commits,
            known_issues,
            release,
            settings,
            errors,
        ) {
            (
                Some(category_names),
                Some(external),
                Some(commits),
                Some(known_issues),
                Some(release),
                Some(settings),
                Some(errors),
            ) => Ok(ReportInputs {
                category_names,
                external,
                internal: self.internal.unwrap_or_default(),
                commits,
                known_issues,
                release,
                settings,
                errors,
            }),
            _ => Err(Error::MissingInput { fields: missing }),
        }
    }
}

fn require<T>(value: Option<T>, field: &'static str, missing: &mut Vec<&'static str>) -> Option<T> {
    if value.is_none() {
        missing.push(field);
    }
    value
}

/// Display-ready release notes data for one audience.
#[derive(Debug, Clone, Serialize)]
pub struct ReportModel {
    audience: Audience,
    category_names: Vec<String>,
    ordered_category_names: Vec<String>,
    external_issues_by_category: CategoryMapping,
    internal_issues_by_category: CategoryMapping,
    commits: Vec<CommitEntry>,
    known_issues: BTreeSet<ReportIssueEntry>,
    release: ReleaseInfo,
    settings: ReportSettings,
    errors: BTreeMap<ErrorFacet, String>,
    unique_defects: BTreeSet<String>,
    unique_keys: BTreeSet<String>,
    jql_link: String,
    known_issues_jql_link: String,
}

impl ReportModel {
    /// Builds the model, rejecting structurally wrong inputs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCategory`] if issues are filed under an
    /// error-only key or an empty name, and [`Error::InvalidInput`] for an
    /// empty tracker URL or issue key.
    pub fn new(audience: Audience, inputs: ReportInputs) -> Result<Self> {
        if inputs.settings.jira_url.trim().is_empty() {
            return Err(Error::InvalidInput("issue tracker URL is empty".to_string()));
        }
        validate_mapping(&inputs.external, Audience::External)?;
        validate_mapping(&inputs.internal, Audience::Internal)?;
        if let Some(entry) = inputs.known_issues.iter().find(|e| e.key().trim().is_empty()) {
            return Err(Error::InvalidInput(format!(
                "known issue with empty key (status '{}')",
                entry.status
            )));
        }

        let category_names = dedup_in_order(inputs.category_names);
        let commits = dedup_in_order(inputs.commits);

        let unique_defects = unique_defects(&inputs.external, &inputs.internal, &commits);
        let unique_keys = unique_keys(&merge(&inputs.external, &inputs.internal));
        let jql_link = by_keys_link(&inputs.settings.jira_url, &unique_keys);
        let known_issues_jql_link = by_raw_filter_link(
            &inputs.settings.jira_url,
            inputs.settings.known_issues_filter.as_deref(),
        );

        tracing::debug!(
            %audience,
            categories = category_names.len(),
            keys = unique_keys.len(),
            defects = unique_defects.len(),
            "built report model"
        );

        Ok(ReportModel {
            audience,
            ordered_category_names: ordered_category_names(&category_names),
            category_names,
            external_issues_by_category: inputs.external,
            internal_issues_by_category: inputs.internal,
            commits,
            known_issues: inputs.known_issues,
            release: inputs.release,
            settings: inputs.settings,
            errors: inputs.errors,
            unique_defects,
            unique_keys,
            jql_link,
            known_issues_jql_link,
        })
    }

    pub fn audience(&self) -> Audience {
        self.audience
    }

    /// Category names in categorizer order.
    pub fn category_names(&self) -> &[String] {
        &self.category_names
    }

    /// Category names in display order: pseudo-categories first.
    pub fn ordered_category_names(&self) -> &[String] {
        &self.ordered_category_names
    }

    /// The issue mapping of one audience.
    pub fn issues(&self, audience: Audience) -> &CategoryMapping {
        match audience {
            Audience::External => &self.external_issues_by_category,
            Audience::Internal => &self.internal_issues_by_category,
        }
    }

    /// Issues of one audience in `category`; empty if there are none.
    pub fn issues_by_category(&self, audience: Audience, category: &str) -> &BTreeSet<ReportIssueEntry> {
        self.issues(audience).get(category).unwrap_or(&NO_ISSUES)
    }

    /// Number of issues of one audience in `category`.
    ///
    /// Never fails: unknown categories and error-only keys count as 0.
    pub fn count_by_category(&self, audience: Audience, category: &str) -> usize {
        if CategoryKind::from_name(category).is_error_only() {
            tracing::warn!(category, "error-only key is not an issue category, counting 0");
            return 0;
        }
        match self.issues(audience).get(category) {
            Some(entries) => entries.len(),
            None => {
                tracing::debug!(category, %audience, "no issues in category");
                0
            }
        }
    }

    /// Issues in `category` across both audiences.
    pub fn total_count_by_category(&self, category: &str) -> usize {
        self.count_by_category(Audience::External, category)
            .saturating_add(self.count_by_category(Audience::Internal, category))
    }

    /// Issues of one audience in the invalid pseudo-categories.
    pub fn invalid_count(&self, audience: Audience) -> usize {
        CategoryKind::INVALID
            .iter()
            .map(|kind| self.count_by_category(audience, kind.title()))
            .fold(0, usize::saturating_add)
    }

    pub fn total_invalid_count(&self) -> usize {
        self.invalid_count(Audience::External)
            .saturating_add(self.invalid_count(Audience::Internal))
    }

    pub fn is_invalid_category(&self, category: &str) -> bool {
        is_invalid_category(category)
    }

    pub fn invalid_by_status_category_name(&self) -> &'static str {
        INVALID_BY_STATUS
    }

    pub fn invalid_by_fix_version_category_name(&self) -> &'static str {
        INVALID_BY_FIX_VERSION
    }

    /// Invalid-by-status issues of one audience, indexed by status.
    pub fn invalid_status_index(&self, audience: Audience) -> InvalidStatusIndex<'_> {
        InvalidStatusIndex::new(self.issues_by_category(audience, INVALID_BY_STATUS))
    }

    /// Invalid-by-status issues of both audiences, indexed by status.
    pub fn invalid_status_index_union(&self) -> InvalidStatusIndex<'_> {
        InvalidStatusIndex::new(
            self.issues_by_category(Audience::External, INVALID_BY_STATUS)
                .iter()
                .chain(self.issues_by_category(Audience::Internal, INVALID_BY_STATUS)),
        )
    }

    pub fn commits(&self) -> &[CommitEntry] {
        &self.commits
    }

    pub fn known_issues(&self) -> &BTreeSet<ReportIssueEntry> {
        &self.known_issues
    }

    pub fn known_issues_filter(&self) -> Option<&str> {
        self.settings.known_issues_filter.as_deref()
    }

    pub fn release(&self) -> &ReleaseInfo {
        &self.release
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    pub fn fix_versions(&self) -> &BTreeSet<String> {
        &self.settings.fix_versions
    }

    /// Normalized defect ids from valid categories and commits, sorted.
    pub fn unique_defects(&self) -> &BTreeSet<String> {
        &self.unique_defects
    }

    /// Issue keys across all categories of both audiences, sorted.
    pub fn unique_keys(&self) -> &BTreeSet<String> {
        &self.unique_keys
    }

    /// Search link listing every issue in the report.
    pub fn jql_link(&self) -> &str {
        &self.jql_link
    }

    /// Search link for the configured known-issues filter.
    pub fn known_issues_jql_link(&self) -> &str {
        &self.known_issues_jql_link
    }

    pub fn errors(&self) -> &BTreeMap<ErrorFacet, String> {
        &self.errors
    }

    pub fn error_message(&self, facet: ErrorFacet) -> Option<&str> {
        self.errors.get(&facet).map(String::as_str)
    }

    pub fn known_issues_error(&self) -> Option<&str> {
        self.error_message(ErrorFacet::KnownIssue)
    }

    pub fn fix_version_error(&self) -> Option<&str> {
        self.error_message(ErrorFacet::FixVersion)
    }

    pub fn generic_error(&self) -> Option<&str> {
        self.error_message(ErrorFacet::Generic)
    }
}

/// Rejects issue sets filed under names that can never hold issues.
fn validate_mapping(mapping: &CategoryMapping, audience: Audience) -> Result<()> {
    for (name, entries) in mapping {
        let reason = if name.trim().is_empty() {
            Some("category name is empty")
        } else if CategoryKind::from_name(name).is_error_only() {
            Some("name is reserved for error messages")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(Error::InvalidCategory {
                name: name.clone(),
                audience: audience.to_string(),
                reason: reason.to_string(),
            });
        }
        if entries.iter().any(|e| e.key().trim().is_empty()) {
            return Err(Error::InvalidInput(format!(
                "issue with empty key in {audience} category '{name}'"
            )));
        }
    }
    Ok(())
}

/// Drops repeated values, keeping the first occurrence of each.
fn dedup_in_order<T: Ord + Clone>(items: Vec<T>) -> Vec<T> {
    let mut seen = BTreeSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
