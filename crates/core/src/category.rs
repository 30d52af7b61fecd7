// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Category kinds and category-level helpers.
//!
//! Real categories are opaque names chosen by the categorizer. A handful of
//! names are reserved: two pseudo-categories collect issues that failed a
//! validation rule, and three keys only index error messages.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::ReportIssueEntry;

/// Issues grouped by category name, for one audience.
pub type CategoryMapping = BTreeMap<String, BTreeSet<ReportIssueEntry>>;

pub const INVALID_BY_STATUS: &str = "InvalidByStatus";
pub const INVALID_BY_FIX_VERSION: &str = "InvalidByFixVersion";
pub const KNOWN_ISSUE: &str = "KnownIssue";
pub const FIX_VERSION: &str = "FixVersion";
pub const GENERIC: &str = "Generic";

/// What a category name stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    /// A business category produced by the categorizer.
    Real(String),
    /// Issues whose status is not acceptable for the release.
    InvalidByStatus,
    /// Issues whose fix version does not match the release.
    InvalidByFixVersion,
    /// Error-message key for the known-issues lookup.
    KnownIssueError,
    /// Error-message key for the fix-version lookup.
    FixVersionError,
    /// Error-message key for any other failure.
    GenericError,
}

impl CategoryKind {
    /// The two pseudo-categories that hold invalid issues.
    pub const INVALID: [CategoryKind; 2] =
        [CategoryKind::InvalidByStatus, CategoryKind::InvalidByFixVersion];

    /// Classifies a category name.
    pub fn from_name(name: &str) -> Self {
        match name {
            INVALID_BY_STATUS => CategoryKind::InvalidByStatus,
            INVALID_BY_FIX_VERSION => CategoryKind::InvalidByFixVersion,
            KNOWN_ISSUE => CategoryKind::KnownIssueError,
            FIX_VERSION => CategoryKind::FixVersionError,
            GENERIC => CategoryKind::GenericError,
            other => CategoryKind::Real(other.to_string()),
        }
    }

    /// The name used as the mapping key.
    pub fn title(&self) -> &str {
        match self {
            CategoryKind::Real(name) => name,
            CategoryKind::InvalidByStatus => INVALID_BY_STATUS,
            CategoryKind::InvalidByFixVersion => INVALID_BY_FIX_VERSION,
            CategoryKind::KnownIssueError => KNOWN_ISSUE,
            CategoryKind::FixVersionError => FIX_VERSION,
            CategoryKind::GenericError => GENERIC,
        }
    }

    /// False only for the two invalid-issue pseudo-categories.
    pub fn is_valid(&self) -> bool {
        !self.is_pseudo()
    }

    /// True for `InvalidByStatus` and `InvalidByFixVersion`.
    pub fn is_pseudo(&self) -> bool {
        matches!(
            self,
            CategoryKind::InvalidByStatus | CategoryKind::InvalidByFixVersion
        )
    }

    /// True for keys that index error messages and never hold issues.
    pub fn is_error_only(&self) -> bool {
        matches!(
            self,
            CategoryKind::KnownIssueError
                | CategoryKind::FixVersionError
                | CategoryKind::GenericError
        )
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// A facet of data collection that can fail and report an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorFacet {
    KnownIssue,
    FixVersion,
    Generic,
}

impl ErrorFacet {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorFacet::KnownIssue => KNOWN_ISSUE,
            ErrorFacet::FixVersion => FIX_VERSION,
            ErrorFacet::Generic => GENERIC,
        }
    }

    /// The reserved category kind this facet is keyed by.
    pub fn kind(&self) -> CategoryKind {
        match self {
            ErrorFacet::KnownIssue => CategoryKind::KnownIssueError,
            ErrorFacet::FixVersion => CategoryKind::FixVersionError,
            ErrorFacet::Generic => CategoryKind::GenericError,
        }
    }
}

impl fmt::Display for ErrorFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ErrorFacet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            KNOWN_ISSUE => Ok(ErrorFacet::KnownIssue),
            FIX_VERSION => Ok(ErrorFacet::FixVersion),
            GENERIC => Ok(ErrorFacet::Generic),
            _ => Err(Error::InvalidErrorFacet(s.to_string())),
        }
    }
}

/// True when `name` is one of the invalid-issue pseudo-categories.
pub fn is_invalid_category(name: &str) -> bool {
    !CategoryKind::from_name(name).is_valid()
}

/// Copy of `mapping` without the invalid-issue pseudo-categories.
pub fn filter_to_valid_categories(mapping: &CategoryMapping) -> CategoryMapping {
    mapping
        .iter()
        .filter(|(name, _)| !is_invalid_category(name))
        .map(|(name, entries)| (name.clone(), entries.clone()))
        .collect()
}

/// Orders category names for display.
///
/// Each pseudo-category is inserted at the front as it is encountered, so
/// pseudo-categories end up first in reverse encounter order. Real categories
/// follow in their original relative order.
pub fn ordered_category_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ordered = Vec::new();
    for name in names {
        let name = name.as_ref();
        if CategoryKind::from_name(name).is_pseudo() {
            ordered.insert(0, name.to_string());
        } else {
            ordered.push(name.to_string());
        }
    }
    ordered
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
