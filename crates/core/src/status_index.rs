// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Index of invalid-by-status issues by their status value.

use std::collections::BTreeSet;

use crate::issue::ReportIssueEntry;

/// Groups the entries of the `InvalidByStatus` pseudo-category by status.
///
/// An index over no entries answers every query with an empty set.
#[derive(Debug, Clone, Default)]
pub struct InvalidStatusIndex<'a> {
    entries: BTreeSet<&'a ReportIssueEntry>,
}

impl<'a> InvalidStatusIndex<'a> {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a ReportIssueEntry>,
    {
        InvalidStatusIndex {
            entries: entries.into_iter().collect(),
        }
    }

    /// Distinct status values, with case as stored.
    pub fn statuses_present(&self) -> BTreeSet<&'a str> {
        self.entries.iter().map(|e| e.status.as_str()).collect()
    }

    /// Entries whose status matches `status`, ignoring case.
    pub fn entries_by_status(&self, status: &str) -> BTreeSet<&'a ReportIssueEntry> {
        let wanted = status.to_lowercase();
        self.entries
            .iter()
            .copied()
            .filter(|e| e.status.to_lowercase() == wanted)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "status_index_tests.rs"]
mod tests;
