// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Merging audience mappings and aggregating keys and defect ids.
//!
//! Merge rule: for every category name present in either mapping, the merged
//! set is the value-equality union of both sides. Union is commutative and
//! idempotent, so `merge(a, a) == a`.
//!
//! Unique keys are taken from the unfiltered merge, unique defects from the
//! merge of the validity-filtered mappings.

use std::collections::BTreeSet;

use crate::category::{filter_to_valid_categories, CategoryMapping};
use crate::defect::normalize_defect_id;
use crate::issue::CommitEntry;

/// Unions two category mappings name by name.
pub fn merge(external: &CategoryMapping, internal: &CategoryMapping) -> CategoryMapping {
    let mut merged = external.clone();
    for (name, entries) in internal {
        merged
            .entry(name.clone())
            .or_default()
            .extend(entries.iter().cloned());
    }
    merged
}

/// Every distinct issue key in `merged`, in plain lexicographic order.
///
/// Ordering is not numeric-aware: `PROJ-10` sorts before `PROJ-2`.
pub fn unique_keys(merged: &CategoryMapping) -> BTreeSet<String> {
    merged
        .values()
        .flatten()
        .map(|entry| entry.issue.key.clone())
        .collect()
}

/// Every distinct normalized defect id across valid categories and commits.
pub fn unique_defects<'a, I>(
    external: &CategoryMapping,
    internal: &CategoryMapping,
    commits: I,
) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a CommitEntry>,
{
    let merged = merge(
        &filter_to_valid_categories(external),
        &filter_to_valid_categories(internal),
    );
    let from_issues = merged
        .values()
        .flatten()
        .flat_map(|entry| entry.defect_ids().iter());
    let from_commits = commits
        .into_iter()
        .flat_map(|commit| commit.defect_ids().iter());

    from_issues
        .chain(from_commits)
        .map(|token| normalize_defect_id(token))
        .collect()
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
