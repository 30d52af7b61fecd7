// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rn_core::{Audience, InvalidStatusIndex, ReportModel};

/// Render a plain-text summary of one report model.
///
/// The internal view lists both audiences' counts per category; the
/// external view lists only its own.
pub fn format_report_summary(model: &ReportModel) -> String {
    let release = model.release();
    let mut lines = vec![
        format!("{} release notes {}", model.audience().title(), release.version),
        format!("Branch: {}", release.branch),
        format!(
            "Range: {}..{} ({} commits)",
            release.commit_tag1, release.commit_tag2, release.commits_count
        ),
    ];

    lines.push("Categories:".to_string());
    let width = model
        .ordered_category_names()
        .iter()
        .map(|name| name.len())
        .max()
        .unwrap_or(0);
    for name in model.ordered_category_names() {
        lines.push(format_category_line(model, name, width));
    }

    let (invalid_count, index) = match model.audience() {
        Audience::Internal => (model.total_invalid_count(), model.invalid_status_index_union()),
        Audience::External => (
            model.invalid_count(Audience::External),
            model.invalid_status_index(Audience::External),
        ),
    };
    lines.push(format!("Invalid issues: {}", invalid_count));
    lines.extend(format_status_lines(&index));

    lines.push(format!("Issues: {} {}", model.unique_keys().len(), model.jql_link()));
    lines.push(format!("Defects: {}", join_or_none(model.unique_defects().iter())));
    lines.push(format!(
        "Known issues: {} {}",
        model.known_issues().len(),
        model.known_issues_jql_link()
    ));
    for (facet, message) in model.errors() {
        lines.push(format!("Error ({}): {}", facet, message));
    }

    lines.join("\n")
}

fn format_category_line(model: &ReportModel, name: &str, width: usize) -> String {
    match model.audience() {
        Audience::Internal => format!(
            "  {:<width$}  {} external, {} internal",
            name,
            model.count_by_category(Audience::External, name),
            model.count_by_category(Audience::Internal, name),
        ),
        Audience::External => format!(
            "  {:<width$}  {}",
            name,
            model.count_by_category(Audience::External, name),
        ),
    }
}

/// One line per status of the invalid-by-status issues, keys sorted.
fn format_status_lines(index: &InvalidStatusIndex<'_>) -> Vec<String> {
    index
        .statuses_present()
        .into_iter()
        .map(|status| {
            let keys = index
                .entries_by_status(status)
                .into_iter()
                .map(|entry| entry.key());
            format!("  {}: {}", status, join_or_none(keys))
        })
        .collect()
}

fn join_or_none<I, S>(items: I) -> String
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let joined = items
        .map(|item| item.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
