// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue-tracker search links.
//!
//! Links point at the tracker's issue search page with a URL-encoded JQL
//! query: either `id in (...)` over a set of keys, or a configured raw filter.

const ISSUES_JQL_PATH: &str = "/issues/?jql=";
const JQL_BY_ID_OPEN: &str = "id%20in%20(";
const JQL_BY_ID_CLOSE: &str = ")";
const URL_COMMA: &str = "%2C";
const URL_SPACE: &str = "%20";
const URL_QUOTE: &str = "%22";

/// Search link for `id in (K1, K2, ...)`.
///
/// Keys are joined in the order given. With no keys the `id in ()` clause is
/// omitted and the link carries an empty query.
pub fn by_keys_link<I, S>(base_url: &str, keys: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let keys: Vec<S> = keys.into_iter().collect();
    if keys.is_empty() {
        return issues_url(base_url, "");
    }

    let separator = format!("{URL_COMMA}{URL_SPACE}");
    let joined = keys
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(&separator);
    issues_url(
        base_url,
        &format!("{JQL_BY_ID_OPEN}{joined}{JQL_BY_ID_CLOSE}"),
    )
}

/// Search link for a raw JQL filter such as the configured known issues.
///
/// Only commas, spaces and double quotes are encoded; everything else,
/// including JQL operators, is passed through. A missing or empty filter
/// gives an empty query.
pub fn by_raw_filter_link(base_url: &str, raw_filter: Option<&str>) -> String {
    match raw_filter {
        Some(raw) if !raw.is_empty() => issues_url(base_url, &encode_filter(raw)),
        _ => issues_url(base_url, ""),
    }
}

fn encode_filter(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            ',' => encoded.push_str(URL_COMMA),
            ' ' => encoded.push_str(URL_SPACE),
            '"' => encoded.push_str(URL_QUOTE),
            c => encoded.push(c),
        }
    }
    encoded
}

fn issues_url(base_url: &str, query: &str) -> String {
    format!(
        "{}{ISSUES_JQL_PATH}{query}",
        base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
