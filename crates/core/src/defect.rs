// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Defect identifier extraction and normalization.
//!
//! Defect ids arrive as free text on issue entries and commits, e.g.
//! `"Defect_123, defect_7 DEFECT_9"`. Extraction splits the text into tokens;
//! normalization maps every spelling of "defect" onto one canonical form so
//! ids can be deduplicated across the whole release.

/// Splits raw defect-id text into tokens.
///
/// Tokens are separated by any run of commas and/or whitespace. Empty tokens
/// are dropped and first-occurrence order is kept. Duplicates are kept too;
/// deduplication happens across the whole dataset later.
pub fn extract_defect_ids(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Canonical form of a defect id: uppercased, with `EFECT` written as `efect`.
///
/// `defect_12`, `DEFECT_12` and `Defect_12` all become `Defect_12`.
/// Applying it twice gives the same result as applying it once.
pub fn normalize_defect_id(token: &str) -> String {
    token.to_uppercase().replace("EFECT", "efect")
}

#[cfg(test)]
#[path = "defect_tests.rs"]
mod tests;
