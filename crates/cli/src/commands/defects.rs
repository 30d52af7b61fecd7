// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::BTreeSet;
use std::io::{self, Read};

use rn_core::defect::{extract_defect_ids, normalize_defect_id};

use crate::error::Result;

pub fn run(texts: &[String]) -> Result<()> {
    let ids = if texts.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        run_impl(&[input])
    } else {
        run_impl(texts)
    };

    for id in ids {
        println!("{}", id);
    }
    Ok(())
}

/// Normalized defect ids found in `texts`, sorted and without duplicates.
pub(crate) fn run_impl(texts: &[String]) -> BTreeSet<String> {
    texts
        .iter()
        .flat_map(|text| extract_defect_ids(Some(text)))
        .map(|id| normalize_defect_id(&id))
        .collect()
}

#[cfg(test)]
#[path = "defects_tests.rs"]
mod tests;
