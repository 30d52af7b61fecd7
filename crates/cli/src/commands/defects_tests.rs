// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_normalizes_and_dedups() {
    let ids = run_impl(&texts(&["defect_3, DEFECT_1", "Defect_3\tdefect_2"]));
    assert_eq!(
        ids.into_iter().collect::<Vec<_>>(),
        ["Defect_1", "Defect_2", "Defect_3"]
    );
}

#[test]
fn test_blank_text_yields_nothing() {
    assert!(run_impl(&texts(&["", " , "])).is_empty());
}

#[test]
fn test_multiline_input() {
    let ids = run_impl(&texts(&["Defect_10\nDefect_11\n"]));
    assert_eq!(ids.len(), 2);
}
