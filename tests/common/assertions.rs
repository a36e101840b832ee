//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

pub fn no_cached_status() -> impl Predicate<str> {
    predicates::str::contains("No cached status found")
}

pub fn has_branch_info() -> impl Predicate<str> {
    predicates::str::contains("Branch:")
}

/// Checks for a numbered file line, e.g. `[2]`
pub fn has_file_index(index: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}]", index))
}

/// Checks for one file line with its checkbox state
pub fn has_file_line(index: u32, checked: bool, path: &str) -> impl Predicate<str> {
    let check = if checked { "[x]" } else { "[ ]" };
    predicates::str::is_match(format!(
        r"(?m)^\[{index}\] {}[ *].. +{}$",
        regex_escape(check),
        regex_escape(path)
    ))
    .expect("valid regex")
}

/// Checks that file `index` carries the active marker
pub fn is_active(index: u32) -> impl Predicate<str> {
    predicates::str::is_match(format!(r"(?m)^\[{index}\] \[[x ]\]\*")).expect("valid regex")
}

fn regex_escape(text: &str) -> String {
    text.chars()
        .flat_map(|c| {
            if "[]().*+?|\\^$".contains(c) {
                vec!['\\', c]
            } else {
                vec![c]
            }
        })
        .collect()
}
