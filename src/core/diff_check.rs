//! Parsing of `diff --check` reports into the paths that still contain conflict
//! markers.
//!
//! Report lines look like `src/lib.rs:12: leftover conflict marker`. Other
//! whitespace problems git reports (trailing whitespace, blank line at EOF) are
//! not conflicts and are skipped.

use crate::core::error::{GitDeckError, Result};
use crate::core::text::{is_blank, non_blank_lines};
use once_cell::sync::Lazy;
use regex::Regex;

static ROW_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r":\d+:$").expect("valid regex"));

static CONFLICT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)conflict\s+marker").expect("valid regex"));

/// Paths reported as containing leftover conflict markers, in report order.
pub fn parse_diff_check(raw: &str) -> Result<Vec<String>> {
    if is_blank(raw) {
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for (line_no, line) in non_blank_lines(raw) {
        let (locator, message) = line.trim_end().split_once(char::is_whitespace).ok_or_else(|| {
            GitDeckError::malformed(line_no, "diff-check line has no message separator")
        })?;

        if !CONFLICT_MARKER.is_match(message) {
            continue;
        }

        let path = match ROW_SUFFIX.find(locator) {
            Some(suffix) => &locator[..suffix.start()],
            None => locator,
        };
        paths.push(path.to_string());
    }

    Ok(paths)
}
