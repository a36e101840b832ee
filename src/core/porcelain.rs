//! Parser for `git status --porcelain=v1 -b` output.
//!
//! This is the status collaborator's half of the work: it turns raw status text
//! into [`FileStatusSummary`] values and hands back the branch header untouched
//! (apart from normalising the unborn-branch forms) for the tracking parser.

use crate::core::error::{GitDeckError, Result};
use crate::core::state::FileStatusSummary;
use crate::core::text::numbered_lines;

const HEADER_PREFIX: &str = "## ";
const RENAME_ARROW: &str = " -> ";
const UNBORN_PREFIXES: [&str; 2] = ["No commits yet on ", "Initial commit on "];

/// Parsed porcelain status: the branch header line and one entry per file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PorcelainStatus {
    pub branch_header: String,
    pub files: Vec<FileStatusSummary>,
}

pub fn parse_status(output: &str) -> Result<PorcelainStatus> {
    let mut status = PorcelainStatus::default();

    for (line_no, line) in numbered_lines(output) {
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix(HEADER_PREFIX) {
            status.branch_header = normalize_header(header);
            continue;
        }
        status.files.push(parse_entry(line_no, line)?);
    }

    Ok(status)
}

fn normalize_header(header: &str) -> String {
    let branch = UNBORN_PREFIXES
        .iter()
        .find_map(|prefix| header.strip_prefix(prefix))
        .unwrap_or(header);
    format!("{HEADER_PREFIX}{branch}")
}

fn parse_entry(line_no: usize, line: &str) -> Result<FileStatusSummary> {
    let mut chars = line.chars();
    let (Some(x), Some(y), Some(' ')) = (chars.next(), chars.next(), chars.next()) else {
        return Err(GitDeckError::malformed(line_no, "status entry has no XY code"));
    };

    let raw_path = chars.as_str();
    if raw_path.is_empty() {
        return Err(GitDeckError::malformed(line_no, "status entry has no path"));
    }

    let (from, to) = match split_rename(raw_path) {
        Some((from, to)) => (Some(unquote_path(from)), unquote_path(to)),
        None => (None, unquote_path(raw_path)),
    };

    Ok(FileStatusSummary {
        path: to,
        index_status: x,
        working_status: y,
        from,
    })
}

/// Split `from -> to`, respecting quoted paths that may contain the arrow.
fn split_rename(raw: &str) -> Option<(&str, &str)> {
    if raw.starts_with('"') {
        let close = closing_quote(raw)?;
        let rest = &raw[close + 1..];
        return rest
            .strip_prefix(RENAME_ARROW)
            .map(|to| (&raw[..=close], to));
    }
    raw.split_once(RENAME_ARROW)
}

fn closing_quote(raw: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in raw.char_indices().skip(1) {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return Some(i),
            _ => escaped = false,
        }
    }
    None
}

/// Unquote a C-style quoted path as git prints it for special characters.
fn unquote_path(s: &str) -> String {
    let Some(inner) = s.strip_prefix('"').and_then(|s| s.strip_suffix('"')) else {
        return s.to_string();
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        match chars.next() {
            Some('n') => bytes.push(b'\n'),
            Some('t') => bytes.push(b'\t'),
            Some('r') => bytes.push(b'\r'),
            Some('"') => bytes.push(b'"'),
            Some(d) if d.is_digit(8) => {
                let mut value = d.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                bytes.push(value as u8);
            }
            Some(other) => {
                let mut buf = [0u8; 4];
                bytes.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
            None => bytes.push(b'\\'),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
