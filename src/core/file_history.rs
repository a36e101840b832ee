//! Parsing of the files touched by a single commit.
//!
//! Input is `show --name-status` style output: a four-line header block, an
//! optional indented subject line, then one `<code> <path>` line per file.
//!
//! ```text
//! commit 3f2a9c1...
//! Author: Jane Doe <jane@example.com>
//! Date:   Mon Jan 1 10:00:00 2024 +0000
//! Parents: 91bc2e0...
//!     Fix the frobnicator
//! M\tsrc/frob.rs
//! A\tsrc/frob/tests.rs
//! ```

use crate::core::change_status::ChangeStatus;
use crate::core::error::{GitDeckError, Result};
use crate::core::text::{is_blank, non_blank_lines};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const HEADER_LINES: usize = 4;

static SUBJECT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ {4}\w").expect("valid regex"));

static MERGE_PARENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:Merge|Parents):[ \t]+\S+[ \t]+\S+").expect("valid regex"));

/// One file changed by a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLogEntry {
    pub path: String,
    pub status: ChangeStatus,
}

/// Parse the changed-file list of one commit.
///
/// The same line format applies to merge commits; callers that want a useful
/// list for a merge must have asked git for first-parent output.
pub fn parse_file_history(raw: &str) -> Result<Vec<FileLogEntry>> {
    if is_blank(raw) {
        return Ok(Vec::new());
    }

    let mut rows = non_blank_lines(raw).skip(HEADER_LINES).peekable();

    if rows
        .peek()
        .is_some_and(|(_, line)| SUBJECT_LINE.is_match(line))
    {
        rows.next();
    }

    rows.map(|(line_no, line)| parse_entry(line_no, line))
        .collect()
}

fn parse_entry(line_no: usize, line: &str) -> Result<FileLogEntry> {
    let code = line
        .chars()
        .next()
        .ok_or_else(|| GitDeckError::malformed(line_no, "empty file entry"))?;

    // Separator is a tab from git, or a run of spaces in hand-rendered lists.
    let path = line[code.len_utf8()..].trim_start();
    if path.is_empty() {
        return Err(GitDeckError::malformed(line_no, "file entry has no path"));
    }

    Ok(FileLogEntry {
        path: path.to_string(),
        status: ChangeStatus::from_code(code),
    })
}

/// Whether rendered `show` output describes a commit with more than one parent.
pub fn is_merge_commit(raw: &str) -> bool {
    MERGE_PARENTS.is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    const SHA: &str = "3f2a9c1d0e4b5a6978877665544332211aabbccd";

    fn show_output(subject: Option<&str>, files: &[&str]) -> String {
        let mut text = format!(
            "commit {SHA}\nAuthor: Jane Doe <jane@example.com>\nDate:   Mon Jan 1 10:00:00 2024 +0000\nParents: 91bc2e0\n\n"
        );
        if let Some(subject) = subject {
            text.push_str(&format!("    {subject}\n\n"));
        }
        for file in files {
            text.push_str(file);
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_header_body_and_two_files() -> Result<()> {
        let raw = show_output(Some("Add frobnicator"), &["M  src/x.ts", "A  src/y.ts"]);
        let entries = parse_file_history(&raw)?;
        assert_eq!(
            entries,
            vec![
                FileLogEntry {
                    path: "src/x.ts".to_string(),
                    status: ChangeStatus::Modified
                },
                FileLogEntry {
                    path: "src/y.ts".to_string(),
                    status: ChangeStatus::Added
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_separator_width_does_not_leak_into_path() -> Result<()> {
        let raw = show_output(None, &["M   wide/gap.rs", "A\tdir/my file.rs", "D \t mixed.txt"]);
        let entries = parse_file_history(&raw)?;
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["wide/gap.rs", "dir/my file.rs", "mixed.txt"]);
        assert_eq!(entries[1].status, ChangeStatus::Added);
        Ok(())
    }

    #[test]
    fn test_code_followed_by_whitespace_only_is_malformed() {
        let raw = show_output(Some("Subject"), &["M  \t "]);
        let err = parse_file_history(&raw).unwrap_err();
        assert!(matches!(err, GitDeckError::MalformedInput { .. }));
    }

    #[test]
    fn test_without_subject_line() -> Result<()> {
        let raw = show_output(None, &["D\tgone.txt", "R\trenamed.txt"]);
        let entries = parse_file_history(&raw)?;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "gone.txt");
        assert_eq!(entries[0].status, ChangeStatus::Deleted);
        assert_eq!(entries[1].status, ChangeStatus::Renamed);
        Ok(())
    }

    #[test]
    fn test_unknown_code_is_kept() -> Result<()> {
        let raw = show_output(Some("Chmod"), &["T\tscript.sh"]);
        let entries = parse_file_history(&raw)?;
        assert_eq!(entries[0].status, ChangeStatus::Other('T'));
        Ok(())
    }

    #[test]
    fn test_empty_input() -> Result<()> {
        assert!(parse_file_history("")?.is_empty());
        assert!(parse_file_history("\n  \n")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_header_only() -> Result<()> {
        let raw = show_output(Some("Empty commit"), &[]);
        assert!(parse_file_history(&raw)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_entry_without_path_is_malformed() {
        let raw = show_output(Some("Subject"), &["M"]);
        let err = parse_file_history(&raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_merge_detection() {
        let merge = "commit abc\nMerge: 1111111 2222222\nAuthor: A <a@b>\n";
        let parents = "commit abc\nAuthor: A <a@b>\nDate: now\nParents: 1111111 2222222\n";
        let single = "commit abc\nAuthor: A <a@b>\nDate: now\nParents: 1111111\n";
        assert!(is_merge_commit(merge));
        assert!(is_merge_commit(parents));
        assert!(!is_merge_commit(single));
        assert!(!is_merge_commit(""));
    }
}
