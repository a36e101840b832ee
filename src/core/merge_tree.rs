//! Parsing of three-way `merge-tree` reports.
//!
//! `git merge-tree <base> <ours> <theirs>` computes a merge without touching the
//! working tree. Its report is a sequence of entries, each opened by a context
//! header and followed by blob lines and an inline diff:
//!
//! ```text
//! changed in both
//!   base   100644 f69fbc5c40409a1db7a3f8353bfffe46a21d6054 Info.plist
//!   our    100644 9094f0f7335edf833d51f688851e6a105de60433 Info.plist
//!   their  100644 2dd8bc646cff3869557549a39477e30022e6cfdd Info.plist
//! @@ -17,9 +17,15 @@
//! +<<<<<<< .our
//!  <string>4.0.0</string>
//! +=======
//! +  <string>1.4.16</string>
//! +>>>>>>> .their
//! ```
//!
//! The report is scanned as a fold over lines with an explicit [`ScanState`].
//! Entries are committed when the next header arrives and at end of input.

use crate::core::error::{GitDeckError, Result};
use crate::core::text::{is_blank, non_blank_lines};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static BLOB_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ {2}(\w+)\s+(\d{6})\s+([0-9a-f]{40}) (.+)$").expect("valid regex")
});

const CONFLICT_MARKERS: [&str; 3] = ["+<<<<<<<", "+=======", "+>>>>>>>"];

/// Category of change a merge entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MergeContext {
    Merged,
    AddedInRemote,
    RemovedInRemote,
    ChangedInBoth,
    RemovedInLocal,
    AddedInBoth,
}

impl MergeContext {
    /// Match a whole header line.
    pub fn from_header(line: &str) -> Option<Self> {
        match line {
            "merged" => Some(MergeContext::Merged),
            "added in remote" => Some(MergeContext::AddedInRemote),
            "removed in remote" => Some(MergeContext::RemovedInRemote),
            "changed in both" => Some(MergeContext::ChangedInBoth),
            "removed in local" => Some(MergeContext::RemovedInLocal),
            "added in both" => Some(MergeContext::AddedInBoth),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MergeContext::Merged => "merged",
            MergeContext::AddedInRemote => "added in remote",
            MergeContext::RemovedInRemote => "removed in remote",
            MergeContext::ChangedInBoth => "changed in both",
            MergeContext::RemovedInLocal => "removed in local",
            MergeContext::AddedInBoth => "added in both",
        }
    }
}

impl fmt::Display for MergeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a merge-tree comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobRef {
    pub path: String,
    pub sha: String,
    pub mode: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlobSlot {
    Base,
    Our,
    Their,
    Result,
}

impl BlobSlot {
    fn parse(line_no: usize, token: &str) -> Result<Self> {
        match token {
            "base" => Ok(BlobSlot::Base),
            "our" => Ok(BlobSlot::Our),
            "their" => Ok(BlobSlot::Their),
            "result" => Ok(BlobSlot::Result),
            other => Err(GitDeckError::unknown_blob_kind(line_no, other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeEntry {
    pub context: MergeContext,
    pub base: Option<BlobRef>,
    pub our: Option<BlobRef>,
    pub their: Option<BlobRef>,
    pub result: Option<BlobRef>,
    pub diff: String,
    pub has_conflicts: bool,
}

impl MergeEntry {
    pub fn new(context: MergeContext) -> Self {
        Self {
            context,
            base: None,
            our: None,
            their: None,
            result: None,
            diff: String::new(),
            has_conflicts: false,
        }
    }

    fn attach(&mut self, slot: BlobSlot, blob: BlobRef) {
        let target = match slot {
            BlobSlot::Base => &mut self.base,
            BlobSlot::Our => &mut self.our,
            BlobSlot::Their => &mut self.their,
            BlobSlot::Result => &mut self.result,
        };
        *target = Some(blob);
    }

    fn push_diff_line(&mut self, line: &str) {
        self.diff.push_str(line);
        self.diff.push('\n');
        if CONFLICT_MARKERS.iter().any(|marker| line.starts_with(marker)) {
            self.has_conflicts = true;
        }
    }

    /// The path this entry is about, preferring the merge result.
    pub fn path(&self) -> Option<&str> {
        [&self.result, &self.our, &self.their, &self.base]
            .into_iter()
            .flatten()
            .map(|blob| blob.path.as_str())
            .next()
    }
}

/// Outcome of a merge-tree computation.
///
/// `Conflicts` deliberately drops entry detail; only the count is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeResult {
    Clean { entries: Vec<MergeEntry> },
    Conflicts { conflicted_file_count: usize },
}

impl MergeResult {
    pub fn is_clean(&self) -> bool {
        matches!(self, MergeResult::Clean { .. })
    }
}

/// Where the scan currently stands.
#[derive(Debug)]
enum ScanState {
    /// No header seen yet.
    Start,
    /// A header was seen but no blob line has opened its entry.
    Headed(MergeContext),
    /// An entry is being built.
    Open(MergeEntry),
}

#[derive(Debug)]
struct Scan {
    state: ScanState,
    entries: Vec<MergeEntry>,
}

impl Scan {
    fn new() -> Self {
        Self {
            state: ScanState::Start,
            entries: Vec::new(),
        }
    }

    fn step(mut self, line_no: usize, line: &str) -> Result<Self> {
        if let Some(context) = MergeContext::from_header(line) {
            self.commit();
            self.state = ScanState::Headed(context);
            return Ok(self);
        }

        if let Some(captures) = BLOB_LINE.captures(line) {
            let slot = BlobSlot::parse(line_no, &captures[1])?;
            let blob = BlobRef {
                mode: captures[2].to_string(),
                sha: captures[3].to_string(),
                path: captures[4].to_string(),
            };
            let mut entry = match std::mem::replace(&mut self.state, ScanState::Start) {
                ScanState::Start => {
                    return Err(GitDeckError::malformed(
                        line_no,
                        "blob line appears before any merge-tree header",
                    ))
                }
                ScanState::Headed(context) => MergeEntry::new(context),
                ScanState::Open(entry) => entry,
            };
            entry.attach(slot, blob);
            self.state = ScanState::Open(entry);
            return Ok(self);
        }

        match &mut self.state {
            ScanState::Open(entry) => {
                entry.push_diff_line(line);
                Ok(self)
            }
            ScanState::Start | ScanState::Headed(_) => Err(GitDeckError::malformed(
                line_no,
                "diff content appears before any merge entry is opened",
            )),
        }
    }

    fn commit(&mut self) {
        if let ScanState::Open(entry) = std::mem::replace(&mut self.state, ScanState::Start) {
            self.entries.push(entry);
        }
    }

    fn finish(mut self) -> MergeResult {
        self.commit();
        let conflicted_file_count = self.entries.iter().filter(|e| e.has_conflicts).count();
        if conflicted_file_count > 0 {
            MergeResult::Conflicts {
                conflicted_file_count,
            }
        } else {
            MergeResult::Clean {
                entries: self.entries,
            }
        }
    }
}

/// Parse a merge-tree report.
///
/// Empty input is a vacuous clean merge.
pub fn parse_merge_tree(raw: &str) -> Result<MergeResult> {
    if is_blank(raw) {
        return Ok(MergeResult::Clean {
            entries: Vec::new(),
        });
    }

    non_blank_lines(raw)
        .try_fold(Scan::new(), |scan, (line_no, line)| scan.step(line_no, line))
        .map(Scan::finish)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    const BASE_SHA: &str = "f69fbc5c40409a1db7a3f8353bfffe46a21d6054";
    const OUR_SHA: &str = "9094f0f7335edf833d51f688851e6a105de60433";
    const THEIR_SHA: &str = "2dd8bc646cff3869557549a39477e30022e6cfdd";

    fn conflicted_entry(path: &str) -> String {
        format!(
            "changed in both\n  base   100644 {BASE_SHA} {path}\n  our    100644 {OUR_SHA} {path}\n  their  100644 {THEIR_SHA} {path}\n@@ -1,3 +1,7 @@\n+<<<<<<< .our\n ours\n+=======\n+theirs\n+>>>>>>> .their\n"
        )
    }

    fn added_entry(path: &str) -> String {
        format!("added in remote\n  their  100644 {THEIR_SHA} {path}\n@@ -0,0 +1 @@\n+hello\n")
    }

    #[test]
    fn test_empty_report_is_clean() -> Result<()> {
        assert_eq!(
            parse_merge_tree("")?,
            MergeResult::Clean {
                entries: Vec::new()
            }
        );
        assert!(parse_merge_tree("\n \n")?.is_clean());
        Ok(())
    }

    #[test]
    fn test_clean_report_keeps_entries_in_order() -> Result<()> {
        let raw = format!("{}{}", added_entry("a.txt"), added_entry("b.txt"));
        let MergeResult::Clean { entries } = parse_merge_tree(&raw)? else {
            panic!("expected a clean merge");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].context, MergeContext::AddedInRemote);
        assert_eq!(entries[0].path(), Some("a.txt"));
        assert_eq!(entries[1].path(), Some("b.txt"));
        assert_eq!(entries[0].diff, "@@ -0,0 +1 @@\n+hello\n");
        assert!(!entries[0].has_conflicts);
        Ok(())
    }

    #[test]
    fn test_blob_slots_are_attached() -> Result<()> {
        let raw = format!(
            "merged\n  result 100644 {OUR_SHA} src/lib.rs\n  our    100755 {BASE_SHA} src/lib.rs\n"
        );
        let MergeResult::Clean { entries } = parse_merge_tree(&raw)? else {
            panic!("expected a clean merge");
        };
        let entry = &entries[0];
        assert_eq!(entry.context, MergeContext::Merged);
        let result = entry.result.as_ref().expect("result blob");
        assert_eq!(result.sha, OUR_SHA);
        assert_eq!(result.mode, "100644");
        let our = entry.our.as_ref().expect("our blob");
        assert_eq!(our.mode, "100755");
        assert!(entry.base.is_none());
        assert!(entry.their.is_none());
        assert!(entry.diff.is_empty());
        Ok(())
    }

    #[test]
    fn test_conflicts_count_entries_not_lines() -> Result<()> {
        let raw = format!(
            "{}{}{}",
            conflicted_entry("a.txt"),
            added_entry("new.txt"),
            conflicted_entry("b.txt")
        );
        assert_eq!(
            parse_merge_tree(&raw)?,
            MergeResult::Conflicts {
                conflicted_file_count: 2
            }
        );
        Ok(())
    }

    #[test]
    fn test_header_without_blob_lines_opens_nothing() -> Result<()> {
        let raw = format!("removed in local\n{}", added_entry("x.txt"));
        let MergeResult::Clean { entries } = parse_merge_tree(&raw)? else {
            panic!("expected a clean merge");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].context, MergeContext::AddedInRemote);
        Ok(())
    }

    #[test]
    fn test_crlf_report() -> Result<()> {
        let raw = conflicted_entry("a.txt").replace('\n', "\r\n");
        assert!(!parse_merge_tree(&raw)?.is_clean());
        Ok(())
    }

    #[test]
    fn test_blob_before_header_is_malformed() {
        let raw = format!("  our    100644 {OUR_SHA} a.txt\n");
        let err = parse_merge_tree(&raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_diff_before_entry_is_malformed() {
        let err = parse_merge_tree("changed in both\n@@ -1 +1 @@\n").unwrap_err();
        assert!(matches!(err, GitDeckError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn test_unknown_blob_kind_fails_fast() {
        let raw = format!("merged\n  theirs 100644 {THEIR_SHA} a.txt\n");
        let err = parse_merge_tree(&raw).unwrap_err();
        assert!(matches!(
            err,
            GitDeckError::UnknownBlobKind { line: 2, ref kind } if kind == "theirs"
        ));
    }

    #[test]
    fn test_path_keeps_leading_whitespace() -> Result<()> {
        let raw = format!("added in remote\n  their  100644 {THEIR_SHA}  spaced.txt\n");
        let MergeResult::Clean { entries } = parse_merge_tree(&raw)? else {
            panic!("expected a clean merge");
        };
        let their = entries[0].their.as_ref().map(|blob| blob.path.as_str());
        assert_eq!(their, Some(" spaced.txt"));
        Ok(())
    }

    #[test]
    fn test_context_round_trips_through_header_text() {
        for context in [
            MergeContext::Merged,
            MergeContext::AddedInRemote,
            MergeContext::RemovedInRemote,
            MergeContext::ChangedInBoth,
            MergeContext::RemovedInLocal,
            MergeContext::AddedInBoth,
        ] {
            assert_eq!(MergeContext::from_header(context.as_str()), Some(context));
        }
        assert_eq!(MergeContext::from_header("changed in both "), None);
    }
}
