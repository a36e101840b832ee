//! Line framing for raw git output.
//!
//! Every parser in this crate consumes text produced by a git process. Output may
//! end with any number of blank lines and may use `\r\n` on Windows, so the
//! parsers never split on `'\n'` themselves; they go through these helpers.

/// Split raw output into lines with any trailing `\r` removed.
///
/// Each item carries its 1-based line number so parsers can report where a
/// shape violation happened.
pub fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .map(|(i, line)| (i + 1, line))
}

/// Like [`numbered_lines`] but skipping lines that are empty or whitespace-only.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    numbered_lines(text).filter(|(_, line)| !is_blank(line))
}

/// `true` for empty or whitespace-only text.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
