//! Parsing of the short-status branch header.
//!
//! `git status -sb` starts with a line such as `## main...origin/main [ahead 1]`.
//! [`parse_tracking`] extracts the branch name and, when present, the upstream it
//! tracks.

use crate::core::error::{GitDeckError, Result};
use crate::core::text::{is_blank, non_blank_lines};
use serde::{Deserialize, Serialize};

const UPSTREAM_SEPARATOR: &str = "...";

/// Branch and upstream named by a short-status header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingInfo {
    pub branch_name: Option<String>,
    pub track_to: Option<String>,
}

/// Parse a short-status header.
///
/// Empty input yields a [`TrackingInfo`] with both fields unset. A header without
/// a second whitespace-delimited token is malformed.
pub fn parse_tracking(raw: &str) -> Result<TrackingInfo> {
    if is_blank(raw) {
        return Ok(TrackingInfo::default());
    }

    let Some((line_no, header)) = non_blank_lines(raw).next() else {
        return Ok(TrackingInfo::default());
    };

    let descriptor = header
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| GitDeckError::malformed(line_no, "status header has no branch token"))?;

    if descriptor.contains(UPSTREAM_SEPARATOR) {
        let mut parts = descriptor
            .split(UPSTREAM_SEPARATOR)
            .filter(|part| !is_blank(part));
        Ok(TrackingInfo {
            branch_name: parts.next().map(str::to_string),
            track_to: parts.next().map(str::to_string),
        })
    } else {
        Ok(TrackingInfo {
            branch_name: Some(descriptor.trim().to_string()),
            track_to: None,
        })
    }
}
