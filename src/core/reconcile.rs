//! Merging a fresh status snapshot into the previously displayed view.
//!
//! Files are matched by path. A file the user unchecked stays unchecked and the
//! active file stays active for as long as the path keeps appearing; paths that
//! disappear are dropped and new paths start checked and inactive.

use crate::core::state::{FileStatusSummary, FileStatusSummaryView};
use std::collections::HashMap;

/// Reconcile `fresh` against `previous`.
///
/// Output order follows `fresh`. When `previous` lists a path twice the first
/// occurrence wins.
pub fn reconcile(
    previous: &[FileStatusSummaryView],
    fresh: Vec<FileStatusSummary>,
) -> Vec<FileStatusSummaryView> {
    let mut by_path: HashMap<&str, &FileStatusSummaryView> = HashMap::with_capacity(previous.len());
    for view in previous {
        by_path.entry(view.path()).or_insert(view);
    }

    fresh
        .into_iter()
        .map(|file| {
            let (checked, active) = by_path
                .get(file.path.as_str())
                .map_or((true, false), |prev| (prev.checked, prev.active));
            FileStatusSummaryView {
                file,
                checked,
                active,
            }
        })
        .collect()
}
