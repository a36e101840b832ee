//! Status data model and the persisted view-model cache.
//!
//! [`FileStatusSummary`] is what the status collaborator reports for one file.
//! [`FileStatusSummaryView`] adds the user-owned `checked`/`active` flags; its
//! `path` is the identity used to carry those flags across refreshes.
//!
//! # Public API
//! - [`FileStatusSummary`]: one file's index/working-tree status codes
//! - [`FileStatusSummaryView`]: the per-file UI projection
//! - [`StatusSnapshot`]: raw result of one status run, before reconciliation
//! - [`StatusSummary`]: the reconciled view of the repository status
//! - [`StateCache`]: JSON cache of the last displayed summary

use crate::core::change_status::ChangeStatus;
use crate::core::error::Result;
use crate::core::reconcile::reconcile;
use crate::core::tracking::parse_tracking;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStatusSummary {
    pub path: String,
    pub index_status: char,
    pub working_status: char,
    /// Original path of a rename or copy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl FileStatusSummary {
    pub fn new(path: impl Into<String>, index_status: char, working_status: char) -> Self {
        Self {
            path: path.into(),
            index_status,
            working_status,
            from: None,
        }
    }

    /// Most significant change for display: untracked, then the index column
    /// when it carries a change, otherwise the working-tree column.
    pub fn change_status(&self) -> ChangeStatus {
        if self.index_status == '?' || self.working_status == '?' {
            ChangeStatus::Untracked
        } else if self.index_status != ' ' {
            ChangeStatus::from_code(self.index_status)
        } else {
            ChangeStatus::from_code(self.working_status)
        }
    }

    /// The two-column `XY` code as git prints it
    pub fn xy(&self) -> String {
        format!("{}{}", self.index_status, self.working_status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStatusSummaryView {
    #[serde(flatten)]
    pub file: FileStatusSummary,
    pub checked: bool,
    pub active: bool,
}

impl FileStatusSummaryView {
    pub fn path(&self) -> &str {
        &self.file.path
    }
}

/// One status run as reported by the collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub files: Vec<FileStatusSummary>,
    pub ahead: usize,
    pub behind: usize,
    pub branch_header: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub files: Vec<FileStatusSummaryView>,
    pub ahead: usize,
    pub behind: usize,
    pub branch_name: Option<String>,
    pub track_to: Option<String>,
}

impl StatusSummary {
    /// Build the next summary from a fresh snapshot, keeping the user's flags
    /// from `previous`.
    pub fn from_snapshot(previous: &[FileStatusSummaryView], snapshot: StatusSnapshot) -> Result<Self> {
        let tracking = parse_tracking(&snapshot.branch_header)?;
        Ok(Self {
            files: reconcile(previous, snapshot.files),
            ahead: snapshot.ahead,
            behind: snapshot.behind,
            branch_name: tracking.branch_name,
            track_to: tracking.track_to,
        })
    }

    pub fn checked_paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().filter(|f| f.checked).map(|f| f.path())
    }

    pub fn active_file(&self) -> Option<&FileStatusSummaryView> {
        self.files.iter().find(|f| f.active)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateCache {
    pub summary: StatusSummary,
    pub last_updated: DateTime<Utc>,
    pub repo_path: PathBuf,
}

impl StateCache {
    pub fn new(repo_path: PathBuf, summary: StatusSummary) -> Self {
        Self {
            summary,
            last_updated: Utc::now(),
            repo_path,
        }
    }
}
