//! Repository-level status service.
//!
//! [`RepositoryStatus`] ties a [`GitCommands`] collaborator to a [`StatusStore`]:
//! it runs the raw-text commands, feeds their output to the parsers and keeps the
//! reconciled view model that the selection operations act on.

use crate::core::{
    config::Config,
    diff_check::parse_diff_check,
    error::Result,
    file_history::{is_merge_commit, parse_file_history, FileLogEntry},
    git::GitCommands,
    merge_tree::{parse_merge_tree, MergeResult},
    refresh::{RefreshOutcome, StatusStore},
    selection,
    state::StatusSummary,
};
use std::collections::HashSet;

pub struct RepositoryStatus<G: GitCommands> {
    git: G,
    config: Config,
    store: StatusStore,
}

impl<G: GitCommands> RepositoryStatus<G> {
    pub fn new(git: G, config: Config) -> Self {
        Self {
            git,
            config,
            store: StatusStore::new(),
        }
    }

    /// Seed the view model with a previously displayed summary.
    pub fn restore(git: G, config: Config, summary: StatusSummary) -> Self {
        Self {
            git,
            config,
            store: StatusStore::with_summary(summary),
        }
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn summary(&self) -> StatusSummary {
        self.store.summary()
    }

    /// Run status and reconcile it into the view model.
    pub fn refresh(&self) -> Result<RefreshOutcome> {
        let ticket = self.store.begin_refresh();
        let snapshot = self.git.run_status()?;
        self.store.complete_refresh(ticket, snapshot)
    }

    /// Files changed by `commit`; merges are listed against their first parent.
    pub fn files_from_commit(&self, commit: &str) -> Result<Vec<FileLogEntry>> {
        let raw = self.git.run_show(commit, false)?;
        if self.config.first_parent_for_merges && is_merge_commit(&raw) {
            log::debug!("{commit} is a merge commit, listing first-parent changes");
            let first_parent = self.git.run_show(commit, true)?;
            return parse_file_history(&first_parent);
        }
        parse_file_history(&raw)
    }

    /// Compute the result of merging `theirs` into `ours` without touching the
    /// working tree.
    pub fn merge_preview(&self, ours: &str, theirs: &str) -> Result<MergeResult> {
        let base = self.git.merge_base(ours, theirs)?;
        let report = self.git.run_merge_tree(&base, ours, theirs)?;
        parse_merge_tree(&report)
    }

    /// Paths that still contain conflict markers, each listed once.
    pub fn conflicted_files(&self, cached: bool) -> Result<Vec<String>> {
        let report = self.git.run_diff_check(cached)?;
        let mut seen = HashSet::new();
        Ok(parse_diff_check(&report)?
            .into_iter()
            .filter(|path| seen.insert(path.clone()))
            .collect())
    }

    pub fn toggle_checked(&self, index: usize) -> Result<StatusSummary> {
        self.store.apply(|files| selection::toggle_checked(files, index))
    }

    pub fn set_active(&self, index: usize) -> Result<StatusSummary> {
        self.store.apply(|files| selection::set_active(files, index))
    }

    pub fn clear_active(&self) -> Result<StatusSummary> {
        self.store.apply(|files| Ok(selection::clear_active(files)))
    }

    pub fn check_all(&self) -> Result<StatusSummary> {
        self.store.apply(|files| Ok(selection::check_all(files)))
    }

    pub fn uncheck_all(&self) -> Result<StatusSummary> {
        self.store.apply(|files| Ok(selection::uncheck_all(files)))
    }
}
