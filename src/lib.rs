//! git-deck - the parsing and status core of a git client.
//!
//! Turns the raw text git prints (merge-tree reports, `diff --check` output,
//! branch tracking headers, per-commit file lists) into typed values, keeps a
//! view model of the working-tree status that survives refreshes, and offers the
//! selection operations a UI runs against that model.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Parsers: [`parse_merge_tree`], [`parse_diff_check`], [`parse_tracking`],
//!   [`parse_file_history`]
//! - Status view model: [`reconcile`], [`RepositoryStatus`], [`StatusStore`]
//! - Selection: [`core::selection`]
//! - Error handling: [`GitDeckError`], [`Result`]

pub mod commands;
pub mod core;

pub use crate::core::{
    parse_diff_check,
    parse_file_history,
    parse_merge_tree,
    parse_tracking,
    reconcile,
    ChangeStatus,
    Config,
    ErrorKind,
    FileLogEntry,
    FileStatusSummary,
    FileStatusSummaryView,
    GitCommands,
    GitDeckError,
    GitRepo,
    MergeEntry,
    MergeResult,
    RepositoryStatus,
    Result,
    StatusStore,
    StatusSummary,
    TrackingInfo,
};
