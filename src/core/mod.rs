//! Core functionality for git-deck.
//!
//! The parsers, the status reconciler and the selection operations are pure
//! functions over text and values. Everything that touches git, the filesystem
//! or the terminal lives in [`git`], [`cache`], [`config`] and [`output`].

pub mod cache;
pub mod change_status;
pub mod colors;
pub mod command_init;
pub mod config;
pub mod diff_check;
pub mod dirs;
pub mod error;
pub mod file_history;
pub mod git;
pub mod index_parser;
pub mod merge_tree;
pub mod output;
pub mod porcelain;
pub mod reconcile;
pub mod refresh;
pub mod remote;
pub mod repository_status;
pub mod selection;
pub mod state;
pub mod text;
pub mod tracking;

// === Error handling ===
pub use error::{ErrorKind, GitDeckError, Result};

// === Parsers ===
// Raw git text in, typed values out
pub use diff_check::parse_diff_check;
pub use file_history::{is_merge_commit, parse_file_history, FileLogEntry};
pub use merge_tree::{parse_merge_tree, BlobRef, MergeContext, MergeEntry, MergeResult};
pub use porcelain::{parse_status, PorcelainStatus};
pub use tracking::{parse_tracking, TrackingInfo};

// === Status model ===
pub use change_status::ChangeStatus;
pub use reconcile::reconcile;
pub use refresh::{RefreshOutcome, RefreshSequencer, RefreshTicket, StatusStore};
pub use repository_status::RepositoryStatus;
pub use state::{FileStatusSummary, FileStatusSummaryView, StateCache, StatusSnapshot, StatusSummary};

// === Git operations ===
pub use git::{GitCommands, GitRepo};
pub use remote::{add_credentials_to_remote, git_string_safe, Credential, Decrypt, DecryptionError};

// === Index parsing ===
// Parser for handling user input like "1 3-5,8" -> [1, 3, 4, 5, 8]
pub use index_parser::IndexParser;

pub use command_init::{CommandContext, CommandInit};
pub use config::Config;

// === Output formatting ===
pub use colors::{format_change_line, format_status_line, get_colored_path, get_status_color_style};
pub use output::{print_error, print_info, print_section_header, print_success};
