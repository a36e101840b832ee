//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitDeckError`] which covers every failure the parsers, the
//! status reconciler, the selection operations and the CLI boundary can produce.
//! It uses `thiserror` for ergonomic error definitions and includes constructors
//! for the common failure scenarios.
//!
//! # Public API
//! - [`GitDeckError`]: Main error enum covering all failure modes
//! - [`ErrorKind`]: Coarse classification so callers can pick a message per kind
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitDeckError>`
//!
//! # Error Categories
//! - **Malformed input**: raw git output that does not match a required line shape
//! - **Index**: selection operations given a position outside the file list
//! - **Decryption**: the opaque credential capability failed
//! - **Environment**: repository discovery, git processes, I/O, cache and config files

use crate::core::remote::DecryptionError;
use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-deck
#[derive(Error, Debug)]
pub enum GitDeckError {
    // Parse errors
    #[error("Malformed git output at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("Malformed git output at line {line}: unexpected blob kind '{kind}'")]
    UnknownBlobKind { line: usize, kind: String },

    // Selection errors
    #[error("Index {index} is out of range ({len} files available)")]
    IndexOutOfRange { index: usize, len: usize },

    // Credential errors
    #[error("Could not decrypt credential: {0}")]
    Decryption(#[from] DecryptionError),

    // Git repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Repository has no working directory")]
    NoWorkingDirectory,

    #[error("git {command} failed: {stderr}")]
    GitCommandFailed { command: String, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Index expression errors
    #[error("No file indices provided")]
    NoIndicesProvided,

    #[error("Invalid range format: '{range}'. Use format like '3-6'")]
    InvalidRangeFormat { range: String },

    #[error("Invalid range: start ({start}) must be <= end ({end})")]
    InvalidRangeOrder { start: usize, end: usize },

    #[error("Invalid number: '{number}'")]
    InvalidNumber { number: String },

    #[error("Index must be positive (got 0)")]
    ZeroIndex,

    // Cache errors
    #[error("No cached status found. Run 'git-deck status' first.")]
    NoCachedStatus,

    #[error("Failed to create cache directory '{path}': {source}")]
    CacheDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write cache file '{path}': {source}")]
    CacheWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read cache file '{path}': {source}")]
    CacheReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse cache file '{path}': {source}")]
    CacheParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Config errors
    #[error("Could not determine configuration directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of a [`GitDeckError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    Index,
    Decryption,
    Environment,
}

/// Convenience type alias for Results using GitDeckError
pub type Result<T> = std::result::Result<T, GitDeckError>;

impl GitDeckError {
    /// Classify the error so the presentation layer can choose a message
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput { .. } | Self::UnknownBlobKind { .. } => ErrorKind::MalformedInput,
            Self::IndexOutOfRange { .. } | Self::ZeroIndex => ErrorKind::Index,
            Self::Decryption(_) => ErrorKind::Decryption,
            _ => ErrorKind::Environment,
        }
    }

    /// Create a malformed input error for a 1-based line number
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Create an unknown blob kind error
    pub fn unknown_blob_kind(line: usize, kind: impl Into<String>) -> Self {
        Self::UnknownBlobKind {
            line,
            kind: kind.into(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a failed git command error
    pub fn git_command_failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Create an invalid range format error
    pub fn invalid_range_format(range: impl Into<String>) -> Self {
        Self::InvalidRangeFormat {
            range: range.into(),
        }
    }

    /// Create an invalid range order error
    pub fn invalid_range_order(start: usize, end: usize) -> Self {
        Self::InvalidRangeOrder { start, end }
    }

    /// Create an invalid number error
    pub fn invalid_number(number: impl Into<String>) -> Self {
        Self::InvalidNumber {
            number: number.into(),
        }
    }

    pub fn cache_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::CacheDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    pub fn cache_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheWriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn cache_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn cache_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::CacheParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }
}
