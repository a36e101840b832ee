//! Type-safe change status of a file in a commit or in the working tree.
//!
//! [`ChangeStatus`] is derived from git's one-letter status codes (`--name-status`
//! and porcelain `XY` columns). Codes outside the well-known set are kept as
//! [`ChangeStatus::Other`] instead of being folded into a default, so nothing the
//! collaborator reports is lost.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeStatus {
    /// Added file (A)
    Added,
    /// Deleted file (D)
    Deleted,
    /// Modified file (M)
    Modified,
    /// Renamed file (R)
    Renamed,
    /// Untracked file (?)
    Untracked,
    /// Any other single-letter code (C, T, U, X, ...)
    Other(char),
}

impl ChangeStatus {
    pub fn from_code(code: char) -> Self {
        match code {
            'A' => ChangeStatus::Added,
            'D' => ChangeStatus::Deleted,
            'M' => ChangeStatus::Modified,
            'R' => ChangeStatus::Renamed,
            '?' => ChangeStatus::Untracked,
            other => ChangeStatus::Other(other),
        }
    }

    /// The one-letter code this status was derived from
    pub fn code(&self) -> char {
        match self {
            ChangeStatus::Added => 'A',
            ChangeStatus::Deleted => 'D',
            ChangeStatus::Modified => 'M',
            ChangeStatus::Renamed => 'R',
            ChangeStatus::Untracked => '?',
            ChangeStatus::Other(code) => *code,
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<char> for ChangeStatus {
    fn from(code: char) -> Self {
        ChangeStatus::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(ChangeStatus::from_code('A'), ChangeStatus::Added);
        assert_eq!(ChangeStatus::from_code('D'), ChangeStatus::Deleted);
        assert_eq!(ChangeStatus::from_code('M'), ChangeStatus::Modified);
        assert_eq!(ChangeStatus::from_code('R'), ChangeStatus::Renamed);
        assert_eq!(ChangeStatus::from_code('?'), ChangeStatus::Untracked);
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        let status = ChangeStatus::from('C');
        assert_eq!(status, ChangeStatus::Other('C'));
        assert_eq!(status.code(), 'C');
    }

    #[test]
    fn test_display_uses_code() {
        assert_eq!(format!("{}", ChangeStatus::Modified), "M");
        assert_eq!(format!("{}", ChangeStatus::Other('T')), "T");
    }
}
