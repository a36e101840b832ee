//! Parsing of user-provided file indices for the selection commands.
//!
//! The CLI numbers files from 1, matching the `[n]` column of `git-deck status`.
//! [`IndexParser`] turns expressions like `1 3-5,8` into the zero-based positions
//! the selection operations work with.
//!
//! # Supported Formats
//! - **Single indices**: `1`, `3`, `5`
//! - **Space-separated**: `1 3 5`
//! - **Comma-separated**: `1,3,5`
//! - **Ranges**: `3-6` (expands to 3,4,5,6)
//! - **Mixed combinations**: `1 3-5,8` (expands to 1,3,4,5,8)

use crate::core::error::{GitDeckError, Result};
use std::collections::BTreeSet;

pub struct IndexParser;

impl IndexParser {
    /// Parse an index expression into sorted, deduplicated 1-based indices.
    pub fn parse(input: &str) -> Result<Vec<usize>> {
        let mut indices = BTreeSet::new();

        for part in input.split([' ', ',']).map(str::trim).filter(|s| !s.is_empty()) {
            if part.contains('-') {
                let (start, end) = match part.split('-').collect::<Vec<_>>()[..] {
                    [start, end] => (start, end),
                    _ => return Err(GitDeckError::invalid_range_format(part)),
                };

                let start: usize = start
                    .parse()
                    .map_err(|_| GitDeckError::invalid_number(start))?;
                let end: usize = end.parse().map_err(|_| GitDeckError::invalid_number(end))?;

                if start > end {
                    return Err(GitDeckError::invalid_range_order(start, end));
                }
                indices.extend(start..=end);
            } else {
                let num: usize = part.parse().map_err(|_| GitDeckError::invalid_number(part))?;
                indices.insert(num);
            }
        }

        Ok(indices.into_iter().collect())
    }

    /// Parse CLI arguments such as `["1", "3-5,8"]` and convert them to
    /// zero-based positions valid for a list of `len` files.
    pub fn positions(args: &[String], len: usize) -> Result<Vec<usize>> {
        let indices = Self::parse(&args.join(" "))?;
        if indices.is_empty() {
            return Err(GitDeckError::NoIndicesProvided);
        }

        indices
            .into_iter()
            .map(|index| match index {
                0 => Err(GitDeckError::ZeroIndex),
                i if i > len => Err(GitDeckError::index_out_of_range(i, len)),
                i => Ok(i - 1),
            })
            .collect()
    }
}
