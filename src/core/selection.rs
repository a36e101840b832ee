//! Positional operations over the reconciled file list.
//!
//! Each operation takes ownership of a state value and returns the next one.
//! The "at most one active file" rule lives here rather than in
//! [`FileStatusSummaryView`]: reconciliation may legitimately pass through
//! states with zero or several active files, and [`set_active`] or
//! [`clear_active`] restore the rule.

use crate::core::error::{GitDeckError, Result};
use crate::core::state::FileStatusSummaryView;

fn check_index(state: &[FileStatusSummaryView], index: usize) -> Result<()> {
    if index >= state.len() {
        return Err(GitDeckError::index_out_of_range(index, state.len()));
    }
    Ok(())
}

/// Flip `checked` at `index`.
pub fn toggle_checked(
    mut state: Vec<FileStatusSummaryView>,
    index: usize,
) -> Result<Vec<FileStatusSummaryView>> {
    check_index(&state, index)?;
    state[index].checked = !state[index].checked;
    Ok(state)
}

/// Make `index` the only active file.
pub fn set_active(
    state: Vec<FileStatusSummaryView>,
    index: usize,
) -> Result<Vec<FileStatusSummaryView>> {
    check_index(&state, index)?;
    Ok(state
        .into_iter()
        .enumerate()
        .map(|(i, file)| FileStatusSummaryView {
            active: i == index,
            ..file
        })
        .collect())
}

pub fn clear_active(state: Vec<FileStatusSummaryView>) -> Vec<FileStatusSummaryView> {
    state
        .into_iter()
        .map(|file| FileStatusSummaryView {
            active: false,
            ..file
        })
        .collect()
}

pub fn check_all(state: Vec<FileStatusSummaryView>) -> Vec<FileStatusSummaryView> {
    set_checked_everywhere(state, true)
}

pub fn uncheck_all(state: Vec<FileStatusSummaryView>) -> Vec<FileStatusSummaryView> {
    set_checked_everywhere(state, false)
}

fn set_checked_everywhere(
    state: Vec<FileStatusSummaryView>,
    checked: bool,
) -> Vec<FileStatusSummaryView> {
    state
        .into_iter()
        .map(|file| FileStatusSummaryView { checked, ..file })
        .collect()
}
