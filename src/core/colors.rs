//! Color mapping for change statuses.
//!
//! # Color Scheme
//! - **Modified**: Yellow
//! - **Added**: Green
//! - **Deleted**: Red
//! - **Renamed**: Blue
//! - **Untracked**: Cyan
//! - **Unmerged**: Red bold

use crate::core::change_status::ChangeStatus;
use crate::core::state::FileStatusSummaryView;
use colored::*;

/// Single function to apply color styling based on change status
pub fn get_status_color_style(status: ChangeStatus) -> Box<dyn Fn(&str) -> ColoredString> {
    match status {
        ChangeStatus::Modified => Box::new(|text: &str| text.yellow()),
        ChangeStatus::Untracked => Box::new(|text: &str| text.cyan()),
        ChangeStatus::Deleted => Box::new(|text: &str| text.red()),
        ChangeStatus::Added => Box::new(|text: &str| text.green()),
        ChangeStatus::Renamed | ChangeStatus::Other('C') => Box::new(|text: &str| text.blue()),
        ChangeStatus::Other('U') => Box::new(|text: &str| text.red().bold()),
        ChangeStatus::Other(_) => Box::new(|text: &str| text.magenta()),
    }
}

pub fn get_colored_path(status: ChangeStatus, path: &str) -> ColoredString {
    get_status_color_style(status)(path)
}

/// One numbered status line: `[n] [x] XY path`, with `*` marking the active file.
pub fn format_status_line(number: usize, view: &FileStatusSummaryView) -> String {
    let status = view.file.change_status();
    let index_colored = format!("[{number}]").cyan().bold();
    let check = if view.checked { "[x]" } else { "[ ]" };
    let marker = if view.active { "*".yellow().bold() } else { " ".normal() };
    let xy = get_status_color_style(status)(&view.file.xy());
    let path = match &view.file.from {
        Some(from) => format!("{from} -> {}", view.path()),
        None => view.path().to_string(),
    };

    format!(
        "{index_colored} {check}{marker}{xy}  {}",
        get_colored_path(status, &path)
    )
}

/// One line of a commit's file list: `M  path`.
pub fn format_change_line(status: ChangeStatus, path: &str) -> String {
    let color_fn = get_status_color_style(status);
    format!("{}  {}", color_fn(&status.code().to_string()), color_fn(path))
}
