use crate::core::{
    cache::save_status_cache,
    colors::format_status_line,
    command_init::CommandInit,
    error::Result,
    refresh::RefreshOutcome,
    state::StatusSummary,
};
use colored::*;

/// Refresh the status, keeping the selection of the previous run, and print it.
pub fn execute_status() -> Result<()> {
    let context = CommandInit::with_previous_status()?;

    let summary = match context.status.refresh()? {
        RefreshOutcome::Applied(summary) => summary,
        RefreshOutcome::Discarded => context.status.summary(),
    };

    print_summary(&summary);

    if let Err(e) = save_status_cache(&summary, &context.repo_path) {
        // Log cache errors but don't fail the status command
        log::warn!("Cache save failed (status command will continue): {e}");
    }

    Ok(())
}

fn ahead_behind_text(ahead: usize, behind: usize) -> String {
    let counts = match (ahead, behind) {
        (0, 0) => return String::new(),
        (a, 0) => format!("+{a}"),
        (0, b) => format!("-{b}"),
        (a, b) => format!("+{a}/-{b}"),
    };
    format!(" {}{}{}", "(".bright_black(), counts.white(), ")".bright_black())
}

/// Print the branch header and the numbered file list.
pub fn print_summary(summary: &StatusSummary) {
    let branch = summary.branch_name.as_deref().unwrap_or("-none-");
    let tracking = summary
        .track_to
        .as_deref()
        .map(|upstream| format!(" {} {}", "->".bright_black(), upstream.cyan()))
        .unwrap_or_default();

    println!();
    println!(
        "{} {}{}{}",
        "Branch:".white(),
        branch.green().bold(),
        tracking,
        ahead_behind_text(summary.ahead, summary.behind)
    );
    println!();

    if summary.files.is_empty() {
        println!("{}", "Nothing to commit, working tree clean".bright_black());
        println!();
        return;
    }

    print_files_only(summary);
}

/// Print just the numbered files, without the branch header
pub fn print_files_only(summary: &StatusSummary) {
    for (i, view) in summary.files.iter().enumerate() {
        println!("{}", format_status_line(i + 1, view));
    }
    println!();
}
