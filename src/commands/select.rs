//! Selection commands working against the list shown by the last `status`.
//!
//! Numbers are the 1-based ones printed next to each file.

use crate::commands::status::print_files_only;
use crate::core::{
    cache::save_status_cache,
    command_init::{CommandContext, CommandInit},
    error::Result,
    index_parser::IndexParser,
    print_success,
    state::StatusSummary,
};

fn finish(context: &CommandContext, summary: &StatusSummary, message: &str) -> Result<()> {
    save_status_cache(summary, &context.repo_path)?;
    print_success(message);
    println!();
    print_files_only(summary);
    Ok(())
}

/// Flip the checked flag of every listed file, e.g. `["1", "3-5"]`.
pub fn execute_toggle(indices_args: Vec<String>) -> Result<()> {
    let context = CommandInit::with_cached_status()?;
    let positions = IndexParser::positions(&indices_args, context.status.summary().files.len())?;

    let mut summary = context.status.summary();
    for &position in &positions {
        summary = context.status.toggle_checked(position)?;
    }

    finish(&context, &summary, &format!("Toggled {} file(s)", positions.len()))
}

pub fn execute_activate(index: usize) -> Result<()> {
    let context = CommandInit::with_cached_status()?;
    let positions =
        IndexParser::positions(&[index.to_string()], context.status.summary().files.len())?;

    let mut summary = context.status.summary();
    for &position in &positions {
        summary = context.status.set_active(position)?;
    }

    let path = summary.active_file().map(|f| f.path()).unwrap_or_default();
    finish(&context, &summary, &format!("Active file: {path}"))
}

pub fn execute_clear_active() -> Result<()> {
    let context = CommandInit::with_cached_status()?;
    let summary = context.status.clear_active()?;
    finish(&context, &summary, "Cleared active file")
}

pub fn execute_check_all() -> Result<()> {
    let context = CommandInit::with_cached_status()?;
    let summary = context.status.check_all()?;
    finish(&context, &summary, &format!("Checked {} file(s)", summary.files.len()))
}

pub fn execute_uncheck_all() -> Result<()> {
    let context = CommandInit::with_cached_status()?;
    let summary = context.status.uncheck_all()?;
    finish(&context, &summary, "Unchecked all files")
}
