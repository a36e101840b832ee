use crate::core::{command_init::CommandInit, error::Result, merge_tree::MergeResult, print_success};
use colored::*;

/// Preview merging `theirs` into `ours` (HEAD by default).
pub fn execute_merge_check(theirs: &str, ours: Option<&str>) -> Result<()> {
    let context = CommandInit::open()?;
    let ours = ours.unwrap_or("HEAD");

    match context.status.merge_preview(ours, theirs)? {
        MergeResult::Clean { entries } => {
            print_success(&format!("Clean merge ({} entries)", entries.len()));
            println!();
            for entry in &entries {
                let path = entry.path().unwrap_or("?");
                println!("  {:<16} {}", entry.context.as_str().bright_black(), path);
            }
            if !entries.is_empty() {
                println!();
            }
        }
        MergeResult::Conflicts {
            conflicted_file_count,
        } => {
            println!(
                "\n{} {}\n",
                "!".yellow().bold(),
                format!("Conflicts in {conflicted_file_count} file(s)").white()
            );
        }
    }

    Ok(())
}
