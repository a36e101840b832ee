use crate::core::{
    command_init::CommandInit, error::Result, print_info, print_section_header,
};
use colored::*;

/// List files that still contain conflict markers.
pub fn execute_diff_check(cached: bool) -> Result<()> {
    let context = CommandInit::open()?;
    let files = context.status.conflicted_files(cached)?;

    if files.is_empty() {
        print_info("No conflict markers found");
        return Ok(());
    }

    print_section_header("Files with conflict markers");
    for (i, path) in files.iter().enumerate() {
        println!("{} {}", format!("[{}]", i + 1).cyan().bold(), path.red());
    }
    println!();

    Ok(())
}
