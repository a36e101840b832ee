use crate::core::{
    colors::format_change_line, command_init::CommandInit, error::Result, print_info,
    print_section_header,
};

/// List the files a commit touched. Merges are listed against their first parent.
pub fn execute_show(commit: &str) -> Result<()> {
    let context = CommandInit::open()?;
    let files = context.status.files_from_commit(commit)?;

    if files.is_empty() {
        print_info(&format!("No file changes in {commit}"));
        return Ok(());
    }

    print_section_header(&format!("Files changed in {commit}"));
    for entry in &files {
        println!("{}", format_change_line(entry.status, &entry.path));
    }
    println!();

    Ok(())
}
