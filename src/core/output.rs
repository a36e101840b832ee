//! Output formatting shared by all commands.
//!
//! Red for errors, green for success, white for plain information. Every block
//! is separated from the surrounding terminal output by blank lines.

use colored::*;

/// Formats and prints an error message
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}
