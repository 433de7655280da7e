//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! Functions here have no side effects beyond printing.

use console::style;

use crate::domain::Version;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Echo an external command line before it runs.
pub fn display_command(command_line: &str) {
    println!("{}", style(command_line).cyan());
}

/// Report that the user chose not to continue.
pub fn display_declined() {
    println!("Release cancelled, nothing was changed.");
}

/// Final message of a successful release.
pub fn release_summary(version: &Version, pushed: bool) -> String {
    if pushed {
        format!("Version {} successfully created and pushed to Github!", version)
    } else {
        format!("Version {} successfully created!", version)
    }
}
