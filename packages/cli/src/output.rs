//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use colored::Colorize;

/// Print a header message.
pub fn print_header(message: &str) {
    println!("\n{} {}\n", "🏷", message.bold());
}

/// Print the project directory.
pub fn print_project_info(project_dir: &Path) {
    println!("Project: {}", project_dir.display().to_string().cyan());
}

/// Print the plugin list with each plugin's option variants.
pub fn print_plugin_list(plugins: &[(String, String, Vec<String>)]) {
    println!(
        "Found {} plugin{}:",
        plugins.len(),
        if plugins.len() == 1 { "" } else { "s" }
    );
    for (name, description, variants) in plugins {
        println!("  {} {} - {}", "•".dimmed(), name.yellow(), description);
        if variants.len() > 1 {
            println!("      {}", variants.join(", ").dimmed());
        }
    }
    println!();
}

/// Print success message.
pub fn print_success(touched: usize) {
    println!(
        "{} Updated {touched} file{}",
        "✅",
        if touched == 1 { "" } else { "s" }
    );
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", "Warning:".yellow().bold(), message);
}
