//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CLI arguments for alias-hq.
#[derive(Debug, Parser)]
#[command(
    name = "alias-hq",
    about = "Manage path aliases and convert imports between relative and aliased forms",
    version
)]
pub struct Args {
    /// What to do. Without a command an interactive menu is shown.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Native config file to use instead of jsconfig/tsconfig discovery.
    #[arg(long = "config", short = 'c', global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable progress bars (useful for CI environments).
    #[arg(long = "no-progress", global = true)]
    pub no_progress: bool,

    /// Enable verbose output.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Convert relative imports to aliased imports.
    Aliases,

    /// Convert aliased imports to relative imports.
    Relative,

    /// Print a plugin's alias configuration as JSON.
    Get {
        /// Plugin name, e.g. `webpack` or `jest`.
        plugin: String,

        /// Plugin option as `key=value` (can be specified multiple times).
        #[arg(long = "option", short = 'o', value_parser = parse_option)]
        options: Vec<(String, String)>,
    },

    /// List the available plugins and their option variants.
    Plugins,

    /// Show the resolved configuration.
    Config,
}

impl Args {
    /// Determine if we should show progress bars.
    #[must_use]
    pub const fn should_show_progress(&self) -> bool {
        !self.no_progress
    }
}

/// Parse a `key=value` plugin option.
fn parse_option(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_menu() {
        let args = Args::try_parse_from(["alias-hq"]).unwrap();

        assert_eq!(args.command, None);
        assert!(args.should_show_progress());
    }

    #[test]
    fn test_get_with_options() {
        let args = Args::try_parse_from([
            "alias-hq",
            "get",
            "rollup",
            "--option",
            "format=array",
            "-c",
            "tsconfig.base.json",
        ])
        .unwrap();

        assert_eq!(
            args.command,
            Some(Command::Get {
                plugin: "rollup".to_string(),
                options: vec![("format".to_string(), "array".to_string())],
            })
        );
        assert_eq!(args.config_file, Some(PathBuf::from("tsconfig.base.json")));
    }

    #[test]
    fn test_malformed_option_rejected() {
        assert!(Args::try_parse_from(["alias-hq", "get", "jest", "-o", "rootDir"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["alias-hq", "aliases", "--no-progress", "-v"]).unwrap();

        assert_eq!(args.command, Some(Command::Aliases));
        assert!(!args.should_show_progress());
        assert!(args.verbose);
    }
}
