//! Native config file discovery.
//!
//! Finds the `jsconfig.json` / `tsconfig*.json` candidates for a project root
//! and classifies the language family a config file belongs to.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

/// Native config file names, in lookup priority order.
pub const CONFIG_CANDIDATES: [&str; 3] = ["jsconfig.json", "tsconfig.base.json", "tsconfig.json"];

/// Language family a project is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Plain JavaScript (`jsconfig.json`, or no config at all).
    JavaScript,
    /// TypeScript (`tsconfig*.json`).
    TypeScript,
}

/// List the existing candidate config files under `root`, in priority order.
#[must_use]
pub fn discover_configs(root: &Path) -> Vec<PathBuf> {
    log::debug!("Discovering configs in {}", root.display());

    let configs: Vec<PathBuf> = CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .filter(|path| path.is_file())
        .collect();

    log::debug!("Found {} config files", configs.len());
    configs
}

/// Determine the language family from a config file name.
///
/// Any file whose name starts with `ts` is treated as TypeScript.
#[must_use]
pub fn config_language(config_file: &str) -> Language {
    let name = Path::new(config_file)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if name.starts_with("ts") {
        Language::TypeScript
    } else {
        Language::JavaScript
    }
}
