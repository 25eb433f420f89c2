//! Folder selection parsing and validation.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use alias_hq_config::relative_path;

/// One folder entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathInfo {
    /// The raw token as typed.
    pub input: String,
    /// Path relative to the project root (`.` for the root itself).
    pub rel_path: String,
    /// Absolute path.
    pub abs_path: PathBuf,
    /// Whether the path is a directory under the project root.
    pub valid: bool,
}

/// A validated folder, reduced to what the rewrite needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPath {
    /// Path relative to the project root.
    pub rel_path: String,
    /// Absolute path.
    pub abs_path: PathBuf,
    /// Whether the path exists and is a directory.
    pub valid: bool,
}

/// Result of validating a folder selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// One entry per token.
    pub infos: Vec<PathInfo>,
    /// True iff at least one entry was given and all entries are valid.
    pub valid: bool,
}

/// Validates folder selections against a project root.
#[derive(Debug, Clone)]
pub struct PathSelection {
    root: PathBuf,
}

impl PathSelection {
    /// Create a validator for `root`.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Split and validate raw user input.
    ///
    /// Tokens are separated by whitespace; quoted tokens may contain spaces.
    /// Input with unbalanced quotes produces an empty, invalid selection.
    #[must_use]
    pub fn validate(&self, raw: &str) -> Selection {
        let Some(tokens) = tokenize(raw) else {
            log::debug!("Unbalanced quotes in folder input: {raw}");
            return Selection {
                infos: Vec::new(),
                valid: false,
            };
        };

        let infos: Vec<PathInfo> = tokens.into_iter().map(|token| self.check(token)).collect();
        let valid = !infos.is_empty() && infos.iter().all(|info| info.valid);

        Selection { infos, valid }
    }

    fn check(&self, input: String) -> PathInfo {
        let abs_path = path_clean::clean(self.root.join(&input));
        let rel = relative_path(&self.root, &abs_path);
        let rel_path = if rel.is_empty() { ".".to_string() } else { rel };
        let valid = abs_path.starts_with(&self.root) && abs_path.is_dir();

        PathInfo {
            input,
            rel_path,
            abs_path,
            valid,
        }
    }
}

/// Split folder input into tokens, honouring quotes.
#[must_use]
pub fn tokenize(raw: &str) -> Option<Vec<String>> {
    shlex::split(raw)
}

/// Drop the raw input from validated entries.
#[must_use]
pub fn normalize(infos: &[PathInfo]) -> Vec<SelectedPath> {
    infos
        .iter()
        .map(|info| SelectedPath {
            rel_path: info.rel_path.clone(),
            abs_path: info.abs_path.clone(),
            valid: info.valid,
        })
        .collect()
}

/// Render folders as prompt input, quoting those that contain spaces.
#[must_use]
pub fn format_folders<S: AsRef<str>>(folders: &[S]) -> String {
    folders
        .iter()
        .map(|folder| {
            let folder = folder.as_ref();
            if folder.contains(' ') {
                format!("'{folder}'")
            } else {
                folder.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
