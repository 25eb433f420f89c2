//! The rewrite engine boundary.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt;
use std::path::PathBuf;

use crate::error::RewriteError;
use crate::options::RewriteOptions;

/// Outcome for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// The file was (or, in a dry run, would be) rewritten.
    Ok,
    /// Nothing to change.
    Skip,
    /// The file could not be processed.
    Error(String),
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Skip => write!(f, "skip"),
            Self::Error(message) => write!(f, "error: {message}"),
        }
    }
}

/// Result of processing one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    /// Absolute file path.
    pub path: PathBuf,
    /// What happened.
    pub status: FileStatus,
    /// Number of specifiers rewritten.
    pub changes: usize,
}

/// Rewrites module specifiers in the source files under a set of folders.
pub trait RewriteEngine {
    /// Process every matching file under `paths`.
    ///
    /// Per-file failures are reported as [`FileStatus::Error`]; only problems
    /// that prevent the whole run are returned as errors.
    ///
    /// # Errors
    ///
    /// * If the run cannot start (e.g. invalid ignore patterns)
    fn rewrite(
        &self,
        paths: &[PathBuf],
        options: &RewriteOptions,
    ) -> Result<Vec<FileResult>, RewriteError>;
}
