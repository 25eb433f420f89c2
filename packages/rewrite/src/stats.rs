//! Aggregated results of a rewrite run.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use crate::engine::{FileResult, FileStatus};

/// Running totals over a rewrite run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Whether the run was a preview.
    pub dry: bool,
    /// Files that were (or would be) rewritten.
    pub updated: Vec<PathBuf>,
    /// Number of files with nothing to change.
    pub unchanged: usize,
    /// Files that failed, with their error message.
    pub errors: Vec<(PathBuf, String)>,
}

impl RewriteStats {
    /// Start a new run.
    pub fn reset(&mut self, dry: bool) {
        *self = Self {
            dry,
            ..Self::default()
        };
    }

    /// Fold per-file results into the totals.
    pub fn fold(&mut self, results: &[FileResult]) {
        for result in results {
            match &result.status {
                FileStatus::Ok => self.updated.push(result.path.clone()),
                FileStatus::Skip => self.unchanged += 1,
                FileStatus::Error(message) => {
                    self.errors.push((result.path.clone(), message.clone()));
                }
            }
        }
    }

    /// Number of files touched.
    #[must_use]
    pub fn touched(&self) -> usize {
        self.updated.len()
    }

    /// Number of files that failed.
    #[must_use]
    pub fn errored(&self) -> usize {
        self.errors.len()
    }

    /// Total number of files seen.
    #[must_use]
    pub fn total(&self) -> usize {
        self.touched() + self.unchanged + self.errored()
    }
}
