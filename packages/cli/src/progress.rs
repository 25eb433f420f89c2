//! Progress bar utilities for the CLI.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::sync::Arc;

use alias_hq_rewrite::{
    FileResult, RewriteEngine, RewriteError, RewriteOptions, SpecifierRewriter,
};
use indicatif::{ProgressBar, ProgressStyle};

/// Runs the built-in rewriter behind a file progress bar.
#[derive(Debug)]
pub struct ProgressEngine {
    enabled: bool,
}

impl ProgressEngine {
    /// Create an engine; with `enabled` false the bar stays hidden.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a progress bar for a rewrite run.
    ///
    /// The length is set once the files have been collected.
    fn create_file_bar(&self, label: &str) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("  {prefix:<12} [{bar:25.green/dim}] {pos}/{len} files")
        {
            pb.set_style(style.progress_chars("━━─"));
        }
        pb.set_prefix(label.to_string());
        pb
    }
}

impl RewriteEngine for ProgressEngine {
    fn rewrite(
        &self,
        paths: &[PathBuf],
        options: &RewriteOptions,
    ) -> Result<Vec<FileResult>, RewriteError> {
        let label = if options.dry { "Previewing" } else { "Updating" };
        let bar = self.create_file_bar(label);

        let ticker = bar.clone();
        let engine = SpecifierRewriter::new().with_progress(Arc::new(move |done, total| {
            ticker.set_length(total);
            ticker.set_position(done);
        }));

        let results = engine.rewrite(paths, options);

        // Clear the progress bar
        bar.finish_and_clear();

        results
    }
}
