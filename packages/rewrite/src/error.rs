//! Error types for rewrite runs.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error;

/// Errors that abort a whole rewrite run.
///
/// Failures on individual files are reported per file instead.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// An ignore pattern is not a valid glob.
    #[error("Invalid ignore pattern: {0}")]
    IgnorePattern(#[from] globset::Error),
}
