//! Error types for the rewrite workflow.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io;

use alias_hq_config::ConfigError;
use alias_hq_rewrite::RewriteError;
use thiserror::Error;

/// Errors that end a workflow session.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// A prompt failed or was interrupted.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] io::Error),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The rewrite engine could not run.
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}
