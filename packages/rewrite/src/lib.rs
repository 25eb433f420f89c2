//! Import path rewriting for alias-hq.
//!
//! Converts module specifiers in JavaScript and TypeScript sources between
//! relative (`../utils/strings`) and aliased (`@utils/strings`) forms.
//!
//! * [`RewriteEngine`] is the boundary the orchestrator drives
//! * [`SpecifierRewriter`] is the built-in engine, processing files in
//!   parallel with `rayon`
//! * [`RewriteStats`] folds per-file results into run totals

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod engine;
mod error;
mod options;
mod progress;
mod specifier;
mod stats;

pub use engine::{FileResult, FileStatus, RewriteEngine};
pub use error::RewriteError;
pub use options::{FLOW_MARKER, Parser, RewriteMode, RewriteOptions, parse_extensions};
pub use progress::ProgressTracker;
pub use specifier::{ProgressCallback, SpecifierRewriter, rewrite_source};
pub use stats::RewriteStats;
