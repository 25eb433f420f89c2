//! Folder selection and source file walking for alias-hq.
//!
//! * Parsing and validating the folders a user selects for a rewrite
//! * Parallel source file enumeration using `jwalk`, filtered by extension
//!   and `globset` ignore patterns

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod selection;
mod walk;

pub use selection::{
    PathInfo, PathSelection, SelectedPath, Selection, format_folders, normalize, tokenize,
};
pub use walk::{DEFAULT_IGNORE, FileFilter, collect_files, contains_files};
