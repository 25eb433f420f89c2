//! Built-in rewrite engine that converts module specifiers in place.
//!
//! Import and export declarations, dynamic `import()` and `require()` calls
//! are recognised by pattern. Only the quoted specifier changes; the rest of
//! each file is preserved byte for byte.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use alias_hq_config::{Alias, to_slash};
use alias_hq_glob::{FileFilter, collect_files};
use rayon::prelude::*;
use regex::{Captures, Regex};

use crate::engine::{FileResult, FileStatus, RewriteEngine};
use crate::error::RewriteError;
use crate::options::{RewriteMode, RewriteOptions};
use crate::progress::ProgressTracker;

static SPECIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(\bfrom\s*|\bimport\s*\(\s*|\brequire\s*\(\s*|\bimport\s+)(?:'([^'\r\n]*)'|"([^"\r\n]*)")"#,
    )
    .expect("valid specifier pattern")
});

/// Callback receiving `(files_done, files_total)`.
pub type ProgressCallback = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Rewrites specifiers between relative and aliased forms.
#[derive(Default, Clone)]
pub struct SpecifierRewriter {
    on_progress: Option<ProgressCallback>,
}

impl std::fmt::Debug for SpecifierRewriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecifierRewriter")
            .field("on_progress", &self.on_progress.is_some())
            .finish()
    }
}

impl SpecifierRewriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report progress after every processed file.
    #[must_use]
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.on_progress = Some(callback);
        self
    }

    fn rewrite_file(file: &Path, options: &RewriteOptions) -> FileResult {
        let source = match fs::read_to_string(file) {
            Ok(source) => source,
            Err(e) => return failed(file, &e),
        };

        let (output, changes) = rewrite_source(&source, file, options);
        if changes == 0 {
            return FileResult {
                path: file.to_path_buf(),
                status: FileStatus::Skip,
                changes,
            };
        }

        if options.dry {
            log::debug!("Would rewrite {changes} specifiers in {}", file.display());
        } else {
            if let Err(e) = fs::write(file, output) {
                return failed(file, &e);
            }
            log::debug!("Rewrote {changes} specifiers in {}", file.display());
        }

        FileResult {
            path: file.to_path_buf(),
            status: FileStatus::Ok,
            changes,
        }
    }
}

impl RewriteEngine for SpecifierRewriter {
    fn rewrite(
        &self,
        paths: &[PathBuf],
        options: &RewriteOptions,
    ) -> Result<Vec<FileResult>, RewriteError> {
        let filter = FileFilter::new(&options.extensions, &options.ignore)?;
        let files = collect_files(paths, &filter);

        log::debug!(
            "Rewriting {} files to {} form (dry: {})",
            files.len(),
            options.mode,
            options.dry
        );

        let tracker = ProgressTracker::new(files.len() as u64);
        let results = files
            .par_iter()
            .map(|file| {
                let result = Self::rewrite_file(file, options);
                let done = tracker.increment();
                if let Some(callback) = &self.on_progress {
                    callback(done, tracker.total());
                }
                result
            })
            .collect();

        log::debug!("Processed {}/{} files", tracker.done(), tracker.total());
        Ok(results)
    }
}

fn failed(file: &Path, error: &std::io::Error) -> FileResult {
    log::warn!("Failed to process {}: {error}", file.display());
    FileResult {
        path: file.to_path_buf(),
        status: FileStatus::Error(error.to_string()),
        changes: 0,
    }
}

/// Rewrite the specifiers of one source text located at `file`.
///
/// Returns the new text and the number of specifiers changed.
#[must_use]
pub fn rewrite_source(source: &str, file: &Path, options: &RewriteOptions) -> (String, usize) {
    let mut changes = 0;

    let output = SPECIFIER_RE.replace_all(source, |caps: &Captures| {
        let (quote, specifier) = match (caps.get(2), caps.get(3)) {
            (Some(m), _) => ('\'', m.as_str()),
            (_, Some(m)) => ('"', m.as_str()),
            _ => return caps[0].to_string(),
        };

        let converted = match options.mode {
            RewriteMode::Aliased => to_aliased(specifier, file, options),
            RewriteMode::Relative => to_relative(specifier, file, options),
        };

        match converted {
            Some(replacement) if replacement != specifier => {
                changes += 1;
                format!("{}{quote}{replacement}{quote}", &caps[1])
            }
            _ => caps[0].to_string(),
        }
    });

    (output.into_owned(), changes)
}

fn is_relative(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
}

/// Most specific selected module root containing `path`.
fn module_root<'a>(path: &Path, options: &'a RewriteOptions) -> Option<&'a Alias> {
    options
        .aliases
        .lookup()
        .iter()
        .filter(|alias| options.modules.iter().any(|m| *m == alias.alias))
        .find(|alias| path.starts_with(&alias.absolute_path))
}

/// Convert a relative specifier into an aliased one.
///
/// Targets outside the selected module roots, or inside the importing file's
/// own module root, are left alone.
fn to_aliased(specifier: &str, file: &Path, options: &RewriteOptions) -> Option<String> {
    if !is_relative(specifier) {
        return None;
    }

    let target = path_clean::clean(file.parent()?.join(specifier));
    let root = module_root(&target, options)?;

    if module_root(file, options).is_some_and(|own| own.alias == root.alias) {
        return None;
    }

    let rest = to_slash(target.strip_prefix(&root.absolute_path).ok()?);
    Some(if rest.is_empty() {
        root.alias.clone()
    } else {
        format!("{}/{rest}", root.alias)
    })
}

/// Convert an aliased specifier into a relative one, using the longest
/// matching alias.
fn to_relative(specifier: &str, file: &Path, options: &RewriteOptions) -> Option<String> {
    let alias = options
        .aliases
        .lookup()
        .iter()
        .filter(|a| {
            specifier == a.alias
                || specifier
                    .strip_prefix(a.alias.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
        .max_by_key(|a| a.alias.len())?;

    let rest = specifier[alias.alias.len()..].trim_start_matches('/');
    let target = if rest.is_empty() {
        strip_source_extension(&alias.absolute_path, options)
    } else {
        alias.absolute_path.join(rest)
    };

    let relative = to_slash(&pathdiff::diff_paths(&target, file.parent()?)?);
    Some(if relative.is_empty() {
        ".".to_string()
    } else if relative == ".." || relative.starts_with("../") {
        relative
    } else {
        format!("./{relative}")
    })
}

/// Drop a source extension from an exact file target, so `@config` mapped
/// to `config/index.ts` becomes an import of `config/index`.
fn strip_source_extension(target: &Path, options: &RewriteOptions) -> PathBuf {
    let is_source = target
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| options.extensions.iter().any(|e| e == ext));

    if is_source {
        target.with_extension("")
    } else {
        target.to_path_buf()
    }
}
