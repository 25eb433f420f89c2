//! Source file enumeration using fast parallel directory traversal.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

/// Default ignore patterns.
pub const DEFAULT_IGNORE: [&str; 1] = ["**/node_modules/**"];

/// Matches source files by extension, excluding ignored paths.
#[derive(Debug, Clone)]
pub struct FileFilter {
    extensions: Vec<String>,
    ignore: GlobSet,
    ignore_dirs: GlobSet,
}

impl FileFilter {
    /// Create a filter for `extensions` (without dots) and `ignore` globs.
    ///
    /// An ignore pattern ending in `/**` also prunes the directory itself
    /// from the walk.
    ///
    /// # Errors
    ///
    /// * If an ignore pattern is not a valid glob
    pub fn new<E: AsRef<str>, I: AsRef<str>>(
        extensions: &[E],
        ignore: &[I],
    ) -> Result<Self, globset::Error> {
        let mut builder = GlobSetBuilder::new();
        let mut dir_builder = GlobSetBuilder::new();
        for pattern in ignore {
            let pattern = pattern.as_ref();
            builder.add(Glob::new(pattern)?);
            if let Some(dir) = pattern.strip_suffix("/**") {
                dir_builder.add(Glob::new(dir)?);
            }
        }

        Ok(Self {
            extensions: extensions
                .iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_string())
                .collect(),
            ignore: builder.build()?,
            ignore_dirs: dir_builder.build()?,
        })
    }

    /// Whether the walk should skip the directory at `dir` entirely.
    #[must_use]
    pub fn prunes(&self, dir: &Path) -> bool {
        self.ignore_dirs.is_match(dir)
    }

    /// Whether `path` is a matching source file.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext));

        has_extension && !self.ignore.is_match(path)
    }
}

/// Collect all matching files under `dirs`, sorted and deduplicated.
#[must_use]
pub fn collect_files(dirs: &[PathBuf], filter: &FileFilter) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = dirs
        .iter()
        .flat_map(|dir| walk_files(dir, filter))
        .collect();

    files.sort();
    files.dedup();
    log::debug!("Collected {} source files", files.len());

    files
}

/// Whether any file under `dirs` matches `filter`.
#[must_use]
pub fn contains_files(dirs: &[PathBuf], filter: &FileFilter) -> bool {
    dirs.iter().any(|dir| walk_files(dir, filter).next().is_some())
}

fn walk_files<'a>(dir: &Path, filter: &'a FileFilter) -> impl Iterator<Item = PathBuf> + 'a {
    let pruning = filter.clone();

    jwalk::WalkDir::new(dir)
        .skip_hidden(false)
        .sort(false)
        .process_read_dir(move |_depth, _path, _state, children| {
            children.retain(|entry| {
                entry.as_ref().map_or(true, |entry| {
                    !(entry.file_type().is_dir() && pruning.prunes(&entry.path()))
                })
            });
        })
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path())
        .filter(move |path| filter.matches(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in [
            "src/index.ts",
            "src/app/main.tsx",
            "src/app/style.css",
            "src/node_modules/pkg/index.js",
            "lib/util.js",
            "lib/Widget.vue",
        ] {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        dir
    }

    #[test]
    fn test_collect_files_filters_extensions_and_ignores() {
        let dir = tree();
        let filter = FileFilter::new(&["ts", "tsx", "js"], &DEFAULT_IGNORE).unwrap();

        let files = collect_files(&[dir.path().join("src")], &filter);

        assert_eq!(
            files,
            vec![dir.path().join("src/app/main.tsx"), dir.path().join("src/index.ts")]
        );
    }

    #[test]
    fn test_collect_files_deduplicates_overlapping_dirs() {
        let dir = tree();
        let filter = FileFilter::new(&["ts", "tsx"], &DEFAULT_IGNORE).unwrap();

        let files = collect_files(&[dir.path().join("src"), dir.path().join("src/app")], &filter);

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_contains_files() {
        let dir = tree();
        let vue = FileFilter::new(&["vue"], &DEFAULT_IGNORE).unwrap();

        assert!(contains_files(&[dir.path().join("lib")], &vue));
        assert!(!contains_files(&[dir.path().join("src")], &vue));
    }

    #[test]
    fn test_ignored_directories_are_pruned() {
        let dir = tree();
        let filter = FileFilter::new(&["js"], &DEFAULT_IGNORE).unwrap();

        assert!(filter.prunes(&dir.path().join("src/node_modules")));
        assert!(!filter.prunes(&dir.path().join("src/app")));
        assert!(!contains_files(&[dir.path().join("src")], &filter));
        assert_eq!(
            collect_files(&[dir.path().to_path_buf()], &filter),
            vec![dir.path().join("lib/util.js")]
        );
    }

    #[test]
    fn test_invalid_ignore_pattern() {
        assert!(FileFilter::new(&["js"], &["a/[b"]).is_err());
    }
}
