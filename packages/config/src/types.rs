//! Configuration types for alias-hq.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default alias marker character.
pub const DEFAULT_PREFIX: &str = "@";

/// User settings persisted in the `alias-hq` block of `package.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Project root override, relative to the project directory (empty = project directory).
    pub root: String,

    /// Path of the native config file last used.
    pub config_file: String,

    /// Alias marker character.
    pub prefix: String,

    /// Previously chosen folders, relative to the project root.
    pub folders: Vec<String>,

    /// Previously chosen module roots (alias names).
    pub modules: Vec<String>,

    /// Source file extension override, e.g. `"js jsx vue"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: String::new(),
            config_file: String::new(),
            prefix: DEFAULT_PREFIX.to_string(),
            folders: Vec::new(),
            modules: Vec::new(),
            extensions: None,
        }
    }
}

/// A partial settings update, merged key by key into the persisted block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    /// Replacement folder list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folders: Option<Vec<String>>,

    /// Replacement module list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<String>>,
}

/// In-memory representation of a project's `paths` configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigModel {
    /// Absolute project root.
    pub root_url: PathBuf,

    /// Base for alias targets, relative to `root_url` (empty if unset).
    pub base_url: String,

    /// Alias pattern (e.g. `@app/*`) to target globs (e.g. `["src/app/*"]`).
    pub paths: IndexMap<String, Vec<String>>,
}

impl ConfigModel {
    /// Create a model with no aliases rooted at `root_url`.
    #[must_use]
    pub fn empty(root_url: PathBuf) -> Self {
        Self {
            root_url,
            base_url: String::new(),
            paths: IndexMap::new(),
        }
    }

    /// Whether any aliases are configured.
    #[must_use]
    pub fn has_aliases(&self) -> bool {
        !self.paths.is_empty()
    }

    /// Number of configured alias patterns.
    #[must_use]
    pub fn alias_count(&self) -> usize {
        self.paths.len()
    }

    /// Absolute directory that `base_url` points at.
    #[must_use]
    pub fn base_dir(&self) -> PathBuf {
        path_clean::clean(self.root_url.join(&self.base_url))
    }

    /// Resolve a target glob such as `app/*` to an absolute path.
    #[must_use]
    pub fn resolve_target(&self, target: &str) -> PathBuf {
        path_clean::clean(self.base_dir().join(strip_wildcard(target)))
    }

    /// Express an absolute path relative to `root_url`, using `/` separators.
    #[must_use]
    pub fn relative_to_root(&self, path: &Path) -> String {
        relative_path(&self.root_url, path)
    }
}

/// The result of loading a project: the alias model plus the effective settings.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    /// The resolved alias model.
    pub model: ConfigModel,
    /// Effective settings (defaults merged with persisted values).
    pub settings: Settings,
    /// Native config file the model was read from, if one qualified.
    pub config_path: Option<PathBuf>,
}

/// Strip the trailing wildcard segment from an alias pattern or target glob.
///
/// `@app/*` becomes `@app`, `src/*` becomes `src`, and patterns without a
/// wildcard are returned unchanged.
#[must_use]
pub fn strip_wildcard(pattern: &str) -> &str {
    pattern
        .strip_suffix('*')
        .map_or(pattern, |p| p.strip_suffix('/').unwrap_or(p))
}

/// Express `path` relative to `base` with `/` separators.
///
/// Falls back to the absolute path when no relative form exists.
#[must_use]
pub fn relative_path(base: &Path, path: &Path) -> String {
    pathdiff::diff_paths(path, base).map_or_else(
        || path.to_string_lossy().to_string(),
        |rel| to_slash(&rel),
    )
}

/// Render a path with `/` separators regardless of platform.
#[must_use]
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
