//! Project configuration loading.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use crate::discovery::discover_configs;
use crate::error::ConfigError;
use crate::manifest::SettingsStore;
use crate::tsconfig::load_native_config;
use crate::types::{ConfigModel, LoadedConfig};

/// Loads a project's alias configuration.
///
/// Every call to [`ConfigLoader::load`] produces a fresh [`LoadedConfig`];
/// nothing is cached between loads.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    project_dir: PathBuf,
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that discovers the native config under `project_dir`.
    #[must_use]
    pub fn new(project_dir: &Path) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            config_file: None,
        }
    }

    /// Use an explicit native config file instead of discovery.
    ///
    /// Relative paths are resolved against the project directory.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// The project directory (where `package.json` lives).
    #[must_use]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Load the configuration.
    ///
    /// Persisted settings are merged first; a `root` setting moves the
    /// directory searched for native config files.
    ///
    /// # Errors
    ///
    /// * If an explicit config file was given and does not exist
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let mut settings = SettingsStore::new(&self.project_dir).load();
        let root = if settings.root.is_empty() {
            path_clean::clean(&self.project_dir)
        } else {
            path_clean::clean(self.project_dir.join(&settings.root))
        };
        log::debug!("Project root: {}", root.display());

        let candidates = match &self.config_file {
            Some(file) => {
                let path = path_clean::clean(self.project_dir.join(file));
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                vec![path]
            }
            None => discover_configs(&root),
        };

        for path in candidates {
            if let Some(model) = qualify(&path) {
                log::info!("Loaded {} aliases from {}", model.alias_count(), path.display());
                settings.config_file = path.to_string_lossy().to_string();
                return Ok(LoadedConfig {
                    model,
                    settings,
                    config_path: Some(path),
                });
            }
        }

        log::info!("No config with path aliases found under {}", root.display());
        Ok(LoadedConfig {
            model: ConfigModel::empty(root),
            settings,
            config_path: None,
        })
    }
}

/// Build a model from `path` if it parses and declares a non-empty `paths` block.
fn qualify(path: &Path) -> Option<ConfigModel> {
    let config = match load_native_config(path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Skipping {}: {e}", path.display());
            return None;
        }
    };

    let Some(paths) = config.paths() else {
        log::debug!("{} has no path aliases", path.display());
        return None;
    };

    Some(ConfigModel {
        root_url: path.parent()?.to_path_buf(),
        base_url: config.base_url().to_string(),
        paths: paths.clone(),
    })
}
