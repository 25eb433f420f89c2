//! Configuration loading for alias-hq.
//!
//! This crate turns a project's `jsconfig.json` / `tsconfig.json` `paths`
//! block into an alias model and persists user choices in `package.json`.
//!
//! # Supported Config Files
//!
//! * `jsconfig.json`
//! * `tsconfig.base.json`
//! * `tsconfig.json`
//!
//! The first file that declares a non-empty `compilerOptions.paths` block wins.
//!
//! # Example
//!
//! ```rust,ignore
//! use alias_hq_config::{AliasCatalog, ConfigLoader};
//!
//! let loaded = ConfigLoader::new(project_dir).load()?;
//! let catalog = AliasCatalog::build(&loaded.model);
//! for alias in catalog.lookup() {
//!     println!("{} -> {}", alias.alias, alias.relative_path);
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod catalog;
mod discovery;
mod error;
mod loader;
mod manifest;
mod tsconfig;
mod types;

pub use catalog::{Alias, AliasCatalog};
pub use discovery::{CONFIG_CANDIDATES, Language, config_language, discover_configs};
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use manifest::{MANIFEST_FILE, SETTINGS_KEY, SettingsStore, detect_indent};
pub use tsconfig::{CompilerOptions, NativeConfig, load_native_config};
pub use types::{
    ConfigModel, DEFAULT_PREFIX, LoadedConfig, Settings, SettingsPatch, relative_path,
    strip_wildcard, to_slash,
};
