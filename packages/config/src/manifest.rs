//! Settings persistence in the project manifest (`package.json`).
//!
//! Settings live under the top-level `alias-hq` key. Saving merges into that
//! block only and keeps every other manifest key, the key order and the
//! file's indentation.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::types::{Settings, SettingsPatch};

/// Manifest file name, relative to the project directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Key of the settings block inside the manifest.
pub const SETTINGS_KEY: &str = "alias-hq";

const DEFAULT_INDENT: &str = "  ";

static INDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^([ \t]+)""#).expect("valid indent pattern"));

/// Reads and writes the persisted settings block.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    manifest: PathBuf,
}

impl SettingsStore {
    /// Create a store for the manifest in `project_dir`.
    #[must_use]
    pub fn new(project_dir: &Path) -> Self {
        Self {
            manifest: project_dir.join(MANIFEST_FILE),
        }
    }

    /// Path of the manifest file.
    #[must_use]
    pub fn manifest_path(&self) -> &Path {
        &self.manifest
    }

    /// Load persisted settings merged over the defaults.
    ///
    /// A missing or unreadable manifest means "no persisted settings yet".
    #[must_use]
    pub fn load(&self) -> Settings {
        let block = match self.read_manifest() {
            Ok((_, manifest)) => manifest.get(SETTINGS_KEY).cloned(),
            Err(e) => {
                log::debug!("No persisted settings: {e}");
                None
            }
        };

        match block {
            Some(Value::Object(block)) => merge_settings(block),
            Some(_) => {
                log::warn!("Ignoring \"{SETTINGS_KEY}\" settings: not an object");
                Settings::default()
            }
            None => Settings::default(),
        }
    }

    /// Merge `patch` into the persisted settings, logging any failure.
    ///
    /// Returns whether the manifest was written.
    pub fn save(&self, patch: &SettingsPatch) -> bool {
        match self.try_save(patch) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Could not save settings: {e}");
                false
            }
        }
    }

    /// Merge `patch` into the persisted settings.
    ///
    /// The manifest is re-read first so concurrent external edits survive.
    ///
    /// # Errors
    ///
    /// * If the manifest cannot be read, parsed or written
    /// * If the manifest is not a JSON object
    pub fn try_save(&self, patch: &SettingsPatch) -> Result<(), ConfigError> {
        let (text, mut manifest) = self.read_manifest()?;

        let updates = match serde_json::to_value(patch) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };

        let block = manifest
            .entry(SETTINGS_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if !block.is_object() {
            *block = Value::Object(Map::new());
        }
        if let Value::Object(block) = block {
            for (key, value) in updates {
                block.insert(key, value);
            }
        }

        let indent = detect_indent(&text);
        let mut output = to_json_with_indent(&Value::Object(manifest), indent).map_err(|e| {
            ConfigError::WriteError {
                path: self.manifest.clone(),
                source: e.into(),
            }
        })?;
        if text.ends_with('\n') {
            output.push('\n');
        }

        log::debug!("Writing settings to {}", self.manifest.display());
        fs::write(&self.manifest, output).map_err(|e| ConfigError::WriteError {
            path: self.manifest.clone(),
            source: e,
        })
    }

    fn read_manifest(&self) -> Result<(String, Map<String, Value>), ConfigError> {
        let text = fs::read_to_string(&self.manifest).map_err(|e| ConfigError::ReadError {
            path: self.manifest.clone(),
            source: e,
        })?;

        match serde_json::from_str(&text) {
            Ok(Value::Object(map)) => Ok((text, map)),
            Ok(_) => Err(ConfigError::InvalidManifest(self.manifest.clone())),
            Err(e) => Err(ConfigError::JsonParseError {
                path: self.manifest.clone(),
                source: e,
            }),
        }
    }
}

/// Merge a persisted block over the defaults one key at a time.
///
/// A key whose value has the wrong type is dropped with a warning and the
/// remaining keys still apply.
fn merge_settings(block: Map<String, Value>) -> Settings {
    let mut merged = Map::new();
    let mut settings = Settings::default();

    for (key, value) in block {
        let mut candidate = merged.clone();
        candidate.insert(key.clone(), value);

        match serde_json::from_value::<Settings>(Value::Object(candidate.clone())) {
            Ok(next) => {
                merged = candidate;
                settings = next;
            }
            Err(e) => log::warn!("Ignoring \"{SETTINGS_KEY}.{key}\" setting: {e}"),
        }
    }

    settings
}

/// Detect the indentation of the first indented key line, defaulting to two spaces.
#[must_use]
pub fn detect_indent(text: &str) -> &str {
    INDENT_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or(DEFAULT_INDENT, |m| m.as_str())
}

fn to_json_with_indent(value: &Value, indent: &str) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
