//! Built-in format plugins.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod babel;
mod jest;
mod rollup;
mod vite;
mod webpack;

use std::path::PathBuf;

use alias_hq_config::{ConfigModel, strip_wildcard};
use serde_json::Value;

use crate::registry::{BuiltinPlugin, PluginOptions};

/// All built-in plugins.
#[must_use]
pub fn builtins() -> Vec<BuiltinPlugin> {
    vec![
        babel::PLUGIN,
        jest::PLUGIN,
        rollup::PLUGIN,
        vite::PLUGIN,
        webpack::PLUGIN,
    ]
}

/// One `paths` entry reduced to what the plugins need.
pub(crate) struct Entry<'a> {
    /// The raw alias pattern, e.g. `@app/*`.
    pub pattern: &'a str,
    /// The de-globbed alias, e.g. `@app`.
    pub alias: &'a str,
    /// Absolute target directory (or file, for exact aliases).
    pub target: PathBuf,
    /// Target relative to the project root.
    pub relative: String,
}

/// Map each pattern with at least one target to an [`Entry`].
///
/// Later duplicates of an alias are dropped, matching the alias catalog.
pub(crate) fn entries(model: &ConfigModel) -> Vec<Entry<'_>> {
    let mut entries: Vec<Entry<'_>> = Vec::new();

    for (pattern, targets) in &model.paths {
        let Some(first) = targets.first() else {
            continue;
        };

        let alias = strip_wildcard(pattern);
        if entries.iter().any(|entry| entry.alias == alias) {
            log::debug!("Duplicate alias {alias} ignored");
            continue;
        }

        let target = model.resolve_target(first);
        let relative = model.relative_to_root(&target);
        entries.push(Entry {
            pattern,
            alias,
            target,
            relative,
        });
    }

    entries
}

/// Read a string option.
pub(crate) fn string_option<'a>(options: &'a PluginOptions, key: &str) -> Option<&'a str> {
    options.get(key).and_then(Value::as_str)
}


#[cfg(test)]
pub(crate) mod fixtures {
    use std::path::PathBuf;

    use alias_hq_config::ConfigModel;
    use indexmap::IndexMap;

    /// `/proj` with `baseUrl: "src"` and a wildcard plus an exact alias.
    pub fn model() -> ConfigModel {
        let mut paths = IndexMap::new();
        paths.insert("@app/*".to_string(), vec!["app/*".to_string()]);
        paths.insert("@config".to_string(), vec!["config/index.ts".to_string()]);
        ConfigModel {
            root_url: PathBuf::from("/proj"),
            base_url: "src".to_string(),
            paths,
        }
    }
}
