//! Resolved alias catalog.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use serde::Serialize;

use crate::types::{ConfigModel, strip_wildcard};

/// One resolved alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alias {
    /// The de-globbed alias, e.g. `@app`.
    pub alias: String,
    /// Absolute target directory.
    pub absolute_path: PathBuf,
    /// Target directory relative to the project root.
    pub relative_path: String,
}

/// All aliases of a config model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasCatalog {
    keys: Vec<String>,
    lookup: Vec<Alias>,
}

impl AliasCatalog {
    /// Build the catalog from the model's `paths`.
    ///
    /// Only the first target of each pattern is used. Patterns without
    /// targets are skipped and later duplicates of an alias are dropped.
    #[must_use]
    pub fn build(model: &ConfigModel) -> Self {
        let mut keys = Vec::new();
        let mut lookup = Vec::new();

        for (pattern, targets) in &model.paths {
            let Some(target) = targets.first() else {
                log::debug!("Alias {pattern} has no targets");
                continue;
            };

            let alias = strip_wildcard(pattern).to_string();
            if keys.contains(&alias) {
                log::debug!("Duplicate alias {alias} ignored");
                continue;
            }

            let absolute_path = model.resolve_target(target);
            let relative_path = model.relative_to_root(&absolute_path);
            keys.push(alias.clone());
            lookup.push(Alias {
                alias,
                absolute_path,
                relative_path,
            });
        }

        // Descending by the raw path string; the sort is stable for ties.
        lookup.sort_by(|a, b| b.absolute_path.as_os_str().cmp(a.absolute_path.as_os_str()));

        Self { keys, lookup }
    }

    /// Alias names in declaration order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Aliases sorted by descending absolute path.
    #[must_use]
    pub fn lookup(&self) -> &[Alias] {
        &self.lookup
    }

    /// Find an alias by exact name.
    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&Alias> {
        self.lookup.iter().find(|item| item.alias == alias)
    }

    /// Number of aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Whether the catalog has no aliases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn model(base_url: &str, paths: &[(&str, &[&str])]) -> ConfigModel {
        ConfigModel {
            root_url: PathBuf::from("/proj"),
            base_url: base_url.to_string(),
            paths: paths
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.iter().map(|s| (*s).to_string()).collect()))
                .collect::<IndexMap<_, _>>(),
        }
    }

    #[test]
    fn test_single_alias() {
        let catalog = AliasCatalog::build(&model("src", &[("@app/*", &["app/*"])]));

        assert_eq!(
            catalog.lookup(),
            &[Alias {
                alias: "@app".to_string(),
                absolute_path: PathBuf::from("/proj/src/app"),
                relative_path: "src/app".to_string(),
            }]
        );
    }

    #[test]
    fn test_lookup_sorted_descending_and_keys_in_order() {
        let catalog = AliasCatalog::build(&model(
            "",
            &[
                ("@/*", &["src/*"]),
                ("@app/*", &["src/app/*"]),
                ("@lib/*", &["lib/*"]),
            ],
        ));

        assert_eq!(catalog.keys(), &["@", "@app", "@lib"]);
        let order: Vec<&str> = catalog.lookup().iter().map(|a| a.alias.as_str()).collect();
        assert_eq!(order, vec!["@app", "@", "@lib"]);
    }

    #[test]
    fn test_get_round_trips_every_key() {
        let catalog = AliasCatalog::build(&model(
            "",
            &[("@a/*", &["a/*"]), ("@b/*", &["b/*"]), ("@c", &["c/index.ts"])],
        ));

        for key in catalog.keys() {
            assert_eq!(&catalog.get(key).unwrap().alias, key);
        }
        assert!(catalog.get("@missing").is_none());
    }

    #[test]
    fn test_duplicates_and_empty_targets_skipped() {
        let catalog = AliasCatalog::build(&model(
            "",
            &[("@app/*", &["app/*"]), ("@app", &["other"]), ("@none/*", &[])],
        ));

        assert_eq!(catalog.keys(), &["@app"]);
        assert_eq!(catalog.get("@app").unwrap().relative_path, "app");
    }

    #[test]
    fn test_empty_model_has_empty_catalog() {
        let catalog = AliasCatalog::build(&ConfigModel::empty(PathBuf::from("/proj")));

        assert!(catalog.is_empty());
        assert!(catalog.keys().is_empty());
    }
}
