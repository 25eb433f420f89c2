//! Plugin registry.
//!
//! Built-in plugins are registered statically; custom plugins are added at
//! runtime and take precedence over a built-in of the same name.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::fmt;

use alias_hq_config::ConfigModel;
use serde_json::{Map, Value};

use crate::builtins::builtins;
use crate::error::PluginError;

/// Options passed to a plugin.
pub type PluginOptions = Map<String, Value>;

/// Tool-specific plugin output.
pub type FormatOutput = Value;

/// Signature of a custom plugin.
pub type PluginFn = dyn Fn(&ConfigModel, &PluginOptions) -> Result<FormatOutput, PluginError>
    + Send
    + Sync;

/// A representative option set for a plugin, used for documentation and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginExample {
    /// Short label for this variant.
    pub label: &'static str,
    /// Option key/value pairs.
    pub options: &'static [(&'static str, &'static str)],
}

impl PluginExample {
    /// The variant with no options.
    pub const DEFAULT: Self = Self {
        label: "default",
        options: &[],
    };

    /// The options as a plugin option map.
    #[must_use]
    pub fn to_options(&self) -> PluginOptions {
        self.options
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
            .collect()
    }
}

/// A statically registered plugin.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinPlugin {
    /// Plugin name.
    pub name: &'static str,
    /// One-line description of the output.
    pub description: &'static str,
    /// The plugin function.
    pub run: fn(&ConfigModel, &PluginOptions) -> Result<FormatOutput, PluginError>,
    /// Supported option variants.
    pub examples: &'static [PluginExample],
}

/// How a caller identifies the plugin to invoke.
pub enum PluginRef<'a> {
    /// A registered plugin, custom first, then built-in.
    Named(&'a str),
    /// An ad-hoc plugin function.
    Callback(&'a PluginFn),
}

/// Registry of built-in and custom plugins.
pub struct PluginRegistry {
    builtins: BTreeMap<&'static str, BuiltinPlugin>,
    custom: BTreeMap<String, Box<PluginFn>>,
}

impl PluginRegistry {
    /// Create a registry holding the built-in plugins.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builtins: builtins().into_iter().map(|p| (p.name, p)).collect(),
            custom: BTreeMap::new(),
        }
    }

    /// Register a custom plugin.
    ///
    /// Does nothing if a custom plugin already owns `name`. Returns whether
    /// the plugin was added.
    pub fn register<F>(&mut self, name: &str, plugin: F) -> bool
    where
        F: Fn(&ConfigModel, &PluginOptions) -> Result<FormatOutput, PluginError>
            + Send
            + Sync
            + 'static,
    {
        if self.custom.contains_key(name) {
            log::debug!("Custom plugin {name} already registered");
            return false;
        }

        log::debug!("Registering custom plugin {name}");
        self.custom.insert(name.to_string(), Box::new(plugin));
        true
    }

    /// Run a plugin against `model`.
    ///
    /// # Errors
    ///
    /// * If a named plugin is neither custom nor built-in
    /// * If the plugin rejects its options
    pub fn invoke(
        &self,
        plugin: PluginRef<'_>,
        model: &ConfigModel,
        options: &PluginOptions,
    ) -> Result<FormatOutput, PluginError> {
        match plugin {
            PluginRef::Callback(callback) => callback(model, options),
            PluginRef::Named(name) => {
                if let Some(custom) = self.custom.get(name) {
                    return custom(model, options);
                }
                self.builtins
                    .get(name)
                    .ok_or_else(|| PluginError::UnknownPlugin(name.to_string()))
                    .and_then(|builtin| (builtin.run)(model, options))
            }
        }
    }

    /// Sorted names of all built-in and custom plugins.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .builtins
            .keys()
            .map(|name| (*name).to_string())
            .chain(self.custom.keys().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Look up a built-in plugin.
    #[must_use]
    pub fn builtin(&self, name: &str) -> Option<&BuiltinPlugin> {
        self.builtins.get(name)
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("builtins", &self.builtins.keys().collect::<Vec<_>>())
            .field("custom", &self.custom.keys().collect::<Vec<_>>())
            .finish()
    }
}
