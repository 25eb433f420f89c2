//! Format plugins for alias-hq.
//!
//! A plugin projects a [`ConfigModel`](alias_hq_config::ConfigModel) into the
//! alias shape a particular tool expects.
//!
//! # Built-in Plugins
//!
//! * `babel` - `babel-plugin-module-resolver` alias map
//! * `jest` - `moduleNameMapper`
//! * `rollup` - `@rollup/plugin-alias` entries (object or array)
//! * `vite` - `resolve.alias` array
//! * `webpack` - `resolve.alias` object
//!
//! # Example
//!
//! ```rust,ignore
//! use alias_hq_plugins::{PluginOptions, PluginRef, PluginRegistry};
//!
//! let registry = PluginRegistry::new();
//! let aliases = registry.invoke(PluginRef::Named("webpack"), &loaded.model, &PluginOptions::new())?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod builtins;
mod error;
mod registry;

pub use error::PluginError;
pub use registry::{
    BuiltinPlugin, FormatOutput, PluginExample, PluginFn, PluginOptions, PluginRef,
    PluginRegistry,
};
