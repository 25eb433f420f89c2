//! Error types for plugin invocation.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error;

/// Errors that can occur when invoking a format plugin.
#[derive(Debug, Error)]
pub enum PluginError {
    /// No custom or built-in plugin has this name.
    #[error("No such plugin \"{0}\"")]
    UnknownPlugin(String),

    /// A plugin was given an option value it cannot use.
    #[error("Invalid parameter for plugin \"{plugin}\": {message}")]
    InvalidParameter {
        /// The plugin name.
        plugin: String,
        /// What was wrong with the parameter.
        message: String,
    },
}
