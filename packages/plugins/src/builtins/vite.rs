//! `resolve.alias` array for Vite.

use serde_json::Value;

use alias_hq_config::ConfigModel;

use crate::error::PluginError;
use crate::registry::{BuiltinPlugin, PluginExample, PluginOptions};

pub const PLUGIN: BuiltinPlugin = BuiltinPlugin {
    name: "vite",
    description: "resolve.alias array of { find, replacement }",
    run,
    examples: &[PluginExample::DEFAULT],
};

fn run(model: &ConfigModel, _options: &PluginOptions) -> Result<Value, PluginError> {
    Ok(super::rollup::find_replacement(model))
}
