//! `entries` for `@rollup/plugin-alias`.

use serde_json::{Map, Value};

use alias_hq_config::ConfigModel;

use crate::error::PluginError;
use crate::registry::{BuiltinPlugin, PluginExample, PluginOptions};

pub const PLUGIN: BuiltinPlugin = BuiltinPlugin {
    name: "rollup",
    description: "alias entries as an object or an array of { find, replacement }",
    run,
    examples: &[
        PluginExample {
            label: "object",
            options: &[("format", "object")],
        },
        PluginExample {
            label: "array",
            options: &[("format", "array")],
        },
    ],
};

fn run(model: &ConfigModel, options: &PluginOptions) -> Result<Value, PluginError> {
    match super::string_option(options, "format") {
        None | Some("object") => Ok(object(model)),
        Some("array") => Ok(find_replacement(model)),
        Some(other) => Err(PluginError::InvalidParameter {
            plugin: PLUGIN.name.to_string(),
            message: format!("unknown format \"{other}\" (expected \"object\" or \"array\")"),
        }),
    }
}

fn object(model: &ConfigModel) -> Value {
    let map: Map<String, Value> = super::entries(model)
        .into_iter()
        .map(|entry| {
            (
                entry.alias.to_string(),
                Value::String(entry.target.to_string_lossy().to_string()),
            )
        })
        .collect();

    Value::Object(map)
}

/// `[{ find, replacement }]`, shared with the vite plugin.
pub(crate) fn find_replacement(model: &ConfigModel) -> Value {
    super::entries(model)
        .into_iter()
        .map(|entry| {
            serde_json::json!({
                "find": entry.alias,
                "replacement": entry.target.to_string_lossy(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::fixtures;

    fn with_format(format: &str) -> PluginOptions {
        let mut options = PluginOptions::new();
        options.insert("format".to_string(), Value::String(format.to_string()));
        options
    }

    #[test]
    fn test_rollup_defaults_to_object() {
        let output = run(&fixtures::model(), &PluginOptions::new()).unwrap();

        assert_eq!(output["@app"], "/proj/src/app");
    }

    #[test]
    fn test_rollup_array_format() {
        let output = run(&fixtures::model(), &with_format("array")).unwrap();

        assert_eq!(
            output,
            serde_json::json!([
                { "find": "@app", "replacement": "/proj/src/app" },
                { "find": "@config", "replacement": "/proj/src/config/index.ts" },
            ])
        );
    }

    #[test]
    fn test_rollup_unknown_format() {
        let result = run(&fixtures::model(), &with_format("yaml"));

        assert!(matches!(result, Err(PluginError::InvalidParameter { .. })));
    }
}
