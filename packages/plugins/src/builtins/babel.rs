//! `alias` option for `babel-plugin-module-resolver`.

use serde_json::{Map, Value};

use alias_hq_config::ConfigModel;

use crate::error::PluginError;
use crate::registry::{BuiltinPlugin, PluginExample, PluginOptions};

pub const PLUGIN: BuiltinPlugin = BuiltinPlugin {
    name: "babel",
    description: "module-resolver alias object of alias to ./relative path",
    run,
    examples: &[PluginExample::DEFAULT],
};

fn run(model: &ConfigModel, _options: &PluginOptions) -> Result<Value, PluginError> {
    let map: Map<String, Value> = super::entries(model)
        .into_iter()
        .map(|entry| {
            let path = if entry.relative.is_empty() {
                ".".to_string()
            } else if entry.relative.starts_with("..") {
                entry.relative
            } else {
                format!("./{}", entry.relative)
            };
            (entry.alias.to_string(), Value::String(path))
        })
        .collect();

    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::fixtures;

    #[test]
    fn test_babel_relative_paths() {
        let output = run(&fixtures::model(), &PluginOptions::new()).unwrap();

        assert_eq!(
            output,
            serde_json::json!({
                "@app": "./src/app",
                "@config": "./src/config/index.ts",
            })
        );
    }
}
