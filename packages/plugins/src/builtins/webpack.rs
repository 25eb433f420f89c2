//! `resolve.alias` map for webpack.

use serde_json::{Map, Value};

use alias_hq_config::ConfigModel;

use crate::error::PluginError;
use crate::registry::{BuiltinPlugin, PluginExample, PluginOptions};

pub const PLUGIN: BuiltinPlugin = BuiltinPlugin {
    name: "webpack",
    description: "resolve.alias object of alias to absolute path",
    run,
    examples: &[PluginExample::DEFAULT],
};

fn run(model: &ConfigModel, _options: &PluginOptions) -> Result<Value, PluginError> {
    let map: Map<String, Value> = super::entries(model)
        .into_iter()
        .map(|entry| {
            (
                entry.alias.to_string(),
                Value::String(entry.target.to_string_lossy().to_string()),
            )
        })
        .collect();

    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::fixtures;

    #[test]
    fn test_webpack_absolute_paths() {
        let output = run(&fixtures::model(), &PluginOptions::new()).unwrap();

        assert_eq!(
            output,
            serde_json::json!({
                "@app": "/proj/src/app",
                "@config": "/proj/src/config/index.ts",
            })
        );
    }
}
