//! `moduleNameMapper` for Jest.

use serde_json::{Map, Value};

use alias_hq_config::ConfigModel;

use crate::error::PluginError;
use crate::registry::{BuiltinPlugin, PluginExample, PluginOptions};

pub const PLUGIN: BuiltinPlugin = BuiltinPlugin {
    name: "jest",
    description: "moduleNameMapper object of regex to <rootDir> path",
    run,
    examples: &[
        PluginExample::DEFAULT,
        PluginExample {
            label: "rootDir",
            options: &[("rootDir", "<rootDir>/..")],
        },
    ],
};

const ROOT_DIR: &str = "<rootDir>";

fn run(model: &ConfigModel, options: &PluginOptions) -> Result<Value, PluginError> {
    let root = super::string_option(options, "rootDir").unwrap_or(ROOT_DIR);

    let map: Map<String, Value> = super::entries(model)
        .into_iter()
        .map(|entry| {
            let target = if entry.relative.is_empty() {
                root.to_string()
            } else {
                format!("{root}/{}", entry.relative)
            };

            if let Some(prefix) = entry.pattern.strip_suffix('*') {
                (
                    format!("^{}(.*)$", regex::escape(prefix)),
                    Value::String(format!("{target}/$1")),
                )
            } else {
                (format!("^{}$", regex::escape(entry.alias)), Value::String(target))
            }
        })
        .collect();

    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::fixtures;

    #[test]
    fn test_jest_module_name_mapper() {
        let output = run(&fixtures::model(), &PluginOptions::new()).unwrap();

        assert_eq!(
            output,
            serde_json::json!({
                "^@app/(.*)$": "<rootDir>/src/app/$1",
                "^@config$": "<rootDir>/src/config/index.ts",
            })
        );
    }

    #[test]
    fn test_jest_root_dir_option() {
        let mut options = PluginOptions::new();
        options.insert("rootDir".to_string(), Value::String("<rootDir>/..".to_string()));

        let output = run(&fixtures::model(), &options).unwrap();

        assert_eq!(output["^@app/(.*)$"], "<rootDir>/../src/app/$1");
    }

    #[test]
    fn test_aliases_are_regex_escaped() {
        let mut model = fixtures::model();
        model.paths.clear();
        model.paths.insert("@app.x/*".to_string(), vec!["app/*".to_string()]);
        model.paths.insert("$lib".to_string(), vec!["lib".to_string()]);

        let output = run(&model, &PluginOptions::new()).unwrap();

        assert_eq!(
            output,
            serde_json::json!({
                "^@app\\.x/(.*)$": "<rootDir>/src/app/$1",
                "^\\$lib$": "<rootDir>/src/lib",
            })
        );
    }
}
