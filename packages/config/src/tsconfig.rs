//! `jsconfig.json` / `tsconfig.json` loader.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;

/// The subset of a native config file that alias-hq reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeConfig {
    /// The `compilerOptions` block.
    #[serde(default)]
    pub compiler_options: Option<CompilerOptions>,
}

/// Alias-related compiler options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Base directory for non-relative module names.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Alias pattern to target globs.
    #[serde(default)]
    pub paths: IndexMap<String, Vec<String>>,
}

impl NativeConfig {
    /// The configured `paths`, if the file declares a non-empty block.
    #[must_use]
    pub fn paths(&self) -> Option<&IndexMap<String, Vec<String>>> {
        self.compiler_options
            .as_ref()
            .map(|options| &options.paths)
            .filter(|paths| !paths.is_empty())
    }

    /// The configured `baseUrl`, or an empty string.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.compiler_options
            .as_ref()
            .and_then(|options| options.base_url.as_deref())
            .unwrap_or("")
    }
}

/// Load a native config file.
///
/// Comments are stripped before parsing, as `tsconfig.json` files are JSONC.
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file cannot be parsed as JSON
pub fn load_native_config(path: &Path) -> Result<NativeConfig, ConfigError> {
    log::debug!("Loading native config from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: NativeConfig =
        serde_json::from_str(&strip_json_comments(&content)).map_err(|e| {
            ConfigError::JsonParseError {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

    log::debug!(
        "Loaded config with {} path aliases",
        config.paths().map_or(0, IndexMap::len)
    );

    Ok(config)
}

/// Strip `//` line and `/* */` block comments, leaving string literals intact.
fn strip_json_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                out.push(ch);
                while let Some(c) = chars.next() {
                    out.push(c);
                    if c == '\\' {
                        if let Some(escaped) = chars.next() {
                            out.push(escaped);
                        }
                    } else if c == '"' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                while chars.peek().is_some_and(|c| *c != '\n') {
                    chars.next();
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_native_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{
  "compilerOptions": {{
    "baseUrl": "src",
    "paths": {{
      "@app/*": ["app/*"],
      "@lib/*": ["lib/*", "vendor/lib/*"]
    }}
  }}
}}"#
        )
        .unwrap();

        let config = load_native_config(file.path()).unwrap();
        let paths = config.paths().unwrap();

        assert_eq!(config.base_url(), "src");
        assert_eq!(paths.keys().collect::<Vec<_>>(), vec!["@app/*", "@lib/*"]);
        assert_eq!(paths["@lib/*"], vec!["lib/*", "vendor/lib/*"]);
    }

    #[test]
    fn test_load_native_config_with_comments() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{
  // editor settings
  "compilerOptions": {{
    /* aliases */
    "paths": {{ "@/*": ["src/*"] }}
  }}
}}"#
        )
        .unwrap();

        let config = load_native_config(file.path()).unwrap();

        assert_eq!(config.base_url(), "");
        assert_eq!(config.paths().unwrap()["@/*"], vec!["src/*"]);
    }

    #[test]
    fn test_empty_paths_block_is_none() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "compilerOptions": {{ "paths": {{}} }} }}"#).unwrap();

        let config = load_native_config(file.path()).unwrap();

        assert!(config.paths().is_none());
    }

    #[test]
    fn test_strip_json_comments_keeps_strings() {
        let input = r#"{ "url": "http://example.com/*x*/" } // trailing"#;

        assert_eq!(
            strip_json_comments(input),
            r#"{ "url": "http://example.com/*x*/" } "#
        );
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{ not json").unwrap();

        assert!(matches!(
            load_native_config(file.path()),
            Err(ConfigError::JsonParseError { .. })
        ));
    }
}
