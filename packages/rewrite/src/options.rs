//! Options handed to a rewrite engine.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use alias_hq_config::{AliasCatalog, Language, LoadedConfig, config_language};
use alias_hq_glob::DEFAULT_IGNORE;
use regex::Regex;

/// Marker file that identifies a Flow-typed project.
pub const FLOW_MARKER: &str = ".flowconfig";

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// Direction of a rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteMode {
    /// Relative imports become aliased imports.
    Aliased,
    /// Aliased imports become relative imports.
    Relative,
}

impl fmt::Display for RewriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aliased => write!(f, "aliased"),
            Self::Relative => write!(f, "relative"),
        }
    }
}

/// Parser hint for the source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parser {
    /// Flow-annotated JavaScript.
    Flow,
    /// TypeScript with JSX.
    Tsx,
}

impl fmt::Display for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flow => write!(f, "flow"),
            Self::Tsx => write!(f, "tsx"),
        }
    }
}

/// Everything a rewrite engine needs for one run.
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Source file extensions, without dots.
    pub extensions: Vec<String>,
    /// Parser hint, `None` for the default parser.
    pub parser: Option<Parser>,
    /// Preview only; never write files.
    pub dry: bool,
    /// Rewrite direction.
    pub mode: RewriteMode,
    /// All aliases of the project.
    pub aliases: AliasCatalog,
    /// Alias names that scope an aliased rewrite.
    pub modules: Vec<String>,
    /// Glob patterns excluded from the run.
    pub ignore: Vec<String>,
}

impl RewriteOptions {
    /// Derive the options for a loaded project.
    ///
    /// Runs default to a dry, aliased rewrite with no module scope.
    #[must_use]
    pub fn for_project(loaded: &LoadedConfig, project_dir: &Path) -> Self {
        let language = config_language(&loaded.settings.config_file);

        let parser = if project_dir.join(FLOW_MARKER).exists() {
            Some(Parser::Flow)
        } else if language == Language::TypeScript {
            Some(Parser::Tsx)
        } else {
            None
        };

        let default_extensions = match language {
            Language::TypeScript => "ts js tsx jsx",
            Language::JavaScript => "js jsx",
        };
        let extensions = parse_extensions(
            loaded
                .settings
                .extensions
                .as_deref()
                .unwrap_or(default_extensions),
        );

        Self {
            extensions,
            parser,
            dry: true,
            mode: RewriteMode::Aliased,
            aliases: AliasCatalog::build(&loaded.model),
            modules: Vec::new(),
            ignore: DEFAULT_IGNORE.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    /// Add an extension if it is not already present.
    pub fn add_extension(&mut self, extension: &str) {
        if !self.extensions.iter().any(|e| e == extension) {
            self.extensions.push(extension.to_string());
        }
    }

    /// Extensions joined for display, e.g. `ts, js, tsx, jsx`.
    #[must_use]
    pub fn extensions_label(&self) -> String {
        self.extensions.join(", ")
    }

    /// Parser name for display.
    #[must_use]
    pub fn parser_label(&self) -> String {
        self.parser
            .map_or_else(|| "default".to_string(), |p| p.to_string())
    }
}

/// Split an extension list such as `"js, jsx .vue"` into bare extensions.
#[must_use]
pub fn parse_extensions(list: &str) -> Vec<String> {
    WORD_RE
        .find_iter(list)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use alias_hq_config::Settings;
    use tempfile::TempDir;

    fn loaded(config_file: &str, extensions: Option<&str>) -> LoadedConfig {
        LoadedConfig {
            settings: Settings {
                config_file: config_file.to_string(),
                extensions: extensions.map(String::from),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_typescript_project() {
        let dir = TempDir::new().unwrap();
        let options = RewriteOptions::for_project(&loaded("/p/tsconfig.json", None), dir.path());

        assert_eq!(options.parser, Some(Parser::Tsx));
        assert_eq!(options.extensions_label(), "ts, js, tsx, jsx");
        assert!(options.dry);
    }

    #[test]
    fn test_javascript_project() {
        let dir = TempDir::new().unwrap();
        let options = RewriteOptions::for_project(&loaded("/p/jsconfig.json", None), dir.path());

        assert_eq!(options.parser, None);
        assert_eq!(options.parser_label(), "default");
        assert_eq!(options.extensions, vec!["js", "jsx"]);
    }

    #[test]
    fn test_flow_marker_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(FLOW_MARKER), "").unwrap();

        let options = RewriteOptions::for_project(&loaded("/p/tsconfig.json", None), dir.path());

        assert_eq!(options.parser, Some(Parser::Flow));
    }

    #[test]
    fn test_extension_override_and_widening() {
        let dir = TempDir::new().unwrap();
        let mut options =
            RewriteOptions::for_project(&loaded("jsconfig.json", Some("js, .mjs")), dir.path());

        options.add_extension("vue");
        options.add_extension("js");

        assert_eq!(options.extensions, vec!["js", "mjs", "vue"]);
    }
}
