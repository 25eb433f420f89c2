//! The rewrite workflow state machine.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use alias_hq_config::{Alias, AliasCatalog, ConfigLoader, LoadedConfig, SettingsPatch, SettingsStore};
use alias_hq_glob::{
    FileFilter, PathSelection, SelectedPath, contains_files, format_folders, normalize,
};
use alias_hq_rewrite::{RewriteEngine, RewriteMode, RewriteOptions, RewriteStats};
use colored::Colorize;

use crate::error::OrchestratorError;
use crate::prompter::Prompter;
use crate::report;

/// Component file extensions detected in the selected folders.
pub const COMPONENT_EXTENSIONS: [&str; 2] = ["vue", "svelte"];

/// What the user has chosen so far in one pass through the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    /// Rewrite direction.
    pub mode: RewriteMode,
    /// Validated folders.
    pub paths: Vec<SelectedPath>,
    /// Module roots scoping an aliased rewrite.
    pub modules: Vec<Alias>,
}

impl Answers {
    #[must_use]
    pub const fn new(mode: RewriteMode) -> Self {
        Self {
            mode,
            paths: Vec::new(),
            modules: Vec::new(),
        }
    }

    /// The choices as a settings update.
    #[must_use]
    pub fn to_patch(&self) -> SettingsPatch {
        SettingsPatch {
            folders: Some(self.paths.iter().map(|p| p.rel_path.clone()).collect()),
            modules: Some(self.modules.iter().map(|m| m.alias.clone()).collect()),
        }
    }

    /// Absolute paths of the valid folders.
    #[must_use]
    pub fn valid_paths(&self) -> Vec<PathBuf> {
        self.paths
            .iter()
            .filter(|p| p.valid)
            .map(|p| p.abs_path.clone())
            .collect()
    }
}

/// Choices offered once the selection is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    Config,
    Restart,
    Preview,
    Proceed,
    Back,
}

impl NextAction {
    /// All actions in menu order.
    pub const ALL: [Self; 5] = [
        Self::Config,
        Self::Restart,
        Self::Preview,
        Self::Proceed,
        Self::Back,
    ];

    /// Menu label.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Config => "Show config".to_string(),
            Self::Restart => "Change settings".to_string(),
            Self::Preview => "Preview updates".to_string(),
            Self::Proceed => format!("Update files {}", "- no further confirmation!".red()),
            Self::Back => "Back".to_string(),
        }
    }
}

/// States of the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Restart,
    SelectPaths,
    DetectFraming,
    SelectModules,
    Confirm,
    Persist,
    ChooseNextAction,
    ShowConfig,
    Run { dry: bool },
    Back,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The project declares no aliases; nothing was asked.
    NoAliases,
    /// The user went back, after zero or more runs.
    Finished {
        /// Totals of the most recent run, if any.
        last_run: Option<RewriteStats>,
    },
}

/// Drives one interactive rewrite session.
pub struct Orchestrator<'a> {
    loader: ConfigLoader,
    prompter: &'a mut dyn Prompter,
    engine: &'a dyn RewriteEngine,
    loaded: LoadedConfig,
    catalog: AliasCatalog,
    options: RewriteOptions,
    answers: Answers,
    stats: RewriteStats,
    last_run: Option<RewriteStats>,
}

impl std::fmt::Debug for Orchestrator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("loader", &self.loader)
            .field("answers", &self.answers)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<'a> Orchestrator<'a> {
    /// Create a session.
    ///
    /// # Arguments
    ///
    /// * `loader` - Loads the project configuration, again on every restart
    /// * `prompter` - Asks the questions
    /// * `engine` - Performs the rewrite
    #[must_use]
    pub fn new(
        loader: ConfigLoader,
        prompter: &'a mut dyn Prompter,
        engine: &'a dyn RewriteEngine,
    ) -> Self {
        let loaded = LoadedConfig::default();
        let options = RewriteOptions::for_project(&loaded, loader.project_dir());

        Self {
            loader,
            prompter,
            engine,
            loaded,
            catalog: AliasCatalog::default(),
            options,
            answers: Answers::new(RewriteMode::Aliased),
            stats: RewriteStats::default(),
            last_run: None,
        }
    }

    /// Run the workflow until the user goes back.
    ///
    /// # Errors
    ///
    /// * If the configuration cannot be loaded
    /// * If a prompt fails
    /// * If the rewrite engine cannot run
    pub fn run(&mut self, mode: RewriteMode) -> Result<Outcome, OrchestratorError> {
        let mut step = Step::Restart;

        loop {
            log::debug!("Workflow step: {step:?}");
            step = match step {
                Step::Restart => {
                    if !self.start(mode)? {
                        return Ok(Outcome::NoAliases);
                    }
                    Step::SelectPaths
                }
                Step::SelectPaths => {
                    self.select_paths()?;
                    Step::DetectFraming
                }
                Step::DetectFraming => {
                    if mode == RewriteMode::Aliased {
                        self.detect_framing();
                    }
                    Step::SelectModules
                }
                Step::SelectModules => {
                    if mode == RewriteMode::Aliased {
                        self.select_modules()?;
                    }
                    Step::Confirm
                }
                Step::Confirm => {
                    let text = report::render_choices(&self.answers, &self.options);
                    self.prompter.print(&text);
                    Step::Persist
                }
                Step::Persist => {
                    if mode == RewriteMode::Aliased {
                        self.persist()?;
                    }
                    Step::ChooseNextAction
                }
                Step::ChooseNextAction => self.choose_next_action()?,
                Step::ShowConfig => {
                    let text = report::render_config(&self.loaded, &self.catalog);
                    self.prompter.print(&text);
                    Step::ChooseNextAction
                }
                Step::Run { dry } => {
                    self.execute(dry)?;
                    Step::ChooseNextAction
                }
                Step::Back => {
                    return Ok(Outcome::Finished {
                        last_run: self.last_run.take(),
                    });
                }
            };
        }
    }

    /// Reload the configuration and reset the answers.
    ///
    /// Returns `false` when the project has no aliases.
    fn start(&mut self, mode: RewriteMode) -> Result<bool, OrchestratorError> {
        self.loaded = self.loader.load()?;
        self.catalog = AliasCatalog::build(&self.loaded.model);
        self.answers = Answers::new(mode);

        self.options = RewriteOptions::for_project(&self.loaded, self.loader.project_dir());
        self.options.mode = mode;

        if self.catalog.is_empty() {
            self.prompter.print(&report::NO_ALIASES.red().to_string());
            return Ok(false);
        }

        Ok(true)
    }

    fn select_paths(&mut self) -> Result<(), OrchestratorError> {
        let settings = &self.loaded.settings;
        let default = if settings.folders.is_empty() {
            self.loaded.model.base_url.clone()
        } else {
            format_folders(&settings.folders)
        };

        let validator = PathSelection::new(&self.loaded.model.root_url);

        loop {
            let raw = self.prompter.input("Folders:", &default)?;
            let selection = validator.validate(&raw);

            if selection.valid {
                self.answers.paths = normalize(&selection.infos);
                return Ok(());
            }

            if selection.infos.is_empty() {
                self.prompter
                    .print(&"Enter at least one folder".yellow().to_string());
            }
            for info in selection.infos.iter().filter(|info| !info.valid) {
                self.prompter.print(&format!(
                    "  {} {} is not a folder",
                    "✗".red(),
                    info.input
                ));
            }
        }
    }

    /// Widen the extensions when the folders hold component files.
    fn detect_framing(&mut self) {
        if self.loaded.settings.extensions.is_some() {
            return;
        }

        let paths = self.answers.valid_paths();
        let found: Vec<&str> = COMPONENT_EXTENSIONS
            .into_iter()
            .filter(|extension| {
                match FileFilter::new(&[*extension], self.options.ignore.as_slice()) {
                    Ok(filter) => contains_files(&paths, &filter),
                    Err(e) => {
                        log::warn!("Skipping .{extension} detection: {e}");
                        false
                    }
                }
            })
            .collect();

        for extension in found {
            log::debug!("Found .{extension} files, adding extension");
            self.options.add_extension(extension);
        }
    }

    fn select_modules(&mut self) -> Result<(), OrchestratorError> {
        let keys = self.catalog.keys();
        let labels = report::module_labels(&self.catalog);
        let defaults: Vec<bool> = keys
            .iter()
            .map(|key| self.loaded.settings.modules.contains(key))
            .collect();

        let chosen = self
            .prompter
            .multi_select("Module roots:", &labels, &defaults)?;

        self.answers.modules = chosen
            .into_iter()
            .filter_map(|i| keys.get(i))
            .filter_map(|key| self.catalog.get(key))
            .cloned()
            .collect();

        Ok(())
    }

    /// Offer to save the choices when they differ from the persisted ones.
    fn persist(&mut self) -> Result<(), OrchestratorError> {
        let patch = self.answers.to_patch();
        let settings = &self.loaded.settings;

        if patch.folders.as_ref() == Some(&settings.folders)
            && patch.modules.as_ref() == Some(&settings.modules)
        {
            return Ok(());
        }

        if !self.prompter.confirm("Save updated choices?", true)? {
            return Ok(());
        }

        if SettingsStore::new(self.loader.project_dir()).save(&patch) {
            let settings = &mut self.loaded.settings;
            settings.folders = patch.folders.unwrap_or_default();
            settings.modules = patch.modules.unwrap_or_default();
        }

        Ok(())
    }

    fn choose_next_action(&mut self) -> Result<Step, OrchestratorError> {
        let labels: Vec<String> = NextAction::ALL.iter().map(|a| a.label()).collect();
        let default = NextAction::ALL
            .iter()
            .position(|a| *a == NextAction::Preview)
            .unwrap_or(0);

        let index = self.prompter.select("Next step:", &labels, default)?;

        Ok(match NextAction::ALL.get(index).copied() {
            Some(NextAction::Config) => Step::ShowConfig,
            Some(NextAction::Restart) => Step::Restart,
            Some(NextAction::Preview) => Step::Run { dry: true },
            Some(NextAction::Proceed) => Step::Run { dry: false },
            Some(NextAction::Back) | None => Step::Back,
        })
    }

    fn execute(&mut self, dry: bool) -> Result<(), OrchestratorError> {
        self.stats.reset(dry);

        if self.catalog.is_empty() {
            self.prompter.print("Nothing to rewrite: no aliases configured");
            return Ok(());
        }

        let mut options = self.options.clone();
        options.dry = dry;
        options.modules = match self.answers.mode {
            RewriteMode::Aliased => self.answers.modules.iter().map(|m| m.alias.clone()).collect(),
            RewriteMode::Relative => Vec::new(),
        };

        let paths = self.answers.valid_paths();
        log::debug!(
            "Running {} rewrite over {} folders (dry: {dry})",
            options.mode,
            paths.len()
        );

        let results = self.engine.rewrite(&paths, &options)?;
        self.stats.fold(&results);

        let text = report::render_summary(&self.stats, &self.loaded.model.root_url);
        self.prompter.print(&text);
        self.last_run = Some(self.stats.clone());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::fs;
    use std::io;
    use std::path::Path;

    use alias_hq_rewrite::SpecifierRewriter;
    use tempfile::TempDir;

    #[derive(Debug)]
    enum Reply {
        Input(&'static str),
        Confirm(bool),
        Select(NextAction),
        Multi(Vec<usize>),
    }

    #[derive(Debug, Default)]
    struct ScriptedPrompter {
        replies: VecDeque<Reply>,
        prompts: Vec<String>,
        output: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(replies: Vec<Reply>) -> Self {
            Self {
                replies: replies.into(),
                ..Self::default()
            }
        }

        fn next(&mut self, prompt: &str) -> io::Result<Reply> {
            self.prompts.push(prompt.to_string());
            self.replies
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "interrupted"))
        }

        fn printed(&self) -> String {
            self.output.join("\n")
        }
    }

    impl Prompter for ScriptedPrompter {
        fn input(&mut self, prompt: &str, _default: &str) -> io::Result<String> {
            match self.next(prompt)? {
                Reply::Input(text) => Ok(text.to_string()),
                other => panic!("expected input for {prompt}, got {other:?}"),
            }
        }

        fn confirm(&mut self, prompt: &str, _default: bool) -> io::Result<bool> {
            match self.next(prompt)? {
                Reply::Confirm(answer) => Ok(answer),
                other => panic!("expected confirm for {prompt}, got {other:?}"),
            }
        }

        fn select(&mut self, prompt: &str, items: &[String], _default: usize) -> io::Result<usize> {
            assert_eq!(items.len(), NextAction::ALL.len());
            match self.next(prompt)? {
                Reply::Select(action) => Ok(NextAction::ALL
                    .iter()
                    .position(|a| *a == action)
                    .unwrap()),
                other => panic!("expected select for {prompt}, got {other:?}"),
            }
        }

        fn multi_select(
            &mut self,
            prompt: &str,
            items: &[String],
            defaults: &[bool],
        ) -> io::Result<Vec<usize>> {
            assert_eq!(items.len(), defaults.len());
            match self.next(prompt)? {
                Reply::Multi(indices) => Ok(indices),
                other => panic!("expected multi-select for {prompt}, got {other:?}"),
            }
        }

        fn print(&mut self, text: &str) {
            self.output.push(text.to_string());
        }
    }

    const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "baseUrl": "src",
    "paths": {
      "@app/*": ["app/*"],
      "@utils/*": ["utils/*"]
    }
  }
}"#;

    fn project(manifest: &str) -> TempDir {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("tsconfig.json"), TSCONFIG).unwrap();
        fs::write(root.join("package.json"), manifest).unwrap();
        fs::create_dir_all(root.join("src/app")).unwrap();
        fs::create_dir_all(root.join("src/utils")).unwrap();
        fs::write(
            root.join("src/app/main.ts"),
            "import { trim } from '../utils/strings';\n",
        )
        .unwrap();
        fs::write(
            root.join("src/utils/strings.ts"),
            "export const trim = (s: string) => s.trim();\n",
        )
        .unwrap();
        dir
    }

    fn read(root: &Path, file: &str) -> String {
        fs::read_to_string(root.join(file)).unwrap()
    }

    #[test]
    fn test_no_aliases_skips_prompts() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tsconfig.json"), r#"{"compilerOptions":{}}"#).unwrap();

        let mut prompter = ScriptedPrompter::default();
        let engine = SpecifierRewriter::new();
        let outcome = Orchestrator::new(ConfigLoader::new(dir.path()), &mut prompter, &engine)
            .run(RewriteMode::Aliased)
            .unwrap();

        assert_eq!(outcome, Outcome::NoAliases);
        assert!(prompter.prompts.is_empty());
        assert!(prompter.printed().contains(report::NO_ALIASES));
    }

    #[test]
    fn test_aliased_flow_preview_then_commit() {
        let dir = project("{\n  \"name\": \"demo\"\n}\n");
        let root = dir.path();

        let mut prompter = ScriptedPrompter::new(vec![
            Reply::Input("src missing"),
            Reply::Input("src"),
            Reply::Multi(vec![1]),
            Reply::Confirm(true),
            Reply::Select(NextAction::Preview),
            Reply::Select(NextAction::Proceed),
            Reply::Select(NextAction::Back),
        ]);
        let engine = SpecifierRewriter::new();
        let outcome = Orchestrator::new(ConfigLoader::new(root), &mut prompter, &engine)
            .run(RewriteMode::Aliased)
            .unwrap();

        let Outcome::Finished {
            last_run: Some(stats),
        } = outcome
        else {
            panic!("expected a finished run");
        };
        assert!(!stats.dry);
        assert_eq!(stats.touched(), 1);
        assert_eq!(stats.unchanged, 1);

        let printed = prompter.printed();
        assert!(printed.contains("missing is not a folder"));
        assert!(printed.contains("Preview"));
        assert!(printed.contains("@utils"));

        assert_eq!(
            read(root, "src/app/main.ts"),
            "import { trim } from '@utils/strings';\n"
        );
        assert_eq!(
            read(root, "package.json"),
            "{\n  \"name\": \"demo\",\n  \"alias-hq\": {\n    \"folders\": [\n      \"src\"\n    ],\n    \"modules\": [\n      \"@utils\"\n    ]\n  }\n}\n"
        );
    }

    #[test]
    fn test_unchanged_choices_are_not_saved_again() {
        let manifest = r#"{"alias-hq":{"folders":["src"],"modules":["@utils"]}}"#;
        let dir = project(manifest);

        let mut prompter = ScriptedPrompter::new(vec![
            Reply::Input("src"),
            Reply::Multi(vec![1]),
            Reply::Select(NextAction::Back),
        ]);
        let engine = SpecifierRewriter::new();
        let outcome = Orchestrator::new(ConfigLoader::new(dir.path()), &mut prompter, &engine)
            .run(RewriteMode::Aliased)
            .unwrap();

        assert_eq!(outcome, Outcome::Finished { last_run: None });
        assert!(!prompter.prompts.iter().any(|p| p == "Save updated choices?"));
        assert_eq!(read(dir.path(), "package.json"), manifest);
    }

    #[test]
    fn test_relative_flow_skips_modules_and_persist() {
        let dir = project("{}");
        let root = dir.path();
        fs::write(
            root.join("src/app/main.ts"),
            "import { trim } from '@utils/strings';\n",
        )
        .unwrap();

        let mut prompter = ScriptedPrompter::new(vec![
            Reply::Input("src"),
            Reply::Select(NextAction::Config),
            Reply::Select(NextAction::Proceed),
            Reply::Select(NextAction::Back),
        ]);
        let engine = SpecifierRewriter::new();
        Orchestrator::new(ConfigLoader::new(root), &mut prompter, &engine)
            .run(RewriteMode::Relative)
            .unwrap();

        assert_eq!(prompter.prompts, vec!["Folders:", "Next step:", "Next step:", "Next step:"]);
        assert!(prompter.printed().contains("Choices"));
        assert!(prompter.printed().contains("Aliases (2)"));
        assert_eq!(
            read(root, "src/app/main.ts"),
            "import { trim } from '../utils/strings';\n"
        );
        assert_eq!(read(root, "package.json"), "{}");
    }

    #[test]
    fn test_component_files_widen_extensions() {
        let dir = project("{}");
        fs::write(dir.path().join("src/app/Widget.vue"), "<template />\n").unwrap();

        let mut prompter = ScriptedPrompter::new(vec![
            Reply::Input("src"),
            Reply::Multi(vec![]),
            Reply::Confirm(false),
            Reply::Select(NextAction::Back),
        ]);
        let engine = SpecifierRewriter::new();
        Orchestrator::new(ConfigLoader::new(dir.path()), &mut prompter, &engine)
            .run(RewriteMode::Aliased)
            .unwrap();

        assert!(prompter.printed().contains("extensions: ts, js, tsx, jsx, vue"));
    }

    #[test]
    fn test_extensions_setting_skips_component_detection() {
        let dir = project(r#"{"alias-hq":{"extensions":"js"}}"#);
        fs::write(dir.path().join("src/app/Widget.vue"), "<template />\n").unwrap();

        let mut prompter = ScriptedPrompter::new(vec![
            Reply::Input("src"),
            Reply::Multi(vec![]),
            Reply::Confirm(false),
            Reply::Select(NextAction::Back),
        ]);
        let engine = SpecifierRewriter::new();
        Orchestrator::new(ConfigLoader::new(dir.path()), &mut prompter, &engine)
            .run(RewriteMode::Aliased)
            .unwrap();

        let printed = prompter.printed();
        assert!(printed.contains("extensions: js"));
        assert!(!printed.contains("vue"));
    }

    #[test]
    fn test_restart_starts_over() {
        let dir = project("{}");

        let mut prompter = ScriptedPrompter::new(vec![
            Reply::Input("src"),
            Reply::Select(NextAction::Restart),
            Reply::Input("src/app"),
            Reply::Select(NextAction::Back),
        ]);
        let engine = SpecifierRewriter::new();
        Orchestrator::new(ConfigLoader::new(dir.path()), &mut prompter, &engine)
            .run(RewriteMode::Relative)
            .unwrap();

        assert_eq!(
            prompter.prompts.iter().filter(|p| *p == "Folders:").count(),
            2
        );
    }

    #[test]
    fn test_prompt_failure_propagates() {
        let dir = project("{}");

        let mut prompter = ScriptedPrompter::default();
        let engine = SpecifierRewriter::new();
        let result = Orchestrator::new(ConfigLoader::new(dir.path()), &mut prompter, &engine)
            .run(RewriteMode::Aliased);

        assert!(matches!(result, Err(OrchestratorError::Prompt(_))));
    }
}
