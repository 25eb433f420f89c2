//! Text rendering for workflow output.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt::Write as _;
use std::path::Path;

use alias_hq_config::{Alias, AliasCatalog, LoadedConfig, relative_path};
use alias_hq_rewrite::{RewriteMode, RewriteOptions, RewriteStats};
use colored::Colorize;

use crate::orchestrator::Answers;

/// Message shown when a project declares no aliases.
pub const NO_ALIASES: &str = "No aliases configured: skipping source code update!";

/// Width of the widest alias name.
fn alias_width<'a>(aliases: impl IntoIterator<Item = &'a Alias>) -> usize {
    aliases
        .into_iter()
        .map(|a| a.alias.len())
        .max()
        .unwrap_or(0)
}

/// One aligned `alias - path` line, as used in lists and module prompts.
#[must_use]
pub fn alias_label(alias: &Alias, width: usize) -> String {
    format!(
        "{:<width$}  {}",
        alias.alias,
        format!("- {}", alias.relative_path).dimmed()
    )
}

/// Labels for every alias, in catalog key order.
#[must_use]
pub fn module_labels(catalog: &AliasCatalog) -> Vec<String> {
    let width = alias_width(catalog.lookup());
    catalog
        .keys()
        .iter()
        .filter_map(|key| catalog.get(key))
        .map(|alias| alias_label(alias, width))
        .collect()
}

/// Render the selection the user is about to run.
#[must_use]
pub fn render_choices(answers: &Answers, options: &RewriteOptions) -> String {
    let mut out = String::new();

    if answers.mode == RewriteMode::Relative {
        out.push_str("Choices\n\n");
    } else {
        out.push('\n');
    }

    out.push_str("  Paths:\n");
    for path in &answers.paths {
        let _ = writeln!(out, "    {} {}", "•".dimmed(), path.rel_path.cyan());
    }

    if !answers.modules.is_empty() {
        out.push_str("  Module roots:\n");
        let width = alias_width(&answers.modules);
        for alias in &answers.modules {
            let _ = writeln!(out, "    {} {}", "•".dimmed(), alias_label(alias, width));
        }
    }

    out.push_str("  Options:\n");
    let _ = writeln!(
        out,
        "    {} extensions: {}",
        "•".dimmed(),
        options.extensions_label().yellow()
    );
    let _ = writeln!(
        out,
        "    {} parser: {}",
        "•".dimmed(),
        options.parser_label().yellow()
    );

    out
}

/// Render the totals of a finished run.
#[must_use]
pub fn render_summary(stats: &RewriteStats, root: &Path) -> String {
    let mut out = String::new();
    let verb = if stats.dry { "would be updated" } else { "updated" };

    if stats.dry {
        let _ = writeln!(out, "\n{}", "Preview (no files were changed)".bold());
    } else {
        let _ = writeln!(out, "\n{}", "Update complete".bold());
    }

    for path in &stats.updated {
        let _ = writeln!(out, "  {} {}", "✓".green(), relative_path(root, path));
    }
    for (path, message) in &stats.errors {
        let _ = writeln!(
            out,
            "  {} {} {}",
            "✗".red(),
            relative_path(root, path),
            message.dimmed()
        );
    }

    let _ = writeln!(
        out,
        "\n  {} {verb}, {} unchanged, {} errors",
        plural(stats.touched(), "file"),
        stats.unchanged,
        stats.errored()
    );

    out
}

/// Render the resolved configuration and its aliases.
#[must_use]
pub fn render_config(loaded: &LoadedConfig, catalog: &AliasCatalog) -> String {
    let mut out = String::new();
    let model = &loaded.model;

    let _ = writeln!(out, "\n{}", "Config".bold());
    let _ = writeln!(out, "  rootUrl: {}", model.root_url.display().to_string().cyan());
    let _ = writeln!(out, "  baseUrl: {}", model.base_url.cyan());
    let config_file = loaded
        .config_path
        .as_deref()
        .map_or_else(|| "none".to_string(), |p| relative_path(&model.root_url, p));
    let _ = writeln!(out, "  configFile: {}", config_file.cyan());
    let _ = writeln!(out, "  prefix: {}", loaded.settings.prefix.cyan());

    if !loaded.settings.folders.is_empty() {
        let _ = writeln!(out, "  folders: {}", loaded.settings.folders.join(", "));
    }
    if !loaded.settings.modules.is_empty() {
        let _ = writeln!(out, "  modules: {}", loaded.settings.modules.join(", "));
    }

    let _ = writeln!(out, "\n{}", format!("Aliases ({})", catalog.len()).bold());
    for label in module_labels(catalog) {
        let _ = writeln!(out, "  {} {label}", "•".dimmed());
    }

    out
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use alias_hq_config::ConfigModel;
    use alias_hq_rewrite::{FileResult, FileStatus};

    fn catalog() -> AliasCatalog {
        let mut model = ConfigModel::empty(PathBuf::from("/proj"));
        model.base_url = "src".to_string();
        model
            .paths
            .insert("@app/*".to_string(), vec!["app/*".to_string()]);
        model
            .paths
            .insert("@components/*".to_string(), vec!["app/components/*".to_string()]);
        AliasCatalog::build(&model)
    }

    #[test]
    fn test_module_labels_follow_key_order() {
        colored::control::set_override(false);

        let labels = module_labels(&catalog());

        assert_eq!(
            labels,
            vec![
                format!("{:<11}  - src/app", "@app"),
                "@components  - src/app/components".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_counts() {
        colored::control::set_override(false);
        let mut stats = RewriteStats::default();
        stats.reset(true);
        stats.fold(&[
            FileResult {
                path: PathBuf::from("/proj/src/a.ts"),
                status: FileStatus::Ok,
                changes: 2,
            },
            FileResult {
                path: PathBuf::from("/proj/src/b.ts"),
                status: FileStatus::Skip,
                changes: 0,
            },
        ]);

        let summary = render_summary(&stats, Path::new("/proj"));

        assert!(summary.contains("Preview"));
        assert!(summary.contains("src/a.ts"));
        assert!(summary.contains("1 file would be updated, 1 unchanged, 0 errors"));
    }
}
