//! alias-hq CLI entry point.
//!
//! A tool for managing path aliases and converting imports between relative
//! and aliased forms.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod interactive;
mod output;
mod progress;

use std::env;

use alias_hq_config::{AliasCatalog, ConfigLoader};
use alias_hq_orchestrator::{Orchestrator, Outcome, render_config};
use alias_hq_plugins::{PluginExample, PluginOptions, PluginRef, PluginRegistry};
use alias_hq_rewrite::RewriteMode;
use clap::Parser;
use serde_json::Value;

use args::{Args, Command};
use interactive::{MenuChoice, TerminalPrompter};
use progress::ProgressEngine;

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(&args) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = env::current_dir()?;
    log::debug!("Project directory: {}", cwd.display());
    let mut loader = ConfigLoader::new(&cwd);
    if let Some(ref file) = args.config_file {
        loader = loader.with_config_file(file);
    }

    match &args.command {
        None => menu(&loader, args),
        Some(Command::Aliases) => rewrite(&loader, args, RewriteMode::Aliased),
        Some(Command::Relative) => rewrite(&loader, args, RewriteMode::Relative),
        Some(Command::Get { plugin, options }) => {
            let options: PluginOptions = options
                .iter()
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect();
            print_plugin_output(&loader, plugin, &options)
        }
        Some(Command::Plugins) => {
            list_plugins();
            Ok(())
        }
        Some(Command::Config) => show_config(&loader),
    }
}

/// Interactive top-level menu, repeated until the user exits.
fn menu(loader: &ConfigLoader, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    output::print_header("Alias HQ");
    output::print_project_info(loader.project_dir());

    loop {
        println!();
        match interactive::main_menu()? {
            MenuChoice::ToAliases => rewrite(loader, args, RewriteMode::Aliased)?,
            MenuChoice::ToRelative => rewrite(loader, args, RewriteMode::Relative)?,
            MenuChoice::ShowConfig => show_config(loader)?,
            MenuChoice::ShowPlugin => {
                let registry = PluginRegistry::new();
                let plugins: Vec<(String, Vec<PluginExample>)> = registry
                    .names()
                    .into_iter()
                    .map(|name| {
                        let examples = registry
                            .builtin(&name)
                            .map_or_else(|| vec![PluginExample::DEFAULT], |p| p.examples.to_vec());
                        (name, examples)
                    })
                    .collect();
                let choices: Vec<(String, Vec<String>)> = plugins
                    .iter()
                    .map(|(name, examples)| {
                        (
                            name.clone(),
                            examples.iter().map(|e| e.label.to_string()).collect(),
                        )
                    })
                    .collect();

                let (plugin, variant) = interactive::select_plugin(&choices)?;
                if let Some((name, examples)) = plugins.get(plugin) {
                    let options = examples
                        .get(variant)
                        .map(PluginExample::to_options)
                        .unwrap_or_default();
                    print_plugin_output(loader, name, &options)?;
                }
            }
            MenuChoice::Exit => return Ok(()),
        }
    }
}

/// Run the rewrite workflow in `mode`.
fn rewrite(
    loader: &ConfigLoader,
    args: &Args,
    mode: RewriteMode,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut prompter = TerminalPrompter;
    let engine = ProgressEngine::new(args.should_show_progress());

    let outcome = Orchestrator::new(loader.clone(), &mut prompter, &engine).run(mode)?;

    match outcome {
        Outcome::Finished {
            last_run: Some(stats),
        } if !stats.dry => output::print_success(stats.touched()),
        Outcome::NoAliases | Outcome::Finished { .. } => {}
    }

    Ok(())
}

/// Print a plugin's output as pretty JSON.
fn print_plugin_output(
    loader: &ConfigLoader,
    plugin: &str,
    options: &PluginOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = loader.load()?;
    if !loaded.model.has_aliases() {
        output::print_warning("No path aliases configured");
    }

    let registry = PluginRegistry::new();
    let result = registry.invoke(PluginRef::Named(plugin), &loaded.model, options)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

/// Print every plugin with its description and option variants.
fn list_plugins() {
    let registry = PluginRegistry::new();
    let plugins: Vec<(String, String, Vec<String>)> = registry
        .names()
        .into_iter()
        .map(|name| {
            let (description, variants) = registry.builtin(&name).map_or_else(
                || ("custom plugin".to_string(), Vec::new()),
                |p| {
                    (
                        p.description.to_string(),
                        p.examples.iter().map(|e| e.label.to_string()).collect(),
                    )
                },
            );
            (name, description, variants)
        })
        .collect();

    output::print_plugin_list(&plugins);
}

/// Print the resolved configuration and alias catalog.
fn show_config(loader: &ConfigLoader) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = loader.load()?;
    if loaded.config_path.is_none() {
        output::print_warning("No jsconfig.json or tsconfig.json with path aliases found");
    }

    let catalog = AliasCatalog::build(&loaded.model);
    println!("{}", render_config(&loaded, &catalog));

    Ok(())
}
