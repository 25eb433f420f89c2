//! Interactive prompts using dialoguer.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io;

use alias_hq_orchestrator::Prompter;
use dialoguer::{Confirm, Input, MultiSelect, Select};

/// Prompter backed by the terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str, default: &str) -> io::Result<String> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()?;

        Ok(value)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> io::Result<usize> {
        Ok(Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?)
    }

    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> io::Result<Vec<usize>> {
        Ok(MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .defaults(defaults)
            .max_length(20)
            .interact()?)
    }

    fn print(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ToAliases,
    ToRelative,
    ShowConfig,
    ShowPlugin,
    Exit,
}

impl MenuChoice {
    const ALL: [Self; 5] = [
        Self::ToAliases,
        Self::ToRelative,
        Self::ShowConfig,
        Self::ShowPlugin,
        Self::Exit,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::ToAliases => "Convert paths to aliases",
            Self::ToRelative => "Convert aliases to relative paths",
            Self::ShowConfig => "Show config",
            Self::ShowPlugin => "Show plugin output",
            Self::Exit => "Exit",
        }
    }
}

/// Show the main menu.
///
/// # Errors
///
/// * If the user cancels the selection
pub fn main_menu() -> io::Result<MenuChoice> {
    let items: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();

    let index = Select::new()
        .with_prompt("What do you want to do?")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(MenuChoice::ALL
        .get(index)
        .copied()
        .unwrap_or(MenuChoice::Exit))
}

/// Pick a plugin and one of its option variants.
///
/// # Arguments
///
/// * `plugins` - Plugin names with their variant labels
///
/// Returns the plugin index and the variant index.
///
/// # Errors
///
/// * If the user cancels the selection
pub fn select_plugin(plugins: &[(String, Vec<String>)]) -> io::Result<(usize, usize)> {
    let names: Vec<&str> = plugins.iter().map(|(name, _)| name.as_str()).collect();

    let plugin = Select::new()
        .with_prompt("Plugin")
        .items(&names)
        .default(0)
        .interact()?;

    let variants = plugins.get(plugin).map_or(&[][..], |(_, v)| v.as_slice());
    if variants.len() <= 1 {
        return Ok((plugin, 0));
    }

    let variant = Select::new()
        .with_prompt("Format")
        .items(variants)
        .default(0)
        .interact()?;

    Ok((plugin, variant))
}
