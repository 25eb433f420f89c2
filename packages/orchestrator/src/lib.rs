//! Interactive import rewrite workflow for alias-hq.
//!
//! The [`Orchestrator`] walks the user through one session:
//!
//! 1. Select the folders to process
//! 2. Detect component files (`.vue`, `.svelte`) and widen the extensions
//! 3. Choose the module roots to alias (aliased mode only)
//! 4. Review the choices and optionally save them to `package.json`
//! 5. Preview, commit, show the config, restart or go back
//!
//! Questions go through the [`Prompter`] trait and file changes through an
//! [`alias_hq_rewrite::RewriteEngine`], so the workflow runs unchanged
//! against a terminal or a scripted test double.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod orchestrator;
mod prompter;
mod report;

pub use error::OrchestratorError;
pub use orchestrator::{Answers, COMPONENT_EXTENSIONS, NextAction, Orchestrator, Outcome};
pub use prompter::Prompter;
pub use report::{NO_ALIASES, alias_label, module_labels, render_choices, render_config, render_summary};
