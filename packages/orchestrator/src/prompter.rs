//! The prompt boundary of the workflow.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io;

/// Asks the user questions and shows them text.
///
/// Every prompt blocks until answered. An interrupted prompt returns an
/// error, which ends the session.
pub trait Prompter {
    /// Ask for a line of text.
    ///
    /// # Errors
    ///
    /// * If the prompt is interrupted
    fn input(&mut self, prompt: &str, default: &str) -> io::Result<String>;

    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// * If the prompt is interrupted
    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool>;

    /// Pick one item, returning its index.
    ///
    /// # Errors
    ///
    /// * If the prompt is interrupted
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> io::Result<usize>;

    /// Pick any number of items, returning their indices.
    ///
    /// # Arguments
    ///
    /// * `defaults` - Which items start checked, one flag per item
    ///
    /// # Errors
    ///
    /// * If the prompt is interrupted
    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> io::Result<Vec<usize>>;

    /// Show informational text.
    fn print(&mut self, text: &str);
}
