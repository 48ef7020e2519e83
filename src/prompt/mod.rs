//! Interactive input
//!
//! The tracker talks to the user only through [`Prompter`], so the whole menu
//! flow can be driven by a script in tests and by `inquire` in the terminal.

pub mod terminal;

use crate::error::{PromptError, PromptResult};

pub use terminal::TerminalPrompter;

/// User-facing input and output
pub trait Prompter {
    /// Present `options` and return the index of the one picked
    ///
    /// # Errors
    /// `PromptError::Cancelled` on Escape, `PromptError::Interrupted` on Ctrl+C
    fn select(&mut self, message: &str, options: &[String]) -> PromptResult<usize>;

    /// Read one line of free text
    ///
    /// # Errors
    /// Same as [`Prompter::select`]
    fn input(&mut self, message: &str) -> PromptResult<String>;

    /// Show an informational line (results, confirmations)
    fn say(&mut self, text: &str);

    /// Show a problem (failed action, rejected input)
    fn warn(&mut self, text: &str);
}

/// One entry of a closed selection list
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ask the user to pick one of `choices` and return its value.
///
/// Only values from the presented set can come back; an index outside it is
/// rejected rather than trusted.
pub fn select_choice<P, T>(prompter: &mut P, message: &str, choices: &[Choice<T>]) -> PromptResult<T>
where
    P: Prompter + ?Sized,
    T: Clone,
{
    let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let index = prompter.select(message, &labels)?;
    choices
        .get(index)
        .map(|c| c.value.clone())
        .ok_or(PromptError::InvalidSelection(index))
}
