//! Terminal prompts backed by `inquire`

use crate::error::{PromptError, PromptResult};
use crate::prompt::Prompter;
use inquire::{InquireError, Select, Text};

/// Rows visible in a selection list before it scrolls
const PAGE_SIZE: usize = 10;

/// Prompts on the controlling terminal; output goes to stdout/stderr
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, options: &[String]) -> PromptResult<usize> {
        Select::new(message, options.to_vec())
            .with_page_size(PAGE_SIZE)
            .raw_prompt()
            .map(|picked| picked.index)
            .map_err(map_inquire_error)
    }

    fn input(&mut self, message: &str) -> PromptResult<String> {
        Text::new(message).prompt().map_err(map_inquire_error)
    }

    fn say(&mut self, text: &str) {
        println!("{}", text);
    }

    fn warn(&mut self, text: &str) {
        eprintln!("{}", text);
    }
}

fn map_inquire_error(err: InquireError) -> PromptError {
    match err {
        InquireError::OperationCanceled => PromptError::Cancelled,
        InquireError::OperationInterrupted => PromptError::Interrupted,
        other => PromptError::Terminal(other.to_string()),
    }
}
