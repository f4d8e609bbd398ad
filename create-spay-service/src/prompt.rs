//! Interactive prompt abstraction
//!
//! The config builder only talks to [`Prompt`], so it can run against a real
//! terminal ([`DialoguerPrompt`]) or a fixed list of answers
//! ([`ScriptedPrompt`]).

use std::cell::RefCell;
use std::collections::VecDeque;

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input};

/// Source of user answers
pub trait Prompt {
    /// Ask for a line of text; `default` is shown and may be returned on empty input
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn input(&self, label: &str, default: Option<&str>) -> Result<String>;

    /// Ask a yes/no question
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&self, label: &str, default: bool) -> Result<bool>;

    /// Show an informational hint
    fn notice(&self, message: &str);

    /// Show a rejected-answer message
    fn warn(&self, message: &str);
}

/// Terminal prompt backed by `dialoguer`
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    /// Create a new terminal prompt
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Prompt for DialoguerPrompt {
    fn input(&self, label: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(style(label).blue().to_string())
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input
            .interact_text()
            .with_context(|| format!("Failed to read answer for '{label}'"))
    }

    fn confirm(&self, label: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(style(label).blue().to_string())
            .default(default)
            .interact()
            .with_context(|| format!("Failed to read answer for '{label}'"))
    }

    fn notice(&self, message: &str) {
        println!("\n{} {message}", style("💡").yellow());
    }

    fn warn(&self, message: &str) {
        println!("{} {}", style("✗").red().bold(), style(message).red());
    }
}

/// Prompt that replays pre-recorded answers and records what it was asked
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<String>>,
    confirmations: RefCell<VecDeque<bool>>,
    asked: RefCell<Vec<String>>,
    messages: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    /// Create a prompt answering text questions in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Queue answers for yes/no questions
    #[must_use]
    pub fn with_confirmations(self, confirmations: &[bool]) -> Self {
        self.confirmations.borrow_mut().extend(confirmations);
        self
    }

    /// Labels of every text question asked so far
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    /// Notices and warnings shown so far
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn input(&self, label: &str, _default: Option<&str>) -> Result<String> {
        self.asked.borrow_mut().push(label.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .with_context(|| format!("No scripted answer left for '{label}'"))
    }

    fn confirm(&self, label: &str, default: bool) -> Result<bool> {
        self.asked.borrow_mut().push(label.to_string());
        Ok(self.confirmations.borrow_mut().pop_front().unwrap_or(default))
    }

    fn notice(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_prompt_replays_in_order() {
        let prompt = ScriptedPrompt::new(["first", "second"]);
        assert_eq!(prompt.input("One", None).unwrap(), "first");
        assert_eq!(prompt.input("Two", Some("x")).unwrap(), "second");
        assert!(prompt.input("Three", None).is_err());
        assert_eq!(prompt.asked(), vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_scripted_confirm_falls_back_to_default() {
        let prompt = ScriptedPrompt::new(Vec::<String>::new()).with_confirmations(&[false]);
        assert!(!prompt.confirm("Continue?", true).unwrap());
        assert!(prompt.confirm("Continue?", true).unwrap());
    }
}
