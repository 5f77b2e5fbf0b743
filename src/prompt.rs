use crate::error::{GrebaseError, Result};
use crate::params::{DEFAULT_ADD_PATH, DEFAULT_TARGET_BRANCH, WorkflowParameters};

use dialoguer::{Input, theme::ColorfulTheme};
use std::io::{self, BufRead, Write};

/// Abstraction over a string input prompt.
///
/// Implementors define how a single answer is collected from the user.
/// This trait enables testability by decoupling user input from the logic
/// that consumes it.
pub trait StringPrompter {
    /// Prompt the user for a string input.
    ///
    /// # Parameters
    /// - `prompt`: The message shown to the user.
    /// - `default`: Value returned when the user enters nothing. May be empty.
    ///
    /// # Returns
    /// `Ok(String)` if input is successfully collected, or an `Err(String)` describing the failure.
    fn prompt(&mut self, prompt: &str, default: &str) -> std::result::Result<String, String>;
}

/// `StringPrompter` using `dialoguer::Input` with the `ColorfulTheme`.
///
/// Requires an interactive terminal.
pub struct DialoguerStringPrompter;

impl StringPrompter for DialoguerStringPrompter {
    fn prompt(&mut self, prompt: &str, default: &str) -> std::result::Result<String, String> {
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        match input.interact_text() {
            Ok(v) => Ok(v),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// `StringPrompter` that prints the prompt and reads one line from `reader`.
///
/// Used when standard input is piped, where dialoguer cannot run.
pub struct LinePrompter<R> {
    reader: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(reader: R) -> Self {
        LinePrompter { reader }
    }
}

impl LinePrompter<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        LinePrompter::new(io::stdin().lock())
    }
}

impl<R: BufRead> StringPrompter for LinePrompter<R> {
    fn prompt(&mut self, prompt: &str, default: &str) -> std::result::Result<String, String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}: ", prompt)
            .and_then(|_| stdout.flush())
            .map_err(|e| e.to_string())?;

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(String::from("unexpected end of input")),
            Ok(_) => {
                let answer = line.trim();
                if answer.is_empty() {
                    Ok(default.to_string())
                } else {
                    Ok(answer.to_string())
                }
            }
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Interprets a yes/no answer. Only an exact `yes` counts as consent.
pub fn is_yes(answer: &str) -> bool {
    answer.trim() == "yes"
}

fn ask<P: StringPrompter>(prompter: &mut P, prompt: &str, default: &str) -> Result<String> {
    prompter
        .prompt(prompt, default)
        .map(|v| v.trim().to_string())
        .map_err(GrebaseError::Prompt)
}

/// Collects every workflow parameter by prompting, in a fixed order.
///
/// Blank answers for the target branch and the file list fall back to
/// `master` and `.`; any read failure aborts the whole collection.
pub fn ask_parameters<P: StringPrompter>(prompter: &mut P) -> Result<WorkflowParameters> {
    let feature_branch = ask(prompter, "Enter the name of the feature branch", "")?;

    let target_branch = ask(
        prompter,
        "Enter the name of the target branch (default is master)",
        DEFAULT_TARGET_BRANCH,
    )?;

    let commit_message = ask(prompter, "Enter the commit message", "")?;

    let files = ask(
        prompter,
        "Specify files or directories to add to git (separated by spaces, default is '.')",
        DEFAULT_ADD_PATH,
    )?;

    let backup_feature = ask(
        prompter,
        "Do you want to create a backup of the feature branch before rebasing? (yes/no)",
        "no",
    )?;

    let backup_target = ask(
        prompter,
        "Do you want to create a backup of the target branch before rebasing? (yes/no)",
        "no",
    )?;

    Ok(WorkflowParameters::new(
        &feature_branch,
        &target_branch,
        &commit_message,
        &files,
        is_yes(&backup_feature),
        is_yes(&backup_target),
    ))
}
