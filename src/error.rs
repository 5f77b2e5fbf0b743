use thiserror::Error;

/// Every way a `grebase` run can fail.
///
/// None of these are recovered from: the CLI prints the error and exits
/// non-zero, leaving the repository in whatever state the last completed
/// git command left it.
#[derive(Error, Debug)]
pub enum GrebaseError {
    #[error("`git` not found in PATH.")]
    GitNotFound,

    #[error("Current directory is not a git repository.")]
    NotARepository,

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Error reading input: {0}")]
    Prompt(String),

    #[error("Error executing command `{command}`: {reason}")]
    Command { command: String, reason: String },
}

pub type Result<T> = std::result::Result<T, GrebaseError>;
