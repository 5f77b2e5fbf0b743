use crate::error::Result;
use crate::git::{self, DryRunGit, SystemGit};
use crate::params::WorkflowParameters;
use crate::prompt::{self, DialoguerStringPrompter, LinePrompter};
use crate::workflow;

use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use console::{Term, style};
use std::ffi::OsString;
use std::io::IsTerminal;

const AFTER_HELP: &str = "\
This tool automates the git rebase strategy for updating git repositories:
it stages and commits your changes, pushes the feature branch, checks out the
target branch, rebases it onto the feature branch and pushes the result.

Example:
    grebase --feature-branch=my-feature --commit=\"My commit message\" --add-file=\"jenkins/plugins jenkins/testfile\"

Interactive mode:
    grebase --interactive";

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "grebase",
    version,
    about = "Commit, push and rebase a feature branch onto a target branch in one step",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Name of the feature branch
    #[arg(long, value_name = "NAME", default_value = "", hide_default_value = true)]
    pub feature_branch: String,

    /// Name of the target branch
    #[arg(long, value_name = "NAME", default_value = "master")]
    pub target_branch: String,

    /// Commit message
    #[arg(long, value_name = "MESSAGE", default_value = "", hide_default_value = true)]
    pub commit: String,

    /// Files or directories to add to git, separated by spaces
    #[arg(long, value_name = "PATHS", default_value = ".")]
    pub add_file: String,

    /// Create a backup of the feature branch before rebasing
    #[arg(long)]
    pub backup_feature_branch: bool,

    /// Create a backup of the target branch before rebasing
    #[arg(long)]
    pub backup_target_branch: bool,

    /// Prompt for every value instead of reading flags
    #[arg(
        long,
        conflicts_with_all = [
            "feature_branch",
            "target_branch",
            "commit",
            "add_file",
            "backup_feature_branch",
            "backup_target_branch",
        ]
    )]
    pub interactive: bool,

    /// Print the mutating git commands instead of running them
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parameters given through flags, with defaults applied.
    pub fn parameters(&self) -> WorkflowParameters {
        WorkflowParameters::new(
            &self.feature_branch,
            &self.target_branch,
            &self.commit,
            &self.add_file,
            self.backup_feature_branch,
            self.backup_target_branch,
        )
    }
}

/// Reports whether any option was typed on the command line.
///
/// Defaults do not count, so `grebase` alone shows usage while
/// `grebase --target-branch=master` proceeds to validation.
pub(crate) fn any_flag_given(matches: &ArgMatches) -> bool {
    matches
        .ids()
        .any(|id| matches.value_source(id.as_str()) == Some(ValueSource::CommandLine))
}

/// Prompts for parameters, using dialoguer on a terminal and plain line
/// reads when stdin is piped.
fn acquire_interactively() -> Result<WorkflowParameters> {
    if std::io::stdin().is_terminal() && Term::stderr().is_term() {
        prompt::ask_parameters(&mut DialoguerStringPrompter)
    } else {
        log::debug!("stdin is not a terminal; reading answers line by line");
        prompt::ask_parameters(&mut LinePrompter::stdin())
    }
}

fn run(cli: &Cli) -> Result<()> {
    git::ensure_installed()?;

    let params = if cli.interactive {
        acquire_interactively()?
    } else {
        cli.parameters()
    };
    log::debug!("parameters: {:?}", params);

    if cli.dry_run {
        workflow::run(&mut DryRunGit::new(SystemGit), &params, true)
    } else {
        workflow::run(&mut SystemGit, &params, false)
    }
}

/// CLI entry point over an explicit argument list.
///
/// Returns `Ok(exit_code)` when the run finished or usage was shown, and
/// `Err(())` after printing an error.
///
/// # Exit Codes
///
/// * `0` – Workflow completed, or no options were given and usage was printed.
/// * `2` – The arguments could not be parsed.
/// * Non-zero – Any validation or git failure (via `Err(())`).
pub fn entry_from<I, T>(args: I) -> std::result::Result<i32, ()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = Cli::command();
    let matches = match command.try_get_matches_from_mut(args) {
        Ok(m) => m,
        Err(e) => {
            let _ = e.print();
            return Ok(e.exit_code());
        }
    };

    if !any_flag_given(&matches) {
        let _ = command.print_help();
        return Ok(0);
    }

    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Ok(e.exit_code());
        }
    };

    match run(&cli) {
        Ok(()) => Ok(0),
        Err(e) => {
            eprintln!("{}", style(format!("Error: {}", e)).red().bold());
            Err(())
        }
    }
}

/// Main CLI entry point for `grebase`, reading the process arguments.
pub fn entry() -> std::result::Result<i32, ()> {
    entry_from(std::env::args_os())
}
