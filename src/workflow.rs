//! The fixed commit, push, and rebase sequence.
//!
//! Steps run strictly in order and the first failure ends the run. Nothing
//! already done is undone: a failed rebase, for example, leaves the
//! repository checked out on the target branch.

use crate::backup;
use crate::banner::print_banner;
use crate::error::{GrebaseError, Result};
use crate::git::{self, GitRunner};
use crate::params::WorkflowParameters;

use console::style;

/// One git operation in the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Create a numbered backup of the branch.
    Backup(String),
    Add(Vec<String>),
    Commit(String),
    /// Push and set the upstream of the branch.
    PushUpstream(String),
    Checkout(String),
    /// Rebase the current branch onto the given one.
    Rebase(String),
    Push(String),
}

impl Step {
    /// Human-readable summary used in the banner and step headers.
    pub fn describe(&self) -> String {
        match self {
            Step::Backup(branch) => format!("Back up {}", branch),
            Step::Add(files) => format!("Stage {}", files.join(" ")),
            Step::Commit(message) => format!("Commit \"{}\"", message),
            Step::PushUpstream(branch) => format!("Push {} to origin with upstream tracking", branch),
            Step::Checkout(branch) => format!("Check out {}", branch),
            Step::Rebase(branch) => format!("Rebase onto {}", branch),
            Step::Push(branch) => format!("Push {} to origin", branch),
        }
    }

    fn apply<G: GitRunner>(&self, git: &mut G) -> Result<()> {
        match self {
            Step::Backup(branch) => backup::create_backup(git, branch).map(|_| ()),
            Step::Add(files) => git::add(git, files),
            Step::Commit(message) => git::commit(git, message),
            Step::PushUpstream(branch) => git::push_set_upstream(git, branch),
            Step::Checkout(branch) => git::checkout(git, branch),
            Step::Rebase(branch) => git::rebase(git, branch),
            Step::Push(branch) => git::push(git, branch),
        }
    }
}

/// Lists the steps a run with `params` will perform, in execution order.
pub fn plan(params: &WorkflowParameters) -> Vec<Step> {
    let mut steps = Vec::new();
    if params.backup_feature_branch {
        steps.push(Step::Backup(params.feature_branch.clone()));
    }
    if params.backup_target_branch {
        steps.push(Step::Backup(params.target_branch.clone()));
    }
    steps.push(Step::Add(params.files_to_add.clone()));
    steps.push(Step::Commit(params.commit_message.clone()));
    steps.push(Step::PushUpstream(params.feature_branch.clone()));
    steps.push(Step::Checkout(params.target_branch.clone()));
    steps.push(Step::Rebase(params.feature_branch.clone()));
    steps.push(Step::Push(params.target_branch.clone()));
    steps
}

/// Verifies the working directory is a git work tree and the required
/// parameters are present. Runs only read-only queries.
pub fn check_preconditions<G: GitRunner>(git: &mut G, params: &WorkflowParameters) -> Result<()> {
    if !git::is_inside_work_tree(git) {
        return Err(GrebaseError::NotARepository);
    }
    params.validate()
}

/// Runs every step of `steps` in order, stopping at the first failure.
pub fn execute<G: GitRunner>(git: &mut G, steps: &[Step]) -> Result<()> {
    let total = steps.len();
    for (i, step) in steps.iter().enumerate() {
        println!(
            "{}",
            style(format!("[{}/{}] {}", i + 1, total, step.describe()))
                .cyan()
                .bold()
        );
        log::info!("step {}/{}: {:?}", i + 1, total, step);
        step.apply(git)?;
    }
    Ok(())
}

/// Checks preconditions, shows the plan, then executes it.
///
/// `dry_run` only changes the banner; whether commands really run is up to
/// the runner passed in.
pub fn run<G: GitRunner>(git: &mut G, params: &WorkflowParameters, dry_run: bool) -> Result<()> {
    check_preconditions(git, params)?;

    let steps = plan(params);
    print_banner(params, &steps, dry_run);
    execute(git, &steps)?;

    println!("{}", style("✅ Process completed!").green().bold());
    Ok(())
}
