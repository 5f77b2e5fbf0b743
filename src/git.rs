use crate::error::{GrebaseError, Result};

use console::style;
use std::process::{Command, Stdio};

/// Abstraction over how `git` is invoked.
///
/// The workflow only talks to git through this trait, so it can be driven
/// by the real binary, by a dry-run wrapper, or by a scripted fake in tests.
pub trait GitRunner {
    /// Runs `git <args>` with its output streamed to the terminal.
    ///
    /// # Returns
    /// `Ok(())` if git exited with status `0`, otherwise an error describing
    /// the command and why it failed.
    fn run(&mut self, args: &[&str]) -> Result<()>;

    /// Runs `git <args>` with all output discarded and reports only whether
    /// it exited successfully. Failure to start counts as `false`.
    fn succeeds(&mut self, args: &[&str]) -> bool;

    /// Runs `git <args>` and returns its trimmed standard output.
    fn output(&mut self, args: &[&str]) -> Result<String>;
}

/// Renders `git <args>` for messages and logs.
pub fn display_command(args: &[&str]) -> String {
    let mut rendered = String::from("git");
    for arg in args {
        rendered.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            rendered.push_str(&format!("\"{}\"", arg));
        } else {
            rendered.push_str(arg);
        }
    }
    rendered
}

/// Verifies that a `git` executable is reachable through `PATH`.
pub fn ensure_installed() -> Result<()> {
    match which::which("git") {
        Ok(path) => {
            log::debug!("using git at {}", path.display());
            Ok(())
        }
        Err(_) => Err(GrebaseError::GitNotFound),
    }
}

/// [`GitRunner`] backed by the `git` binary on `PATH`.
pub struct SystemGit;

impl SystemGit {
    fn command(args: &[&str]) -> Command {
        log::debug!("exec: {}", display_command(args));
        let mut cmd = Command::new("git");
        cmd.args(args);
        cmd
    }
}

impl GitRunner for SystemGit {
    fn run(&mut self, args: &[&str]) -> Result<()> {
        let mut cmd = Self::command(args);
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd.status().map_err(|e| GrebaseError::Command {
            command: display_command(args),
            reason: e.to_string(),
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(GrebaseError::Command {
                command: display_command(args),
                reason: match status.code() {
                    Some(code) => format!("exit status {}", code),
                    None => String::from("terminated by signal"),
                },
            })
        }
    }

    fn succeeds(&mut self, args: &[&str]) -> bool {
        let mut cmd = Self::command(args);
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());
        match cmd.status() {
            Ok(status) => status.success(),
            Err(_) => false,
        }
    }

    fn output(&mut self, args: &[&str]) -> Result<String> {
        let mut cmd = Self::command(args);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let out = cmd.output().map_err(|e| GrebaseError::Command {
            command: display_command(args),
            reason: e.to_string(),
        })?;

        if out.status.success() {
            Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
        } else {
            Err(GrebaseError::Command {
                command: display_command(args),
                reason: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            })
        }
    }
}

/// Wraps another runner and prints mutating commands instead of running them.
///
/// Queries (`succeeds`, `output`) are read-only and still reach the inner
/// runner, so repository detection and backup probing behave exactly as in a
/// real run.
pub struct DryRunGit<G> {
    inner: G,
}

impl<G: GitRunner> DryRunGit<G> {
    pub fn new(inner: G) -> Self {
        DryRunGit { inner }
    }

    /// The wrapped runner.
    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: GitRunner> GitRunner for DryRunGit<G> {
    fn run(&mut self, args: &[&str]) -> Result<()> {
        println!("{}", style(format!("[dry-run] {}", display_command(args))).dim());
        Ok(())
    }

    fn succeeds(&mut self, args: &[&str]) -> bool {
        self.inner.succeeds(args)
    }

    fn output(&mut self, args: &[&str]) -> Result<String> {
        self.inner.output(args)
    }
}

/// Asks git whether the current directory belongs to a work tree.
///
/// Uses `git rev-parse --is-inside-work-tree` rather than looking for a
/// `.git` directory, which is a file in linked worktrees and submodules.
pub fn is_inside_work_tree<G: GitRunner>(git: &mut G) -> bool {
    match git.output(&["rev-parse", "--is-inside-work-tree"]) {
        Ok(out) => out.trim() == "true",
        Err(_) => false,
    }
}

/// Reports whether `git rev-parse --verify <name>` resolves.
///
/// Any error is treated as "does not exist".
pub fn branch_exists<G: GitRunner>(git: &mut G, name: &str) -> bool {
    git.succeeds(&["rev-parse", "--verify", name])
}

/// Runs `git branch <name> <start_point>`.
pub fn create_branch<G: GitRunner>(git: &mut G, name: &str, start_point: &str) -> Result<()> {
    git.run(&["branch", name, start_point])
}

/// Runs `git add <files...>`.
pub fn add<G: GitRunner>(git: &mut G, files: &[String]) -> Result<()> {
    let mut args = vec!["add"];
    args.extend(files.iter().map(String::as_str));
    git.run(&args)
}

/// Runs `git commit -m <message>`.
pub fn commit<G: GitRunner>(git: &mut G, message: &str) -> Result<()> {
    git.run(&["commit", "-m", message])
}

/// Runs `git push --set-upstream origin <branch>`.
pub fn push_set_upstream<G: GitRunner>(git: &mut G, branch: &str) -> Result<()> {
    git.run(&["push", "--set-upstream", "origin", branch])
}

/// Runs `git checkout <branch>`.
pub fn checkout<G: GitRunner>(git: &mut G, branch: &str) -> Result<()> {
    git.run(&["checkout", branch])
}

/// Runs `git rebase <branch>`, rebasing the current branch onto it.
pub fn rebase<G: GitRunner>(git: &mut G, branch: &str) -> Result<()> {
    git.run(&["rebase", branch])
}

/// Runs `git push origin <branch>`.
pub fn push<G: GitRunner>(git: &mut G, branch: &str) -> Result<()> {
    git.run(&["push", "origin", branch])
}


#[cfg(test)]
mod tests {
    use super::fake::FakeGit;
    use super::*;

    #[test]
    fn display_command_quotes_arguments_with_spaces() {
        let s = display_command(&["commit", "-m", "fix bug"]);
        assert_eq!(s, "git commit -m \"fix bug\"");
    }

    #[test]
    fn display_command_plain_arguments_unquoted() {
        let s = display_command(&["push", "origin", "master"]);
        assert_eq!(s, "git push origin master");
    }

    #[test]
    fn work_tree_detected_from_query() {
        let mut git = FakeGit::new();
        assert!(is_inside_work_tree(&mut git));
        assert_eq!(git.calls, vec![vec!["rev-parse", "--is-inside-work-tree"]]);
    }

    #[test]
    fn query_error_means_not_a_work_tree() {
        let mut git = FakeGit::new();
        git.inside_work_tree = false;
        assert!(!is_inside_work_tree(&mut git));
    }

    #[test]
    fn add_passes_every_file() {
        let mut git = FakeGit::new();
        let files = vec![String::from("jenkins/plugins"), String::from("jenkins/testfile")];
        add(&mut git, &files).expect("add failed");
        assert_eq!(git.calls, vec![vec!["add", "jenkins/plugins", "jenkins/testfile"]]);
    }

    #[test]
    fn dry_run_skips_mutations_but_forwards_queries() {
        let mut git = DryRunGit::new(FakeGit::with_branches(&["main"]));
        commit(&mut git, "msg").expect("dry-run commit failed");
        assert!(branch_exists(&mut git, "main"));
        assert!(!branch_exists(&mut git, "other"));
        assert_eq!(
            git.inner.calls,
            vec![
                vec!["rev-parse", "--verify", "main"],
                vec!["rev-parse", "--verify", "other"],
            ]
        );
    }

    #[test]
    fn real_git_outside_repository_is_not_a_work_tree() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut cmd_git = CwdGit(dir.path().to_path_buf());
        assert!(!is_inside_work_tree(&mut cmd_git));
    }

    /// Runs real git inside a given directory without touching the process cwd.
    struct CwdGit(std::path::PathBuf);

    impl GitRunner for CwdGit {
        fn run(&mut self, _args: &[&str]) -> Result<()> {
            unreachable!()
        }

        fn succeeds(&mut self, _args: &[&str]) -> bool {
            unreachable!()
        }

        fn output(&mut self, args: &[&str]) -> Result<String> {
            let out = Command::new("git")
                .args(args)
                .current_dir(&self.0)
                .env("GIT_CEILING_DIRECTORIES", self.0.parent().unwrap_or(self.0.as_path()))
                .stderr(Stdio::null())
                .output()
                .map_err(|_| GrebaseError::GitNotFound)?;
            if out.status.success() {
                Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
            } else {
                Err(GrebaseError::NotARepository)
            }
        }
    }
}
