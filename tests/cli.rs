use std::path::Path;
use std::process::{Command, Output, Stdio};

fn grebase(dir: &Path, args: &[&str]) -> Output {
    let ceiling = dir.parent().unwrap_or(dir);
    Command::new(env!("CARGO_BIN_EXE_grebase"))
        .args(args)
        .current_dir(dir)
        .env("GIT_CEILING_DIRECTORIES", ceiling)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run grebase")
}

/// Runs git in `dir`, returning trimmed stdout, or `None` when git is
/// unavailable or the command fails.
fn git(dir: &Path, args: &[&str]) -> Option<String> {
    let out = Command::new("git")
        .args(["-c", "user.name=grebase", "-c", "user.email=grebase@example.com", "-c", "commit.gpgsign=false"])
        .args(args)
        .current_dir(dir)
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if out.status.success() {
        Some(String::from_utf8_lossy(&out.stdout).trim().to_string())
    } else {
        None
    }
}

/// Working tree status, branch list and HEAD commit of the repository.
fn repo_state(dir: &Path) -> (String, String, String) {
    (
        git(dir, &["status", "--porcelain"]).expect("git status failed"),
        git(dir, &["branch", "--list"]).expect("git branch failed"),
        git(dir, &["rev-parse", "HEAD"]).expect("git rev-parse failed"),
    )
}

#[test]
fn no_arguments_prints_usage_and_succeeds() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let out = grebase(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--feature-branch"));
    assert!(stdout.contains("grebase --interactive"));
}

#[test]
fn no_arguments_leaves_repository_untouched() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let repo = dir.path();
    if git(repo, &["init", "--quiet"]).is_none() {
        eprintln!("git unavailable; skipping");
        return;
    }
    git(repo, &["commit", "--quiet", "--allow-empty", "-m", "initial"]).expect("initial commit failed");
    std::fs::write(repo.join("pending.txt"), "not staged\n").expect("failed to write file");

    let before = repo_state(repo);
    let out = grebase(repo, &[]);
    let after = repo_state(repo);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(before, after);
    assert!(after.0.contains("?? pending.txt"));
}

#[test]
fn outside_a_repository_fails_before_any_step() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let out = grebase(dir.path(), &["--feature-branch=feat-x", "--commit=fix bug"]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Current directory is not a git repository.")
            || stderr.contains("`git` not found in PATH."),
        "unexpected stderr: {}",
        stderr
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("Process completed!"));
}

#[test]
fn interactive_without_input_fails() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let out = grebase(dir.path(), &["--interactive"]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Error reading input: unexpected end of input")
            || stderr.contains("`git` not found in PATH."),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn interactive_conflicts_with_flags() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let out = grebase(dir.path(), &["--interactive", "--feature-branch=feat-x"]);

    assert_eq!(out.status.code(), Some(2));
}
