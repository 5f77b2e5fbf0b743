use crate::error::{GrebaseError, Result};

/// Target branch used when none is given.
pub const DEFAULT_TARGET_BRANCH: &str = "master";

/// Path staged when no files are given.
pub const DEFAULT_ADD_PATH: &str = ".";

/// Everything one run of the workflow needs, collected once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowParameters {
    pub feature_branch: String,
    pub target_branch: String,
    pub commit_message: String,
    pub files_to_add: Vec<String>,
    pub backup_feature_branch: bool,
    pub backup_target_branch: bool,
}

impl WorkflowParameters {
    /// Builds parameters from raw option values, applying the defaults.
    ///
    /// A blank `target_branch` becomes [`DEFAULT_TARGET_BRANCH`] and
    /// `add_files` is split with [`split_files`].
    pub fn new(
        feature_branch: &str,
        target_branch: &str,
        commit_message: &str,
        add_files: &str,
        backup_feature_branch: bool,
        backup_target_branch: bool,
    ) -> Self {
        let target_branch = match target_branch.trim() {
            "" => DEFAULT_TARGET_BRANCH.to_string(),
            t => t.to_string(),
        };

        WorkflowParameters {
            feature_branch: feature_branch.trim().to_string(),
            target_branch,
            commit_message: commit_message.to_string(),
            files_to_add: split_files(add_files),
            backup_feature_branch,
            backup_target_branch,
        }
    }

    /// Checks that the feature branch and commit message are present.
    pub fn validate(&self) -> Result<()> {
        if self.feature_branch.is_empty() {
            return Err(GrebaseError::MissingParameter(
                "--feature-branch (name of the feature branch)",
            ));
        }
        if self.commit_message.trim().is_empty() {
            return Err(GrebaseError::MissingParameter("--commit (commit message)"));
        }
        Ok(())
    }
}

/// Splits a space-separated path list, falling back to `["."]` when empty.
///
/// Runs of whitespace never produce empty entries.
pub fn split_files(raw: &str) -> Vec<String> {
    let files: Vec<String> = raw.split_whitespace().map(|s| s.to_string()).collect();
    if files.is_empty() {
        vec![DEFAULT_ADD_PATH.to_string()]
    } else {
        files
    }
}
