//! Numbered backup branches.
//!
//! A backup of `feat` is named `feat-backup-<n>` with the smallest `n >= 1`
//! that is not already taken. The probe is a linear scan with no upper bound,
//! so its cost grows with the number of existing backups.

use crate::error::Result;
use crate::git::{self, GitRunner};

/// Formats the `n`th backup name for `branch`.
pub fn backup_name(branch: &str, n: u32) -> String {
    format!("{}-backup-{}", branch, n)
}

/// Returns the first backup name for `branch` that does not resolve.
pub fn next_backup_name<G: GitRunner>(git: &mut G, branch: &str) -> String {
    let mut counter = 1;
    let mut candidate = backup_name(branch, counter);
    while git::branch_exists(git, &candidate) {
        counter += 1;
        candidate = backup_name(branch, counter);
    }
    candidate
}

/// Creates a backup branch at the tip of `branch` and returns its name.
///
/// The current checkout is left untouched.
pub fn create_backup<G: GitRunner>(git: &mut G, branch: &str) -> Result<String> {
    let name = next_backup_name(git, branch);
    git::create_branch(git, &name, branch)?;
    log::info!("created backup branch {} from {}", name, branch);
    Ok(name)
}
