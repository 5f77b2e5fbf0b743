//! # grebase
//!
//! A CLI tool that integrates a feature branch in one step.
//!
//! It runs a fixed git sequence, stopping at the first failure:
//! - Optionally create numbered backup branches (`<branch>-backup-<n>`)
//! - Stage the given paths and commit them
//! - Push the feature branch with upstream tracking
//! - Check out the target branch, rebase it onto the feature branch, push it
//!
//! ## Usage
//!
//! ```bash
//! # Flag mode
//! grebase --feature-branch=my-feature --commit="My commit message"
//!
//! # Interactive mode: prompt for every value
//! grebase --interactive
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface and main entry point
//! - [`params`] - Workflow parameters, defaults and validation
//! - [`prompt`] - Interactive parameter collection
//! - [`git`] - Git command wrappers and the runner seam
//! - [`backup`] - Backup branch naming
//! - [`workflow`] - The ordered step sequence
//! - [`banner`] - Plan summary banner
//! - [`error`] - Error type

pub mod backup;
pub mod banner;
pub mod cli;
pub mod error;
pub mod git;
pub mod params;
pub mod prompt;
pub mod workflow;
