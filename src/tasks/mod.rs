//! tasks
//!
//! Post-resolution actions on repositories and scratchpads.
//!
//! # Design
//!
//! A [`Task`] receives an already-resolved target and performs an action on
//! it; tasks never participate in name resolution. All git interactions in
//! grove live here, behind git2. Tasks are synchronous - every operation is
//! ordinary blocking I/O that runs to completion or failure.
//!
//! Tasks that only make sense for repositories (branch creation) are no-ops
//! for scratchpads rather than errors, so sequences can be applied to either
//! target kind.

mod git_init;
mod new_branch;

pub use git_init::GitInit;
pub use new_branch::NewBranch;

use std::path::PathBuf;

use thiserror::Error;

use crate::core::{Repo, Scratchpad};

/// Errors from task execution.
#[derive(Debug, Error)]
pub enum TaskError {
    /// A target directory could not be created.
    #[error("unable to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A git repository could not be opened at the target path.
    #[error("unable to open git repository at '{path}': {source}")]
    OpenRepository { path: PathBuf, source: git2::Error },

    /// A git repository could not be initialized at the target path.
    #[error("unable to initialize git repository at '{path}': {source}")]
    InitRepository { path: PathBuf, source: git2::Error },

    /// A revision could not be resolved to a commit.
    #[error("unable to resolve reference '{reference}': {source}")]
    ResolveReference {
        reference: String,
        source: git2::Error,
    },

    /// Branch creation failed.
    #[error("failed to create branch '{branch}': {source}")]
    CreateBranch { branch: String, source: git2::Error },
}

/// An action applied to a resolved target.
pub trait Task {
    /// Apply this task to a repository.
    fn apply_repo(&self, repo: &Repo) -> Result<(), TaskError>;

    /// Apply this task to a scratchpad.
    fn apply_scratchpad(&self, scratch: &Scratchpad) -> Result<(), TaskError>;
}

/// Runs a list of tasks in order, stopping at the first failure.
pub struct Sequence {
    tasks: Vec<Box<dyn Task>>,
}

impl Sequence {
    /// Create a sequence from boxed tasks.
    pub fn new(tasks: Vec<Box<dyn Task>>) -> Self {
        Self { tasks }
    }
}

impl Task for Sequence {
    fn apply_repo(&self, repo: &Repo) -> Result<(), TaskError> {
        for task in &self.tasks {
            task.apply_repo(repo)?;
        }
        Ok(())
    }

    fn apply_scratchpad(&self, scratch: &Scratchpad) -> Result<(), TaskError> {
        for task in &self.tasks {
            task.apply_scratchpad(scratch)?;
        }
        Ok(())
    }
}
