//! tasks::git_init
//!
//! Create a target directory and initialize a git repository in it.

use git2::Repository;

use super::{Task, TaskError};
use crate::core::{Repo, Scratchpad};

/// Creates the target directory on disk, initializing a git repository for
/// repo targets. Idempotent: existing directories and repositories are left
/// untouched.
///
/// Scratchpads are created as plain directories; they carry no version
/// control by default.
pub struct GitInit;

impl Task for GitInit {
    fn apply_repo(&self, repo: &Repo) -> Result<(), TaskError> {
        std::fs::create_dir_all(repo.path()).map_err(|e| TaskError::CreateDirectory {
            path: repo.path().to_path_buf(),
            source: e,
        })?;

        if repo.path().join(".git").exists() {
            tracing::debug!(path = %repo.path().display(), "repository already initialized");
            return Ok(());
        }

        Repository::init(repo.path()).map_err(|e| TaskError::InitRepository {
            path: repo.path().to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    fn apply_scratchpad(&self, scratch: &Scratchpad) -> Result<(), TaskError> {
        std::fs::create_dir_all(scratch.path()).map_err(|e| TaskError::CreateDirectory {
            path: scratch.path().to_path_buf(),
            source: e,
        })
    }
}
