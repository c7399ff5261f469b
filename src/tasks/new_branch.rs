//! tasks::new_branch
//!
//! Branch creation against a resolved repository.

use git2::{BranchType, Repository};

use super::{Task, TaskError};
use crate::core::{Repo, Scratchpad};

/// Creates a branch at `from_ref` in the target repository.
///
/// A branch that already exists is a soft condition: it is logged at debug
/// level and the task succeeds without touching it. Scratchpads are not
/// version controlled, so applying this task to one is a no-op.
pub struct NewBranch {
    /// Name of the branch to create.
    pub name: String,
    /// Revision the branch should start from, e.g. `HEAD` or `main`.
    pub from_ref: String,
}

impl NewBranch {
    /// Create a branch task starting from `HEAD`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            from_ref: "HEAD".to_string(),
        }
    }

    /// Override the starting revision.
    pub fn from_ref(mut self, from_ref: impl Into<String>) -> Self {
        self.from_ref = from_ref.into();
        self
    }
}

impl Task for NewBranch {
    fn apply_repo(&self, repo: &Repo) -> Result<(), TaskError> {
        let gr = Repository::open(repo.path()).map_err(|e| TaskError::OpenRepository {
            path: repo.path().to_path_buf(),
            source: e,
        })?;

        if gr.find_branch(&self.name, BranchType::Local).is_ok() {
            tracing::debug!(branch = %self.name, "branch already exists");
            return Ok(());
        }

        let commit = gr
            .revparse_single(&self.from_ref)
            .and_then(|obj| obj.peel_to_commit())
            .map_err(|e| TaskError::ResolveReference {
                reference: self.from_ref.clone(),
                source: e,
            })?;

        gr.branch(&self.name, &commit, false)
            .map_err(|e| TaskError::CreateBranch {
                branch: self.name.clone(),
                source: e,
            })?;

        Ok(())
    }

    fn apply_scratchpad(&self, _scratch: &Scratchpad) -> Result<(), TaskError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_with_commit() -> (tempfile::TempDir, Repo) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github.com/acme/widgets");
        std::fs::create_dir_all(&path).unwrap();

        let gr = Repository::init(&path).unwrap();
        let sig = git2::Signature::now("test", "test@example.com").unwrap();
        let tree_id = gr.index().unwrap().write_tree().unwrap();
        let tree = gr.find_tree(tree_id).unwrap();
        gr.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();

        (dir, Repo::new("github.com", "acme/widgets", path))
    }

    #[test]
    fn creates_a_branch_from_head() {
        let (_dir, repo) = repo_with_commit();

        NewBranch::new("feature").apply_repo(&repo).unwrap();

        let gr = Repository::open(repo.path()).unwrap();
        assert!(gr.find_branch("feature", BranchType::Local).is_ok());
    }

    #[test]
    fn existing_branch_is_a_soft_success() {
        let (_dir, repo) = repo_with_commit();

        NewBranch::new("feature").apply_repo(&repo).unwrap();
        NewBranch::new("feature").apply_repo(&repo).unwrap();
    }

    #[test]
    fn unknown_from_ref_is_an_error() {
        let (_dir, repo) = repo_with_commit();

        let err = NewBranch::new("feature")
            .from_ref("does-not-exist")
            .apply_repo(&repo)
            .unwrap_err();
        assert!(matches!(err, TaskError::ResolveReference { .. }));
    }

    #[test]
    fn scratchpads_are_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = Scratchpad::new("2026w35", dir.path().join("2026w35"));

        NewBranch::new("feature").apply_scratchpad(&scratch).unwrap();
        assert!(!scratch.path().exists());
    }
}
