use crate::error::{ReleaseError, Result};
use git2::{ErrorCode, Repository as Git2Repo, StatusOptions};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Branch name HEAD points at while that branch has no commits yet.
    fn unborn_branch(&self) -> Result<String> {
        let head = self
            .repo
            .find_reference("HEAD")
            .map_err(|e| ReleaseError::branch_detection(e.to_string()))?;

        head.symbolic_target()
            .and_then(|target| target.strip_prefix("refs/heads/"))
            .map(|name| name.to_string())
            .ok_or_else(|| ReleaseError::branch_detection("HEAD does not name a branch"))
    }
}

impl super::Repository for Git2Repository {
    fn current_branch(&self) -> Result<String> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == ErrorCode::UnbornBranch => return self.unborn_branch(),
            Err(e) => return Err(ReleaseError::branch_detection(e.to_string())),
        };

        if !head.is_branch() {
            return Err(ReleaseError::branch_detection("HEAD is detached"));
        }

        head.shorthand()
            .map(|name| name.to_string())
            .ok_or_else(|| ReleaseError::branch_detection("branch name is not valid UTF-8"))
    }

    fn is_dirty(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut options))?;
        Ok(!statuses.is_empty())
    }

    fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }
}
