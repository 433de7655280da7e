use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use std::path::{Path, PathBuf};

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    branch: Option<String>,
    dirty: bool,
    workdir: Option<PathBuf>,
}

impl MockRepository {
    /// Create a clean mock repository on the given branch
    pub fn new(branch: impl Into<String>) -> Self {
        MockRepository {
            branch: Some(branch.into()),
            dirty: false,
            workdir: None,
        }
    }

    /// A repository whose branch cannot be determined
    pub fn without_branch() -> Self {
        MockRepository {
            branch: None,
            dirty: false,
            workdir: None,
        }
    }

    /// Mark the working tree dirty or clean
    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Set the reported working directory
    pub fn set_workdir(&mut self, workdir: impl Into<PathBuf>) {
        self.workdir = Some(workdir.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new("master")
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<String> {
        self.branch
            .clone()
            .ok_or_else(|| ReleaseError::branch_detection("mock repository has no branch"))
    }

    fn is_dirty(&self) -> Result<bool> {
        Ok(self.dirty)
    }

    fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert_eq!(repo.current_branch().unwrap(), "master");
        assert!(!repo.is_dirty().unwrap());
        assert!(repo.workdir().is_none());
    }

    #[test]
    fn test_mock_repository_dirty() {
        let mut repo = MockRepository::new("feature-x");
        repo.set_dirty(true);
        assert_eq!(repo.current_branch().unwrap(), "feature-x");
        assert!(repo.is_dirty().unwrap());
    }

    #[test]
    fn test_mock_repository_without_branch() {
        let repo = MockRepository::without_branch();
        assert!(matches!(
            repo.current_branch(),
            Err(ReleaseError::BranchDetectionFailed(_))
        ));
    }
}
