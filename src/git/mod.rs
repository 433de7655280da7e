//! Git queries used to guard a release
//!
//! The guard only needs two live facts about the working copy: which branch is
//! checked out and whether anything is uncommitted. Both sit behind the
//! [Repository] trait so the release pipeline can run against a real
//! repository or an in-memory one.
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: a configurable implementation for testing
//!
//! Mutating operations (add, commit, tag, push) are not part of this trait;
//! they run through the git command line as pipeline steps, see
//! [crate::process].

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::Path;

/// Read-only view of a working copy's state.
///
/// Nothing is cached: every call queries the repository again.
pub trait Repository: Send {
    /// Name of the checked out branch (e.g. "master").
    ///
    /// Returns [crate::error::ReleaseError::BranchDetectionFailed] when no
    /// branch is checked out, for example on a detached HEAD.
    fn current_branch(&self) -> Result<String>;

    /// True when the working tree has any modified, staged or untracked file.
    fn is_dirty(&self) -> Result<bool>;

    /// Top-level directory of the working tree, if the repository has one.
    fn workdir(&self) -> Option<&Path>;
}
