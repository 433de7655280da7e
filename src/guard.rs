//! Safety checks run before a release touches anything.

use crate::config::ReleaseConfig;
use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use crate::process::{CommandRunner, Step};
use crate::ui::{self, Prompter};

/// Result of the repository checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    /// The tree was dirty and the user chose to stop
    Declined,
}

/// Short status listing shown when the working tree is dirty.
pub fn status_step() -> Step {
    Step::new("git-status", "git", ["status", "--short"]).quiet()
}

/// Verify the release branch is checked out and ask before releasing from a
/// dirty working tree.
pub fn check_repository(
    repo: &dyn Repository,
    runner: &mut dyn CommandRunner,
    prompter: &mut dyn Prompter,
    release: &ReleaseConfig,
) -> Result<GuardOutcome> {
    let branch = repo.current_branch().map_err(|e| match e {
        ReleaseError::BranchDetectionFailed(_) => e,
        other => ReleaseError::branch_detection(other.to_string()),
    })?;
    tracing::debug!(branch = %branch, "current branch");

    if branch != release.branch {
        return Err(ReleaseError::WrongBranch {
            expected: release.branch.clone(),
            actual: branch,
        });
    }

    if repo.is_dirty()? {
        ui::display_status("Working directory is not clean.");
        runner.run(&status_step())?;
        if !prompter.confirm("Do you wish to continue anyway?")? {
            return Ok(GuardOutcome::Declined);
        }
    }

    Ok(GuardOutcome::Proceed)
}
