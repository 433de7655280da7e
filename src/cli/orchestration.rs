//! Main release workflow
//!
//! Runs the release as one linear pipeline. Each stage may abort the whole
//! run with an error, and the user may stop it voluntarily at the two prompts.
//! Nothing done before a failure is undone.

use std::fmt;
use std::path::Path;

use crate::build;
use crate::config::Config;
use crate::domain::{ReleaseDescriptor, Version, VersionDirective};
use crate::error::Result;
use crate::git::Repository;
use crate::guard::{self, GuardOutcome};
use crate::process::CommandRunner;
use crate::publish;
use crate::readme;
use crate::ui::{self, Prompter};
use crate::version_store::VersionStore;

/// Arguments for the release workflow
///
/// Decoupled from the clap arguments so the workflow can be driven
/// programmatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseWorkflowArgs {
    /// Requested target version, already resolved from the command line
    pub directive: VersionDirective,

    /// Commit, tag, push and create the hosted release
    pub commit: bool,
}

/// Collaborators the workflow runs against.
pub struct ReleaseContext<'a> {
    pub config: &'a Config,
    /// Repository root; descriptor and README paths are relative to it
    pub root: &'a Path,
    pub repo: &'a dyn Repository,
    pub runner: &'a mut dyn CommandRunner,
    pub prompter: &'a mut dyn Prompter,
}

/// Progress of a release run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStage {
    Start,
    ArgsResolved,
    GuardPassed,
    VersionRead,
    UserConfirmed,
    VersionWritten,
    Built,
    ReadmeUpdated,
    Committed,
    SkippedCommit,
    Done,
}

impl fmt::Display for ReleaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Result of a completed release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowResult {
    /// The version written to the descriptor
    pub version: Version,

    /// The tag name for the version
    pub tag: String,

    /// Whether the release was committed, pushed and published
    pub pushed: bool,
}

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    Released(WorkflowResult),
    /// The user answered no at a prompt; nothing was modified
    Declined { stage: ReleaseStage },
}

fn enter(stage: ReleaseStage) {
    tracing::debug!(%stage, "release stage");
}

/// Main release workflow
///
/// 1. Check branch and working tree
/// 2. Read the current version and compute the target
/// 3. Confirm with the user
/// 4. Write the version, build, update the README
/// 5. Optionally commit, tag, push and create the hosted release
pub fn run_release_workflow(
    args: ReleaseWorkflowArgs,
    ctx: ReleaseContext<'_>,
) -> Result<WorkflowOutcome> {
    let ReleaseContext {
        config,
        root,
        repo,
        runner,
        prompter,
    } = ctx;

    enter(ReleaseStage::Start);
    enter(ReleaseStage::ArgsResolved);

    if guard::check_repository(repo, runner, prompter, &config.release)?
        == GuardOutcome::Declined
    {
        return Ok(WorkflowOutcome::Declined {
            stage: ReleaseStage::GuardPassed,
        });
    }
    enter(ReleaseStage::GuardPassed);

    let store = VersionStore::new(root.join(&config.files.descriptor));
    let raw = store.read_raw()?;
    println!("\nCurrent version is {}", raw);
    let current = Version::parse(&raw)?;
    enter(ReleaseStage::VersionRead);

    let target = args.directive.resolve(&current);
    tracing::info!(current = %current, target = %target, "computed release version");

    let question = format!("Set the version to {} and create a release?", target);
    if !prompter.confirm(&question)? {
        return Ok(WorkflowOutcome::Declined {
            stage: ReleaseStage::UserConfirmed,
        });
    }
    enter(ReleaseStage::UserConfirmed);

    store.write(&target)?;
    println!("Version set to {}", target);
    enter(ReleaseStage::VersionWritten);

    build::run_build(runner, &config.build)?;
    enter(ReleaseStage::Built);

    let release = ReleaseDescriptor::new(target.clone(), &config.project, &config.files.artifact_dir);
    readme::update_readme(&root.join(&config.files.readme), &release)?;
    enter(ReleaseStage::ReadmeUpdated);

    if args.commit {
        publish::publish_release(runner, &release, config)?;
        enter(ReleaseStage::Committed);
    } else {
        ui::display_status("Skipping commit, tag and push (--no-commit)");
        enter(ReleaseStage::SkippedCommit);
    }

    enter(ReleaseStage::Done);
    Ok(WorkflowOutcome::Released(WorkflowResult {
        version: target,
        tag: release.tag,
        pushed: args.commit,
    }))
}
