//! Commits, tags, pushes and creates the hosted release.
//!
//! The steps run strictly in order and the first failure stops the rest.
//! Nothing already done is rolled back: a pushed tag stays pushed even when
//! creating the hosted release fails afterwards.

use crate::config::Config;
use crate::domain::ReleaseDescriptor;
use crate::error::Result;
use crate::process::{CommandRunner, Step};

/// Steps that publish a release, in execution order.
pub fn publish_steps(release: &ReleaseDescriptor, config: &Config) -> Vec<Step> {
    let version = &release.version;
    let tag = release.tag.as_str();

    vec![
        Step::new("git-add", "git", ["add", "--update", "."]),
        Step::new(
            "git-commit",
            "git",
            vec![
                "commit".to_string(),
                format!("-mbuild: update version number to {}", version),
            ],
        ),
        Step::new(
            "git-tag",
            "git",
            vec!["tag".to_string(), format!("-mRelease {}", tag), tag.to_string()],
        ),
        Step::new(
            "git-push",
            "git",
            vec![
                "push".to_string(),
                "--tags".to_string(),
                config.release.remote.clone(),
                config.release.branch.clone(),
            ],
        ),
        Step::new(
            "release-create",
            config.publish.host_cli.as_str(),
            vec![
                "release".to_string(),
                "create".to_string(),
                "--generate-notes".to_string(),
                "--title".to_string(),
                format!("Version {}", version),
                tag.to_string(),
                release.artifact_path.clone(),
            ],
        ),
    ]
}

/// Run every publish step, stopping at the first failure.
pub fn publish_release(
    runner: &mut dyn CommandRunner,
    release: &ReleaseDescriptor,
    config: &Config,
) -> Result<()> {
    runner.run_all(&publish_steps(release, config))
}
