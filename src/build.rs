//! Invokes the project's build tool to stage the release artifact.

use crate::config::BuildConfig;
use crate::error::{ReleaseError, Result};
use crate::process::{CommandRunner, Step};

/// The configured build command as a pipeline step.
pub fn build_step(build: &BuildConfig) -> Result<Step> {
    let (program, args) = build
        .command
        .split_first()
        .ok_or_else(|| ReleaseError::config("build.command must not be empty"))?;
    Ok(Step::new("build", program.as_str(), args.iter().cloned()))
}

/// Run the build. Any failure aborts the release; builds are not retried.
pub fn run_build(runner: &mut dyn CommandRunner, build: &BuildConfig) -> Result<()> {
    runner.run(&build_step(build)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::RecordingRunner;

    #[test]
    fn test_default_build_step() {
        let step = build_step(&BuildConfig::default()).unwrap();
        assert_eq!(step.command_line(), "sbt stage");
        assert!(step.echo);
    }

    #[test]
    fn test_empty_build_command() {
        let build = BuildConfig { command: vec![] };
        assert!(matches!(build_step(&build), Err(ReleaseError::Config(_))));
    }

    #[test]
    fn test_build_failure_propagates() {
        let mut runner = RecordingRunner::new().fail_on("build");
        let err = run_build(&mut runner, &BuildConfig::default()).unwrap_err();
        match err {
            ReleaseError::CommandFailed { command, .. } => {
                assert_eq!(command, vec!["sbt", "stage"]);
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }
}
