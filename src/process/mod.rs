//! External command execution
//!
//! Every external program the release touches (the build tool, git, the
//! release-hosting CLI) is described as a [Step] and executed through a
//! [CommandRunner]. A step that does not succeed stops the pipeline with
//! [crate::error::ReleaseError::CommandFailed] carrying its argument list.

pub mod recording;
pub mod system;

pub use recording::RecordingRunner;
pub use system::SystemRunner;

use crate::error::Result;

/// One external command in the release pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Short identifier used in logs and by test runners (e.g. "git-commit")
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
    /// Print the command line before running it
    pub echo: bool,
}

impl Step {
    pub fn new<I, S>(name: impl Into<String>, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Step {
            name: name.into(),
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            echo: true,
        }
    }

    /// Run without echoing the command line first.
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Command line as echoed to the user, arguments joined by single spaces.
    pub fn command_line(&self) -> String {
        self.argv().join(" ")
    }

    /// Whether an exit code counts as success for this step.
    ///
    /// A missing code (process killed by a signal) never succeeds.
    pub fn succeeded(&self, code: Option<i32>) -> bool {
        code == Some(0)
    }
}

/// Executes steps synchronously, one at a time.
pub trait CommandRunner {
    /// Run a step to completion.
    ///
    /// # Returns
    /// * `Ok(())` - The step exited successfully
    /// * `Err` - The step could not be started or exited unsuccessfully
    fn run(&mut self, step: &Step) -> Result<()>;

    /// Run steps in order, stopping at the first failure.
    fn run_all(&mut self, steps: &[Step]) -> Result<()> {
        for step in steps {
            self.run(step)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_joins_argv() {
        let step = Step::new("build", "sbt", ["stage"]);
        assert_eq!(step.argv(), vec!["sbt", "stage"]);
        assert_eq!(step.command_line(), "sbt stage");
        assert!(step.echo);
    }

    #[test]
    fn test_quiet_disables_echo() {
        let step = Step::new("status", "git", ["status", "--short"]).quiet();
        assert!(!step.echo);
    }

    #[test]
    fn test_succeeded_only_on_zero() {
        let step = Step::new("build", "sbt", ["stage"]);
        assert!(step.succeeded(Some(0)));
        assert!(!step.succeeded(Some(1)));
        assert!(!step.succeeded(None));
    }
}
