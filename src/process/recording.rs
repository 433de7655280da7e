use crate::error::{ReleaseError, Result};
use crate::process::{CommandRunner, Step};
use std::collections::HashSet;

/// Runner that records steps instead of executing them.
///
/// Used by tests to assert on the exact commands a release would run. Steps
/// named with [RecordingRunner::fail_on] report a non-zero exit.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    executed: Vec<Step>,
    failing: HashSet<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the step with this name fail with exit code 1
    pub fn fail_on(mut self, step_name: impl Into<String>) -> Self {
        self.failing.insert(step_name.into());
        self
    }

    /// Steps that were run, including a failing one, in order
    pub fn executed(&self) -> &[Step] {
        &self.executed
    }

    /// Names of the steps that were run, in order
    pub fn executed_names(&self) -> Vec<&str> {
        self.executed.iter().map(|s| s.name.as_str()).collect()
    }

    /// Command lines of the steps that were run, in order
    pub fn command_lines(&self) -> Vec<String> {
        self.executed.iter().map(Step::command_line).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, step: &Step) -> Result<()> {
        self.executed.push(step.clone());

        if self.failing.contains(&step.name) {
            return Err(ReleaseError::CommandFailed {
                command: step.argv(),
                code: Some(1),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut runner = RecordingRunner::new();
        runner.run(&Step::new("a", "git", ["add"])).unwrap();
        runner.run(&Step::new("b", "git", ["commit"])).unwrap();
        assert_eq!(runner.executed_names(), vec!["a", "b"]);
        assert_eq!(runner.command_lines(), vec!["git add", "git commit"]);
    }

    #[test]
    fn test_run_all_stops_at_failure() {
        let mut runner = RecordingRunner::new().fail_on("b");
        let steps = vec![
            Step::new("a", "x", ["1"]),
            Step::new("b", "x", ["2"]),
            Step::new("c", "x", ["3"]),
        ];

        let err = runner.run_all(&steps).unwrap_err();
        assert!(matches!(err, ReleaseError::CommandFailed { .. }));
        assert_eq!(runner.executed_names(), vec!["a", "b"]);
    }
}
