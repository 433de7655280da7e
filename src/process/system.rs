use crate::error::{ReleaseError, Result};
use crate::process::{CommandRunner, Step};
use crate::ui;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs steps as real subprocesses in the repository root.
///
/// Standard output and error are inherited so the user sees the build tool
/// and git exactly as if they had typed the commands.
pub struct SystemRunner {
    root: PathBuf,
}

impl SystemRunner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        SystemRunner { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, step: &Step) -> Result<()> {
        if step.echo {
            ui::display_command(&step.command_line());
        }
        tracing::debug!(step = %step.name, command = %step.command_line(), "running step");

        let status = Command::new(&step.program)
            .args(&step.args)
            .current_dir(&self.root)
            .status()
            .map_err(|source| ReleaseError::CommandSpawn {
                command: step.argv(),
                source,
            })?;

        if !step.succeeded(status.code()) {
            return Err(ReleaseError::CommandFailed {
                command: step.argv(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
