use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_release::cli::orchestration::{
    run_release_workflow, ReleaseContext, ReleaseWorkflowArgs, WorkflowOutcome,
};
use git_release::cli::Args;
use git_release::config;
use git_release::domain::VersionDirective;
use git_release::git::{Git2Repository, Repository};
use git_release::process::SystemRunner;
use git_release::ui::{self, formatter, AssumeYes, Prompter, TerminalPrompter};
use git_release::ReleaseError;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            let code = e
                .downcast_ref::<ReleaseError>()
                .map(ReleaseError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(args: Args) -> Result<()> {
    // Resolve the version token before touching the repository.
    let directive = VersionDirective::parse(&args.version)?;

    // An explicit config path is relative to where the user ran the command.
    let config_path = match &args.config {
        Some(path) => Some(absolute(path)?),
        None => None,
    };

    let repo =
        Git2Repository::open(".").map_err(|e| ReleaseError::branch_detection(e.to_string()))?;
    let root = repo
        .workdir()
        .map(Path::to_path_buf)
        .context("Repository has no working directory")?;
    std::env::set_current_dir(&root)
        .with_context(|| format!("Cannot change directory to {}", root.display()))?;
    tracing::debug!(root = %root.display(), "running from repository root");

    let config = config::load_config(config_path.as_deref())?;

    let mut runner = SystemRunner::new(&root);
    let mut prompter: Box<dyn Prompter> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalPrompter)
    };

    let outcome = run_release_workflow(
        ReleaseWorkflowArgs {
            directive,
            commit: args.commit(),
        },
        ReleaseContext {
            config: &config,
            root: &root,
            repo: &repo,
            runner: &mut runner,
            prompter: prompter.as_mut(),
        },
    )?;

    match outcome {
        WorkflowOutcome::Released(result) => {
            ui::display_success(&formatter::release_summary(&result.version, result.pushed));
        }
        WorkflowOutcome::Declined { stage } => {
            tracing::debug!(%stage, "release declined by user");
            ui::display_declined();
        }
    }

    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    Ok(cwd.join(path))
}
