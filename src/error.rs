use thiserror::Error;

/// Unified error type for release operations.
///
/// Every variant aborts the release and maps to exit status 1. Declining a
/// prompt is not an error and never surfaces here.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Invalid version argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot determine the current branch! ({0})")]
    BranchDetectionFailed(String),

    #[error("Must be on '{expected}' branch to create a release\nCurrent branch is '{actual}'")]
    WrongBranch { expected: String, actual: String },

    #[error("Cannot determine current version! (no version line in {path})")]
    VersionNotFound { path: String },

    #[error("The current version '{0}' does not have the correct format of <major.minor>")]
    MalformedVersion(String),

    #[error("Command did not exit successfully: {command:?} (exit code {})", display_code(.code))]
    CommandFailed {
        command: Vec<String>,
        code: Option<i32>,
    },

    #[error("Failed to start command {command:?}: {source}")]
    CommandSpawn {
        command: Vec<String>,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed while waiting for an answer")]
    InputClosed,
}

/// Convenience type alias for Results in git-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none, terminated by signal".to_string(),
    }
}

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a branch detection error with context
    pub fn branch_detection(msg: impl Into<String>) -> Self {
        ReleaseError::BranchDetectionFailed(msg.into())
    }

    /// Process exit status for this failure. All aborts share status 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_names_token() {
        let err = ReleaseError::InvalidArgument("bogus".to_string());
        assert_eq!(err.to_string(), "Invalid version argument: bogus");
    }

    #[test]
    fn test_wrong_branch_message() {
        let err = ReleaseError::WrongBranch {
            expected: "master".to_string(),
            actual: "feature-x".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Must be on 'master' branch"));
        assert!(msg.contains("Current branch is 'feature-x'"));
    }

    #[test]
    fn test_command_failed_carries_argv() {
        let err = ReleaseError::CommandFailed {
            command: vec!["sbt".to_string(), "stage".to_string()],
            code: Some(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("Command did not exit successfully"));
        assert!(msg.contains("\"sbt\", \"stage\""));
        assert!(msg.contains("exit code 2"));
    }

    #[test]
    fn test_command_failed_without_code() {
        let err = ReleaseError::CommandFailed {
            command: vec!["git".to_string()],
            code: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_every_abort_exits_with_one() {
        let errors = vec![
            ReleaseError::InvalidArgument("x".to_string()),
            ReleaseError::branch_detection("detached"),
            ReleaseError::VersionNotFound {
                path: "build.sbt".to_string(),
            },
            ReleaseError::MalformedVersion("1.x".to_string()),
            ReleaseError::config("bad"),
            ReleaseError::InputClosed,
        ];

        for err in errors {
            assert_eq!(err.exit_code(), 1, "unexpected exit code for {}", err);
        }
    }
}
