use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the repository root and the user config directory.
pub const CONFIG_FILE_NAME: &str = "release.toml";

/// Represents the complete configuration for a release run.
///
/// Every section is optional in the file; missing values fall back to the
/// defaults of the project this tool was written for.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub publish: PublishConfig,
}

fn default_program_name() -> String {
    "awakening".to_string()
}

fn default_owner() -> String {
    "sellmerfud".to_string()
}

fn default_repository() -> String {
    "awakening".to_string()
}

/// Identity of the project on the hosting service.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProjectConfig {
    #[serde(default = "default_program_name")]
    pub program_name: String,

    #[serde(default = "default_owner")]
    pub owner: String,

    #[serde(default = "default_repository")]
    pub repository: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            program_name: default_program_name(),
            owner: default_owner(),
            repository: default_repository(),
        }
    }
}

fn default_descriptor() -> String {
    "build.sbt".to_string()
}

fn default_readme() -> String {
    "README.md".to_string()
}

fn default_artifact_dir() -> String {
    "target".to_string()
}

/// Paths rewritten or consumed by a release, relative to the repository root.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_descriptor")]
    pub descriptor: String,

    #[serde(default = "default_readme")]
    pub readme: String,

    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            descriptor: default_descriptor(),
            readme: default_readme(),
            artifact_dir: default_artifact_dir(),
        }
    }
}

fn default_branch() -> String {
    "master".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Where releases are cut from and pushed to.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            branch: default_branch(),
            remote: default_remote(),
        }
    }
}

fn default_build_command() -> Vec<String> {
    vec!["sbt".to_string(), "stage".to_string()]
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BuildConfig {
    #[serde(default = "default_build_command")]
    pub command: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            command: default_build_command(),
        }
    }
}

fn default_host_cli() -> String {
    "gh".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PublishConfig {
    #[serde(default = "default_host_cli")]
    pub host_cli: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        PublishConfig {
            host_cli: default_host_cli(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(text).map_err(|e| ReleaseError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.build.command.is_empty() {
            return Err(ReleaseError::config("build.command must not be empty"));
        }
        if self.release.branch.trim().is_empty() {
            return Err(ReleaseError::config("release.branch must not be empty"));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release.toml` in the current directory (the repository root)
/// 3. `release.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config_file(),
    };

    let Some(path) = path else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let text = fs::read_to_string(&path).map_err(|e| {
        ReleaseError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    Config::from_toml(&text)
}

fn discover_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
