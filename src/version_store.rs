//! Reads and rewrites the version line of the build descriptor.
//!
//! The descriptor holds a line of the shape `version := "1.4"`. Reading
//! accepts any quoted text and validates it afterwards; writing only replaces
//! a value that still has the `<digits>.<digits>` shape, whatever was read.

use crate::domain::Version;
use crate::error::{ReleaseError, Result};
use regex::{Captures, Regex};
use std::fs;
use std::path::{Path, PathBuf};

/// Extract the raw version text from descriptor content.
///
/// Returns `None` when no `version := "..."` line exists.
pub fn find_version(content: &str) -> Result<Option<String>> {
    let re = Regex::new(r#"(?m)^\s*version\s*:=\s*"([^"]+)""#)?;
    Ok(re.captures(content).map(|caps| caps[1].to_string()))
}

/// Replace the first well-formed `version := "M.N"` value with `version`.
///
/// Spacing around `:=` is preserved. Content without a well-formed version
/// line comes back unchanged.
pub fn replace_version(content: &str, version: &Version) -> Result<String> {
    let re = Regex::new(r#"(version\s*:=\s*)"\d+\.\d+""#)?;
    let replaced = re.replace(content, |caps: &Captures| {
        format!("{}\"{}\"", &caps[1], version)
    });
    Ok(replaced.into_owned())
}

/// The build descriptor file on disk.
#[derive(Debug, Clone)]
pub struct VersionStore {
    path: PathBuf,
}

impl VersionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        VersionStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw version text as stored, before validation.
    pub fn read_raw(&self) -> Result<String> {
        let content = fs::read_to_string(&self.path)?;
        find_version(&content)?.ok_or_else(|| ReleaseError::VersionNotFound {
            path: self.path.display().to_string(),
        })
    }

    /// Current version, validated against `\d+\.\d+`.
    pub fn read(&self) -> Result<Version> {
        Version::parse(&self.read_raw()?)
    }

    /// Rewrite the descriptor in place with the new version.
    pub fn write(&self, version: &Version) -> Result<()> {
        let content = fs::read_to_string(&self.path)?;
        let updated = replace_version(&content, version)?;
        if updated == content {
            tracing::debug!(path = %self.path.display(), "no well-formed version line to replace");
        }
        fs::write(&self.path, updated)?;
        Ok(())
    }
}
