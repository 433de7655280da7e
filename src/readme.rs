//! Rewrites the version marker and download link in the README.
//!
//! Both substitutions are unconditional: a README without the marker or the
//! `[1]:` link line is written back unchanged.

use crate::domain::ReleaseDescriptor;
use crate::error::Result;
use regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;

/// Apply the release to README content.
///
/// Every `[Version M.N]` marker gets the new version and every line starting
/// with `[1]:` becomes the download link reference.
pub fn update_readme_content(content: &str, release: &ReleaseDescriptor) -> Result<String> {
    let marker = Regex::new(r"\[Version\s*\d+\.\d+\]")?;
    let link = Regex::new(r"(?m)^\[1\]:.*$")?;

    if !marker.is_match(content) {
        tracing::debug!("README has no [Version M.N] marker");
    }
    if !link.is_match(content) {
        tracing::debug!("README has no [1]: link line");
    }

    let version_marker = format!("[Version {}]", release.version);
    let link_line = format!("[1]: {}", release.download_url);

    let content = marker.replace_all(content, NoExpand(&version_marker));
    let content = link.replace_all(&content, NoExpand(&link_line));
    Ok(content.into_owned())
}

/// Rewrite the README file in place.
pub fn update_readme(path: &Path, release: &ReleaseDescriptor) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let updated = update_readme_content(&content, release)?;
    fs::write(path, updated)?;
    Ok(())
}
