use crate::domain::Version;
use crate::error::{ReleaseError, Result};
use regex::Regex;

/// Requested target for the release version.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VersionDirective {
    #[default]
    NextMinor,
    NextMajor,
    Explicit(Version),
}

impl VersionDirective {
    /// Resolve a free-form command line token into a directive.
    ///
    /// Accepts a literal `major.minor`, `next_minor` (or the empty string) and
    /// `next_major`. Keywords are matched case-insensitively.
    pub fn parse(token: &str) -> Result<Self> {
        let literal = Regex::new(r"\A\d+\.\d+\z")?;
        if literal.is_match(token) {
            return Version::parse(token)
                .map(VersionDirective::Explicit)
                .map_err(|_| ReleaseError::InvalidArgument(token.to_string()));
        }

        match token.to_lowercase().as_str() {
            "" | "next_minor" => Ok(VersionDirective::NextMinor),
            "next_major" => Ok(VersionDirective::NextMajor),
            _ => Err(ReleaseError::InvalidArgument(token.to_string())),
        }
    }

    /// Compute the target version from the current one.
    ///
    /// An explicit version is returned as given, even when it is lower than
    /// or equal to `current`.
    pub fn resolve(&self, current: &Version) -> Version {
        match self {
            VersionDirective::NextMajor => current.next_major(),
            VersionDirective::NextMinor => current.next_minor(),
            VersionDirective::Explicit(v) => v.clone(),
        }
    }
}
