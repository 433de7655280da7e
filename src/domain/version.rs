use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Release version: a `major.minor` pair.
///
/// Each component keeps its digit text exactly as written, so formatting a
/// parsed version gives back the same string (`01.02` stays `01.02`) and
/// components of any length are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: String,
    minor: String,
}

/// Add one to a non-empty string of ASCII digits.
///
/// The result has no leading zeros: `"09"` becomes `"10"`.
fn increment(digits: &str) -> String {
    let mut out: Vec<char> = digits.trim_start_matches('0').chars().collect();
    let mut i = out.len();
    loop {
        if i == 0 {
            out.insert(0, '1');
            break;
        }
        i -= 1;
        if out[i] == '9' {
            out[i] = '0';
        } else {
            out[i] = char::from(out[i] as u8 + 1);
            break;
        }
    }
    out.into_iter().collect()
}

impl Version {
    /// Create a new version from numeric components
    pub fn new(major: u64, minor: u64) -> Self {
        Version {
            major: major.to_string(),
            minor: minor.to_string(),
        }
    }

    /// Parse a version from its exact textual form.
    ///
    /// The whole input must be `<digits>.<digits>`; no prefix, suffix or
    /// surrounding whitespace is accepted.
    pub fn parse(text: &str) -> Result<Self> {
        let re = Regex::new(r"\A(\d+)\.(\d+)\z")?;
        let caps = re
            .captures(text)
            .ok_or_else(|| ReleaseError::MalformedVersion(text.to_string()))?;

        Ok(Version {
            major: caps[1].to_string(),
            minor: caps[2].to_string(),
        })
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    /// Next major version, minor reset to zero
    pub fn next_major(&self) -> Self {
        Version {
            major: increment(&self.major),
            minor: "0".to_string(),
        }
    }

    /// Next minor version; the major text is kept as is
    pub fn next_minor(&self) -> Self {
        Version {
            major: self.major.clone(),
            minor: increment(&self.minor),
        }
    }
}

impl FromStr for Version {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
