//! Dotted numeric versions reported by daemons
//!
//! Accepts `major.minor` and `major.minor.patch` forms (`6.1`, `7.4.2`).
//! Components after the patch are validated but otherwise ignored.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A parsed daemon version
///
/// Ordering compares `major`, then `minor`, then `patch` (field order). A
/// missing patch sorts before any present patch, so `7.4` < `7.4.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: Option<u64>,
}

/// Error returned when a version string is not a dotted numeric version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParseError {
    /// Fewer than two components
    #[error("version '{0}' needs at least major and minor components")]
    TooFewComponents(String),

    /// A component that is not an unsigned integer
    #[error("version '{version}' has a non-numeric component '{component}'")]
    NonNumeric { version: String, component: String },
}

impl Version {
    /// Creates a new version
    pub fn new(major: u64, minor: u64, patch: Option<u64>) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numbers = s
            .split('.')
            .map(|component| {
                component
                    .parse::<u64>()
                    .map_err(|_| VersionParseError::NonNumeric {
                        version: s.to_string(),
                        component: component.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match numbers.as_slice() {
            [major, minor, rest @ ..] => Ok(Version::new(*major, *minor, rest.first().copied())),
            _ => Err(VersionParseError::TooFewComponents(s.to_string())),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}
