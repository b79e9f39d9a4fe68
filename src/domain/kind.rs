//! Daemon kind definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of build daemons that can be detected in a process listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DaemonKind {
    /// Gradle build daemon (`GradleDaemon` bootstrap class)
    Gradle,
    /// Kotlin compile daemon (embeddable compiler jar on the classpath)
    Kotlin,
}

impl DaemonKind {
    /// Returns the display name for this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            DaemonKind::Gradle => "Gradle",
            DaemonKind::Kotlin => "Kotlin",
        }
    }

    /// Returns all kinds in declaration order
    pub fn all() -> &'static [DaemonKind] {
        &[DaemonKind::Gradle, DaemonKind::Kotlin]
    }
}

impl fmt::Display for DaemonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
