//! Gradle daemon detection
//!
//! Gradle daemons are launched through the bootstrap class, followed by the
//! Gradle version as the first argument:
//! `org.gradle.launcher.daemon.bootstrap.GradleDaemon 7.4.2 ...`

use crate::domain::DaemonKind;
use crate::parser::DaemonParser;
use regex::Regex;
use std::sync::LazyLock;

/// Gradle daemon parser
pub struct GradleDaemonParser;

// Version token ends at the first whitespace after the bootstrap class
static GRADLE_DAEMON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"org\.gradle\.launcher\.daemon\.bootstrap\.GradleDaemon (\S+)\s").unwrap()
});

impl DaemonParser for GradleDaemonParser {
    fn extract_version<'a>(&self, line: &'a str) -> Option<&'a str> {
        let caps = GRADLE_DAEMON_RE.captures(line)?;
        Some(caps.get(1)?.as_str())
    }

    fn kind(&self) -> DaemonKind {
        DaemonKind::Gradle
    }
}
