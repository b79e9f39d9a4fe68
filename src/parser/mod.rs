//! Process listing line classifier
//!
//! This module turns raw process listing lines into daemon records:
//! - Candidate filtering on the `gradle` / `kotlin` substrings
//! - Process id extraction from the leading token
//! - Per-kind version extraction (Gradle first, then Kotlin)

mod gradle;
mod kotlin;

pub use gradle::GradleDaemonParser;
pub use kotlin::KotlinDaemonParser;

use crate::domain::{DaemonKind, DaemonRecord, Version};
use tracing::{debug, warn};

/// Substrings that make a line worth classifying
const CANDIDATE_MARKERS: &[&str] = &["gradle", "kotlin"];

/// Trait for extracting a daemon version from a process listing line
pub trait DaemonParser {
    /// Returns the raw version text if the line describes this kind of daemon
    fn extract_version<'a>(&self, line: &'a str) -> Option<&'a str>;

    /// Returns the kind this parser detects
    fn kind(&self) -> DaemonKind;
}

/// Parsers in precedence order
fn parsers() -> [&'static dyn DaemonParser; 2] {
    [&GradleDaemonParser, &KotlinDaemonParser]
}

/// Returns true if the line mentions a known daemon kind
pub fn is_candidate(line: &str) -> bool {
    CANDIDATE_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Extracts the leading process id token
pub fn parse_pid(line: &str) -> Option<u32> {
    line.split_whitespace().next()?.parse().ok()
}

/// Classifies a single line into at most one daemon record
///
/// The first parser whose pattern matches decides the kind. If that match
/// carries an unparseable version the line is dropped without trying the
/// remaining parsers.
pub fn parse_line(line: &str) -> Option<DaemonRecord> {
    if !is_candidate(line) {
        return None;
    }

    let Some(pid) = parse_pid(line) else {
        warn!(line, "skipping candidate line without a numeric process id");
        return None;
    };

    let (kind, version) = parsers()
        .into_iter()
        .find_map(|parser| parser.extract_version(line).map(|v| (parser.kind(), v)))?;

    if let Err(e) = version.parse::<Version>() {
        debug!(pid, %kind, error = %e, "skipping daemon with unparseable version");
        return None;
    }

    Some(DaemonRecord::new(kind, pid, version))
}

/// Classifies every line of a listing, dropping lines that yield no record
pub fn parse_listing<I, S>(lines: I) -> Vec<DaemonRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRADLE_LINE: &str = "1001 org.gradle.launcher.daemon.bootstrap.GradleDaemon 7.4.2 -Xmx2g";
    const KOTLIN_LINE: &str = "1003 org.jetbrains.kotlin.daemon.KotlinCompileDaemon --daemon-runFilesPath /tmp -cp /home/u/.gradle/caches/kotlin-compiler-embeddable-1.6.10.jar:/x.jar";

    #[test]
    fn test_is_candidate() {
        assert!(is_candidate(GRADLE_LINE));
        assert!(is_candidate(KOTLIN_LINE));
        assert!(!is_candidate("42 jdk.jcmd/sun.tools.jps.Jps -mlvV"));
        // case-sensitive
        assert!(!is_candidate("42 GRADLE KOTLIN"));
    }

    #[test]
    fn test_parse_pid() {
        assert_eq!(parse_pid("1001 foo"), Some(1001));
        assert_eq!(parse_pid("  1001\tfoo"), Some(1001));
        assert_eq!(parse_pid("abc foo"), None);
        assert_eq!(parse_pid(""), None);
    }

    #[test]
    fn test_parse_gradle_line() {
        let record = parse_line(GRADLE_LINE).unwrap();
        assert_eq!(record, DaemonRecord::new(DaemonKind::Gradle, 1001, "7.4.2"));
    }

    #[test]
    fn test_parse_kotlin_line() {
        let record = parse_line(KOTLIN_LINE).unwrap();
        assert_eq!(record, DaemonRecord::new(DaemonKind::Kotlin, 1003, "1.6.10"));
    }

    #[test]
    fn test_gradle_takes_precedence() {
        let line = "7 org.gradle.launcher.daemon.bootstrap.GradleDaemon 8.1 -cp kotlin-compiler-embeddable-1.8.0.jar";
        let record = parse_line(line).unwrap();
        assert_eq!(record.kind, DaemonKind::Gradle);
        assert_eq!(record.version, "8.1");
    }

    #[test]
    fn test_gradle_match_with_bad_version_is_dropped() {
        let line = "7 org.gradle.launcher.daemon.bootstrap.GradleDaemon 8.1-rc-1 -cp kotlin-compiler-embeddable-1.8.0.jar";
        assert_eq!(parse_line(line), None);
    }

    #[test]
    fn test_candidate_without_pattern() {
        assert_eq!(parse_line("55 org.gradle.wrapper.GradleWrapperMain build"), None);
    }

    #[test]
    fn test_candidate_without_pid() {
        assert_eq!(
            parse_line("pid org.gradle.launcher.daemon.bootstrap.GradleDaemon 7.4.2 x"),
            None
        );
    }

    #[test]
    fn test_non_candidate_line() {
        assert_eq!(parse_line("99 com.intellij.idea.Main"), None);
    }

    #[test]
    fn test_parse_listing() {
        let lines = vec![
            "1001 org.gradle.launcher.daemon.bootstrap.GradleDaemon 7.4.2 ...",
            "1002 org.gradle.launcher.daemon.bootstrap.GradleDaemon 6.1 ...",
            "1004 sun.tools.jps.Jps -mlvV",
            "1003 ...kotlin-compiler-embeddable-1.6.10.jar...",
        ];
        let records = parse_listing(lines);
        assert_eq!(
            records,
            vec![
                DaemonRecord::new(DaemonKind::Gradle, 1001, "7.4.2"),
                DaemonRecord::new(DaemonKind::Gradle, 1002, "6.1"),
                DaemonRecord::new(DaemonKind::Kotlin, 1003, "1.6.10"),
            ]
        );
    }
}
