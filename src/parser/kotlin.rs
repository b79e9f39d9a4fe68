//! Kotlin compile daemon detection
//!
//! The daemon classpath contains the embeddable compiler jar, whose file
//! name carries the version: `kotlin-compiler-embeddable-1.6.10.jar`.

use crate::domain::DaemonKind;
use crate::parser::DaemonParser;
use regex::Regex;
use std::sync::LazyLock;

/// Kotlin compile daemon parser
pub struct KotlinDaemonParser;

static EMBEDDABLE_JAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"kotlin-compiler-embeddable-(.*?)\.jar").unwrap());

impl DaemonParser for KotlinDaemonParser {
    fn extract_version<'a>(&self, line: &'a str) -> Option<&'a str> {
        let caps = EMBEDDABLE_JAR_RE.captures(line)?;
        Some(caps.get(1)?.as_str())
    }

    fn kind(&self) -> DaemonKind {
        DaemonKind::Kotlin
    }
}
