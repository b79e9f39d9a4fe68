//! Daemon record extracted from a single process listing line

use crate::domain::{DaemonKind, Version};
use serde::{Deserialize, Serialize};

/// A detected daemon process
///
/// `version` keeps the text exactly as it appeared in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DaemonRecord {
    /// Kind of daemon
    pub kind: DaemonKind,
    /// Operating system process id
    pub pid: u32,
    /// Raw version text
    pub version: String,
}

impl DaemonRecord {
    /// Creates a new DaemonRecord
    pub fn new(kind: DaemonKind, pid: u32, version: impl Into<String>) -> Self {
        Self {
            kind,
            pid,
            version: version.into(),
        }
    }

    /// Parses the raw version text
    ///
    /// Records produced by the line parser always carry a parseable version,
    /// so this only returns `None` for hand-built records.
    pub fn parsed_version(&self) -> Option<Version> {
        self.version.parse().ok()
    }
}
