//! Core domain models for daemon-reaper
//!
//! This module contains the value types shared by every pipeline stage:
//! - Daemon kinds that can be detected
//! - Dotted numeric versions with their ordering rules
//! - Daemon records extracted from process listing lines

mod kind;
mod record;
mod version;

pub use kind::DaemonKind;
pub use record::DaemonRecord;
pub use version::{Version, VersionParseError};
