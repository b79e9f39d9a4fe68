//! Forced termination of daemon processes
//!
//! This module provides:
//! - Platform-specific kill commands (`kill -9` / `taskkill /F`)
//! - Batch termination that never stops on a failed command

use crate::domain::DaemonRecord;
use std::process::Command;
use tracing::{debug, warn};

/// Operating system family that decides the kill command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOs {
    /// Unix-like systems (`kill -9 <pid>`)
    Unix,
    /// Windows (`taskkill /F /PID <pid>`)
    Windows,
}

impl TargetOs {
    /// The OS this binary was built for
    pub fn current() -> Self {
        if cfg!(windows) {
            TargetOs::Windows
        } else {
            TargetOs::Unix
        }
    }

    /// Returns the forced-kill command for a process id
    pub fn kill_command(&self, pid: u32) -> Vec<String> {
        let pid = pid.to_string();
        match self {
            TargetOs::Unix => vec!["kill".into(), "-9".into(), pid],
            TargetOs::Windows => vec!["taskkill".into(), "/F".into(), "/PID".into(), pid],
        }
    }
}

/// Result of a single termination attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminationResult {
    /// The record that was targeted
    pub record: DaemonRecord,
    /// The command that was issued (empty if none was)
    pub command: String,
    /// Whether the command reported success
    pub success: bool,
    /// Standard error from the command or the spawn error
    pub stderr: String,
}

impl TerminationResult {
    /// Create a successful result
    pub fn success(record: DaemonRecord, command: String) -> Self {
        Self {
            record,
            command,
            success: true,
            stderr: String::new(),
        }
    }

    /// Create a failed result
    pub fn failure(record: DaemonRecord, command: String, stderr: String) -> Self {
        Self {
            record,
            command,
            success: false,
            stderr,
        }
    }

    /// Create a result for a dry run where nothing was executed
    pub fn skipped(record: DaemonRecord) -> Self {
        Self::success(record, String::new())
    }
}

/// Trait for terminating processes
pub trait Terminator {
    /// Forcefully terminate the daemon's process
    fn terminate(&self, record: &DaemonRecord) -> TerminationResult;
}

/// Terminator that runs the platform kill command
#[derive(Debug, Clone)]
pub struct SystemTerminator {
    os: TargetOs,
}

impl SystemTerminator {
    /// Create a terminator for the given OS family
    pub fn new(os: TargetOs) -> Self {
        Self { os }
    }
}

impl Default for SystemTerminator {
    fn default() -> Self {
        Self::new(TargetOs::current())
    }
}

impl Terminator for SystemTerminator {
    fn terminate(&self, record: &DaemonRecord) -> TerminationResult {
        let command = self.os.kill_command(record.pid);
        let command_str = command.join(" ");
        debug!(command = %command_str, "terminating daemon");

        match Command::new(&command[0]).args(&command[1..]).output() {
            Ok(output) if output.status.success() => {
                TerminationResult::success(record.clone(), command_str)
            }
            Ok(output) => TerminationResult::failure(
                record.clone(),
                command_str,
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ),
            Err(e) => TerminationResult::failure(
                record.clone(),
                command_str,
                format!("Failed to execute command: {}", e),
            ),
        }
    }
}

/// Terminate every record in order
///
/// A failed termination is logged and the batch continues.
pub fn terminate_all<T: Terminator + ?Sized>(
    terminator: &T,
    records: &[&DaemonRecord],
) -> Vec<TerminationResult> {
    records
        .iter()
        .map(|record| {
            let result = terminator.terminate(record);
            if !result.success {
                warn!(
                    pid = record.pid,
                    command = %result.command,
                    stderr = %result.stderr,
                    "termination command failed"
                );
            }
            result
        })
        .collect()
}
