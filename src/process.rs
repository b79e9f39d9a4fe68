//! Process listing sources
//!
//! This module provides:
//! - The `jps -mlvV` listing of running JVMs
//! - A file-backed listing for offline inspection and tests

use crate::error::ListingError;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Command used to list running JVM processes with arguments
pub const JPS_COMMAND: &[&str] = &["jps", "-mlvV"];

/// Trait for producing raw process listing lines
pub trait ProcessLister {
    /// Returns one line per running process
    fn list(&self) -> Result<Vec<String>, ListingError>;

    /// Human-readable description of the source
    fn describe(&self) -> String;
}

/// Lists JVM processes by running `jps`
#[derive(Debug, Default)]
pub struct JpsLister;

impl JpsLister {
    /// Create a new jps lister
    pub fn new() -> Self {
        Self
    }
}

impl ProcessLister for JpsLister {
    fn list(&self) -> Result<Vec<String>, ListingError> {
        let command_str = JPS_COMMAND.join(" ");
        debug!(command = %command_str, "listing processes");

        let output = Command::new(JPS_COMMAND[0])
            .args(&JPS_COMMAND[1..])
            .output()
            .map_err(|e| ListingError::spawn_failed(&command_str, e))?;

        if !output.status.success() {
            return Err(ListingError::command_failed(
                command_str,
                output.status.to_string(),
                String::from_utf8_lossy(&output.stderr).trim(),
            ));
        }

        Ok(split_lines(&String::from_utf8_lossy(&output.stdout)))
    }

    fn describe(&self) -> String {
        JPS_COMMAND.join(" ")
    }
}

/// Reads a previously captured listing from a file
#[derive(Debug, Clone)]
pub struct FileLister {
    path: PathBuf,
}

impl FileLister {
    /// Create a lister reading the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProcessLister for FileLister {
    fn list(&self) -> Result<Vec<String>, ListingError> {
        debug!(path = %self.path.display(), "reading process listing");
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ListingError::read_error(&self.path, e))?;
        Ok(split_lines(&content))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}
