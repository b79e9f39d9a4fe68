//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ListingError: the process listing could not be obtained
//! - SelectionError: operator input does not name inventory entries
//! - Prompt / Output: terminal interaction failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Process listing related errors
    #[error(transparent)]
    Listing(#[from] ListingError),

    /// Invalid selection
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Interactive prompt failed (e.g. no terminal attached)
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Writing output failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this error: 2 for usage errors, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Selection(_) => 2,
            _ => 1,
        }
    }
}

/// Errors related to obtaining the process listing
#[derive(Error, Debug)]
pub enum ListingError {
    /// The listing command could not be started
    #[error("failed to run '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The listing command exited unsuccessfully
    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The listing file could not be read
    #[error("failed to read process listing {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to operator selection input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A token that is not a valid 1-based inventory position
    #[error("Invalid input: '{token}' is not a number between 1 and {max}")]
    InvalidToken { token: String, max: usize },
}

impl ListingError {
    /// Creates a new SpawnFailed error
    pub fn spawn_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        ListingError::SpawnFailed {
            command: command.into(),
            source,
        }
    }

    /// Creates a new CommandFailed error
    pub fn command_failed(
        command: impl Into<String>,
        status: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        ListingError::CommandFailed {
            command: command.into(),
            status: status.into(),
            stderr: stderr.into(),
        }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ListingError::ReadError {
            path: path.into(),
            source,
        }
    }
}

impl SelectionError {
    /// Creates a new InvalidToken error
    pub fn invalid_token(token: impl Into<String>, max: usize) -> Self {
        SelectionError::InvalidToken {
            token: token.into(),
            max,
        }
    }
}
