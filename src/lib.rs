//! daemon-reaper - Gradle and Kotlin daemon inventory library
//!
//! This library provides the pipeline behind the CLI:
//! - Classifying process listing lines into daemon records
//! - Ranking daemons by version within each kind
//! - Flagging outdated duplicates
//! - Selecting and terminating daemons

pub mod cli;
pub mod domain;
pub mod error;
pub mod inventory;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod process;
pub mod progress;
pub mod prompt;
pub mod selection;
pub mod terminate;
