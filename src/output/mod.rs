//! Output formatting for the daemon inventory
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for scripting

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::inventory::{Inventory, OutdatedSet};
use crate::terminate::TerminationResult;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write the inventory, or a notice when it is empty
    fn format_inventory(
        &self,
        inventory: &Inventory,
        outdated: &OutdatedSet,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Write one confirmation per termination
    fn format_terminations(
        &self,
        results: &[TerminationResult],
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;
}

/// Create an output formatter
pub fn create_formatter(
    format: OutputFormat,
    dry_run: bool,
    color: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(dry_run, color)),
        OutputFormat::Json => Box::new(JsonFormatter::new(dry_run)),
    }
}
