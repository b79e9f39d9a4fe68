//! Text output formatter for human-readable display
//!
//! Inventory rows are `[index]\tKind\tversion`. Outdated rows are
//! highlighted when colors are enabled.

use crate::domain::DaemonRecord;
use crate::inventory::{Inventory, OutdatedSet};
use crate::output::OutputFormatter;
use crate::terminate::TerminationResult;
use colored::Colorize;
use std::io::Write;

/// Notice printed when no daemon was found
pub const NO_DAEMONS: &str = "No daemons detected.";

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether terminations were simulated
    dry_run: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(dry_run: bool, color: bool) -> Self {
        Self { dry_run, color }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> String {
        if !self.dry_run {
            String::new()
        } else if self.color {
            format!("{} ", "(dry-run)".cyan())
        } else {
            "(dry-run) ".to_string()
        }
    }

    fn format_row(
        &self,
        position: usize,
        record: &DaemonRecord,
        outdated: bool,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if !self.color {
            return writeln!(writer, "[{}]\t{}\t{}", position, record.kind, record.version);
        }

        let version = if outdated {
            record.version.yellow().to_string()
        } else {
            record.version.bright_white().bold().to_string()
        };
        writeln!(
            writer,
            "{}\t{}\t{}",
            format!("[{}]", position).dimmed(),
            record.kind,
            version
        )
    }
}

impl OutputFormatter for TextFormatter {
    fn format_inventory(
        &self,
        inventory: &Inventory,
        outdated: &OutdatedSet,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if inventory.is_empty() {
            return writeln!(writer, "{}", NO_DAEMONS);
        }

        for (position, record) in inventory.entries() {
            self.format_row(position, record, outdated.contains(record), writer)?;
        }
        Ok(())
    }

    fn format_terminations(
        &self,
        results: &[TerminationResult],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix();
        for result in results {
            // Printed even when the kill command failed
            writeln!(
                writer,
                "{}killed {}\t{}",
                prefix, result.record.kind, result.record.version
            )?;
        }
        Ok(())
    }
}
