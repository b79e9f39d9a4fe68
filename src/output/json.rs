//! JSON output formatter for scripting
//!
//! Each call writes one compact JSON document on its own line, so a run
//! that also terminates daemons produces two lines: inventory, then results.

use crate::domain::DaemonKind;
use crate::inventory::{Inventory, OutdatedSet};
use crate::output::OutputFormatter;
use crate::terminate::TerminationResult;
use serde::Serialize;
use std::io::Write;

/// JSON formatter
pub struct JsonFormatter {
    /// Whether terminations were simulated
    dry_run: bool,
}

/// One inventory entry
#[derive(Debug, Serialize)]
struct JsonDaemon<'a> {
    index: usize,
    kind: DaemonKind,
    pid: u32,
    version: &'a str,
    outdated: bool,
}

/// One termination attempt
#[derive(Debug, Serialize)]
struct JsonTermination<'a> {
    kind: DaemonKind,
    pid: u32,
    version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'a str>,
    success: bool,
    dry_run: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }
}

fn write_json<T: Serialize>(value: &T, writer: &mut dyn Write) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)
}

impl OutputFormatter for JsonFormatter {
    fn format_inventory(
        &self,
        inventory: &Inventory,
        outdated: &OutdatedSet,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let daemons: Vec<JsonDaemon> = inventory
            .entries()
            .map(|(index, record)| JsonDaemon {
                index,
                kind: record.kind,
                pid: record.pid,
                version: &record.version,
                outdated: outdated.contains(record),
            })
            .collect();
        write_json(&daemons, writer)
    }

    fn format_terminations(
        &self,
        results: &[TerminationResult],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let terminations: Vec<JsonTermination> = results
            .iter()
            .map(|r| JsonTermination {
                kind: r.record.kind,
                pid: r.record.pid,
                version: &r.record.version,
                command: (!r.command.is_empty()).then_some(r.command.as_str()),
                success: r.success,
                dry_run: self.dry_run,
            })
            .collect();
        write_json(&terminations, writer)
    }
}
