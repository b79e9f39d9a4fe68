//! Run orchestrator for one inventory-and-terminate pass
//!
//! This module provides:
//! - Workflow coordination: list → classify → rank → display → select → terminate
//! - Prompt, default-selection, explicit-selection and list-only modes
//! - Dry-run mode support

use crate::cli::CliArgs;
use crate::error::AppError;
use crate::inventory::{Inventory, OutdatedSet};
use crate::output::{create_formatter, OutputFormat};
use crate::parser::parse_listing;
use crate::process::ProcessLister;
use crate::progress::Progress;
use crate::prompt::SelectionPrompt;
use crate::selection::{default_selection, parse_selection, resolve};
use crate::terminate::{terminate_all, TerminationResult, Terminator};
use std::io::Write;
use tracing::debug;

/// How the operator's selection is obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    /// Print the inventory and stop
    ListOnly,
    /// Ask interactively, pre-filled with the outdated positions
    Prompt,
    /// Use the outdated positions without asking
    AcceptDefault,
    /// Use a selection given up front
    Explicit(String),
}

/// Options for a single run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Selection mode
    pub mode: SelectionMode,
    /// Output format
    pub format: OutputFormat,
    /// Report terminations without issuing kill commands
    pub dry_run: bool,
    /// Whether to use colors in text output
    pub color: bool,
    /// Whether to show a spinner while listing
    pub show_progress: bool,
}

impl RunOptions {
    /// Create options from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        let format = if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Self {
            mode: args.selection_mode(),
            format,
            dry_run: args.dry_run,
            color: !args.no_color,
            show_progress: format == OutputFormat::Text,
        }
    }
}

/// Outcome of a run
#[derive(Debug)]
pub struct RunSummary {
    /// Detected daemons in display order
    pub inventory: Inventory,
    /// Daemons that were considered outdated
    pub outdated: OutdatedSet,
    /// Terminations attempted (or simulated)
    pub terminations: Vec<TerminationResult>,
}

/// Orchestrator wiring the pipeline stages to their collaborators
pub struct Orchestrator<'a> {
    options: RunOptions,
    lister: &'a dyn ProcessLister,
    terminator: &'a dyn Terminator,
    prompt: &'a dyn SelectionPrompt,
}

impl<'a> Orchestrator<'a> {
    /// Create a new orchestrator
    pub fn new(
        options: RunOptions,
        lister: &'a dyn ProcessLister,
        terminator: &'a dyn Terminator,
        prompt: &'a dyn SelectionPrompt,
    ) -> Self {
        Self {
            options,
            lister,
            terminator,
            prompt,
        }
    }

    /// Run one pass, writing human or JSON output to `writer`
    pub fn run(&self, writer: &mut dyn Write) -> Result<RunSummary, AppError> {
        // Step 1: List processes
        let mut progress = Progress::new(self.options.show_progress);
        progress.spinner(&format!("Listing processes ({})...", self.lister.describe()));
        let lines = self.lister.list();
        progress.finish_and_clear();
        let lines = lines?;

        // Step 2: Classify, rank and judge
        let records = parse_listing(&lines);
        debug!(
            lines = lines.len(),
            daemons = records.len(),
            "classified process listing"
        );
        let inventory = Inventory::from_records(&records);
        let outdated = OutdatedSet::from_records(&records);

        // Step 3: Display
        let formatter = create_formatter(
            self.options.format,
            self.options.dry_run,
            self.options.color,
        );
        formatter.format_inventory(&inventory, &outdated, writer)?;

        let mut summary = RunSummary {
            inventory,
            outdated,
            terminations: Vec::new(),
        };
        if summary.inventory.is_empty() {
            return Ok(summary);
        }

        // Step 4: Select
        let len = summary.inventory.len();
        let outdated_positions = summary.inventory.outdated_positions(&summary.outdated);
        let default = default_selection(&outdated_positions);
        let positions = match &self.options.mode {
            SelectionMode::ListOnly => return Ok(summary),
            SelectionMode::Prompt => {
                writer.flush()?;
                self.prompt.ask(len, default.as_deref())?
            }
            SelectionMode::AcceptDefault => {
                parse_selection(default.as_deref().unwrap_or(""), len)?
            }
            SelectionMode::Explicit(input) => parse_selection(input, len)?,
        };

        let selected = resolve(&summary.inventory, &positions);
        if selected.is_empty() {
            debug!("nothing selected");
            return Ok(summary);
        }

        // Step 5: Terminate
        let terminations: Vec<TerminationResult> = if self.options.dry_run {
            selected
                .iter()
                .map(|record| TerminationResult::skipped((*record).clone()))
                .collect()
        } else {
            terminate_all(self.terminator, &selected)
        };
        formatter.format_terminations(&terminations, writer)?;

        summary.terminations = terminations;
        Ok(summary)
    }
}
