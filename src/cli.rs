//! CLI argument parsing module for daemon-reaper

use crate::orchestrator::SelectionMode;
use clap::Parser;
use std::path::PathBuf;

/// Inventory running Gradle and Kotlin daemons and kill stale ones
#[derive(Parser, Debug, Clone)]
#[command(
    name = "daemon-reaper",
    version,
    about = "Inventory running Gradle and Kotlin daemons and kill stale ones"
)]
pub struct CliArgs {
    /// Read the process listing from a file instead of running `jps -mlvV`
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    // Selection options
    /// Only print the inventory, do not prompt
    #[arg(long, conflicts_with_all = ["yes", "select"])]
    pub list: bool,

    /// Kill the outdated daemons without prompting
    #[arg(short, long, conflicts_with = "select")]
    pub yes: bool,

    /// Comma-separated inventory numbers to kill, without prompting
    #[arg(long, value_name = "LIST")]
    pub select: Option<String>,

    /// Dry run mode - show what would be killed without killing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Resolve how the selection is obtained
    ///
    /// JSON output never prompts: without an explicit selection it only lists.
    pub fn selection_mode(&self) -> SelectionMode {
        if let Some(select) = &self.select {
            SelectionMode::Explicit(select.clone())
        } else if self.yes {
            SelectionMode::AcceptDefault
        } else if self.list || self.json {
            SelectionMode::ListOnly
        } else {
            SelectionMode::Prompt
        }
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["daemon-reaper"]);
        assert!(args.input.is_none());
        assert!(!args.list);
        assert!(!args.yes);
        assert!(args.select.is_none());
        assert!(!args.dry_run);
        assert!(!args.json);
        assert!(!args.no_color);
        assert!(!args.verbose);
        assert_eq!(args.selection_mode(), SelectionMode::Prompt);
    }

    #[test]
    fn test_input_argument() {
        let args = CliArgs::parse_from(["daemon-reaper", "--input", "/tmp/jps.txt"]);
        assert_eq!(args.input, Some(PathBuf::from("/tmp/jps.txt")));
    }

    #[test]
    fn test_dry_run_flags() {
        assert!(CliArgs::parse_from(["daemon-reaper", "-n"]).dry_run);
        assert!(CliArgs::parse_from(["daemon-reaper", "--dry-run"]).dry_run);
    }

    #[test]
    fn test_yes_mode() {
        let args = CliArgs::parse_from(["daemon-reaper", "-y"]);
        assert_eq!(args.selection_mode(), SelectionMode::AcceptDefault);
    }

    #[test]
    fn test_select_mode() {
        let args = CliArgs::parse_from(["daemon-reaper", "--select", "1,3"]);
        assert_eq!(
            args.selection_mode(),
            SelectionMode::Explicit("1,3".to_string())
        );
    }

    #[test]
    fn test_list_mode() {
        let args = CliArgs::parse_from(["daemon-reaper", "--list"]);
        assert_eq!(args.selection_mode(), SelectionMode::ListOnly);
    }

    #[test]
    fn test_json_implies_list() {
        let args = CliArgs::parse_from(["daemon-reaper", "--json"]);
        assert_eq!(args.selection_mode(), SelectionMode::ListOnly);

        let args = CliArgs::parse_from(["daemon-reaper", "--json", "--yes"]);
        assert_eq!(args.selection_mode(), SelectionMode::AcceptDefault);
    }

    #[test]
    fn test_conflicting_flags() {
        assert!(CliArgs::try_parse_from(["daemon-reaper", "--yes", "--select", "1"]).is_err());
        assert!(CliArgs::try_parse_from(["daemon-reaper", "--list", "--yes"]).is_err());
        assert!(CliArgs::try_parse_from(["daemon-reaper", "--list", "--select", "1"]).is_err());
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(CliArgs::parse_from(["daemon-reaper"]).log_filter(), "info");
        assert_eq!(
            CliArgs::parse_from(["daemon-reaper", "--verbose"]).log_filter(),
            "debug"
        );
    }
}
