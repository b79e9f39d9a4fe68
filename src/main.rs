//! daemon-reaper - Inventory and kill stale build daemons
//!
//! Lists running Gradle and Kotlin compile daemons, highlights older
//! duplicates and lets the operator pick which ones to kill.

use clap::Parser;
use daemon_reaper::cli::CliArgs;
use daemon_reaper::error::AppError;
use daemon_reaper::orchestrator::{Orchestrator, RunOptions};
use daemon_reaper::process::{FileLister, JpsLister, ProcessLister};
use daemon_reaper::prompt::TerminalPrompt;
use daemon_reaper::terminate::{SystemTerminator, TargetOs};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    init_logging(args.log_filter());
    if args.no_color {
        colored::control::set_override(false);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code)
        }
    }
}

/// Initialize the stderr log subscriber; `RUST_LOG` takes precedence
fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
fn run(args: &CliArgs) -> anyhow::Result<()> {
    let lister: Box<dyn ProcessLister> = match &args.input {
        Some(path) => Box::new(FileLister::new(path)),
        None => Box::new(JpsLister::new()),
    };
    let terminator = SystemTerminator::new(TargetOs::current());
    let prompt = TerminalPrompt;

    let orchestrator = Orchestrator::new(
        RunOptions::from_cli(args),
        lister.as_ref(),
        &terminator,
        &prompt,
    );

    let mut stdout = io::stdout().lock();
    orchestrator.run(&mut stdout)?;
    stdout.flush()?;
    Ok(())
}
