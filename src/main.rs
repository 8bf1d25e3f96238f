//! # bmi Main Entry Point
//!
//! Body Mass Index calculator for the command line.

use anyhow::Result;
use bmi::{config, io::TerminalPromptStream, CommandLineArgs};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = CommandLineArgs::parse();

    if let Err(e) = init_tracing(args.verbose()) {
        eprintln!("Failed to initialize logging: {e:#}");
    }

    let mut prompts = TerminalPromptStream::new();
    let mut stdout = std::io::stdout().lock();
    let result = bmi::run(&args, &mut prompts, &mut stdout);

    if let Err(e) = &result {
        tracing::debug!(error = ?e, "calculation failed");
        eprintln!("{e}");
    }

    std::process::exit(bmi::exit_code(&result));
}

/// Diagnostics go to stderr so stdout only ever carries prompts and the report.
fn init_tracing(verbose: bool) -> Result<()> {
    let level = config::get_log_level(verbose);
    let filter = EnvFilter::try_new(&level)
        .or_else(|_| EnvFilter::try_new(config::DEFAULT_LOG_LEVEL))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    tracing::debug!(level = %level, "tracing initialized");
    Ok(())
}
