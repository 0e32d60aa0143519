//! Nanobot launcher entry point
//!
//! Parses CLI overrides, sets up tracing, then runs the bootstrap
//! procedure. A missing Python interpreter is the only condition that
//! changes the exit status (1); every later failure is reported on the
//! console and the run finishes normally.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nanobot_launcher::{Acknowledge, AutoAck, Bootstrapper, Cli, TerminalPrompt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info,nanobot_launcher=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let options = cli.to_options()?;
    let ack: Box<dyn Acknowledge> = if cli.yes {
        Box::new(AutoAck::new())
    } else {
        Box::new(TerminalPrompt)
    };

    let mut bootstrapper = Bootstrapper::new(options, ack);
    match bootstrapper.run() {
        Ok(report) => {
            for failure in report.failures() {
                tracing::debug!(step = failure.step.display_name(), "Step did not succeed");
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
