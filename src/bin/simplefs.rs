//! SimpleFS CLI Binary
//!
//! Reads namespace commands line by line and prints one reply per command.

use anyhow::Context;
use clap::Parser;
use simplefs::logging::init_logging;
use simplefs::tooling::cli::{Cli, CliContext};
use std::process;

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let context = CliContext::new(&cli).context("Error loading configuration")?;
    init_logging(&context.config().logging).context("Error initializing logging")?;

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    context
        .execute(&mut output)
        .context("Error running command session")?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}
