//! envsplit CLI
//!
//! Splits an environment export into CSV files or console tables

use clap::Parser;
use envsplit::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with table output
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
