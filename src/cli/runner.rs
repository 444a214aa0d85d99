//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::RunConfig;
use crate::error::Result;
use crate::loader::load_environments;
use crate::output::{print_csv_summary, render_tables, write_csv_files, CsvReport};
use crate::partition::{partition, Partitioned};
use std::io::{self, Write};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let config = RunConfig::new().with_input(&self.cli.input);
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.cli.command {
            Commands::Csv => run_csv(&config, &mut out).map(|_| ()),
            Commands::Table => run_table(&config, &mut out).map(|_| ()),
        }
    }
}

/// Load, partition and write both CSV files, then print the summary
pub fn run_csv<W: Write>(config: &RunConfig, out: &mut W) -> Result<CsvReport> {
    let partitioned = load_and_partition(config)?;
    let report = write_csv_files(config.output_dir(), &partitioned)?;
    print_csv_summary(out, &report, partitioned.total)?;
    out.flush()?;
    Ok(report)
}

/// Load, partition and print both tables with the summary
pub fn run_table<W: Write>(config: &RunConfig, out: &mut W) -> Result<Partitioned> {
    let partitioned = load_and_partition(config)?;
    render_tables(out, &partitioned)?;
    out.flush()?;
    Ok(partitioned)
}

fn load_and_partition(config: &RunConfig) -> Result<Partitioned> {
    info!(input = %config.input().display(), "Loading environments");
    let records = load_environments(config.input())?;
    partition(&records)
}
