//! CLI commands and argument parsing

use crate::types::DEFAULT_INPUT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Split environments by release-window presence
#[derive(Parser, Debug)]
#[command(name = "envsplit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Environment export (JSON array)
    #[arg(short, long, global = true, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Write one CSV file per group into the working directory
    Csv,

    /// Print one table per group to stdout
    Table,
}
