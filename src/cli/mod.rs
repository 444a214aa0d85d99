//! CLI module
//!
//! Command-line interface for splitting environment exports.
//!
//! # Commands
//!
//! - `csv` - Write the two CSV files and print a summary
//! - `table` - Print both groups as console tables and a summary

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::{run_csv, run_table, Runner};
