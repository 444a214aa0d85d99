//! Output module
//!
//! Emits partitioned environments either as two CSV files or as two
//! fixed-width console tables, each followed by a summary.
//!
//! # Overview
//!
//! This module provides:
//! - Writing each group to its fixed CSV file name
//! - Rendering each group as a console table
//! - The summaries printed after either variant

mod table;
mod writer;

pub use table::{print_table_summary, render_tables, TABLE_WIDTH};
pub use writer::{
    csv_headers, print_csv_summary, write_csv_files, write_group_to_csv, CsvReport, CsvWriter,
    WITHOUT_WINDOWS_CSV, WITH_WINDOWS_CSV,
};
