//! CSV file writer
//!
//! Writes projected rows to CSV with a fixed header. Quoting follows the
//! usual minimal rules and records end in CRLF, so any CSV reader gets the
//! projected values back unchanged.

use crate::error::{Error, Result};
use crate::partition::{
    DisplayField, Partitioned, ProjectedRow, RELEASE_WINDOWS_COUNT_HEADER,
};
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// File receiving environments that have release windows
pub const WITH_WINDOWS_CSV: &str = "environments_with_release_windows.csv";

/// File receiving environments without release windows
pub const WITHOUT_WINDOWS_CSV: &str = "environments_without_release_windows.csv";

/// Column headers for a CSV group
pub fn csv_headers(include_count: bool) -> Vec<&'static str> {
    let mut headers: Vec<&'static str> = DisplayField::ALL.iter().map(|f| f.header()).collect();
    if include_count {
        headers.push(RELEASE_WINDOWS_COUNT_HEADER);
    }
    headers
}

/// CSV writer for one group of projected rows
pub struct CsvWriter<W: Write> {
    /// Underlying csv writer
    writer: csv::Writer<W>,
    /// Number of rows written, header excluded
    rows_written: usize,
}

impl CsvWriter<File> {
    /// Create the file at `path` and write the header
    pub fn create(path: impl AsRef<Path>, headers: &[&str]) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            Error::output(path.display().to_string(), format!("Failed to create file: {e}"))
        })?;
        Self::from_writer(file, headers)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any writer and write the header
    pub fn from_writer(inner: W, headers: &[&str]) -> Result<Self> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .from_writer(inner);
        writer.write_record(headers)?;

        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    /// Write a row; its width must match the header
    pub fn write(&mut self, row: &ProjectedRow) -> Result<()> {
        self.writer.write_record(row.to_record())?;
        self.rows_written += 1;
        Ok(())
    }

    /// Get the number of rows written so far
    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and return the number of rows written
    pub fn close(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.rows_written)
    }
}

/// Write one group to a CSV file
///
/// An empty group still creates (or truncates) the file but leaves it at
/// zero bytes, with no header.
pub fn write_group_to_csv(
    path: impl AsRef<Path>,
    rows: &[ProjectedRow],
    include_count: bool,
) -> Result<usize> {
    let path = path.as_ref();

    if rows.is_empty() {
        File::create(path).map_err(|e| {
            Error::output(path.display().to_string(), format!("Failed to create file: {e}"))
        })?;
        info!(path = %path.display(), rows = 0, "Wrote empty CSV");
        return Ok(0);
    }

    let mut writer = CsvWriter::create(path, &csv_headers(include_count))?;
    for row in rows {
        writer.write(row)?;
    }
    let rows = writer.close()?;

    info!(path = %path.display(), rows, "Wrote CSV");
    Ok(rows)
}

/// Paths and row counts of the two CSV files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvReport {
    pub with_windows_path: PathBuf,
    pub with_windows_rows: usize,
    pub without_windows_path: PathBuf,
    pub without_windows_rows: usize,
}

/// Write both groups into `dir` under their fixed file names
pub fn write_csv_files(dir: impl AsRef<Path>, partitioned: &Partitioned) -> Result<CsvReport> {
    let dir = dir.as_ref();

    let with_windows_path = dir.join(WITH_WINDOWS_CSV);
    let with_windows_rows =
        write_group_to_csv(&with_windows_path, &partitioned.with_windows, true)?;

    let without_windows_path = dir.join(WITHOUT_WINDOWS_CSV);
    let without_windows_rows =
        write_group_to_csv(&without_windows_path, &partitioned.without_windows, false)?;

    Ok(CsvReport {
        with_windows_path,
        with_windows_rows,
        without_windows_path,
        without_windows_rows,
    })
}

/// Print the summary shown after the CSV files are written
pub fn print_csv_summary<W: Write>(out: &mut W, report: &CsvReport, total: usize) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "✓ Created '{WITH_WINDOWS_CSV}' with {} entries",
        report.with_windows_rows
    )?;
    writeln!(
        out,
        "✓ Created '{WITHOUT_WINDOWS_CSV}' with {} entries",
        report.without_windows_rows
    )?;
    writeln!(out)?;
    writeln!(out, "Total environments: {total}")?;
    writeln!(out, "  - With release windows: {}", report.with_windows_rows)?;
    writeln!(
        out,
        "  - Without release windows (null): {}",
        report.without_windows_rows
    )?;
    Ok(())
}
