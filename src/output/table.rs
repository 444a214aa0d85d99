//! Fixed-width console tables
//!
//! Columns are left-justified and padded to a minimum width. Longer values
//! are printed in full and push the rest of the line to the right.

use crate::error::Result;
use crate::partition::{DisplayField, Partitioned, ProjectedRow};
use std::io::Write;

/// Width of banner and separator lines
pub const TABLE_WIDTH: usize = 150;

/// Minimum widths of the seven display columns
const COLUMN_WIDTHS: [usize; 7] = [35, 20, 12, 15, 20, 20, 35];

/// Minimum width of the release window count column
const COUNT_WIDTH: usize = 10;

/// Shorter header used for the count column in tables
const COUNT_HEADER: &str = "RW Count";

/// Print both groups as tables, followed by the summary
pub fn render_tables<W: Write>(out: &mut W, partitioned: &Partitioned) -> Result<()> {
    render_group(
        out,
        &format!(
            "ENVIRONMENTS WITH RELEASE WINDOWS (Total: {})",
            partitioned.with_count()
        ),
        &partitioned.with_windows,
        true,
        "No environments with release windows found.",
    )?;

    write!(out, "\n\n\n")?;

    render_group(
        out,
        &format!(
            "ENVIRONMENTS WITHOUT RELEASE WINDOWS - NULL (Total: {})",
            partitioned.without_count()
        ),
        &partitioned.without_windows,
        false,
        "No environments without release windows found.",
    )?;

    write!(out, "\n\n")?;
    print_table_summary(out, partitioned)
}

/// Print the closing summary block
pub fn print_table_summary<W: Write>(out: &mut W, partitioned: &Partitioned) -> Result<()> {
    let banner = "=".repeat(TABLE_WIDTH);
    writeln!(out, "{banner}")?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "{banner}")?;
    writeln!(out, "Total environments: {}", partitioned.total)?;
    writeln!(out, "With release windows: {}", partitioned.with_count())?;
    writeln!(
        out,
        "Without release windows (null): {}",
        partitioned.without_count()
    )?;
    Ok(())
}

fn render_group<W: Write>(
    out: &mut W,
    title: &str,
    rows: &[ProjectedRow],
    include_count: bool,
    empty_message: &str,
) -> Result<()> {
    let banner = "=".repeat(TABLE_WIDTH);
    writeln!(out, "{banner}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{banner}")?;

    if rows.is_empty() {
        writeln!(out, "{empty_message}")?;
        return Ok(());
    }

    let headers = DisplayField::ALL.map(|f| f.header());
    let count_header = include_count.then_some(COUNT_HEADER);
    writeln!(out, "{}", format_line(headers.iter().copied(), count_header))?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;

    for row in rows {
        let count = row
            .release_windows_count
            .filter(|_| include_count)
            .map(|c| c.to_string());
        writeln!(out, "{}", format_line(row.values(), count.as_deref()))?;
    }

    Ok(())
}

/// Pad each cell to its column width and join with single spaces
fn format_line<'a>(values: impl Iterator<Item = &'a str>, count: Option<&str>) -> String {
    let mut cells: Vec<String> = values
        .zip(COLUMN_WIDTHS)
        .map(|(value, width)| format!("{value:<width$}"))
        .collect();

    if let Some(count) = count {
        cells.push(format!("{count:<width$}", width = COUNT_WIDTH));
    }

    cells.join(" ")
}
