//! Record projection and partitioning
//!
//! A single pass over the records: project each one, then route it by
//! whether it carries release windows.

use super::types::{DisplayField, Partitioned, ProjectedRow};
use crate::error::{Error, Result};
use crate::loader::json_type_name;
use crate::types::{EnvironmentRecord, JsonValue, RELEASE_WINDOWS_KEY, SENTINEL};
use tracing::debug;

/// Project one record into a display row
///
/// Fails when `releaseWindows` is present, non-null and not an array.
pub fn project(record: &EnvironmentRecord) -> Result<ProjectedRow> {
    let values = DisplayField::ALL.map(|field| display_value(record, field));
    let count = release_windows_count(record)?;
    Ok(ProjectedRow::new(values, count))
}

/// Split records into the "with" and "without" release-window groups
pub fn partition(records: &[EnvironmentRecord]) -> Result<Partitioned> {
    let mut result = Partitioned {
        total: records.len(),
        ..Partitioned::default()
    };

    for (index, record) in records.iter().enumerate() {
        let row = project(record).map_err(|e| match e {
            Error::Schema { message } => {
                Error::schema(format!("environment at index {index}: {message}"))
            }
            other => other,
        })?;

        if row.has_release_windows() {
            result.with_windows.push(row);
        } else {
            result.without_windows.push(row);
        }
    }

    debug!(
        total = result.total,
        with_windows = result.with_count(),
        without_windows = result.without_count(),
        "Partitioned environments"
    );

    Ok(result)
}

fn display_value(record: &EnvironmentRecord, field: DisplayField) -> String {
    match record.get(field.key()) {
        None | Some(JsonValue::Null) => SENTINEL.to_string(),
        Some(JsonValue::String(s)) if s.is_empty() => SENTINEL.to_string(),
        Some(JsonValue::String(s)) => s.clone(),
        // Non-string scalars and containers keep their JSON text
        Some(other) => other.to_string(),
    }
}

fn release_windows_count(record: &EnvironmentRecord) -> Result<Option<usize>> {
    match record.get(RELEASE_WINDOWS_KEY) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Array(windows)) => Ok(Some(windows.len())),
        Some(other) => Err(Error::schema(format!(
            "`{RELEASE_WINDOWS_KEY}` must be an array, found {}",
            json_type_name(other)
        ))),
    }
}
