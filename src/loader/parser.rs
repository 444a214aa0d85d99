//! JSON parser for environment exports
//!
//! Parses the whole file in memory and checks only the outer shape.

use crate::error::{Error, Result};
use crate::types::{EnvironmentRecord, JsonValue};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load environment records from a JSON file
///
/// # Examples
///
/// ```ignore
/// let records = load_environments("environments.json")?;
/// println!("{} environments", records.len());
/// ```
pub fn load_environments(path: impl AsRef<Path>) -> Result<Vec<EnvironmentRecord>> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    let records = load_environments_from_str(&content)?;
    debug!(path = %path.display(), records = records.len(), "Loaded environments");
    Ok(records)
}

/// Load environment records from a JSON string
pub fn load_environments_from_str(json: &str) -> Result<Vec<EnvironmentRecord>> {
    let value: JsonValue = serde_json::from_str(json)?;

    let JsonValue::Array(items) = value else {
        return Err(Error::schema(format!(
            "expected a top-level array of environments, found {}",
            json_type_name(&value)
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            JsonValue::Object(record) => Ok(record),
            other => Err(Error::schema(format!(
                "environment at index {index} is {}, expected an object",
                json_type_name(&other)
            ))),
        })
        .collect()
}

/// Human-readable name of a JSON value's type, for error messages
pub(crate) fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
