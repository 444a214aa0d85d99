//! Common types used throughout envsplit
//!
//! Shared type aliases and constants used across the loader,
//! the partitioner and both emitters.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// One input environment record, kept as a raw JSON object
pub type EnvironmentRecord = serde_json::Map<String, JsonValue>;

// ============================================================================
// Constants
// ============================================================================

/// Placeholder for a missing, null or empty display value
pub const SENTINEL: &str = "N/A";

/// Input file read when no path is given
pub const DEFAULT_INPUT: &str = "environments.json";

/// Key whose presence decides the output group
pub const RELEASE_WINDOWS_KEY: &str = "releaseWindows";
