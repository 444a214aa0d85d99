//! # envsplit
//!
//! Splits an environment export into two groups by whether each
//! environment has release windows, then writes the groups as CSV files
//! or prints them as fixed-width console tables.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use envsplit::{load_environments, output, partition, Result};
//!
//! fn main() -> Result<()> {
//!     let records = load_environments("environments.json")?;
//!     let groups = partition(&records)?;
//!
//!     let report = output::write_csv_files(".", &groups)?;
//!     output::print_csv_summary(&mut std::io::stdout(), &report, groups.total)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!  environments.json
//!         │
//!   ┌─────▼─────┐     ┌───────────────┐     ┌────────────────┐
//!   │  Loader   │ ──▶ │   Partition   │ ──▶ │     Output     │
//!   │ JSON array│     │ project, split│     │ CSV or tables  │
//!   └───────────┘     └───────────────┘     └────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and constants
pub mod types;

/// Run configuration
pub mod config;

/// JSON loader for environment exports
pub mod loader;

/// Projection and release-window partitioning
pub mod partition;

/// CSV and console table output
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::RunConfig;
pub use error::{Error, Result};
pub use types::*;

pub use loader::{load_environments, load_environments_from_str};
pub use partition::{partition, project, DisplayField, Partitioned, ProjectedRow};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
