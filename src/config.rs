//! Run configuration
//!
//! Where to read the environment export from and where the CSV files go.
//! Output file names are fixed; only the directory can move, and the CLI
//! never moves it.

use crate::types::DEFAULT_INPUT;
use std::path::{Path, PathBuf};

/// Settings for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// JSON file holding the environment array
    input: PathBuf,
    /// Directory receiving the CSV files
    output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
        }
    }
}

impl RunConfig {
    /// Create a config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input file
    #[must_use]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Set the CSV output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Get the input file
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Get the CSV output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
