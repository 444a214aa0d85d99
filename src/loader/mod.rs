//! JSON Loader module
//!
//! Reads the environment export and hands back the raw records.
//!
//! # Overview
//!
//! The loader module provides:
//! - `load_environments` - read and parse a JSON file from disk
//! - `load_environments_from_str` - parse an in-memory JSON document
//!
//! The document must be a top-level array of objects. Nothing else about
//! the records is validated here; missing keys are the partitioner's concern.

mod parser;

pub use parser::{load_environments, load_environments_from_str};
pub(crate) use parser::json_type_name;

#[cfg(test)]
mod tests;
