//! Partition module
//!
//! Projects environment records into display rows and splits them by
//! release-window presence.
//!
//! # Rules
//!
//! - A display value that is absent, null or `""` becomes `"N/A"`
//! - A record whose `releaseWindows` is present and non-null goes to the
//!   "with" group, carrying the window count (0 for an empty list)
//! - Everything else goes to the "without" group
//! - Input order is preserved inside each group

mod projector;
mod types;

pub use projector::{partition, project};
pub use types::{DisplayField, Partitioned, ProjectedRow, RELEASE_WINDOWS_COUNT_HEADER};
