//! Report data model.
//!
//! ## Main Parts
//!
//! - [`Report`] - the sorted listing plus the grand total of one run
//! - [`DirectoryEntry`] - a measured subdirectory (label and size)
//! - [`SkippedDirectory`] - a subdirectory whose walk failed at its root
//! - [`EntryError`] - an entry-level access failure inside a walk

pub mod entry;
#[allow(clippy::module_inception)]
// This is acceptable as it is the main module for the report type
pub mod report;

pub use entry::{DirectoryEntry, EntryError, SkippedDirectory};
pub use report::Report;
