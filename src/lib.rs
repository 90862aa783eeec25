//! # gds
//!
//! Library side of the `gds` disk-usage reporter.
//!
//! Given a target directory, `gds` measures every immediate subdirectory, sorts
//! the results by size and reports them together with the grand total of the
//! target itself.
//!
//! ## Main Parts
//!
//! - [`utils::calculate_dir_size`] - recursive size walker over a single subtree
//! - [`utils::format_bytes`] - human-readable byte formatting (Bytes/KB/MB/GB)
//! - [`reporter::Reporter`] - measures the subdirectories of a target and builds a [`Report`]
//! - [`sorting::sort_entries`] - ascending or descending ordering of entries
//! - [`output::JsonOutput`] - serializable form of a report for `--json`
//! - [`config`] - option types and the persistent configuration file

pub mod config;
pub mod output;
pub mod report;
pub mod reporter;
pub mod sorting;
pub mod utils;

pub use config::{FileConfig, ScanOptions, SortOrder};
pub use report::{DirectoryEntry, EntryError, Report, SkippedDirectory};
pub use reporter::Reporter;

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that abort an operation.
///
/// Failures scoped to a single entry inside a walk are not errors in this
/// sense; they are collected as [`EntryError`] values and the walk continues.
#[derive(Debug)]
pub enum Error {
    /// A walk root (the target directory or one of its subdirectories) could
    /// not be opened or listed.
    RootAccess { path: PathBuf, source: io::Error },

    /// The requested options cannot be combined.
    Configuration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootAccess { path, source } => {
                write!(f, "cannot read directory {}: {source}", path.display())
            }
            Self::Configuration(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RootAccess { source, .. } => Some(source),
            Self::Configuration(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_access_display_includes_path() {
        let err = Error::RootAccess {
            path: PathBuf::from("/no/such/dir"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };

        let msg = err.to_string();
        assert!(msg.contains("/no/such/dir"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_root_access_exposes_source() {
        use std::error::Error as _;

        let err = Error::RootAccess {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());

        let err = Error::Configuration("bad".to_string());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "bad");
    }
}
