//! Individual records that make up a report.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A measured immediate subdirectory of the report target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    /// Display label: the subdirectory's file name.
    pub name: String,

    /// Full path of the subdirectory.
    pub path: PathBuf,

    /// Total size of the regular files in the subtree, in bytes.
    pub size: u64,
}

impl DirectoryEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size,
        }
    }
}

/// A failure scoped to one filesystem object during a walk.
///
/// These never abort a walk; the affected bytes are left out of the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryError {
    /// Path of the entry, when known.
    pub path: Option<PathBuf>,

    /// Short classification: `EACCES`, `ENOENT`, `ELOOP` or `IO`.
    pub code: String,

    /// Human-readable description.
    pub message: String,
}

impl EntryError {
    /// Build an entry error from a plain I/O error.
    #[must_use]
    pub fn from_io(path: Option<&Path>, error: &io::Error) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
            code: io_error_code(error).to_string(),
            message: error.to_string(),
        }
    }

    /// Build an entry error from a `walkdir` error.
    #[must_use]
    pub fn from_walk_error(error: &walkdir::Error) -> Self {
        let code = if error.loop_ancestor().is_some() {
            "ELOOP"
        } else {
            error.io_error().map_or("IO", io_error_code)
        };

        Self {
            path: error.path().map(Path::to_path_buf),
            code: code.to_string(),
            message: error
                .io_error()
                .map_or_else(|| error.to_string(), ToString::to_string),
        }
    }
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} ({}): {}", path.display(), self.code, self.message),
            None => write!(f, "({}): {}", self.code, self.message),
        }
    }
}

fn io_error_code(error: &io::Error) -> &'static str {
    match error.kind() {
        io::ErrorKind::NotFound => "ENOENT",
        io::ErrorKind::PermissionDenied => "EACCES",
        _ => "IO",
    }
}

/// A subdirectory left out of the listing because its walk failed at the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDirectory {
    /// Display label of the subdirectory.
    pub name: String,

    /// Full path of the subdirectory.
    pub path: PathBuf,

    /// Why the subdirectory could not be measured.
    pub message: String,
}
