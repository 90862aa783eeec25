//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, a [`JsonOutput`] built from the report
//! is serialized to stdout as a single JSON object, replacing all
//! human-readable output.

use serde::Serialize;

use crate::report::{DirectoryEntry, EntryError, Report, SkippedDirectory};
use crate::utils::format_bytes;

/// Top-level JSON output emitted when `--json` is active.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// The directory that was reported on.
    pub target: String,

    /// Sort order of `directories`: `"ascending"` or `"descending"`.
    pub order: &'static str,

    /// Measured subdirectories in sorted order.
    pub directories: Vec<JsonDirectoryEntry>,

    /// Grand total of the target.
    pub total: JsonSize,

    /// Subdirectories that could not be measured.
    pub skipped: Vec<SkippedDirectory>,

    /// Entry-level access errors met while walking the target.
    pub errors: Vec<EntryError>,
}

/// A single subdirectory in the JSON output.
#[derive(Debug, Serialize)]
pub struct JsonDirectoryEntry {
    /// Subdirectory name.
    pub name: String,

    /// Full path of the subdirectory.
    pub path: String,

    /// Size in bytes.
    pub size: u64,

    /// Human-readable size (e.g. `"1.50 KB"`).
    pub size_formatted: String,
}

/// A byte count together with its human-readable form.
#[derive(Debug, Serialize)]
pub struct JsonSize {
    /// Size in bytes.
    pub size: u64,

    /// Human-readable size.
    pub size_formatted: String,
}

impl JsonOutput {
    /// Build a `JsonOutput` from a finished report.
    #[must_use]
    pub fn from_report(report: &Report) -> Self {
        Self {
            target: report.target.display().to_string(),
            order: report.order.as_str(),
            directories: report
                .entries
                .iter()
                .map(JsonDirectoryEntry::from_entry)
                .collect(),
            total: JsonSize::from_bytes(report.total),
            skipped: report.skipped.clone(),
            errors: report.errors.clone(),
        }
    }
}

impl JsonDirectoryEntry {
    /// Convert a `DirectoryEntry` into its JSON form.
    #[must_use]
    pub fn from_entry(entry: &DirectoryEntry) -> Self {
        Self {
            name: entry.name.clone(),
            path: entry.path.display().to_string(),
            size: entry.size,
            size_formatted: format_bytes(entry.size),
        }
    }
}

impl JsonSize {
    /// Pair a byte count with its formatted form.
    #[must_use]
    pub fn from_bytes(size: u64) -> Self {
        Self {
            size,
            size_formatted: format_bytes(size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortOrder;
    use std::path::PathBuf;

    fn sample_report() -> Report {
        Report {
            target: PathBuf::from("/data"),
            order: SortOrder::Descending,
            entries: vec![
                DirectoryEntry::new("logs", "/data/logs", 2048),
                DirectoryEntry::new("tmp", "/data/tmp", 10),
            ],
            total: 3000,
            skipped: vec![SkippedDirectory {
                name: "locked".to_string(),
                path: PathBuf::from("/data/locked"),
                message: "Permission denied".to_string(),
            }],
            errors: Vec::new(),
        }
    }

    #[test]
    fn test_from_report() {
        let output = JsonOutput::from_report(&sample_report());

        assert_eq!(output.target, "/data");
        assert_eq!(output.order, "descending");
        assert_eq!(output.directories.len(), 2);
        assert_eq!(output.directories[0].name, "logs");
        assert_eq!(output.directories[0].size_formatted, "2.00 KB");
        assert_eq!(output.directories[1].size_formatted, "10 Bytes");
        assert_eq!(output.total.size, 3000);
        assert_eq!(output.total.size_formatted, "2.93 KB");
        assert_eq!(output.skipped.len(), 1);
    }

    #[test]
    fn test_json_shape() {
        let output = JsonOutput::from_report(&sample_report());
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["target"], "/data");
        assert_eq!(value["directories"][0]["path"], "/data/logs");
        assert_eq!(value["directories"][0]["size"], 2048);
        assert_eq!(value["total"]["size_formatted"], "2.93 KB");
        assert_eq!(value["skipped"][0]["name"], "locked");
        assert!(value["errors"].as_array().unwrap().is_empty());
    }
}
