//! The result of one reporting run and its text rendering.

use std::path::PathBuf;

use colored::Colorize;

use crate::config::SortOrder;
use crate::utils::format_bytes;

use super::{DirectoryEntry, EntryError, SkippedDirectory};

/// Width of the size column in the text listing.
const SIZE_COLUMN_WIDTH: usize = 20;

/// Sizes of the immediate subdirectories of a target plus its grand total.
///
/// Built by [`crate::Reporter`]; read-only once returned.
#[derive(Debug, Clone)]
pub struct Report {
    /// The directory that was reported on, as given by the caller.
    pub target: PathBuf,

    /// Order applied to `entries`.
    pub order: SortOrder,

    /// Measured subdirectories, sorted by size according to `order`.
    pub entries: Vec<DirectoryEntry>,

    /// Total size of the whole target, computed by a separate walk so that
    /// files directly under the target are included.
    pub total: u64,

    /// Subdirectories that could not be measured at all.
    pub skipped: Vec<SkippedDirectory>,

    /// Entries inside the target that could not be read.
    pub errors: Vec<EntryError>,
}

impl Report {
    /// One formatted line per entry: the size padded to a fixed column,
    /// followed by the subdirectory name.
    ///
    /// ```text
    /// 1.50 KB              docs
    /// 3.20 MB              src
    /// ```
    #[must_use]
    pub fn listing_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{:<SIZE_COLUMN_WIDTH$} {}",
                    format_bytes(entry.size),
                    entry.name
                )
            })
            .collect()
    }

    /// The grand-total line, aligned with [`Self::listing_lines`].
    #[must_use]
    pub fn total_line(&self) -> String {
        format!(
            "{:<SIZE_COLUMN_WIDTH$} Total size of: {}",
            format_bytes(self.total),
            self.target.display()
        )
    }

    /// `true` if any part of the target could not be read.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        !self.skipped.is_empty() || !self.errors.is_empty()
    }

    /// Print the listing followed by the grand total to stdout.
    pub fn print_summary(&self) {
        for line in self.listing_lines() {
            println!("{line}");
        }

        println!("\n{}", self.total_line().bold());
    }

    /// Diagnostic lines for the access problems of this run.
    ///
    /// Skipped subdirectories are always listed. Individual entry errors are
    /// listed only when `verbose` is set; see [`Self::unread_entries_hint`]
    /// for the non-verbose summary.
    #[must_use]
    pub fn diagnostic_lines(&self, verbose: bool) -> Vec<String> {
        let mut lines: Vec<String> = self
            .skipped
            .iter()
            .map(|skipped| {
                format!(
                    "Error calculating size for {}: {}",
                    skipped.path.display(),
                    skipped.message
                )
            })
            .collect();

        if verbose {
            lines.extend(self.errors.iter().map(ToString::to_string));
        }

        lines
    }

    /// One-line count of unread entries, shown instead of the full list when
    /// not running verbose.
    #[must_use]
    pub fn unread_entries_hint(&self, verbose: bool) -> Option<String> {
        if verbose || self.errors.is_empty() {
            return None;
        }

        Some(format!(
            "Warning: {} entries could not be read and were left out of the totals (use --verbose to list them)",
            self.errors.len()
        ))
    }

    /// Print access problems to stderr.
    pub fn print_diagnostics(&self, verbose: bool) {
        if !self.is_partial() {
            return;
        }

        for line in self.diagnostic_lines(verbose) {
            eprintln!("{}", line.red());
        }

        if let Some(hint) = self.unread_entries_hint(verbose) {
            eprintln!("{}", hint.yellow());
        }
    }
}
