//! Per-subdirectory disk usage reporting.
//!
//! The [`Reporter`] lists the immediate subdirectories of a target, measures
//! each of them in parallel, sorts the results and measures the target itself
//! for the grand total.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::{
    Error, Result,
    config::{ScanOptions, SortOrder},
    report::{DirectoryEntry, EntryError, Report, SkippedDirectory},
    sorting::sort_entries,
    utils::{DirSize, calculate_dir_size},
};

/// Builds a [`Report`] for a target directory.
#[derive(Debug)]
pub struct Reporter {
    /// Configuration options for walking
    scan_options: ScanOptions,

    /// Order of the resulting listing
    order: SortOrder,

    /// When `true`, suppresses the progress spinner (used by `--json` mode).
    quiet: bool,
}

/// An immediate subdirectory waiting to be measured.
struct Candidate {
    name: String,
    path: PathBuf,
}

impl Reporter {
    /// Create a new reporter.
    #[must_use]
    pub const fn new(scan_options: ScanOptions, order: SortOrder) -> Self {
        Self {
            scan_options,
            order,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses the progress spinner).
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Measure every immediate subdirectory of `target` and the target itself.
    ///
    /// Subdirectories are walked in parallel on the rayon pool while the grand
    /// total is computed concurrently. A subdirectory whose walk fails at its
    /// root is moved to [`Report::skipped`] instead of aborting the run.
    /// Non-directory entries directly under `target` are not listed but do
    /// count towards the total.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootAccess`] if `target` cannot be listed or its total
    /// cannot be computed. No partial report is produced in that case.
    pub fn report(&self, target: &Path) -> Result<Report> {
        let mut listing_errors = Vec::new();
        let candidates = self.list_subdirectories(target, &mut listing_errors)?;

        let progress = self.progress_bar();
        let measured_count = AtomicUsize::new(0);
        let follow_links = self.scan_options.follow_links;

        let (measured, total) = rayon::join(
            || {
                candidates
                    .into_par_iter()
                    .map(|candidate| {
                        let result = calculate_dir_size(&candidate.path, follow_links);
                        let n = measured_count.fetch_add(1, Ordering::Relaxed) + 1;
                        progress.set_message(format!("Calculating... {n} directories measured"));
                        (candidate, result)
                    })
                    .collect::<Vec<_>>()
            },
            || calculate_dir_size(target, follow_links),
        );

        progress.finish_and_clear();

        let total = total?;
        let (mut entries, skipped) = split_measurements(measured);
        let errors = merge_errors(listing_errors, total.errors, &skipped);

        sort_entries(&mut entries, self.order);

        Ok(Report {
            target: target.to_path_buf(),
            order: self.order,
            entries,
            total: total.bytes,
            skipped,
            errors,
        })
    }

    /// List the immediate subdirectories of `target` in filesystem order.
    ///
    /// Symbolic links to directories are only included when links are
    /// followed. Entries that cannot be inspected are pushed to `errors`.
    fn list_subdirectories(
        &self,
        target: &Path,
        errors: &mut Vec<EntryError>,
    ) -> Result<Vec<Candidate>> {
        let read_dir = fs::read_dir(target).map_err(|source| Error::RootAccess {
            path: target.to_path_buf(),
            source,
        })?;

        let mut candidates = Vec::new();
        for entry in read_dir {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    errors.push(EntryError::from_io(Some(target), &err));
                    continue;
                }
            };

            let path = entry.path();
            let is_dir = if self.scan_options.follow_links {
                fs::metadata(&path).map(|m| m.is_dir())
            } else {
                entry.file_type().map(|t| t.is_dir())
            };

            match is_dir {
                Ok(true) => candidates.push(Candidate {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path,
                }),
                Ok(false) => {}
                Err(err) => errors.push(EntryError::from_io(Some(&path), &err)),
            }
        }

        Ok(candidates)
    }

    fn progress_bar(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Calculating...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

/// Separate measured subdirectories from the ones whose walk failed at the
/// root, keeping enumeration order in both.
fn split_measurements(
    measured: Vec<(Candidate, Result<DirSize>)>,
) -> (Vec<DirectoryEntry>, Vec<SkippedDirectory>) {
    let mut entries = Vec::with_capacity(measured.len());
    let mut skipped = Vec::new();

    for (candidate, result) in measured {
        match result {
            Ok(size) => entries.push(DirectoryEntry::new(
                candidate.name,
                candidate.path,
                size.bytes,
            )),
            Err(err) => {
                log::debug!("excluding {}: {err}", candidate.path.display());
                skipped.push(SkippedDirectory {
                    name: candidate.name,
                    path: candidate.path,
                    message: root_cause(&err),
                });
            }
        }
    }

    (entries, skipped)
}

/// Combine listing-time and total-walk errors into one list.
///
/// The total walk revisits everything the listing saw, so a path is kept only
/// once. Paths already reported as skipped subdirectories are dropped.
fn merge_errors(
    listing: Vec<EntryError>,
    walk: Vec<EntryError>,
    skipped: &[SkippedDirectory],
) -> Vec<EntryError> {
    let mut seen: HashSet<PathBuf> = skipped.iter().map(|s| s.path.clone()).collect();

    listing
        .into_iter()
        .chain(walk)
        .filter(|error| match &error.path {
            Some(path) => seen.insert(path.clone()),
            None => true,
        })
        .collect()
}

/// Message for a skipped subdirectory: the underlying I/O error when there is
/// one, since the path is printed next to it anyway.
fn root_cause(err: &Error) -> String {
    match err {
        Error::RootAccess { source, .. } => source.to_string(),
        Error::Configuration(msg) => msg.clone(),
    }
}
