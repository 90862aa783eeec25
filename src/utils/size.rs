//! Directory size measurement.
//!
//! This module walks a single subtree and sums the sizes of the regular files
//! it contains. Failures on individual entries are collected and the walk
//! keeps going; only a root that cannot be opened aborts the measurement.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::report::EntryError;
use crate::{Error, Result};

/// Outcome of measuring one subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirSize {
    /// Sum of the sizes of every regular file reached, in bytes.
    pub bytes: u64,

    /// Entries that could not be read. Their bytes are not part of `bytes`.
    pub errors: Vec<EntryError>,
}

impl DirSize {
    fn add_entry(&mut self, entry: &DirEntry) {
        if !entry.file_type().is_file() {
            return;
        }

        match entry.metadata() {
            Ok(metadata) => {
                log::trace!("{} bytes in {}", metadata.len(), entry.path().display());
                self.bytes += metadata.len();
            }
            Err(err) => self.record(EntryError::from_walk_error(&err)),
        }
    }

    fn record(&mut self, error: EntryError) {
        log::debug!("skipping entry: {error}");
        self.errors.push(error);
    }
}

/// Calculate the total size of a directory and all its contents, in bytes.
///
/// Traverses the tree iteratively with `walkdir` and sums `len()` of every
/// regular file. Directories add nothing of their own. Symbolic links below
/// `path` are only followed when `follow_links` is set; otherwise they count
/// as zero bytes. `path` itself is always resolved, so a symlink to a
/// directory can be measured.
///
/// If `path` is a regular file, its own size is returned.
///
/// # Errors
///
/// Returns [`Error::RootAccess`] if `path` cannot be stat'ed, or if it is a
/// directory that cannot be listed. Anything that fails further down the tree
/// is reported through [`DirSize::errors`] instead.
pub fn calculate_dir_size(path: &Path, follow_links: bool) -> Result<DirSize> {
    let root_access = |source| Error::RootAccess {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(root_access)?;
    if metadata.is_dir() {
        fs::read_dir(path).map_err(root_access)?;
    }

    log::debug!("walking {}", path.display());

    sum_walk(path, WalkDir::new(path).follow_links(follow_links))
}

/// Sum a walk rooted at `path`.
///
/// The root can still vanish between the checks above and the walk opening
/// it; a failure at depth 0 is a root failure, not an entry error.
fn sum_walk(path: &Path, walker: WalkDir) -> Result<DirSize> {
    let mut size = DirSize::default();
    for entry in walker {
        match entry {
            Ok(entry) => size.add_entry(&entry),
            Err(err) if err.depth() == 0 => {
                return Err(Error::RootAccess {
                    path: path.to_path_buf(),
                    source: io::Error::from(err),
                });
            }
            Err(err) => size.record(EntryError::from_walk_error(&err)),
        }
    }

    Ok(size)
}
