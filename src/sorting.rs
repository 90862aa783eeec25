//! Ordering of the subdirectory listing.

use std::cmp::Reverse;

use crate::config::SortOrder;
use crate::report::DirectoryEntry;

/// Sort entries in place by size.
///
/// - `Ascending`: smallest first
/// - `Descending`: largest first
///
/// The sort is stable, so entries of equal size stay in the order they were
/// listed by the filesystem. That order is platform-defined.
pub fn sort_entries(entries: &mut [DirectoryEntry], order: SortOrder) {
    match order {
        SortOrder::Ascending => entries.sort_by_key(|entry| entry.size),
        SortOrder::Descending => entries.sort_by_key(|entry| Reverse(entry.size)),
    }
}
