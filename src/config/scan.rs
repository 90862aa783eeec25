//! Scanning configuration for directory traversal.
//!
//! This module defines the options that control how subtrees are walked and
//! how much diagnostic detail is shown.

/// Configuration for directory scanning behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Whether to print every entry-level access error
    pub verbose: bool,

    /// Number of threads to use for scanning (0 = default)
    pub threads: usize,

    /// Whether to follow symbolic links below each walk root
    pub follow_links: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_options_default() {
        let scan_opts = ScanOptions::default();

        assert!(!scan_opts.verbose);
        assert_eq!(scan_opts.threads, 0);
        assert!(!scan_opts.follow_links);
    }

    #[test]
    fn test_scan_options_clone() {
        let original = ScanOptions {
            verbose: true,
            threads: 4,
            follow_links: true,
        };
        let cloned = original.clone();

        assert_eq!(original, cloned);
    }
}
