//! Sort order for the subdirectory listing.

use clap::ValueEnum;

/// Direction in which subdirectories are ordered by size.
///
/// Ties keep the order in which the filesystem listed the directories.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Ascending,

    /// Largest first
    Descending,
}

impl SortOrder {
    /// Lowercase name, as used in the config file and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_default_is_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }

    #[test]
    fn test_sort_order_from_str_case_insensitive() {
        assert_eq!(
            SortOrder::from_str("Descending", true),
            Ok(SortOrder::Descending)
        );
        assert_eq!(
            SortOrder::from_str("ascending", true),
            Ok(SortOrder::Ascending)
        );
        assert!(SortOrder::from_str("sideways", true).is_err());
    }

    #[test]
    fn test_sort_order_as_str() {
        assert_eq!(SortOrder::Ascending.as_str(), "ascending");
        assert_eq!(SortOrder::Descending.as_str(), "descending");
    }
}
