//! Configuration types.
//!
//! Option structs shared by the library and the CLI, plus the TOML
//! configuration file that supplies their defaults.

pub mod file;
pub mod scan;
pub mod sort;

pub use file::FileConfig;
pub use scan::ScanOptions;
pub use sort::SortOrder;
