//! Utility functions and helpers.
//!
//! This module contains the two leaf operations everything else is built on:
//! measuring a subtree and formatting a byte count.

pub mod format;
pub mod size;

pub use format::format_bytes;
pub use size::{DirSize, calculate_dir_size};
