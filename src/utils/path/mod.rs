//! Path utilities.
//!
//! - [`fs`]: Filesystem path normalization and file writing

pub mod fs;

pub use fs::{normalize_path, relative_display, write_file};
