//! Core file primitives for the ecat module generator.
//!
//! Everything the generator needs from the filesystem goes through this
//! crate: existence checks, directory creation, and text reads and writes.

mod file;
mod fs;

pub use file::{FileRules, GeneratedFile, Overwrite, PreviewFile, WriteResult, write_all};
pub use fs::{ensure_dir, exists, read_text, remove_file, write_text};
