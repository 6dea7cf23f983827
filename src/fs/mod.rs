//! Filesystem module.
//!
//! Provides:
//! - Deterministic export tree scanning
//! - Name cleaning and collision suffixes

pub mod naming;
pub mod scan;

pub use naming::{
    clean_name, has_uuid, make_unique_path, sanitize_filename, sanitize_path_component,
    split_extension, with_suffix, CleanedName,
};
pub use scan::{scan_tree, EntryKind, ScanEntry, Scanner};
