//! Rename planning.
//!
//! Provides:
//! - Per-directory collision resolution
//! - The original → cleaned path mapping used by every later phase

pub mod conflicts;
pub mod mapping;

pub use conflicts::{resolve_siblings, Sibling};
pub use mapping::{FilenameMapping, MappingEntry};
