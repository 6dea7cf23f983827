//! Notion Export Cleaner - tidy up a Notion HTML export in place.
//!
//! Notion appends a 32-digit identifier to every exported page, folder and
//! attachment. This library strips those identifiers, keeps sibling names
//! unique, rewrites the `href`/`src` links inside the exported pages so they
//! keep working, and renames the export folder after the workspace.
//!
//! # Features
//!
//! - Deterministic, collision-free renaming (`Page.html`, `Page_1.html`, ...)
//! - Link rewriting that leaves external URLs byte-for-byte untouched
//! - Dry runs and a JSON export of the rename mapping
//! - Idempotent: a second run changes nothing
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use notion_export_cleaner::{normalize_export, Config};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.options.dry_run = true;
//!
//!     let report = normalize_export(&config, Path::new("Export-0123456789abcdef0123456789abcdef"))?;
//!     println!("{} entries would be renamed", report.total_renamed());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod links;
pub mod normalize;
pub mod output;
pub mod plan;
pub mod workspace;

// Re-exports for convenience
pub use config::{Config, OptionsConfig};
pub use error::{Error, Result};
pub use fs::{clean_name, CleanedName};
pub use normalize::{normalize_export, RunReport};
pub use plan::{FilenameMapping, MappingEntry};
pub use workspace::WorkspaceMetadata;
