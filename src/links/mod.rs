//! Link rewriting module.
//!
//! Provides:
//! - Resolution of relative link values against the filename mapping
//! - `href`/`src` rewriting inside HTML pages

pub mod attributes;
pub mod resolve;

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::plan::{FilenameMapping, MappingEntry};

pub use attributes::{rewrite_html, HtmlRewrite};
pub use resolve::{is_external, rewrite_link};

/// Rewrite the links of one HTML page on disk.
///
/// The page is read from its original location. When `write` is false the
/// file is left alone and only the number of links that would change is
/// returned.
pub fn rewrite_html_file(
    root: &Path,
    page: &MappingEntry,
    mapping: &FilenameMapping,
    write: bool,
) -> Result<usize> {
    let path = root.join(&page.original);
    let bytes = fs::read(&path).map_err(|e| Error::io(&path, e))?;
    let content = String::from_utf8(bytes).map_err(|_| Error::Encoding(path.clone()))?;

    let base_dir = page.original.parent().unwrap_or(Path::new(""));
    let rewrite = rewrite_html(&content, base_dir, mapping);

    if rewrite.is_changed() && write {
        fs::write(&path, rewrite.content.as_bytes()).map_err(|e| Error::io(&path, e))?;
    }

    Ok(rewrite.links)
}
