//! Applying the mapping to the file system.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::plan::MappingEntry;

/// Rename one node in place.
///
/// Must run deepest first: `entry.original` is resolved against `root` with
/// every ancestor still carrying its original name. An existing destination
/// is never overwritten.
pub fn apply_rename(root: &Path, entry: &MappingEntry) -> Result<PathBuf> {
    let from = root.join(&entry.original);
    let new_name = entry
        .cleaned
        .file_name()
        .ok_or_else(|| Error::InvalidFilename(entry.cleaned.display().to_string()))?;
    let to = from.with_file_name(new_name);

    if to.symlink_metadata().is_ok() {
        return Err(Error::NameCollisionUnresolved(to));
    }

    fs::rename(&from, &to).map_err(|e| Error::io(&from, e))?;
    tracing::debug!("Renamed {} -> {}", from.display(), to.display());
    Ok(to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(original: &str, cleaned: &str) -> MappingEntry {
        MappingEntry {
            original: PathBuf::from(original),
            cleaned: PathBuf::from(cleaned),
            is_dir: false,
            uuid: None,
            depth: 1,
        }
    }

    #[test]
    fn test_apply_rename() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Page 0123456789abcdef0123456789abcdef.html"), "x").unwrap();

        let to = apply_rename(
            dir.path(),
            &entry("Page 0123456789abcdef0123456789abcdef.html", "Page.html"),
        )
        .unwrap();
        assert_eq!(to, dir.path().join("Page.html"));
        assert_eq!(fs::read_to_string(&to).unwrap(), "x");
    }

    #[test]
    fn test_apply_rename_refuses_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Page 0123456789abcdef0123456789abcdef.html"), "new").unwrap();
        fs::write(dir.path().join("Page.html"), "old").unwrap();

        let err = apply_rename(
            dir.path(),
            &entry("Page 0123456789abcdef0123456789abcdef.html", "Page.html"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::NameCollisionUnresolved(_)));
        assert_eq!(fs::read_to_string(dir.path().join("Page.html")).unwrap(), "old");
    }

    #[test]
    fn test_apply_rename_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = apply_rename(dir.path(), &entry("gone.html", "Gone.html")).unwrap_err();
        assert!(matches!(err, Error::PathNotFound(_)));
    }
}
