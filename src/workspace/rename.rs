//! Export root renaming.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::naming::{make_unique_path, MAX_SUFFIX};

/// Whether `name` is `new_name` or one of its `_N` variants.
fn carries_name(name: &str, new_name: &str) -> bool {
    match name.strip_prefix(new_name) {
        Some("") => true,
        Some(rest) => rest
            .strip_prefix('_')
            .and_then(|n| n.parse::<usize>().ok())
            .is_some_and(|n| (1..=MAX_SUFFIX).contains(&n) && !rest.starts_with("_0")),
        None => false,
    }
}

/// Where the root would end up: unchanged when it already carries
/// `new_name` (with or without a `_N` suffix), otherwise the first free
/// `new_name`, `new_name_1`, ... sibling.
pub fn root_target(root: &Path, new_name: &str) -> Result<PathBuf> {
    let parent = root
        .parent()
        .ok_or_else(|| Error::InvalidFilename(format!("{} has no parent", root.display())))?;

    if root
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| carries_name(n, new_name))
    {
        return Ok(root.to_path_buf());
    }

    make_unique_path(&parent.join(new_name), true)
}

/// Rename the export root, returning its new path.
pub fn rename_root(root: &Path, new_name: &str) -> Result<PathBuf> {
    let target = root_target(root, new_name)?;
    if target == root {
        tracing::debug!("Export root already named '{}'", new_name);
        return Ok(target);
    }

    fs::rename(root, &target).map_err(|e| Error::io(root, e))?;
    tracing::info!("Renamed export root to {}", target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Export-0123456789abcdef0123456789abcdef");
        fs::create_dir(&root).unwrap();

        let renamed = rename_root(&root, "Engineering Wiki 2024-03-01").unwrap();
        assert_eq!(renamed, dir.path().join("Engineering Wiki 2024-03-01"));
        assert!(renamed.is_dir());
        assert!(!root.exists());
    }

    #[test]
    fn test_rename_root_collision_gets_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Export");
        fs::create_dir(&root).unwrap();
        fs::create_dir(dir.path().join("Wiki 2024-03-01")).unwrap();

        let renamed = rename_root(&root, "Wiki 2024-03-01").unwrap();
        assert_eq!(renamed, dir.path().join("Wiki 2024-03-01_1"));
    }

    #[test]
    fn test_suffixed_root_keeps_its_name() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Wiki 2024-03-01_1");
        fs::create_dir(&root).unwrap();
        fs::create_dir(dir.path().join("Wiki 2024-03-01")).unwrap();

        assert_eq!(rename_root(&root, "Wiki 2024-03-01").unwrap(), root);
        assert!(root.is_dir());
    }

    #[test]
    fn test_carries_name() {
        assert!(carries_name("Wiki 2024-03-01", "Wiki 2024-03-01"));
        assert!(carries_name("Wiki 2024-03-01_12", "Wiki 2024-03-01"));
        assert!(!carries_name("Wiki 2024-03-01_", "Wiki 2024-03-01"));
        assert!(!carries_name("Wiki 2024-03-01_01", "Wiki 2024-03-01"));
        assert!(!carries_name("Wiki 2024-03-01_x", "Wiki 2024-03-01"));
        assert!(!carries_name("Wiki 2024-03-02", "Wiki 2024-03-01"));
    }

    #[test]
    fn test_rename_root_already_named() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Wiki 2024-03-01");
        fs::create_dir(&root).unwrap();

        assert_eq!(rename_root(&root, "Wiki 2024-03-01").unwrap(), root);
        assert!(root.is_dir());
    }
}
