//! Original → cleaned path mapping for a whole export tree.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::fs::naming::CleanedName;
use crate::fs::scan::{EntryKind, ScanEntry};
use crate::plan::conflicts::{resolve_siblings, Sibling};

/// One node of the export tree and where it ends up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    /// Path relative to the export root before the run.
    pub original: PathBuf,
    /// Path relative to the export root after the run.
    pub cleaned: PathBuf,
    pub is_dir: bool,
    /// Identifier stripped from this node's own name, in 32-digit form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip)]
    pub depth: usize,
}

impl MappingEntry {
    /// Whether this node's own name changes.
    pub fn is_renamed(&self) -> bool {
        self.original.file_name() != self.cleaned.file_name()
    }
}

/// Mapping from original relative path to cleaned relative path.
///
/// Built from a complete scan before anything on disk is touched.
#[derive(Debug, Clone, Default)]
pub struct FilenameMapping {
    entries: BTreeMap<PathBuf, MappingEntry>,
}

impl FilenameMapping {
    /// Resolve every directory of a scan and record the resulting paths.
    pub fn build(scan: &[ScanEntry], placeholder: &str) -> Result<Self> {
        // Group siblings by parent, keeping scan order inside each group.
        let mut groups: HashMap<&Path, Vec<&ScanEntry>> = HashMap::new();
        for entry in scan {
            groups.entry(entry.parent()).or_default().push(entry);
        }

        let mut names: HashMap<&Path, CleanedName> = HashMap::new();
        for (dir, children) in &groups {
            // Non UTF-8 names cannot carry a readable identifier; leave them be.
            let utf8: Vec<&ScanEntry> = children
                .iter()
                .copied()
                .filter(|e| e.name().is_some())
                .collect();
            let siblings: Vec<Sibling<'_>> = utf8
                .iter()
                .filter_map(|e| {
                    Some(Sibling {
                        name: e.name()?,
                        is_dir: e.is_dir(),
                    })
                })
                .collect();

            let resolved = resolve_siblings(dir, &siblings, placeholder)?;
            for (entry, cleaned) in utf8.into_iter().zip(resolved) {
                names.insert(entry.relative.as_path(), cleaned);
            }
        }

        let mut entries: BTreeMap<PathBuf, MappingEntry> = BTreeMap::new();
        for entry in scan {
            let parent = entry.parent();
            let cleaned_parent = if parent.as_os_str().is_empty() {
                PathBuf::new()
            } else {
                entries
                    .get(parent)
                    .map(|p| p.cleaned.clone())
                    .unwrap_or_else(|| parent.to_path_buf())
            };

            let (cleaned, uuid) = match names.remove(entry.relative.as_path()) {
                Some(c) => (cleaned_parent.join(&c.name), c.uuid),
                None => (
                    cleaned_parent.join(entry.relative.file_name().unwrap_or_default()),
                    None,
                ),
            };

            entries.insert(
                entry.relative.clone(),
                MappingEntry {
                    original: entry.relative.clone(),
                    cleaned,
                    is_dir: entry.kind == EntryKind::Dir,
                    uuid: uuid.map(|u| u.simple().to_string()),
                    depth: entry.depth,
                },
            );
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, original: &Path) -> Option<&MappingEntry> {
        self.entries.get(original)
    }

    /// Cleaned relative path for an original relative path.
    pub fn cleaned_path(&self, original: &Path) -> Option<&Path> {
        self.entries.get(original).map(|e| e.cleaned.as_path())
    }

    /// All nodes in original path order.
    pub fn entries(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.values()
    }

    /// Nodes whose own name changes.
    pub fn renamed(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.values().filter(|e| e.is_renamed())
    }

    /// Renames in the order they must be applied: deepest first, then
    /// reverse path order within a depth.
    pub fn rename_order(&self) -> Vec<&MappingEntry> {
        let mut renames: Vec<&MappingEntry> = self.renamed().collect();
        renames.sort_by(|a, b| {
            b.depth
                .cmp(&a.depth)
                .then_with(|| b.original.cmp(&a.original))
        });
        renames
    }

    /// Write the renamed entries as pretty JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let renamed: Vec<&MappingEntry> = self.renamed().collect();
        let json = serde_json::to_string_pretty(&renamed)?;
        fs::write(path, json).map_err(|e| Error::io(path, e))?;
        Ok(())
    }

    /// Files whose extension is one of `extensions` (case-insensitive).
    pub fn files_with_extension<'a>(
        &'a self,
        extensions: &'a [String],
    ) -> impl Iterator<Item = &'a MappingEntry> + 'a {
        self.entries.values().filter(move |e| {
            !e.is_dir
                && e.original
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
                    .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, kind: EntryKind) -> ScanEntry {
        let relative = PathBuf::from(path);
        let depth = relative.components().count();
        ScanEntry {
            relative,
            kind,
            depth,
        }
    }

    fn sample_scan() -> Vec<ScanEntry> {
        vec![
            entry("Wiki 0123456789abcdef0123456789abcdef", EntryKind::Dir),
            entry(
                "Wiki 0123456789abcdef0123456789abcdef/Page 11111111111111111111111111111111.html",
                EntryKind::File,
            ),
            entry(
                "Wiki 0123456789abcdef0123456789abcdef/image.png",
                EntryKind::File,
            ),
            entry("Wiki 0123456789abcdef0123456789abcdef.html", EntryKind::File),
            entry("index.html", EntryKind::File),
        ]
    }

    #[test]
    fn test_build_maps_nested_paths() {
        let mapping = FilenameMapping::build(&sample_scan(), "untitled").unwrap();
        assert_eq!(mapping.len(), 5);
        assert_eq!(
            mapping.cleaned_path(Path::new(
                "Wiki 0123456789abcdef0123456789abcdef/Page 11111111111111111111111111111111.html"
            )),
            Some(Path::new("Wiki/Page.html"))
        );
        assert_eq!(
            mapping.cleaned_path(Path::new("Wiki 0123456789abcdef0123456789abcdef/image.png")),
            Some(Path::new("Wiki/image.png"))
        );
        let index = mapping.get(Path::new("index.html")).unwrap();
        assert!(!index.is_renamed());
    }

    #[test]
    fn test_renamed_records_uuid() {
        let mapping = FilenameMapping::build(&sample_scan(), "untitled").unwrap();
        let dir = mapping
            .get(Path::new("Wiki 0123456789abcdef0123456789abcdef"))
            .unwrap();
        assert_eq!(dir.uuid.as_deref(), Some("0123456789abcdef0123456789abcdef"));
        assert_eq!(mapping.renamed().count(), 3);
    }

    #[test]
    fn test_rename_order_is_deepest_first() {
        let mapping = FilenameMapping::build(&sample_scan(), "untitled").unwrap();
        let order: Vec<_> = mapping
            .rename_order()
            .into_iter()
            .map(|e| e.depth)
            .collect();
        assert_eq!(order, vec![2, 1, 1]);
    }

    #[test]
    fn test_write_json() {
        let mapping = FilenameMapping::build(&sample_scan(), "untitled").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapping.json");
        mapping.write_json(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["cleaned"], "Wiki");
        assert_eq!(entries[0]["uuid"], "0123456789abcdef0123456789abcdef");
        assert!(entries[0].get("depth").is_none());
    }

    #[test]
    fn test_files_with_extension() {
        let mapping = FilenameMapping::build(&sample_scan(), "untitled").unwrap();
        let exts = vec!["HTML".to_string()];
        assert_eq!(mapping.files_with_extension(&exts).count(), 3);
    }
}
