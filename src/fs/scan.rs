//! Lazy, deterministic walk of an export tree.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Kind of a scanned node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Symbolic links are reported but never followed.
    Symlink,
}

/// A single file or directory below the export root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    /// Path relative to the export root.
    pub relative: PathBuf,
    pub kind: EntryKind,
    /// Number of components in `relative` (direct children of the root are 1).
    pub depth: usize,
}

impl ScanEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// The final component as UTF-8, if it is valid UTF-8.
    pub fn name(&self) -> Option<&str> {
        self.relative.file_name().and_then(|n| n.to_str())
    }

    /// Parent path relative to the root (empty for direct children).
    pub fn parent(&self) -> &Path {
        self.relative.parent().unwrap_or(Path::new(""))
    }
}

/// Order sibling names: case-insensitive first, exact bytes as the tie-break.
pub fn sibling_order(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Depth-first iterator over every node under a root.
///
/// Directories are yielded before their contents and each directory is read
/// only when the walk reaches it.
pub struct Scanner {
    root: PathBuf,
    stack: Vec<ScanEntry>,
}

impl Scanner {
    /// Start a scan of `root`. The root itself is not yielded.
    pub fn new(root: &Path) -> Result<Self> {
        let meta = fs::metadata(root).map_err(|e| Error::io(root, e))?;
        if !meta.is_dir() {
            return Err(Error::PathNotFound(root.to_path_buf()));
        }

        let mut scanner = Self {
            root: root.to_path_buf(),
            stack: Vec::new(),
        };
        scanner.push_children(Path::new(""), 0)?;
        Ok(scanner)
    }

    fn push_children(&mut self, relative: &Path, depth: usize) -> Result<()> {
        let dir = self.root.join(relative);
        let mut children = Vec::new();

        for entry in fs::read_dir(&dir).map_err(|e| Error::io(&dir, e))? {
            let entry = entry.map_err(|e| Error::io(&dir, e))?;
            let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;

            let kind = if file_type.is_symlink() {
                EntryKind::Symlink
            } else if file_type.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            };

            children.push(ScanEntry {
                relative: relative.join(entry.file_name()),
                kind,
                depth: depth + 1,
            });
        }

        children.sort_by(|a, b| {
            sibling_order(
                &a.relative.file_name().unwrap_or_default().to_string_lossy(),
                &b.relative.file_name().unwrap_or_default().to_string_lossy(),
            )
        });

        // Reverse so the smallest name is popped first.
        self.stack.extend(children.into_iter().rev());
        Ok(())
    }
}

impl Iterator for Scanner {
    type Item = Result<ScanEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        if entry.is_dir() {
            if let Err(e) = self.push_children(&entry.relative, entry.depth) {
                self.stack.clear();
                return Some(Err(e));
            }
        }
        Some(Ok(entry))
    }
}

/// Collect a full scan of `root`.
pub fn scan_tree(root: &Path) -> Result<Vec<ScanEntry>> {
    Scanner::new(root)?.collect()
}
