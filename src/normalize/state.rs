//! Run state tracking.

use std::path::PathBuf;

use crate::plan::FilenameMapping;
use crate::workspace::WorkspaceMetadata;

/// Everything one normalizer run did (or would do, on a dry run).
#[derive(Debug, Default)]
pub struct RunReport {
    /// Export root as given, canonicalized.
    pub root: PathBuf,
    /// Export root after the run.
    pub final_root: PathBuf,
    pub dry_run: bool,

    // Plan
    pub mapping: FilenameMapping,
    pub workspace: Option<WorkspaceMetadata>,

    // Statistics
    pub nodes_scanned: u64,
    pub files_renamed: u64,
    pub dirs_renamed: u64,
    pub pages_rewritten: u64,
    pub links_rewritten: u64,
}

impl RunReport {
    /// Create a report for a run on `root`.
    pub fn new(root: PathBuf, dry_run: bool) -> Self {
        Self {
            final_root: root.clone(),
            root,
            dry_run,
            ..Default::default()
        }
    }

    /// Count a rename.
    pub fn record_rename(&mut self, is_dir: bool) {
        if is_dir {
            self.dirs_renamed += 1;
        } else {
            self.files_renamed += 1;
        }
    }

    /// Count a page whose links changed.
    pub fn record_page(&mut self, links: usize) {
        if links > 0 {
            self.pages_rewritten += 1;
            self.links_rewritten += links as u64;
        }
    }

    /// Get total rename count.
    pub fn total_renamed(&self) -> u64 {
        self.files_renamed + self.dirs_renamed
    }

    /// Whether the export root changes name.
    pub fn root_renamed(&self) -> bool {
        self.final_root != self.root
    }
}
