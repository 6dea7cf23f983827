//! Export normalization.
//!
//! One run goes through these phases, in order:
//! - scan the tree and build the complete filename mapping
//! - discover the workspace name and date for the root
//! - rewrite links in every HTML page (pages are still at their original paths)
//! - rename files and directories, deepest first
//! - rename the export root
//!
//! Nothing on disk is touched before the mapping is complete. A failure
//! aborts the run; renames already applied stay applied.

pub mod rename;
pub mod state;

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::scan::scan_tree;
use crate::links::rewrite_html_file;
use crate::output::progress::{create_item_bar, create_spinner};
use crate::plan::FilenameMapping;
use crate::workspace::{discover_workspace, rename_root, root_target, WorkspaceOverrides};

pub use rename::apply_rename;
pub use state::RunReport;

/// Normalize the export tree at `root` according to `config`.
pub fn normalize_export(config: &Config, root: &Path) -> Result<RunReport> {
    let options = &config.options;
    let root = fs::canonicalize(root).map_err(|e| Error::io(root, e))?;
    if !root.is_dir() {
        return Err(Error::PathNotFound(root));
    }

    let mut report = RunReport::new(root.clone(), options.dry_run);

    // Plan
    let spinner = create_spinner("Scanning export...", options.show_progress);
    let scan = scan_tree(&root)?;
    report.nodes_scanned = scan.len() as u64;
    let mapping = FilenameMapping::build(&scan, &options.placeholder)?;
    spinner.finish_and_clear();
    tracing::info!(
        "Scanned {} entries, {} to rename",
        scan.len(),
        mapping.renamed().count()
    );

    if options.rename_root {
        let overrides = WorkspaceOverrides {
            name: options.workspace_name.clone(),
            date: options.export_date,
        };
        report.workspace = discover_workspace(&root, &scan, &overrides)?;
        if report.workspace.is_none() {
            tracing::warn!("Workspace name not found; the export root keeps its name");
        }
    }

    // Links
    let pages: Vec<_> = mapping
        .files_with_extension(&options.html_extensions)
        .collect();
    let bar = create_item_bar(pages.len() as u64, "Updating links", options.show_progress);
    for page in pages {
        let links = rewrite_html_file(&root, page, &mapping, !options.dry_run)?;
        if links > 0 {
            tracing::debug!("{}: {} link(s) updated", page.original.display(), links);
        }
        report.record_page(links);
        bar.inc(1);
    }
    bar.finish_and_clear();

    // Renames
    let renames = mapping.rename_order();
    let bar = create_item_bar(renames.len() as u64, "Renaming", options.show_progress);
    for entry in renames {
        if !options.dry_run {
            apply_rename(&root, entry)?;
        }
        report.record_rename(entry.is_dir);
        bar.inc(1);
    }
    bar.finish_and_clear();

    // Root
    if let Some(workspace) = &report.workspace {
        let name = workspace.folder_name(&options.date_format);
        report.final_root = if options.dry_run {
            root_target(&root, &name)?
        } else {
            rename_root(&root, &name)?
        };
    }

    report.mapping = mapping;
    Ok(report)
}
