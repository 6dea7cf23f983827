//! Command-line argument definitions using clap.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::config::Config;

/// Notion HTML export cleaner CLI.
#[derive(Parser, Debug)]
#[command(
    name = "notion-export-cleaner",
    version,
    about = "Strip page IDs from a Notion HTML export and fix its links",
    long_about = "Removes the 32-digit identifiers Notion appends to exported file and folder names,\n\
                  resolves the resulting name collisions, rewrites links inside the HTML pages and\n\
                  renames the export folder to '<workspace name> <date>'."
)]
pub struct Args {
    /// Root folder of the Notion export. Prompted for when omitted.
    pub root: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show what would change without touching any file.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Workspace name for the renamed export folder.
    #[arg(short, long = "workspace-name", env = "NOTION_WORKSPACE_NAME")]
    pub workspace_name: Option<String>,

    /// Export date for the renamed export folder (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Keep the export folder's current name.
    #[arg(long)]
    pub no_root_rename: bool,

    /// Name used when a file name is nothing but an identifier.
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Write the rename mapping as JSON to this file.
    #[arg(short, long)]
    pub mapping: Option<PathBuf>,

    /// Hide progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(name) = &self.workspace_name {
            config.options.workspace_name = Some(name.clone());
        }

        if let Some(date) = self.date {
            config.options.export_date = Some(date);
        }

        if let Some(placeholder) = &self.placeholder {
            config.options.placeholder = placeholder.clone();
        }

        // Boolean flags (only override if set to non-default)
        if self.dry_run {
            config.options.dry_run = true;
        }

        if self.no_root_rename {
            config.options.rename_root = false;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}
