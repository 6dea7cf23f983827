//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,
}

/// Normalizer options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Stem used when stripping identifiers leaves nothing behind.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// chrono format string for the date in the renamed root folder.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether to rename the export root after the workspace.
    #[serde(default = "default_true")]
    pub rename_root: bool,

    /// Extensions of files whose links get rewritten.
    #[serde(default = "default_html_extensions")]
    pub html_extensions: Vec<String>,

    /// Workspace name to use instead of the one on the index page.
    #[serde(default)]
    pub workspace_name: Option<String>,

    /// Export date to use instead of the root name or today (`"YYYY-MM-DD"`).
    #[serde(default)]
    pub export_date: Option<NaiveDate>,

    /// Whether to show progress bars.
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Plan only: report what would change without touching the tree.
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            date_format: default_date_format(),
            rename_root: true,
            html_extensions: default_html_extensions(),
            workspace_name: None,
            export_date: None,
            show_progress: true,
            dry_run: false,
        }
    }
}

fn default_placeholder() -> String {
    "untitled".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_html_extensions() -> Vec<String> {
    vec!["html".to_string(), "htm".to_string()]
}

fn default_true() -> bool {
    true
}

/// Default configuration file location in the platform config directory.
pub fn default_config_path() -> PathBuf {
    ProjectDirs::from("", "", "notion-export-cleaner")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::io(path, e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
