//! Workspace name and export date discovery.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::error::{Error, Result};
use crate::fs::naming::sanitize_path_component;
use crate::fs::scan::ScanEntry;

static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p\b[^>]*>(.*?)</p\s*>").unwrap());

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\D)(\d{4}-\d{2}-\d{2})(?:\D|$)").unwrap());

/// Label Notion puts in front of the workspace title on the index page.
const WORKSPACE_LABEL: &str = "Workspace name:";

/// Name of the page that carries the workspace title.
const INDEX_PAGE: &str = "index.html";

/// Values that replace discovery when set.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceOverrides {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
}

/// What the export root gets renamed after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceMetadata {
    pub name: String,
    pub date: NaiveDate,
}

impl WorkspaceMetadata {
    /// `<workspace-name> <date>` with the date rendered by `date_format`.
    pub fn folder_name(&self, date_format: &str) -> String {
        format!("{} {}", self.name, self.date.format(date_format))
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

/// Extract the workspace title from the index page markup.
pub fn workspace_name_from_html(content: &str) -> Option<String> {
    PARAGRAPH.captures_iter(content).find_map(|caps| {
        let inner = caps.get(1)?.as_str();
        let text = decode_entities(&TAG.replace_all(inner, ""));
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let name = text.strip_prefix(WORKSPACE_LABEL)?.trim();
        (!name.is_empty()).then(|| name.to_string())
    })
}

/// First `YYYY-MM-DD` date in a folder name.
pub fn date_from_name(name: &str) -> Option<NaiveDate> {
    ISO_DATE
        .captures_iter(name)
        .find_map(|caps| NaiveDate::parse_from_str(caps.get(1)?.as_str(), "%Y-%m-%d").ok())
}

/// Locate the index page: shallowest match wins, scan order breaks ties.
pub fn find_index_page(scan: &[ScanEntry]) -> Option<&ScanEntry> {
    scan.iter()
        .filter(|e| !e.is_dir())
        .filter(|e| e.name().is_some_and(|n| n.eq_ignore_ascii_case(INDEX_PAGE)))
        .min_by_key(|e| e.depth)
}

/// Work out the workspace name and export date for `root`.
///
/// Returns `Ok(None)` when no workspace name can be found, in which case the
/// root keeps its name.
pub fn discover_workspace(
    root: &Path,
    scan: &[ScanEntry],
    overrides: &WorkspaceOverrides,
) -> Result<Option<WorkspaceMetadata>> {
    let name = match &overrides.name {
        Some(name) => sanitize_path_component(name)?,
        None => {
            let Some(index) = find_index_page(scan) else {
                return Ok(None);
            };
            let path: PathBuf = root.join(&index.relative);
            let bytes = fs::read(&path).map_err(|e| Error::io(&path, e))?;
            let content = String::from_utf8(bytes).map_err(|_| Error::Encoding(path.clone()))?;
            let Some(name) = workspace_name_from_html(&content) else {
                return Ok(None);
            };
            match sanitize_path_component(&name) {
                Ok(name) => name,
                Err(e) => {
                    tracing::warn!("Ignoring workspace name from {}: {}", path.display(), e);
                    return Ok(None);
                }
            }
        }
    };

    let date = overrides
        .date
        .or_else(|| {
            root.file_name()
                .and_then(|n| n.to_str())
                .and_then(date_from_name)
        })
        .unwrap_or_else(|| Local::now().date_naive());

    Ok(Some(WorkspaceMetadata { name, date }))
}
