//! Workspace module.
//!
//! Provides:
//! - Workspace name and export date discovery
//! - Export root renaming

pub mod metadata;
pub mod rename;

pub use metadata::{
    date_from_name, discover_workspace, find_index_page, workspace_name_from_html,
    WorkspaceMetadata, WorkspaceOverrides,
};
pub use rename::{rename_root, root_target};
