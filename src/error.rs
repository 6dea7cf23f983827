//! Error types for the notion-export-cleaner application.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Export tree errors
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Permission denied: {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Name collision could not be resolved: {}", .0.display())]
    NameCollisionUnresolved(PathBuf),

    #[error("File is not valid UTF-8 text: {}", .0.display())]
    Encoding(PathBuf),

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Aborted: no export path given")]
    Aborted,

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O error with the path it happened on.
    ///
    /// Access-control failures become [`Error::PermissionDenied`] so callers
    /// can tell them apart from other I/O problems.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path, source },
            io::ErrorKind::NotFound => Error::PathNotFound(path),
            _ => Error::Io { path, source },
        }
    }

    /// The path this error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::PathNotFound(path)
            | Error::NameCollisionUnresolved(path)
            | Error::Encoding(path)
            | Error::PermissionDenied { path, .. }
            | Error::Io { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Aborted => exit_codes::ABORT,
            Error::PathNotFound(_) => exit_codes::PATH_NOT_FOUND,
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::TomlParse(_)
            | Error::InvalidFilename(_) => exit_codes::CONFIG_ERROR,
            Error::PermissionDenied { .. }
            | Error::NameCollisionUnresolved(_)
            | Error::Io { .. } => exit_codes::FILESYSTEM_ERROR,
            Error::Encoding(_) => exit_codes::ENCODING_ERROR,
            Error::Json(_) => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const PATH_NOT_FOUND: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const FILESYSTEM_ERROR: i32 = 4;
    pub const ENCODING_ERROR: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
}
