//! Configuration validation logic.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::config::loader::Config;
use crate::error::{Error, Result};
use crate::fs::naming::{has_uuid, sanitize_filename, sanitize_path_component};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_placeholder(&config.options.placeholder)?;
    validate_date_format(&config.options.date_format)?;
    validate_extensions(&config.options.html_extensions)?;

    if let Some(name) = &config.options.workspace_name {
        sanitize_path_component(name).map_err(|e| Error::ConfigValidation {
            field: "workspace_name".to_string(),
            message: e.to_string(),
        })?;
    }

    Ok(())
}

/// Validate the fallback stem.
pub fn validate_placeholder(placeholder: &str) -> Result<()> {
    let sanitized = sanitize_filename(placeholder).map_err(|e| Error::ConfigValidation {
        field: "placeholder".to_string(),
        message: e.to_string(),
    })?;

    if sanitized != placeholder {
        return Err(Error::ConfigValidation {
            field: "placeholder".to_string(),
            message: format!("'{}' contains characters not allowed in file names", placeholder),
        });
    }

    // A placeholder that is itself an identifier would be stripped again.
    if has_uuid(placeholder) {
        return Err(Error::ConfigValidation {
            field: "placeholder".to_string(),
            message: format!("'{}' looks like a Notion identifier", placeholder),
        });
    }

    Ok(())
}

/// Validate the date format used in the root folder name.
pub fn validate_date_format(format: &str) -> Result<()> {
    if format.is_empty() {
        return Err(Error::ConfigValidation {
            field: "date_format".to_string(),
            message: "Date format cannot be empty".to_string(),
        });
    }

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::ConfigValidation {
            field: "date_format".to_string(),
            message: format!("'{}' is not a valid strftime format", format),
        });
    }

    let sample = NaiveDate::from_ymd_opt(2024, 3, 1)
        .map(|d| d.format(format).to_string())
        .unwrap_or_default();
    if sample.contains('/') || sample.contains('\\') {
        return Err(Error::ConfigValidation {
            field: "date_format".to_string(),
            message: format!(
                "'{}' renders path separators ('{}'), which cannot appear in a folder name",
                format, sample
            ),
        });
    }

    Ok(())
}

/// Validate the list of HTML extensions.
pub fn validate_extensions<S: AsRef<str>>(extensions: &[S]) -> Result<()> {
    if extensions.is_empty() {
        return Err(Error::ConfigValidation {
            field: "html_extensions".to_string(),
            message: "At least one extension is required".to_string(),
        });
    }

    for ext in extensions {
        let ext = ext.as_ref();
        if ext.is_empty() || ext.contains('.') || ext.contains('/') {
            return Err(Error::ConfigValidation {
                field: "html_extensions".to_string(),
                message: format!("'{}' is not a bare extension (use \"html\", not \".html\")", ext),
            });
        }
    }

    Ok(())
}
