//! Configuration module for the notion-export-cleaner.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{default_config_path, Config, OptionsConfig};
pub use validation::validate_config;
