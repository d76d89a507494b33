//! Configuration loading with defaults

use std::path::Path;

use crate::errors::{Result, SyllabiError};
use crate::fs;
use crate::schemas::Config;

/// Load configuration from the data root, falling back to defaults.
///
/// If config.json exists, it will be read and merged with defaults per field.
/// The resolved values are validated before being returned.
///
/// # Errors
/// * `InvalidJson` - If config.json cannot be parsed
/// * `ConfigError` - If the resolved values are unusable
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    config.validate().map_err(SyllabiError::ConfigError)?;
    Ok(config)
}
