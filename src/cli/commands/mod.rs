//! CLI command implementations

pub mod init;
pub mod review;
pub mod steps;
pub mod walk;

use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::fs;

/// Resolve the data root from an optional working directory override
pub(crate) fn data_root(cwd: Option<&Path>) -> Result<PathBuf> {
    fs::find_data_root(&fs::resolve_cwd(cwd))
}
