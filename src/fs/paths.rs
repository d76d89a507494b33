//! Path resolution utilities for syllabi
//!
//! Provides functions to locate the data root and construct paths
//! to the files the filesystem backend keeps under `.syllabi/`.

use std::path::{Path, PathBuf};

use crate::errors::{Result, SyllabiError};

/// Name of the data directory
pub const DATA_DIR_NAME: &str = ".syllabi";

/// Find the directory containing a .syllabi data directory.
///
/// Walks up the directory tree from the starting directory.
///
/// # Errors
/// * `RootNotFound` - If the start path cannot be resolved or no .syllabi is found
pub fn find_data_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| SyllabiError::RootNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if current.join(DATA_DIR_NAME).is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(SyllabiError::RootNotFound(format!(
                    "Could not find a {} directory; run `syllabi init` first",
                    DATA_DIR_NAME
                )));
            }
        }
    }
}

/// Check that an id names a single file or directory under the data root.
///
/// User and syllabus ids are joined into paths, so separators, `.`/`..`
/// and NUL bytes are refused.
///
/// # Errors
/// * `InvalidId` - If the id is empty or could escape its parent directory
pub fn validate_id(id: &str) -> Result<()> {
    let escapes = id.is_empty()
        || id == "."
        || id == ".."
        || id.contains(['/', '\\', '\0']);
    if escapes {
        return Err(SyllabiError::InvalidId(format!("{:?}", id)));
    }
    Ok(())
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .syllabi directory.
pub fn get_data_dir(root: &Path) -> PathBuf {
    root.join(DATA_DIR_NAME)
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_data_dir(root).join("config.json")
}

/// Get the path to a user's permission grants.
pub fn get_permissions_path(root: &Path, user_id: &str) -> PathBuf {
    get_data_dir(root).join("permissions").join(format!("{}.json", user_id))
}

/// Get the path to a syllabus's saved review annotations.
pub fn get_review_path(root: &Path, syllabus_id: &str) -> PathBuf {
    get_data_dir(root).join("reviews").join(format!("{}.json", syllabus_id))
}

/// Get the path to a specific syllabus's directory.
pub fn get_syllabus_dir(root: &Path, syllabus_id: &str) -> PathBuf {
    get_data_dir(root).join("syllabi").join(syllabus_id)
}

/// Get the path to a syllabus's syllabus.json file.
pub fn get_syllabus_json_path(root: &Path, syllabus_id: &str) -> PathBuf {
    get_syllabus_dir(root, syllabus_id).join("syllabus.json")
}

/// Get the path to a saved step payload.
pub fn get_step_path(root: &Path, syllabus_id: &str, step: u32) -> PathBuf {
    get_syllabus_dir(root, syllabus_id).join(format!("step-{}.json", step))
}

/// Get the path to an unsaved draft for a step.
pub fn get_draft_path(root: &Path, syllabus_id: &str, step: u32) -> PathBuf {
    get_syllabus_dir(root, syllabus_id).join(format!("draft-{}.json", step))
}
