//! File system utilities for syllabi
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_config, read_json, read_raw_json, write_config, write_json};
pub use paths::{
    find_data_root, get_config_path, get_data_dir, get_draft_path, get_permissions_path,
    get_review_path, get_step_path, get_syllabus_dir, get_syllabus_json_path, resolve_cwd,
    validate_id, DATA_DIR_NAME,
};
