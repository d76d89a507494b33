//! Filesystem backend
//!
//! Keeps every resource as a JSON file under `.syllabi/`. Raw files go
//! through the same adapters a network response would. Ids are checked
//! before they are joined into a path.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::errors::{Result, SyllabiError};
use crate::fs;
use crate::schemas::{PermissionRecord, ReviewRecord, StepPayload, Syllabus, SyllabusStatus};

use super::adapt::{adapt_permissions, adapt_review};
use super::SyllabusBackend;

/// Backend rooted at a directory containing `.syllabi/`
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsBackend { root: root.into() }
    }

    /// Read a raw file, treating a missing file as `null`
    fn read_optional(&self, path: &Path) -> Result<serde_json::Value> {
        match fs::read_raw_json(path) {
            Ok(value) => Ok(value),
            Err(SyllabiError::FileNotFound(_)) => Ok(serde_json::Value::Null),
            Err(e) => Err(e),
        }
    }

    /// Load a syllabus record, creating a draft if none was stored
    pub fn load_syllabus(&self, syllabus_id: &str) -> Result<Syllabus> {
        fs::validate_id(syllabus_id)?;
        let path = fs::get_syllabus_json_path(&self.root, syllabus_id);
        match fs::read_json(&path) {
            Ok(syllabus) => Ok(syllabus),
            Err(SyllabiError::FileNotFound(_)) => Ok(Syllabus::new(syllabus_id, "")),
            Err(e) => Err(e),
        }
    }

    /// Load a step draft written by the editor, if any
    pub fn load_draft(&self, syllabus_id: &str, step: u32) -> Result<Option<serde_json::Value>> {
        fs::validate_id(syllabus_id)?;
        let path = fs::get_draft_path(&self.root, syllabus_id, step);
        match fs::read_raw_json(&path) {
            Ok(value) => Ok(Some(value)),
            Err(SyllabiError::FileNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl SyllabusBackend for FsBackend {
    async fn fetch_permissions(&self, user_id: &str) -> Result<Vec<PermissionRecord>> {
        fs::validate_id(user_id)?;
        let path = fs::get_permissions_path(&self.root, user_id);
        let raw = self
            .read_optional(&path)
            .map_err(|e| SyllabiError::PermissionFetch(e.to_string()))?;
        Ok(adapt_permissions(&raw))
    }

    async fn fetch_review(&self, syllabus_id: &str) -> Result<ReviewRecord> {
        fs::validate_id(syllabus_id)?;
        let path = fs::get_review_path(&self.root, syllabus_id);
        let raw = self.read_optional(&path)?;
        Ok(adapt_review(&raw))
    }

    async fn save_step(&self, payload: &StepPayload) -> Result<()> {
        fs::validate_id(&payload.syllabus_id)?;
        let path = fs::get_step_path(&self.root, &payload.syllabus_id, payload.step);
        fs::write_json(&path, payload).map_err(|e| SyllabiError::StepSave(e.to_string()))
    }

    async fn submit_for_analysis(&self, syllabus_id: &str) -> Result<()> {
        fs::validate_id(syllabus_id)?;
        let syllabus = self
            .load_syllabus(syllabus_id)
            .map_err(|e| SyllabiError::Submit(e.to_string()))?
            .with_status(SyllabusStatus::UnderAnalysis);
        let path = fs::get_syllabus_json_path(&self.root, syllabus_id);
        fs::write_json(&path, &syllabus).map_err(|e| SyllabiError::Submit(e.to_string()))
    }

    async fn save_review(&self, syllabus_id: &str, record: &ReviewRecord) -> Result<()> {
        fs::validate_id(syllabus_id)?;
        let path = fs::get_review_path(&self.root, syllabus_id);
        fs::write_json(&path, record).map_err(|e| SyllabiError::ReviewSave(e.to_string()))
    }
}
