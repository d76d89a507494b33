//! In-memory backend with injectable failures, for host tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{Result, SyllabiError};
use crate::schemas::{PermissionRecord, ReviewRecord, StepPayload};

use super::SyllabusBackend;

#[derive(Default)]
pub(crate) struct MemoryBackend {
    pub permissions: Vec<PermissionRecord>,
    pub review: ReviewRecord,
    pub fail_permissions: AtomicBool,
    pub fail_review_fetch: AtomicBool,
    pub fail_step_save: AtomicBool,
    pub fail_submit: AtomicBool,
    pub fail_review_save: AtomicBool,
    pub saved_steps: Mutex<Vec<StepPayload>>,
    pub submitted: Mutex<Vec<String>>,
    pub saved_reviews: Mutex<Vec<ReviewRecord>>,
}

impl MemoryBackend {
    pub fn with_sections(sections: &[u32]) -> Self {
        MemoryBackend {
            permissions: sections.iter().copied().map(PermissionRecord::new).collect(),
            ..Default::default()
        }
    }

    pub fn fail(flag: &AtomicBool, on: bool) {
        flag.store(on, Ordering::SeqCst);
    }

    pub fn saved_step_numbers(&self) -> Vec<u32> {
        self.saved_steps.lock().unwrap().iter().map(|p| p.step).collect()
    }
}

#[async_trait]
impl SyllabusBackend for MemoryBackend {
    async fn fetch_permissions(&self, _user_id: &str) -> Result<Vec<PermissionRecord>> {
        if self.fail_permissions.load(Ordering::SeqCst) {
            return Err(SyllabiError::PermissionFetch("backend unavailable".to_string()));
        }
        Ok(self.permissions.clone())
    }

    async fn fetch_review(&self, _syllabus_id: &str) -> Result<ReviewRecord> {
        if self.fail_review_fetch.load(Ordering::SeqCst) {
            return Err(SyllabiError::wrap("backend unavailable", "fetch review"));
        }
        Ok(self.review.clone())
    }

    async fn save_step(&self, payload: &StepPayload) -> Result<()> {
        if self.fail_step_save.load(Ordering::SeqCst) {
            return Err(SyllabiError::StepSave("network error".to_string()));
        }
        self.saved_steps.lock().unwrap().push(payload.clone());
        Ok(())
    }

    async fn submit_for_analysis(&self, syllabus_id: &str) -> Result<()> {
        if self.fail_submit.load(Ordering::SeqCst) {
            return Err(SyllabiError::Submit("network error".to_string()));
        }
        self.submitted.lock().unwrap().push(syllabus_id.to_string());
        Ok(())
    }

    async fn save_review(&self, _syllabus_id: &str, record: &ReviewRecord) -> Result<()> {
        if self.fail_review_save.load(Ordering::SeqCst) {
            return Err(SyllabiError::ReviewSave("network error".to_string()));
        }
        self.saved_reviews.lock().unwrap().push(record.clone());
        Ok(())
    }
}
