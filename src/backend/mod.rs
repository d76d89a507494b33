//! Backend collaborators
//!
//! Persistence, permission lookup and the submit-to-analysis transition live
//! behind [`SyllabusBackend`]. The wizard core never calls it; the host
//! sessions in `wizard` do.

mod adapt;
mod fs_backend;
#[cfg(test)]
pub(crate) mod memory;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::{Result, SyllabiError};
use crate::schemas::{PermissionRecord, ReviewRecord, StepPayload};

pub use adapt::{adapt_permissions, adapt_review};
pub use fs_backend::FsBackend;

/// Operations the wizard host needs from the backend
#[async_trait]
pub trait SyllabusBackend: Send + Sync {
    /// Section grants for a user
    async fn fetch_permissions(&self, user_id: &str) -> Result<Vec<PermissionRecord>>;

    /// Previously saved review annotations for a syllabus
    async fn fetch_review(&self, syllabus_id: &str) -> Result<ReviewRecord>;

    /// Persist one step's payload
    async fn save_step(&self, payload: &StepPayload) -> Result<()>;

    /// Move the syllabus into the "under analysis" state
    async fn submit_for_analysis(&self, syllabus_id: &str) -> Result<()>;

    /// Replace the full annotation mapping for a syllabus
    async fn save_review(&self, syllabus_id: &str, record: &ReviewRecord) -> Result<()>;
}

/// Run a backend call, failing with `Timeout` after `seconds`.
pub async fn with_timeout<T, F>(seconds: u32, what: &str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(Duration::from_secs(u64::from(seconds)), fut).await {
        Ok(result) => result,
        Err(_) => Err(SyllabiError::Timeout(format!("{} after {}s", what, seconds))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_timeout_passes_result_through() {
        let value = with_timeout(5, "noop", async { Ok(7) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_with_timeout_expires() {
        let result: Result<()> = with_timeout(1, "slow call", async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.code(), "TIMEOUT");
        assert!(err.to_string().contains("slow call"));
    }
}
