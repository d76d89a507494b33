//! Review session
//!
//! A coordinator's pass over a submitted syllabus. Annotations are edited in
//! memory and saved as one full mapping when the review is finalized.

use std::sync::Arc;

use crate::backend::{with_timeout, SyllabusBackend};
use crate::domain::{ReviewOverlay, ReviewSummary};
use crate::errors::Result;
use crate::schemas::{Annotation, Config, ReviewStatus};

use super::SessionContext;

pub struct ReviewSession<B: SyllabusBackend + ?Sized> {
    context: SessionContext,
    backend: Arc<B>,
    overlay: ReviewOverlay,
    timeout_seconds: u32,
}

impl<B: SyllabusBackend + ?Sized> ReviewSession<B> {
    /// Start a review, seeding annotations from any saved review.
    ///
    /// A fetch failure is returned rather than opening empty: finalizing an
    /// empty overlay would replace the saved mapping and lose its annotations.
    /// A review that was never saved comes back from the backend as empty.
    pub async fn open(context: SessionContext, backend: Arc<B>, config: &Config) -> Result<Self> {
        let record = with_timeout(
            config.timeout_seconds,
            "fetch review",
            backend.fetch_review(&context.syllabus_id),
        )
        .await
        .map_err(|e| {
            tracing::warn!(
                syllabus = %context.syllabus_id,
                error = %e,
                "could not load saved review"
            );
            e
        })?;

        Ok(ReviewSession {
            context,
            backend,
            overlay: ReviewOverlay::from_record(record),
            timeout_seconds: config.timeout_seconds,
        })
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn overlay(&self) -> &ReviewOverlay {
        &self.overlay
    }

    pub fn set_status(&mut self, field_id: &str, status: ReviewStatus) {
        self.overlay.set_status(field_id, status);
    }

    pub fn set_comment(&mut self, field_id: &str, text: impl Into<String>) {
        self.overlay.set_comment(field_id, text);
    }

    pub fn annotation(&self, field_id: &str) -> Annotation {
        self.overlay.annotation(field_id)
    }

    /// Save the full annotation mapping.
    ///
    /// The in-memory annotations are left as they are either way, so a
    /// failed save can simply be retried.
    pub async fn finalize_review(&self) -> Result<ReviewSummary> {
        let record = self.overlay.to_record();
        with_timeout(
            self.timeout_seconds,
            "save review",
            self.backend.save_review(&self.context.syllabus_id, &record),
        )
        .await?;

        let summary = self.overlay.summary();
        tracing::info!(
            syllabus = %self.context.syllabus_id,
            approved = summary.approved,
            rejected = summary.rejected,
            "review saved"
        );
        Ok(summary)
    }
}
