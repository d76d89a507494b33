//! Review overlay
//!
//! Coordinators annotate individual fields, or whole steps through the
//! synthetic `step-<n>` identifier. Annotations live beside the syllabus data
//! and never touch it.

use crate::schemas::{Annotation, ReviewRecord, ReviewStatus};

const STEP_FIELD_PREFIX: &str = "step-";

/// Field identifier for a whole-step annotation
pub fn step_field_id(step: u32) -> String {
    format!("{}{}", STEP_FIELD_PREFIX, step)
}

/// Recover the step number from a `step-<n>` identifier
pub fn parse_step_field_id(field_id: &str) -> Option<u32> {
    field_id.strip_prefix(STEP_FIELD_PREFIX)?.parse().ok()
}

/// Counts shown in the review footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewSummary {
    pub approved: usize,
    pub rejected: usize,
    pub commented: usize,
}

/// In-memory annotations for one review session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewOverlay {
    annotations: ReviewRecord,
    review_mode: bool,
}

impl ReviewOverlay {
    /// Empty overlay outside review mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty overlay with review mode on
    pub fn for_review() -> Self {
        ReviewOverlay {
            annotations: ReviewRecord::new(),
            review_mode: true,
        }
    }

    /// Seed from a previously saved record when reopening a review
    pub fn from_record(record: ReviewRecord) -> Self {
        ReviewOverlay {
            annotations: record,
            review_mode: true,
        }
    }

    pub fn is_review_mode(&self) -> bool {
        self.review_mode
    }

    pub fn start_review(&mut self) {
        self.review_mode = true;
    }

    /// Apply an approve/reject click.
    ///
    /// Requesting the status a field already has clears it back to Unset.
    /// Approved and rejected share one slot, so setting one drops the other.
    pub fn set_status(&mut self, field_id: &str, status: ReviewStatus) {
        let entry = self.annotations.entry(field_id.to_string()).or_default();
        entry.status = if entry.status == status {
            ReviewStatus::Unset
        } else {
            status
        };
    }

    /// Replace the comment on a field
    pub fn set_comment(&mut self, field_id: &str, text: impl Into<String>) {
        self.annotations.entry(field_id.to_string()).or_default().comment = text.into();
    }

    /// Annotation for a field; untouched fields read as the default
    pub fn annotation(&self, field_id: &str) -> Annotation {
        self.annotations.get(field_id).cloned().unwrap_or_default()
    }

    /// Annotation for a whole step
    pub fn step_annotation(&self, step: u32) -> Annotation {
        self.annotation(&step_field_id(step))
    }

    pub fn summary(&self) -> ReviewSummary {
        self.annotations
            .values()
            .fold(ReviewSummary::default(), |mut acc, a| {
                match a.status {
                    ReviewStatus::Approved => acc.approved += 1,
                    ReviewStatus::Rejected => acc.rejected += 1,
                    ReviewStatus::Unset => {}
                }
                if a.comment_open() {
                    acc.commented += 1;
                }
                acc
            })
    }

    /// Full mapping to persist, without entries that carry nothing
    pub fn to_record(&self) -> ReviewRecord {
        self.annotations
            .iter()
            .filter(|(_, a)| !a.is_default())
            .map(|(k, a)| (k.clone(), a.clone()))
            .collect()
    }
}
