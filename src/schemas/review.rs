//! Review schema - Coordinator annotations on syllabus fields
//!
//! On the wire a status is `"approved"`, `"rejected"` or `null`.

use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Review status for a single field or whole step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReviewStatus {
    /// Reviewer accepted the field
    Approved,
    /// Reviewer sent the field back
    Rejected,
    /// No decision yet
    #[default]
    Unset,
}

impl ReviewStatus {
    /// Wire name, or None for Unset
    pub fn as_wire(&self) -> Option<&'static str> {
        match self {
            ReviewStatus::Approved => Some("approved"),
            ReviewStatus::Rejected => Some("rejected"),
            ReviewStatus::Unset => None,
        }
    }

    /// Check if a decision has been recorded
    pub fn is_set(&self) -> bool {
        *self != ReviewStatus::Unset
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_wire().unwrap_or("unset"))
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(ReviewStatus::Approved),
            "rejected" => Ok(ReviewStatus::Rejected),
            "unset" | "" => Ok(ReviewStatus::Unset),
            _ => Err(format!("Unknown review status: {}", s)),
        }
    }
}

impl Serialize for ReviewStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_wire() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for ReviewStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(ReviewStatus::Unset),
            Some("approved") => Ok(ReviewStatus::Approved),
            Some("rejected") => Ok(ReviewStatus::Rejected),
            Some(other) => Err(de::Error::unknown_variant(other, &["approved", "rejected"])),
        }
    }
}

/// Status and comment attached to one field identifier
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotation {
    /// Approve/reject decision
    #[serde(default)]
    pub status: ReviewStatus,

    /// Free-text reviewer comment
    #[serde(default)]
    pub comment: String,
}

impl Annotation {
    /// Whether the comment box should render open
    pub fn comment_open(&self) -> bool {
        !self.comment.is_empty()
    }

    /// Whether this annotation carries no information
    pub fn is_default(&self) -> bool {
        !self.status.is_set() && self.comment.is_empty()
    }
}

/// Full annotation mapping for one syllabus, keyed by field identifier
pub type ReviewRecord = BTreeMap<String, Annotation>;
