//! Syllabus schema - Identity and review lifecycle of a syllabus

use serde::{Deserialize, Serialize};

/// Lifecycle status tracked by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SyllabusStatus {
    /// Teacher is still editing
    #[default]
    Draft,
    /// Submitted and waiting for a coordinator
    UnderAnalysis,
    /// Coordinator accepted it
    Approved,
    /// Coordinator sent it back
    Rejected,
}

impl std::fmt::Display for SyllabusStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyllabusStatus::Draft => write!(f, "draft"),
            SyllabusStatus::UnderAnalysis => write!(f, "under_analysis"),
            SyllabusStatus::Approved => write!(f, "approved"),
            SyllabusStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A syllabus as seen by the wizard host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Syllabus {
    /// Backend identifier
    pub id: String,

    /// Course title shown in listings
    #[serde(default)]
    pub title: String,

    /// Current lifecycle status
    #[serde(default)]
    pub status: SyllabusStatus,

    /// ISO 8601 last update timestamp
    pub updated_at: String,
}

impl Syllabus {
    /// Create a new draft syllabus
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Syllabus {
            id: id.into(),
            title: title.into(),
            status: SyllabusStatus::Draft,
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Return a new Syllabus with the given status, updating the timestamp
    pub fn with_status(mut self, status: SyllabusStatus) -> Self {
        self.status = status;
        self.updated_at = chrono::Utc::now().to_rfc3339();
        self
    }
}
