//! Step payload schema - What a wizard step sends to persistence

use serde::{Deserialize, Serialize};

/// Step-scoped payload; the shape of `data` belongs to the step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepPayload {
    /// Syllabus the step belongs to
    pub syllabus_id: String,

    /// 1-indexed wizard step
    pub step: u32,

    /// Step form contents
    #[serde(default)]
    pub data: serde_json::Value,

    /// ISO 8601 timestamp of the save
    pub saved_at: String,
}

impl StepPayload {
    /// Create a payload stamped with the current time
    pub fn new(syllabus_id: impl Into<String>, step: u32, data: serde_json::Value) -> Self {
        StepPayload {
            syllabus_id: syllabus_id.into(),
            step,
            data,
            saved_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
