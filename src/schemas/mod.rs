//! Schema types for syllabi
//!
//! Canonical shapes of everything exchanged with the backend.

mod config;
mod permission;
mod review;
mod step;
mod syllabus;

pub use config::Config;
pub use permission::PermissionRecord;
pub use review::{Annotation, ReviewRecord, ReviewStatus};
pub use step::StepPayload;
pub use syllabus::{Syllabus, SyllabusStatus};
