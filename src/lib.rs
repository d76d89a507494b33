//! Syllabi - Syllabus drafting wizard with permission-gated steps
//!
//! This library provides:
//! - The step cursor, permission-gated step set and primary next/finalize action
//! - The review overlay coordinators use to approve, reject and comment on fields
//! - Canonical schemas and per-endpoint adapters for backend responses
//! - Host sessions that save each step before moving the cursor
//! - A filesystem backend and the CLI built on it

pub mod backend;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod wizard;

// Re-export commonly used types
pub use errors::{Result, SyllabiError};
pub use schemas::{Annotation, Config, PermissionRecord, ReviewRecord, ReviewStatus};
