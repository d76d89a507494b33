//! Error types for syllabi
//!
//! Each error type has a corresponding error code for programmatic handling.
//! The pure wizard core never returns these; they come from the backend
//! collaborators and the host layer that drives them.

use thiserror::Error;

/// Result type alias for syllabi operations
pub type Result<T> = std::result::Result<T, SyllabiError>;

/// Main error type for all syllabi operations
#[derive(Debug, Error)]
pub enum SyllabiError {
    /// Data root not found - no .syllabi directory
    #[error("Data root not found: {0}")]
    RootNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// User or syllabus id that cannot name a file under the data root
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Permission records could not be fetched
    #[error("Permission fetch failed: {0}")]
    PermissionFetch(String),

    /// Step-local save failed; the cursor stays on the step
    #[error("Step save failed: {0}")]
    StepSave(String),

    /// Submit-to-analysis transition failed
    #[error("Submit failed: {0}")]
    Submit(String),

    /// Review annotations could not be persisted
    #[error("Review save failed: {0}")]
    ReviewSave(String),

    /// Backend call exceeded the configured timeout
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Operation was interrupted (e.g., by SIGINT)
    #[error("Operation interrupted")]
    Interrupted,

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl SyllabiError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            SyllabiError::RootNotFound(_) => "ROOT_NOT_FOUND",
            SyllabiError::InvalidJson(_) => "INVALID_JSON",
            SyllabiError::FileNotFound(_) => "FILE_NOT_FOUND",
            SyllabiError::ConfigError(_) => "CONFIG_ERROR",
            SyllabiError::InvalidId(_) => "INVALID_ID",
            SyllabiError::PermissionFetch(_) => "PERMISSION_FETCH",
            SyllabiError::StepSave(_) => "STEP_SAVE",
            SyllabiError::Submit(_) => "SUBMIT",
            SyllabiError::ReviewSave(_) => "REVIEW_SAVE",
            SyllabiError::Timeout(_) => "TIMEOUT",
            SyllabiError::Interrupted => "INTERRUPTED",
            SyllabiError::Io(_) => "IO_ERROR",
            SyllabiError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Whether the user can retry the failed operation without losing state
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SyllabiError::StepSave(_)
                | SyllabiError::Submit(_)
                | SyllabiError::ReviewSave(_)
                | SyllabiError::Timeout(_)
        )
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        SyllabiError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &SyllabiError) -> i32 {
    match error {
        SyllabiError::Interrupted => 130, // Standard Unix exit code for SIGINT
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SyllabiError::RootNotFound("test".into()).code(), "ROOT_NOT_FOUND");
        assert_eq!(SyllabiError::InvalidJson("test".into()).code(), "INVALID_JSON");
        assert_eq!(SyllabiError::FileNotFound("test".into()).code(), "FILE_NOT_FOUND");
        assert_eq!(SyllabiError::ConfigError("test".into()).code(), "CONFIG_ERROR");
        assert_eq!(SyllabiError::InvalidId("test".into()).code(), "INVALID_ID");
        assert_eq!(SyllabiError::PermissionFetch("test".into()).code(), "PERMISSION_FETCH");
        assert_eq!(SyllabiError::StepSave("test".into()).code(), "STEP_SAVE");
        assert_eq!(SyllabiError::Submit("test".into()).code(), "SUBMIT");
        assert_eq!(SyllabiError::ReviewSave("test".into()).code(), "REVIEW_SAVE");
        assert_eq!(SyllabiError::Timeout("test".into()).code(), "TIMEOUT");
        assert_eq!(SyllabiError::Interrupted.code(), "INTERRUPTED");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(to_exit_code(&SyllabiError::Interrupted), 130);
        assert_eq!(to_exit_code(&SyllabiError::RootNotFound("test".into())), 1);
        assert_eq!(to_exit_code(&SyllabiError::StepSave("test".into())), 1);
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(SyllabiError::StepSave("network".into()).is_recoverable());
        assert!(SyllabiError::ReviewSave("network".into()).is_recoverable());
        assert!(!SyllabiError::PermissionFetch("denied".into()).is_recoverable());
        assert!(!SyllabiError::InvalidJson("bad".into()).is_recoverable());
        assert!(!SyllabiError::InvalidId("..".into()).is_recoverable());
    }

    #[test]
    fn test_wrap_error() {
        let wrapped = SyllabiError::wrap("inner error", "outer context");
        assert_eq!(wrapped.code(), "WRAPPED_ERROR");
        assert!(wrapped.to_string().contains("outer context"));
        assert!(wrapped.to_string().contains("inner error"));
    }
}
