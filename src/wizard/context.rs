//! Session identity passed into wizard and review sessions

/// Who is editing or reviewing, and which syllabus.
///
/// Built once when a session starts and handed to the session explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// User whose section grants gate the wizard
    pub user_id: String,

    /// Syllabus being drafted or reviewed
    pub syllabus_id: String,
}

impl SessionContext {
    pub fn new(user_id: impl Into<String>, syllabus_id: impl Into<String>) -> Self {
        SessionContext {
            user_id: user_id.into(),
            syllabus_id: syllabus_id.into(),
        }
    }
}
