//! Permission schema - Section grants for a user

use serde::{Deserialize, Serialize};

/// One granted syllabus section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionRecord {
    /// Backend section number
    #[serde(rename = "numeroSeccion")]
    pub numero_seccion: u32,
}

impl PermissionRecord {
    /// Create a grant for a single section
    pub fn new(numero_seccion: u32) -> Self {
        PermissionRecord { numero_seccion }
    }
}
