//! Config schema - Configuration for syllabi

use serde::{Deserialize, Serialize};

/// Main configuration for syllabi
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Number of structural steps in the syllabus wizard
    #[serde(default = "default_total_steps")]
    pub total_steps: u32,

    /// Step the wizard opens on and resets to
    #[serde(default = "default_initial_step")]
    pub initial_step: u32,

    /// Timeout in seconds for each backend call
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_total_steps() -> u32 {
    8
}

fn default_initial_step() -> u32 {
    1
}

fn default_timeout_seconds() -> u32 {
    30
}

impl Config {
    /// Check the values a wizard session depends on
    pub fn validate(&self) -> Result<(), String> {
        if self.total_steps == 0 {
            return Err("total_steps must be at least 1".to_string());
        }
        if self.initial_step == 0 || self.initial_step > self.total_steps {
            return Err(format!(
                "initial_step {} is outside 1..={}",
                self.initial_step, self.total_steps
            ));
        }
        if self.timeout_seconds == 0 {
            return Err("timeout_seconds must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            total_steps: 8,
            initial_step: 1,
            timeout_seconds: 30,
        }
    }
}
