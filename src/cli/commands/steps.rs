//! Steps command - Show the steps a user may edit

use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::backend::FsBackend;
use crate::config::load_config;
use crate::domain::SECTION_STEP_MAP;
use crate::errors::{Result, SyllabiError};
use crate::wizard::{SessionContext, WizardSession};

use super::data_root;

/// Print allowed steps, the last allowed step and the section map
pub async fn run(cwd: Option<&Path>, user: &str, json: bool) -> Result<()> {
    let root = data_root(cwd)?;
    println!("{}", render(&root, user, json).await?);
    Ok(())
}

async fn render(root: &Path, user: &str, json: bool) -> Result<String> {
    let config = load_config(root)?;
    let backend = Arc::new(FsBackend::new(root));
    let mut session = WizardSession::new(SessionContext::new(user, ""), backend, &config);
    session.load_permissions().await?;

    let steps = session.visible_steps();
    let last = session.allowed().last_allowed_step(session.current_step());

    if json {
        let value = json!({
            "user": user,
            "total_steps": config.total_steps,
            "allowed_steps": steps,
            "last_allowed_step": last,
        });
        return serde_json::to_string_pretty(&value)
            .map_err(|e| SyllabiError::InvalidJson(e.to_string()));
    }

    let mut out = format!(
        "User {}: steps {} of {} (finalize on step {})\n",
        user,
        steps
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        config.total_steps,
        last
    );
    out.push_str("Section map:");
    for (section, step) in SECTION_STEP_MAP {
        let marker = if steps.contains(step) { "*" } else { " " };
        out.push_str(&format!("\n  {} section {} -> step {}", marker, section, step));
    }
    Ok(out)
}
