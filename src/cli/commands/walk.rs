//! Walk command - Save each allowed step and submit the syllabus

use std::path::Path;
use std::sync::Arc;

use crate::backend::FsBackend;
use crate::config::load_config;
use crate::errors::{Result, SyllabiError};
use crate::wizard::{NextOutcome, SessionContext, WizardSession};

use super::data_root;

/// Drive a wizard session from the first step to submission
pub async fn run(cwd: Option<&Path>, user: &str, syllabus: &str, dry_run: bool) -> Result<()> {
    let root = data_root(cwd)?;
    for line in walk(&root, user, syllabus, dry_run).await? {
        println!("{}", line);
    }
    Ok(())
}

async fn walk(root: &Path, user: &str, syllabus: &str, dry_run: bool) -> Result<Vec<String>> {
    let config = load_config(root)?;
    let backend = Arc::new(FsBackend::new(root));
    let mut session = WizardSession::new(
        SessionContext::new(user, syllabus),
        Arc::clone(&backend),
        &config,
    );
    session.load_permissions().await?;

    if dry_run {
        let route = session
            .visible_steps()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        tracing::info!("[DRY RUN] would save steps {} and submit", route);
        return Ok(vec![format!("[DRY RUN] would save steps {} and submit {}", route, syllabus)]);
    }

    let mut lines = Vec::new();
    // One pass per step at most; the primary action always moves or submits
    for _ in 0..=config.total_steps {
        let step = session.current_step();
        let data = backend
            .load_draft(syllabus, step)?
            .unwrap_or_else(|| serde_json::json!({}));
        let label = session.primary_action().label();

        match session.next(data).await? {
            NextOutcome::Advanced { from, to } => {
                lines.push(format!("Saved step {} ({}) -> step {}", from, label, to));
            }
            NextOutcome::Submitted => {
                lines.push(format!("Saved step {} ({})", step, label));
                lines.push(format!("Submitted {} for analysis", syllabus));
                return Ok(lines);
            }
            NextOutcome::Blocked => {
                return Err(SyllabiError::wrap(
                    format!("primary action disabled on step {}", step),
                    "walk",
                ));
            }
        }
    }

    Err(SyllabiError::wrap("wizard did not reach its last allowed step", "walk"))
}
