//! Review command - Inspect and annotate a syllabus review

use std::path::Path;
use std::sync::Arc;

use crate::backend::FsBackend;
use crate::cli::ReviewAction;
use crate::config::load_config;
use crate::domain::parse_step_field_id;
use crate::errors::{Result, SyllabiError};
use crate::schemas::ReviewStatus;
use crate::wizard::{ReviewSession, SessionContext};

use super::data_root;

/// Apply a review action against the saved annotations
pub async fn run(cwd: Option<&Path>, action: &ReviewAction, dry_run: bool) -> Result<()> {
    let root = data_root(cwd)?;
    println!("{}", apply(&root, action, dry_run).await?);
    Ok(())
}

fn parse_decision(raw: &str) -> Result<ReviewStatus> {
    match raw.parse::<ReviewStatus>() {
        Ok(status) if status.is_set() => Ok(status),
        _ => Err(SyllabiError::wrap(
            format!("expected approved or rejected, got {:?}", raw),
            "invalid --status",
        )),
    }
}

async fn open(root: &Path, syllabus: &str) -> Result<ReviewSession<FsBackend>> {
    let config = load_config(root)?;
    let backend = Arc::new(FsBackend::new(root));
    ReviewSession::open(SessionContext::new("", syllabus), backend, &config).await
}

async fn save(session: &ReviewSession<FsBackend>, dry_run: bool) -> Result<()> {
    if dry_run {
        tracing::info!("[DRY RUN] would save review for {}", session.context().syllabus_id);
        return Ok(());
    }
    session.finalize_review().await?;
    Ok(())
}

async fn apply(root: &Path, action: &ReviewAction, dry_run: bool) -> Result<String> {
    match action {
        ReviewAction::Show { syllabus, json } => {
            let session = open(root, syllabus).await?;
            let record = session.overlay().to_record();
            if *json {
                return serde_json::to_string_pretty(&record)
                    .map_err(|e| SyllabiError::InvalidJson(e.to_string()));
            }
            let summary = session.overlay().summary();
            let mut out = format!(
                "Review of {}: {} approved, {} rejected, {} commented",
                syllabus, summary.approved, summary.rejected, summary.commented
            );
            for (field, annotation) in &record {
                let label = match parse_step_field_id(field) {
                    Some(step) => format!("[step {}]", step),
                    None => field.clone(),
                };
                out.push_str(&format!(
                    "\n  {:<20} {:<9} {}",
                    label, annotation.status, annotation.comment
                ));
            }
            Ok(out)
        }
        ReviewAction::Mark {
            syllabus,
            field,
            status,
        } => {
            let status = parse_decision(status)?;
            let mut session = open(root, syllabus).await?;
            session.set_status(field, status);
            save(&session, dry_run).await?;
            Ok(format!("{} is now {}", field, session.annotation(field).status))
        }
        ReviewAction::Comment {
            syllabus,
            field,
            text,
        } => {
            let mut session = open(root, syllabus).await?;
            session.set_comment(field, text.as_str());
            save(&session, dry_run).await?;
            if text.is_empty() {
                Ok(format!("Cleared comment on {}", field))
            } else {
                Ok(format!("Commented on {}", field))
            }
        }
    }
}
