//! Wizard session
//!
//! Owns the step cursor and the permission state for one drafting session.
//! The primary action saves the current step first and only moves the cursor
//! once that save has succeeded.

use std::sync::Arc;

use crate::backend::{with_timeout, SyllabusBackend};
use crate::domain::{
    primary_button, AllowedSteps, PermissionState, PrimaryAction, PrimaryButton, Stepper,
    ALWAYS_ALLOWED_STEP,
};
use crate::errors::{Result, SyllabiError};
use crate::schemas::{Config, StepPayload};

use super::SessionContext;

/// What the primary action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextOutcome {
    /// Step saved and the cursor moved
    Advanced { from: u32, to: u32 },
    /// Step saved and the syllabus was submitted for analysis
    Submitted,
    /// Nothing was saved: permissions are not loaded or the button is disabled
    Blocked,
}

/// One teacher's pass through the syllabus wizard
pub struct WizardSession<B: SyllabusBackend + ?Sized> {
    context: SessionContext,
    backend: Arc<B>,
    stepper: Stepper,
    permissions: PermissionState,
    timeout_seconds: u32,
}

impl<B: SyllabusBackend + ?Sized> WizardSession<B> {
    /// Create a session with permissions still loading
    pub fn new(context: SessionContext, backend: Arc<B>, config: &Config) -> Self {
        WizardSession {
            context,
            backend,
            stepper: Stepper::with_initial(config.total_steps, config.initial_step),
            permissions: PermissionState::Loading,
            timeout_seconds: config.timeout_seconds,
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    pub fn current_step(&self) -> u32 {
        self.stepper.current_step()
    }

    pub fn permissions(&self) -> &PermissionState {
        &self.permissions
    }

    /// Fetch the user's grants and rebuild the allowed step set.
    ///
    /// On failure the session stays on the restrictive set and the error is
    /// returned for the host to show.
    pub async fn load_permissions(&mut self) -> Result<()> {
        let fetched = with_timeout(
            self.timeout_seconds,
            "fetch permissions",
            self.backend.fetch_permissions(&self.context.user_id),
        )
        .await;

        let records = match fetched {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    user = %self.context.user_id,
                    error = %e,
                    "permission fetch failed; only step 1 is available"
                );
                self.permissions = PermissionState::Failed(e.to_string());
                return Err(match e {
                    SyllabiError::PermissionFetch(_) | SyllabiError::InvalidId(_) => e,
                    other => SyllabiError::PermissionFetch(other.to_string()),
                });
            }
        };

        let allowed =
            AllowedSteps::from_permissions(&records).clamped_to(self.stepper.total_steps());
        tracing::info!(
            user = %self.context.user_id,
            steps = ?allowed.steps(),
            "permissions loaded"
        );

        if !allowed.is_step_allowed(self.stepper.current_step()) {
            self.stepper.reset();
            if !allowed.is_step_allowed(self.stepper.current_step()) {
                self.stepper.go_to(ALWAYS_ALLOWED_STEP);
            }
        }
        self.permissions = PermissionState::Loaded(allowed);
        Ok(())
    }

    /// Allowed steps to render with; restrictive until permissions load
    pub fn allowed(&self) -> AllowedSteps {
        self.permissions.effective()
    }

    /// Step numbers whose components render
    pub fn visible_steps(&self) -> Vec<u32> {
        self.allowed().steps().iter().copied().collect()
    }

    pub fn primary_action(&self) -> PrimaryAction {
        PrimaryAction::for_step(self.stepper.current_step(), &self.allowed())
    }

    pub fn primary_button(&self) -> PrimaryButton {
        primary_button(&self.stepper, &self.allowed())
    }

    /// Run the primary action for the current step.
    ///
    /// Saves `data` as the step's payload, then either moves to the next
    /// allowed step or submits the syllabus. If the save fails the cursor
    /// does not move and the error is returned.
    pub async fn next(&mut self, data: serde_json::Value) -> Result<NextOutcome> {
        if !self.permissions.is_loaded() {
            tracing::debug!("primary action ignored until permissions load");
            return Ok(NextOutcome::Blocked);
        }

        let button = self.primary_button();
        if button.disabled {
            return Ok(NextOutcome::Blocked);
        }

        let from = self.stepper.current_step();
        let payload = StepPayload::new(self.context.syllabus_id.clone(), from, data);
        if let Err(e) = with_timeout(
            self.timeout_seconds,
            "save step",
            self.backend.save_step(&payload),
        )
        .await
        {
            tracing::warn!(step = from, error = %e, "step save failed; staying on step");
            return Err(e);
        }
        tracing::info!(syllabus = %self.context.syllabus_id, step = from, "step saved");

        match button.action {
            PrimaryAction::Continue => {
                let allowed = self.allowed();
                match allowed.next_allowed_after(from) {
                    Some(to) => {
                        self.stepper.go_to(to);
                    }
                    None => self.stepper.advance(),
                }
                Ok(NextOutcome::Advanced {
                    from,
                    to: self.stepper.current_step(),
                })
            }
            PrimaryAction::Finalize => {
                with_timeout(
                    self.timeout_seconds,
                    "submit for analysis",
                    self.backend.submit_for_analysis(&self.context.syllabus_id),
                )
                .await?;
                tracing::info!(syllabus = %self.context.syllabus_id, "submitted for analysis");
                Ok(NextOutcome::Submitted)
            }
        }
    }

    /// Move back to the previous allowed step; no-op on the first one
    pub fn back(&mut self) -> u32 {
        let current = self.stepper.current_step();
        if let Some(previous) = self.allowed().previous_allowed_before(current) {
            self.stepper.go_to(previous);
        }
        self.stepper.current_step()
    }

    /// Jump to an allowed step; anything else is ignored
    pub fn go_to(&mut self, step: u32) -> bool {
        if !self.allowed().is_step_allowed(step) {
            tracing::debug!(step, "ignoring jump to step without permission");
            return false;
        }
        self.stepper.go_to(step)
    }

    /// Return to the initial step
    pub fn reset(&mut self) {
        self.stepper.reset();
        if !self.allowed().is_step_allowed(self.stepper.current_step()) {
            self.stepper.go_to(ALWAYS_ALLOWED_STEP);
        }
    }
}
