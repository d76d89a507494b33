//! Primary wizard action
//!
//! The wizard's main button is a two-state machine: it reads "Next" until the
//! cursor sits on the last allowed step, then it finalizes.

use super::sections::AllowedSteps;
use super::stepper::Stepper;

/// What the primary button does on the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    /// Save the step, then move to the next allowed step
    Continue,
    /// Save the step, then submit the syllabus for analysis
    Finalize,
}

impl PrimaryAction {
    /// Decide the action for `current` under `allowed`
    pub fn for_step(current: u32, allowed: &AllowedSteps) -> Self {
        if allowed.is_effectively_last_step(current) {
            PrimaryAction::Finalize
        } else {
            PrimaryAction::Continue
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrimaryAction::Continue => "Next",
            PrimaryAction::Finalize => "Finish & submit for review",
        }
    }
}

impl std::fmt::Display for PrimaryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rendered state of the primary button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryButton {
    pub action: PrimaryAction,
    pub disabled: bool,
}

/// Compute the primary button for the stepper's current step.
///
/// Disabled only in the dead end: structurally on the last step but not
/// allowed to finalize there.
pub fn primary_button(stepper: &Stepper, allowed: &AllowedSteps) -> PrimaryButton {
    let action = PrimaryAction::for_step(stepper.current_step(), allowed);
    PrimaryButton {
        action,
        disabled: action == PrimaryAction::Continue && stepper.is_last(),
    }
}
