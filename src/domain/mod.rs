//! Domain logic for the syllabus wizard
//!
//! Pure, synchronous state: the step cursor, the permission-gated step set,
//! the primary next/finalize action and the review overlay. Nothing here does
//! I/O or returns an error.

mod action;
mod review;
mod sections;
mod stepper;

// Property-based tests (compiled only in test builds)
#[cfg(test)]
mod property_tests;

pub use action::{primary_button, PrimaryAction, PrimaryButton};
pub use review::{parse_step_field_id, step_field_id, ReviewOverlay, ReviewSummary};
pub use sections::{
    compute_allowed_steps, step_for_section, AllowedSteps, PermissionState, ALWAYS_ALLOWED_STEP,
    SECTION_STEP_MAP,
};
pub use stepper::Stepper;
