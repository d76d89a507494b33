//! Step cursor for the syllabus wizard
//!
//! The cursor is 1-indexed and never leaves `[1, total_steps]`:
//! advance and retreat clamp, out-of-range jumps are ignored.

/// Current step within a fixed number of wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stepper {
    current_step: u32,
    total_steps: u32,
    initial_step: u32,
}

impl Stepper {
    /// Create a stepper positioned on step 1.
    ///
    /// A `total_steps` of 0 is raised to 1 so the invariant holds.
    pub fn new(total_steps: u32) -> Self {
        Self::with_initial(total_steps, 1)
    }

    /// Create a stepper that starts (and resets) on `initial`.
    ///
    /// `initial` is clamped into `[1, total_steps]`.
    pub fn with_initial(total_steps: u32, initial: u32) -> Self {
        let total_steps = total_steps.max(1);
        let initial_step = initial.clamp(1, total_steps);
        Stepper {
            current_step: initial_step,
            total_steps,
            initial_step,
        }
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// Move forward one step; no-op on the last step
    pub fn advance(&mut self) {
        self.current_step = self.current_step.saturating_add(1).min(self.total_steps);
    }

    /// Move back one step; no-op on the first step
    pub fn retreat(&mut self) {
        self.current_step = self.current_step.saturating_sub(1).max(1);
    }

    /// Jump to `step` if it is in range.
    ///
    /// Returns false and leaves the cursor alone otherwise.
    pub fn go_to(&mut self, step: u32) -> bool {
        if !self.contains(step) {
            tracing::debug!(step, total = self.total_steps, "ignoring out-of-range step");
            return false;
        }
        self.current_step = step;
        true
    }

    /// Return to the initial step
    pub fn reset(&mut self) {
        self.current_step = self.initial_step;
    }

    pub fn is_first(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_last(&self) -> bool {
        self.current_step == self.total_steps
    }

    /// Check if `step` is a valid cursor position
    pub fn contains(&self, step: u32) -> bool {
        (1..=self.total_steps).contains(&step)
    }
}
