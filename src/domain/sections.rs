//! Permission-gated step set
//!
//! Users are granted syllabus *sections*; the wizard shows *steps*. Several
//! sections can live on one step, so the mapping is many-to-one. Step 1 is
//! always visible regardless of grants.

use std::collections::BTreeSet;

use crate::schemas::PermissionRecord;

/// The fixed section → step table.
///
/// IMPORTANT: sections 5 and 6 share step 5; there is no section for a step
/// beyond 8.
pub const SECTION_STEP_MAP: &[(u32, u32)] = &[
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 4),
    (5, 5),
    (6, 5),
    (7, 6),
    (8, 7),
    (9, 8),
];

/// Step that is visible to everyone
pub const ALWAYS_ALLOWED_STEP: u32 = 1;

/// Look up the wizard step that renders a section.
///
/// Returns None for sections the table does not know.
pub fn step_for_section(section: u32) -> Option<u32> {
    SECTION_STEP_MAP
        .iter()
        .find(|(s, _)| *s == section)
        .map(|(_, step)| *step)
}

/// Translate granted sections into the set of allowed steps.
///
/// Result is sorted ascending, deduplicated, and always contains step 1.
pub fn compute_allowed_steps<I>(sections: I) -> BTreeSet<u32>
where
    I: IntoIterator<Item = u32>,
{
    let mut steps: BTreeSet<u32> = sections.into_iter().filter_map(step_for_section).collect();
    steps.insert(ALWAYS_ALLOWED_STEP);
    steps
}

/// Steps a user may view and edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedSteps {
    steps: BTreeSet<u32>,
}

impl AllowedSteps {
    /// Only step 1; used while permissions load or after a failed fetch
    pub fn restrictive() -> Self {
        Self::from_sections(std::iter::empty())
    }

    pub fn from_sections<I>(sections: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        AllowedSteps {
            steps: compute_allowed_steps(sections),
        }
    }

    pub fn from_permissions(records: &[PermissionRecord]) -> Self {
        Self::from_sections(records.iter().map(|r| r.numero_seccion))
    }

    /// Drop steps the wizard does not have.
    ///
    /// Keeps the last allowed step within `total_steps` so the wizard cannot
    /// reach a structural end it is not allowed to finalize from.
    pub fn clamped_to(mut self, total_steps: u32) -> Self {
        let total_steps = total_steps.max(ALWAYS_ALLOWED_STEP);
        self.steps.retain(|step| *step <= total_steps);
        self.steps.insert(ALWAYS_ALLOWED_STEP);
        self
    }

    pub fn steps(&self) -> &BTreeSet<u32> {
        &self.steps
    }

    pub fn is_step_allowed(&self, step: u32) -> bool {
        self.steps.contains(&step)
    }

    /// Highest allowed step, falling back to `current` for an empty set
    pub fn last_allowed_step(&self, current: u32) -> u32 {
        self.steps.last().copied().unwrap_or(current)
    }

    /// Whether the primary action on `current` should finalize
    pub fn is_effectively_last_step(&self, current: u32) -> bool {
        current == self.last_allowed_step(current)
    }

    /// Nearest allowed step strictly after `step`
    pub fn next_allowed_after(&self, step: u32) -> Option<u32> {
        self.steps.range(step.saturating_add(1)..).next().copied()
    }

    /// Nearest allowed step strictly before `step`
    pub fn previous_allowed_before(&self, step: u32) -> Option<u32> {
        self.steps.range(..step).next_back().copied()
    }
}

impl Default for AllowedSteps {
    fn default() -> Self {
        Self::restrictive()
    }
}

/// Where the permission fetch currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PermissionState {
    /// Fetch has not resolved yet
    #[default]
    Loading,
    /// Grants are known
    Loaded(AllowedSteps),
    /// Fetch failed; the message is shown as a blocking error
    Failed(String),
}

impl PermissionState {
    /// Allowed steps to render with.
    ///
    /// Anything other than a loaded set fails closed to step 1 only.
    pub fn effective(&self) -> AllowedSteps {
        match self {
            PermissionState::Loaded(allowed) => allowed.clone(),
            PermissionState::Loading | PermissionState::Failed(_) => AllowedSteps::restrictive(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, PermissionState::Loaded(_))
    }

    pub fn is_blocking_error(&self) -> bool {
        matches!(self, PermissionState::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps_of(allowed: &AllowedSteps) -> Vec<u32> {
        allowed.steps().iter().copied().collect()
    }

    #[test]
    fn test_step_for_section() {
        assert_eq!(step_for_section(1), Some(1));
        assert_eq!(step_for_section(5), Some(5));
        assert_eq!(step_for_section(6), Some(5));
        assert_eq!(step_for_section(9), Some(8));
        assert_eq!(step_for_section(0), None);
        assert_eq!(step_for_section(42), None);
    }

    #[test]
    fn test_no_sections_yields_first_step_only() {
        let steps = compute_allowed_steps(Vec::new());
        assert_eq!(steps.into_iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_many_to_one_sections() {
        let from_five = compute_allowed_steps([5]);
        let from_six = compute_allowed_steps([6]);

        assert!(from_five.contains(&5));
        assert!(from_six.contains(&5));
        assert!(!from_five.contains(&6));
        assert!(!from_six.contains(&6));
    }

    #[test]
    fn test_duplicates_collapse_and_sort() {
        let steps = compute_allowed_steps([6, 9, 5, 2, 5]);
        assert_eq!(steps.into_iter().collect::<Vec<_>>(), vec![1, 2, 5, 8]);
    }

    #[test]
    fn test_unknown_sections_are_dropped() {
        let steps = compute_allowed_steps([99, 0]);
        assert_eq!(steps.into_iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_last_allowed_step() {
        let allowed = AllowedSteps::from_sections([3, 5]);
        assert_eq!(steps_of(&allowed), vec![1, 3, 5]);
        assert_eq!(allowed.last_allowed_step(1), 5);
        assert!(allowed.is_effectively_last_step(5));
        assert!(!allowed.is_effectively_last_step(3));
    }

    #[test]
    fn test_from_permissions() {
        let records = vec![PermissionRecord::new(2), PermissionRecord::new(9)];
        let allowed = AllowedSteps::from_permissions(&records);

        assert_eq!(steps_of(&allowed), vec![1, 2, 8]);
        assert!(allowed.is_step_allowed(2));
        assert!(!allowed.is_step_allowed(3));
        assert_eq!(allowed.last_allowed_step(1), 8);
    }

    #[test]
    fn test_next_and_previous_allowed() {
        let allowed = AllowedSteps::from_sections([2, 9]);

        assert_eq!(allowed.next_allowed_after(1), Some(2));
        assert_eq!(allowed.next_allowed_after(2), Some(8));
        assert_eq!(allowed.next_allowed_after(8), None);
        assert_eq!(allowed.previous_allowed_before(8), Some(2));
        assert_eq!(allowed.previous_allowed_before(5), Some(2));
        assert_eq!(allowed.previous_allowed_before(1), None);
    }

    #[test]
    fn test_clamped_to_total_steps() {
        let allowed = AllowedSteps::from_sections([2, 9]).clamped_to(6);
        assert_eq!(steps_of(&allowed), vec![1, 2]);
        assert_eq!(allowed.last_allowed_step(1), 2);

        let degenerate = AllowedSteps::from_sections([9]).clamped_to(0);
        assert_eq!(steps_of(&degenerate), vec![1]);
    }

    #[test]
    fn test_permission_state_fails_closed() {
        assert_eq!(PermissionState::Loading.effective(), AllowedSteps::restrictive());

        let failed = PermissionState::Failed("timeout".to_string());
        assert_eq!(failed.effective(), AllowedSteps::restrictive());
        assert!(failed.is_blocking_error());

        let loaded = PermissionState::Loaded(AllowedSteps::from_sections([4]));
        assert!(loaded.is_loaded());
        assert!(!loaded.is_blocking_error());
        assert!(loaded.effective().is_step_allowed(4));
    }
}
