//! Property-based tests for domain logic
//!
//! These tests use proptest to verify invariants across many random inputs.

#[cfg(test)]
mod tests {
    use crate::domain::action::{primary_button, PrimaryAction};
    use crate::domain::review::ReviewOverlay;
    use crate::domain::sections::{compute_allowed_steps, AllowedSteps, SECTION_STEP_MAP};
    use crate::domain::stepper::Stepper;
    use crate::schemas::ReviewStatus;
    use proptest::prelude::*;

    // ===== STRATEGY HELPERS =====

    /// A single cursor move
    #[derive(Debug, Clone, Copy)]
    enum Move {
        Advance,
        Retreat,
        GoTo(u32),
        Reset,
    }

    fn any_move() -> impl Strategy<Value = Move> {
        prop_oneof![
            Just(Move::Advance),
            Just(Move::Retreat),
            (0u32..20).prop_map(Move::GoTo),
            Just(Move::Reset),
        ]
    }

    /// Generate a decided or undecided review status
    fn any_status() -> impl Strategy<Value = ReviewStatus> {
        prop_oneof![
            Just(ReviewStatus::Approved),
            Just(ReviewStatus::Rejected),
            Just(ReviewStatus::Unset),
        ]
    }

    /// Section numbers, including some the table does not know
    fn any_sections() -> impl Strategy<Value = Vec<u32>> {
        prop::collection::vec(0u32..12, 0..10)
    }

    // ===== STEPPER INVARIANTS =====

    proptest! {
        /// Property: the cursor stays in range after every move
        #[test]
        fn test_cursor_stays_in_range(
            total in 1u32..12,
            moves in prop::collection::vec(any_move(), 0..50)
        ) {
            let mut stepper = Stepper::new(total);
            for m in moves {
                match m {
                    Move::Advance => stepper.advance(),
                    Move::Retreat => stepper.retreat(),
                    Move::GoTo(step) => { stepper.go_to(step); }
                    Move::Reset => stepper.reset(),
                }
                prop_assert!(stepper.current_step() >= 1);
                prop_assert!(stepper.current_step() <= total);
            }
        }

        /// Property: advancing at least total times lands on the last step
        #[test]
        fn test_advance_saturates(total in 1u32..12, extra in 0u32..10) {
            let mut stepper = Stepper::new(total);
            for _ in 0..(total + extra) {
                stepper.advance();
            }
            prop_assert_eq!(stepper.current_step(), total);
            prop_assert!(stepper.is_last());
        }

        /// Property: go_to outside the range never changes the cursor
        #[test]
        fn test_go_to_out_of_range_is_noop(total in 1u32..12, start in 1u32..12) {
            let mut stepper = Stepper::new(total);
            stepper.go_to(start);
            let before = stepper.current_step();

            prop_assert!(!stepper.go_to(0));
            prop_assert!(!stepper.go_to(total + 1));
            prop_assert_eq!(stepper.current_step(), before);
        }
    }

    // ===== ALLOWED STEP INVARIANTS =====

    proptest! {
        /// Property: step 1 is always allowed and the set is sorted and non-empty
        #[test]
        fn test_first_step_always_allowed(sections in any_sections()) {
            let steps = compute_allowed_steps(sections);
            prop_assert!(steps.contains(&1));
            prop_assert!(!steps.is_empty());
        }

        /// Property: every allowed step other than 1 comes from a granted section
        #[test]
        fn test_allowed_steps_come_from_grants(sections in any_sections()) {
            let allowed = AllowedSteps::from_sections(sections.clone());
            for step in allowed.steps() {
                if *step == 1 {
                    continue;
                }
                let granted = SECTION_STEP_MAP
                    .iter()
                    .any(|(section, s)| s == step && sections.contains(section));
                prop_assert!(granted);
            }
        }

        /// Property: clamping keeps the last allowed step within the wizard
        #[test]
        fn test_clamp_removes_dead_end(sections in any_sections(), total in 1u32..12) {
            let allowed = AllowedSteps::from_sections(sections).clamped_to(total);
            prop_assert!(allowed.last_allowed_step(1) <= total);

            let mut stepper = Stepper::new(total);
            stepper.go_to(allowed.last_allowed_step(1));
            let button = primary_button(&stepper, &allowed);
            prop_assert_eq!(button.action, PrimaryAction::Finalize);
            prop_assert!(!button.disabled);
        }

        /// Property: walking next_allowed_after from 1 visits every allowed step in order
        #[test]
        fn test_next_allowed_walk(sections in any_sections()) {
            let allowed = AllowedSteps::from_sections(sections);
            let mut visited = vec![1];
            let mut current = 1;
            while let Some(next) = allowed.next_allowed_after(current) {
                prop_assert!(next > current);
                visited.push(next);
                current = next;
            }
            let expected: Vec<u32> = allowed.steps().iter().copied().collect();
            prop_assert_eq!(visited, expected);
            prop_assert!(allowed.is_effectively_last_step(current));
        }
    }

    // ===== REVIEW OVERLAY INVARIANTS =====

    proptest! {
        /// Property: setting the same decided status twice returns to the prior status
        #[test]
        fn test_double_toggle_restores(
            first in any_status(),
            second in prop_oneof![Just(ReviewStatus::Approved), Just(ReviewStatus::Rejected)]
        ) {
            let mut overlay = ReviewOverlay::for_review();
            overlay.set_status("field", first);
            let before = overlay.annotation("field").status;

            overlay.set_status("field", second);
            overlay.set_status("field", second);
            let after = overlay.annotation("field").status;

            if before == second {
                prop_assert_eq!(after, second);
            } else {
                prop_assert_eq!(after, ReviewStatus::Unset);
            }
        }

        /// Property: the last decided request wins unless it repeats the current status
        #[test]
        fn test_status_follows_toggle_rule(statuses in prop::collection::vec(any_status(), 0..20)) {
            let mut overlay = ReviewOverlay::for_review();
            let mut expected = ReviewStatus::Unset;
            for status in statuses {
                overlay.set_status("field", status);
                expected = if expected == status { ReviewStatus::Unset } else { status };
                prop_assert_eq!(overlay.annotation("field").status, expected);
            }
        }

        /// Property: status clicks never touch the comment
        #[test]
        fn test_status_keeps_comment(
            comment in ".*",
            statuses in prop::collection::vec(any_status(), 0..10)
        ) {
            let mut overlay = ReviewOverlay::for_review();
            overlay.set_comment("field", comment.clone());
            for status in statuses {
                overlay.set_status("field", status);
            }
            prop_assert_eq!(overlay.annotation("field").comment, comment);
        }
    }
}
