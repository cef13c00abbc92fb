//! Tests for debouncer

use super::*;
use proptest::prelude::*;

const TEST_DEBOUNCE_MS: u64 = 300;

#[test]
fn test_new_debouncer_has_no_pending() {
    let debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
    assert!(!debouncer.has_pending());
    assert!(!debouncer.should_execute_at(0));
    assert_eq!(debouncer.delay_ms(), TEST_DEBOUNCE_MS);
}

#[test]
fn test_schedule_execution_sets_pending() {
    let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
    debouncer.schedule_execution_at(0);
    assert!(debouncer.has_pending());
}

#[test]
fn test_should_execute_false_immediately_after_schedule() {
    let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
    debouncer.schedule_execution_at(0);
    assert!(!debouncer.should_execute_at(0));
    assert!(!debouncer.should_execute_at(TEST_DEBOUNCE_MS - 1));
}

#[test]
fn test_should_execute_true_at_debounce_period() {
    let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
    debouncer.schedule_execution_at(0);
    assert!(debouncer.should_execute_at(TEST_DEBOUNCE_MS));
}

#[test]
fn test_mark_executed_clears_state() {
    let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
    debouncer.schedule_execution_at(0);
    assert!(debouncer.should_execute_at(TEST_DEBOUNCE_MS + 10));

    debouncer.mark_executed();
    assert!(!debouncer.has_pending());
    assert!(!debouncer.should_execute_at(TEST_DEBOUNCE_MS + 10));
}

#[test]
fn test_cancel_drops_pending_execution() {
    let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
    debouncer.schedule_execution_at(0);
    debouncer.cancel();
    assert!(!debouncer.has_pending());
    assert!(!debouncer.should_execute_at(10 * TEST_DEBOUNCE_MS));
}

#[test]
fn test_schedule_resets_timer() {
    let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);

    debouncer.schedule_execution_at(0);
    assert!(!debouncer.should_execute_at(TEST_DEBOUNCE_MS / 2));

    // Reschedule halfway through
    debouncer.schedule_execution_at(TEST_DEBOUNCE_MS / 2);
    assert!(!debouncer.should_execute_at(TEST_DEBOUNCE_MS));

    assert!(debouncer.should_execute_at(TEST_DEBOUNCE_MS + TEST_DEBOUNCE_MS / 2));
}

#[test]
fn test_zero_delay_executes_immediately() {
    let mut debouncer = Debouncer::new(0);
    debouncer.schedule_execution_at(42);
    assert!(debouncer.should_execute_at(42));
}

// Feature: debounce, Property 1: Debounce timer reset on input
// *For any* burst of keystrokes each arriving within the delay of the previous one,
// nothing executes until the delay has passed after the final keystroke.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_debounce_timer_reset_on_input(
        gaps in prop::collection::vec(0u64..TEST_DEBOUNCE_MS, 1..12)
    ) {
        let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
        let mut now: u64 = 0;
        debouncer.schedule_execution_at(now);

        for gap in gaps {
            now += gap;
            prop_assert!(!debouncer.should_execute_at(now));
            debouncer.schedule_execution_at(now);
        }

        prop_assert!(!debouncer.should_execute_at(now + TEST_DEBOUNCE_MS - 1));
        prop_assert!(debouncer.should_execute_at(now + TEST_DEBOUNCE_MS));
    }
}

// Feature: debounce, Property 2: Debounce state consistency
// After mark_executed, nothing is pending until the next schedule.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_debounce_state_consistency(num_cycles in 1usize..=5) {
        let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
        let mut now: u64 = 0;

        for _ in 0..num_cycles {
            debouncer.schedule_execution_at(now);
            prop_assert!(debouncer.has_pending());

            now += TEST_DEBOUNCE_MS + 10;
            prop_assert!(debouncer.should_execute_at(now));

            debouncer.mark_executed();
            prop_assert!(!debouncer.has_pending());
            prop_assert!(!debouncer.should_execute_at(now));

            now += 10;
        }
    }
}
