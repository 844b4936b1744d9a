// Property-Based Testing with Proptest
// Run with: cargo test -p rangekeeper-range --test test_proptest

use rangekeeper_range::*;
use rangekeeper_math::constants::{MAX_TICK, MAX_WIDTH, MIN_TICK};
use proptest::prelude::*;

fn spacing_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![Just(1), Just(10), Just(60), Just(200)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: every accepted width yields a valid, aligned range
    #[test]
    fn prop_range_is_valid(
        tick in MIN_TICK..=MAX_TICK,
        width in 0u32..MAX_WIDTH,
        spacing in spacing_strategy()
    ) {
        let range = compute_range(tick, width, spacing).unwrap();
        prop_assert!(is_valid_range(&range, spacing));
    }

    /// Property: away from the tick-space edges the range contains the current tick
    #[test]
    fn prop_range_contains_current_tick(
        tick in (MIN_TICK + 1_000)..(MAX_TICK - 1_000),
        width in 0u32..MAX_WIDTH,
        spacing in spacing_strategy()
    ) {
        let range = compute_range(tick, width, spacing).unwrap();
        prop_assert!(range.contains(tick));
    }

    /// Property: unclamped ranges span exactly (2 * width + 1) spacings
    #[test]
    fn prop_range_span(
        tick in -10_000i32..10_000,
        width in 0u32..100,
        spacing in spacing_strategy()
    ) {
        let range = compute_range(tick, width, spacing).unwrap();
        prop_assert_eq!(range.width_in_ticks(), (2 * width as i32 + 1) * spacing);
    }

    /// Property: widths at or above the bound always fail
    #[test]
    fn prop_too_wide_always_rejected(
        tick in any::<i32>(),
        width in MAX_WIDTH..=u32::MAX,
        spacing in any::<i32>()
    ) {
        prop_assert_eq!(compute_range(tick, width, spacing), Err(RangeError::RangeTooWide));
    }
}
