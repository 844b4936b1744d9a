// Property-Based Testing with Proptest
// Run with: cargo test -p rangekeeper-rebalance --test test_proptest

use rangekeeper_rebalance::*;
use rangekeeper_math::get_sqrt_ratio_at_tick;
use rangekeeper_range::compute_range;
use rangekeeper_ratio::{deviation_bps, solve_required_ratio};
use soroban_sdk::Env;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: a planned swap never sells more than is held and
    /// never leaves the pair further from the ratio than it started
    #[test]
    fn prop_rebalance_converges(
        tick in -200_000i32..200_000,
        width in 1u32..300,
        amount0 in 0u128..(1u128 << 80),
        amount1 in 0u128..(1u128 << 80),
        fee_bps in prop_oneof![Just(5u32), Just(30u32), Just(100u32)]
    ) {
        let env = Env::default();
        let price = get_sqrt_ratio_at_tick(tick).unwrap();
        let range = compute_range(tick, width, 60).unwrap();
        let ratio = solve_required_ratio(&env, price, &range).unwrap();
        let params = RebalanceParams { fee_bps, tolerance_bps: 50, slippage_bps: 100 };

        let plan = plan_rebalance(&env, amount0, amount1, &ratio, price, &params).unwrap();
        if !plan.is_needed {
            return Ok(());
        }

        let available = if plan.zero_for_one { amount0 } else { amount1 };
        prop_assert!(plan.amount_in <= available);
        prop_assert!(plan.min_amount_out <= plan.expected_out);

        let out = apply_haircut(&env, plan.expected_out, fee_bps).unwrap();
        let (after0, after1) = apply_plan(&plan, amount0, amount1, out).unwrap();
        let after = deviation_bps(&env, &ratio, after0, after1).unwrap();
        prop_assert!(after <= plan.deviation_bps);
    }
}
