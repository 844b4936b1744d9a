mod common;

use soroban_sdk::Env;
use rangekeeper_manager::ManagerError;
use rangekeeper_math::Q96;
use rangekeeper_pool::{SpotPool, SpotPoolClient};
use common::*;

// ============================================================
// INPUTS
// ============================================================

#[test]
#[should_panic(expected = "Error(Contract, #12)")]
fn test_width_at_limit_rejected() {
    let env = Env::default();
    let s = setup(&env);
    let amount = units(1, DECIMALS_A);
    s.approve(&s.token_a, amount);

    s.manager.add_liquidity(&s.user, &s.pool_ab.address, &amount, &0, &10_000);
}

#[test]
fn test_zero_amounts_rejected() {
    let env = Env::default();
    let s = setup(&env);

    let result = s.manager.try_add_liquidity(&s.user, &s.pool_ab.address, &0, &0, &100);
    assert_eq!(result, Err(Ok(ManagerError::ZeroAmounts)));
}

#[test]
fn test_negative_amount_rejected() {
    let env = Env::default();
    let s = setup(&env);

    let result = s
        .manager
        .try_add_liquidity(&s.user, &s.pool_ab.address, &-1, &units(1, DECIMALS_B), &100);
    assert_eq!(result, Err(Ok(ManagerError::InvalidAmount)));
}

// ============================================================
// CALLER FUNDS
// ============================================================

#[test]
fn test_insufficient_balance_leaves_balances_untouched() {
    let env = Env::default();
    let s = setup(&env);

    let amount_a = units(10_000, DECIMALS_A);
    let amount_b = units(10, DECIMALS_B);
    s.approve(&s.token_a, amount_a);
    s.approve(&s.token_b, amount_b);

    let start_a = balance(&env, &s.token_a, &s.user);
    let start_b = balance(&env, &s.token_b, &s.user);

    let result = s
        .manager
        .try_add_liquidity(&s.user, &s.pool_ab.address, &amount_a, &amount_b, &100);
    assert_eq!(result, Err(Ok(ManagerError::InsufficientBalance)));

    assert_eq!(balance(&env, &s.token_a, &s.user), start_a);
    assert_eq!(balance(&env, &s.token_b, &s.user), start_b);
    s.assert_manager_empty();
}

#[test]
fn test_missing_approval_rejected() {
    let env = Env::default();
    let s = setup(&env);

    let amount_a = units(10, DECIMALS_A);
    let amount_b = units(10, DECIMALS_B);
    s.approve(&s.token_b, amount_b);

    let result = s
        .manager
        .try_add_liquidity(&s.user, &s.pool_ab.address, &amount_a, &amount_b, &100);
    assert_eq!(result, Err(Ok(ManagerError::InsufficientApproval)));
}

#[test]
fn test_short_approval_rejected() {
    let env = Env::default();
    let s = setup(&env);

    let amount_a = units(10, DECIMALS_A);
    s.approve(&s.token_a, amount_a - 1);

    let result = s
        .manager
        .try_add_liquidity(&s.user, &s.pool_ab.address, &amount_a, &0, &100);
    assert_eq!(result, Err(Ok(ManagerError::InsufficientApproval)));
}

#[test]
fn test_unused_leg_needs_no_approval() {
    let env = Env::default();
    let s = setup(&env);

    let amount_b = units(10, DECIMALS_B);
    s.approve(&s.token_b, amount_b);

    let receipt = s
        .manager
        .add_liquidity(&s.user, &s.pool_ab.address, &0, &amount_b, &100);
    assert!(receipt.swapped);
    assert!(receipt.liquidity > 0);
}

// ============================================================
// POOL AND PRICE
// ============================================================

#[test]
fn test_zero_price_is_stale() {
    let env = Env::default();
    let s = setup(&env);
    s.pool_ab.set_sqrt_price(&0);

    let amount_a = units(10, DECIMALS_A);
    s.approve(&s.token_a, amount_a);

    let result = s
        .manager
        .try_add_liquidity(&s.user, &s.pool_ab.address, &amount_a, &0, &100);
    assert_eq!(result, Err(Ok(ManagerError::StalePrice)));
    s.assert_manager_empty();
}

#[test]
fn test_price_beyond_tick_bounds_is_stale() {
    let env = Env::default();
    let s = setup(&env);
    s.pool_ab.set_sqrt_price(&u128::MAX);

    let amount_a = units(10, DECIMALS_A);
    s.approve(&s.token_a, amount_a);

    let result = s
        .manager
        .try_add_liquidity(&s.user, &s.pool_ab.address, &amount_a, &0, &100);
    assert_eq!(result, Err(Ok(ManagerError::StalePrice)));
}

#[test]
fn test_non_pool_address_rejected() {
    let env = Env::default();
    let s = setup(&env);

    // A token is a contract, but not a pool
    let result = s.manager.try_add_liquidity(&s.user, &s.token_a, &1, &1, &100);
    assert_eq!(result, Err(Ok(ManagerError::InvalidPool)));
}

#[test]
fn test_token_with_too_many_decimals_rejected() {
    let env = Env::default();
    let s = setup(&env);

    let wide = create_token(&env, &s.admin, 40, "WIDE");
    let pool_id = env.register(SpotPool, ());
    let pool = SpotPoolClient::new(&env, &pool_id);
    pool.initialize(&s.admin, &s.token_a, &wide, &FEE_BPS, &TICK_SPACING, &Q96);

    token(&env, &wide).mint(&s.user, &1_000);
    let amount_a = units(1, DECIMALS_A);
    s.approve(&s.token_a, amount_a);
    s.approve(&wide, 1_000);

    let result = s
        .manager
        .try_add_liquidity(&s.user, &pool_id, &amount_a, &1_000, &100);
    assert_eq!(result, Err(Ok(ManagerError::InvalidDecimals)));
}

// ============================================================
// EXECUTION
// ============================================================

#[test]
fn test_swap_below_minimum_reverts() {
    let env = Env::default();
    let s = setup(&env);
    s.set_price(&s.pool_ab, DECIMALS_A, DECIMALS_B, 200);
    // Fills 2% worse than spot; the manager accepts 1%
    s.pool_ab.set_execution_haircut(&200);

    let amount_a = units(10, DECIMALS_A);
    s.approve(&s.token_a, amount_a);
    let start_a = balance(&env, &s.token_a, &s.user);

    let result = s
        .manager
        .try_add_liquidity(&s.user, &s.pool_ab.address, &amount_a, &0, &200);
    assert_eq!(result, Err(Ok(ManagerError::SwapSlippage)));

    assert_eq!(balance(&env, &s.token_a, &s.user), start_a);
    s.assert_manager_empty();
}

#[test]
fn test_wider_slippage_accepts_worse_fill() {
    let env = Env::default();
    let s = setup(&env);
    s.set_price(&s.pool_ab, DECIMALS_A, DECIMALS_B, 200);
    s.pool_ab.set_execution_haircut(&200);
    s.manager.set_params(&300, &TOLERANCE_BPS);

    let amount_a = units(10, DECIMALS_A);
    s.approve(&s.token_a, amount_a);

    let receipt = s
        .manager
        .add_liquidity(&s.user, &s.pool_ab.address, &amount_a, &0, &200);
    assert!(receipt.swapped);
    assert!(receipt.liquidity > 0);
    s.assert_manager_empty();
}

#[test]
fn test_dust_deposit_mints_nothing() {
    let env = Env::default();
    let s = setup(&env);
    s.approve(&s.token_a, 1);

    let result = s
        .manager
        .try_add_liquidity(&s.user, &s.pool_ab.address, &1, &0, &100);
    assert_eq!(result, Err(Ok(ManagerError::MintBelowMinimum)));
    assert_eq!(s.registry.positions_count(), 0);
}

#[test]
fn test_uninitialized_manager_rejects_deposits() {
    let env = Env::default();
    let s = setup(&env);

    let manager_id = env.register(rangekeeper_manager::LiquidityManager, ());
    let manager = rangekeeper_manager::LiquidityManagerClient::new(&env, &manager_id);

    let result = manager.try_add_liquidity(&s.user, &s.pool_ab.address, &1, &1, &100);
    assert_eq!(result, Err(Ok(ManagerError::NotInitialized)));
}
