mod common;

use soroban_sdk::{testutils::Address as _, Address, Env};
use rangekeeper_manager::{LiquidityManager, LiquidityManagerClient, ManagerConfig, ManagerError};
use common::*;

// ============================================================
// INITIALIZATION
// ============================================================

#[test]
fn test_initialize_stores_config() {
    let env = Env::default();
    let s = setup(&env);

    assert!(s.manager.is_initialized());
    assert_eq!(
        s.manager.get_config(),
        ManagerConfig {
            admin: s.admin.clone(),
            position_manager: s.registry.address.clone(),
            slippage_bps: SLIPPAGE_BPS,
            rebalance_tolerance_bps: TOLERANCE_BPS,
        }
    );
}

#[test]
fn test_initialize_twice_fails() {
    let env = Env::default();
    let s = setup(&env);

    let result = s
        .manager
        .try_initialize(&s.admin, &s.registry.address, &SLIPPAGE_BPS, &TOLERANCE_BPS);
    assert_eq!(result, Err(Ok(ManagerError::AlreadyInitialized)));
}

#[test]
fn test_initialize_rejects_out_of_bounds_params() {
    let env = Env::default();
    env.mock_all_auths();

    let manager = LiquidityManagerClient::new(&env, &env.register(LiquidityManager, ()));
    let admin = Address::generate(&env);
    let registry = Address::generate(&env);

    let result = manager.try_initialize(&admin, &registry, &1_001, &TOLERANCE_BPS);
    assert_eq!(result, Err(Ok(ManagerError::InvalidConfig)));
    let result = manager.try_initialize(&admin, &registry, &SLIPPAGE_BPS, &1_001);
    assert_eq!(result, Err(Ok(ManagerError::InvalidConfig)));
    assert!(!manager.is_initialized());

    manager.initialize(&admin, &registry, &1_000, &1_000);
    assert!(manager.is_initialized());
}

#[test]
fn test_get_config_before_initialize() {
    let env = Env::default();
    let manager = LiquidityManagerClient::new(&env, &env.register(LiquidityManager, ()));

    assert!(!manager.is_initialized());
    assert_eq!(manager.try_get_config(), Err(Ok(ManagerError::NotInitialized)));
}

// ============================================================
// ADMIN SETTERS
// ============================================================

#[test]
fn test_set_params() {
    let env = Env::default();
    let s = setup(&env);

    s.manager.set_params(&250, &0);
    let config = s.manager.get_config();
    assert_eq!(config.slippage_bps, 250);
    assert_eq!(config.rebalance_tolerance_bps, 0);

    assert_eq!(s.manager.try_set_params(&5_000, &0), Err(Ok(ManagerError::InvalidConfig)));
}

#[test]
fn test_set_position_manager() {
    let env = Env::default();
    let s = setup(&env);

    let replacement = Address::generate(&env);
    s.manager.set_position_manager(&replacement);
    assert_eq!(s.manager.get_config().position_manager, replacement);
}

#[test]
fn test_transfer_admin() {
    let env = Env::default();
    let s = setup(&env);

    let new_admin = Address::generate(&env);
    s.manager.transfer_admin(&new_admin);
    assert_eq!(s.manager.get_config().admin, new_admin);
}

#[test]
#[should_panic]
fn test_set_params_requires_admin_auth() {
    let env = Env::default();
    let s = setup(&env);

    env.set_auths(&[]);
    s.manager.set_params(&200, &10);
}

#[test]
#[should_panic]
fn test_add_liquidity_requires_caller_auth() {
    let env = Env::default();
    let s = setup(&env);
    let amount = units(1, DECIMALS_A);
    s.approve(&s.token_a, amount);

    env.set_auths(&[]);
    s.manager.add_liquidity(&s.user, &s.pool_ab.address, &amount, &0, &100);
}
