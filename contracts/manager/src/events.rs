//! Manager events

use soroban_sdk::{Address, Env, Symbol};

use crate::types::ManagerConfig;

/// Emitted when the manager is initialized
pub fn emit_initialized(env: &Env, config: &ManagerConfig) {
    env.events().publish(
        (Symbol::new(env, "Initialized"),),
        (
            config.admin.clone(),
            config.position_manager.clone(),
            config.slippage_bps,
            config.rebalance_tolerance_bps,
        ),
    );
}

pub fn emit_params_updated(env: &Env, slippage_bps: u32, rebalance_tolerance_bps: u32) {
    env.events().publish(
        (Symbol::new(env, "ParamsUpdated"),),
        (slippage_bps, rebalance_tolerance_bps),
    );
}

pub fn emit_position_manager_updated(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (Symbol::new(env, "PositionManagerUpdated"),),
        (old.clone(), new.clone()),
    );
}

pub fn emit_admin_transferred(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminTransferred"),),
        (old.clone(), new.clone()),
    );
}

/// Emitted once per executed rebalancing swap
pub fn emit_rebalanced(
    env: &Env,
    caller: &Address,
    pool: &Address,
    zero_for_one: bool,
    amount_in: i128,
    amount_out: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Rebalanced"), caller.clone()),
        (pool.clone(), zero_for_one, amount_in, amount_out),
    );
}

/// Emitted once per successful `add_liquidity`; amounts in (token_a, token_b) order
pub fn emit_liquidity_added(
    env: &Env,
    caller: &Address,
    pool: &Address,
    tick_lower: i32,
    tick_upper: i32,
    liquidity: u128,
    amount_a: i128,
    amount_b: i128,
    token_id: u64,
) {
    env.events().publish(
        (Symbol::new(env, "LiquidityAdded"), caller.clone()),
        (
            pool.clone(),
            tick_lower,
            tick_upper,
            liquidity,
            amount_a,
            amount_b,
            token_id,
        ),
    );
}
