//! Pool reads and rebalancing swap execution

use soroban_sdk::{token, vec, Address, Env, IntoVal, Symbol, Val};
use rangekeeper_math::{get_tick_at_sqrt_ratio, is_valid_sqrt_price, u128_to_i128_checked, MAX_FEE_BPS};
use rangekeeper_rebalance::RebalancePlan;

use crate::error::ManagerError;
use crate::types::{PoolConfig, PoolState, SwapResult};

/// Ledgers an exact approval stays live; it is reset before the call returns
pub const APPROVAL_LEDGERS: u32 = 100;

/// Price snapshot taken once per invocation
#[derive(Clone, Copy, Debug)]
pub struct PriceReading {
    pub sqrt_price_x96: u128,
    pub tick: i32,
}

/// Read and sanity-check the pool's token and spacing report
pub fn read_pool_config(env: &Env, pool: &Address) -> Result<PoolConfig, ManagerError> {
    let config = env
        .try_invoke_contract::<PoolConfig, soroban_sdk::Error>(
            pool,
            &Symbol::new(env, "get_pool_config"),
            vec![env],
        )
        .ok()
        .and_then(|inner| inner.ok())
        .ok_or(ManagerError::InvalidPool)?;

    let ordered = config.token0 < config.token1;
    let same_pair = (config.token_a == config.token0 && config.token_b == config.token1)
        || (config.token_a == config.token1 && config.token_b == config.token0);
    if !ordered || !same_pair || config.tick_spacing <= 0 || config.fee_bps >= MAX_FEE_BPS {
        return Err(ManagerError::InvalidPool);
    }
    Ok(config)
}

/// Read the pool price and derive the tick from it.
///
/// The tick the pool reports is ignored.
pub fn read_price(env: &Env, pool: &Address) -> Result<PriceReading, ManagerError> {
    let state = env
        .try_invoke_contract::<PoolState, soroban_sdk::Error>(
            pool,
            &Symbol::new(env, "get_pool_state"),
            vec![env],
        )
        .ok()
        .and_then(|inner| inner.ok())
        .ok_or(ManagerError::StalePrice)?;

    if !is_valid_sqrt_price(state.sqrt_price_x96) {
        return Err(ManagerError::StalePrice);
    }
    let tick = get_tick_at_sqrt_ratio(state.sqrt_price_x96).map_err(|_| ManagerError::StalePrice)?;

    Ok(PriceReading {
        sqrt_price_x96: state.sqrt_price_x96,
        tick,
    })
}

/// Execute `plan` against the pool and return the output actually received.
///
/// The pool is approved for exactly `plan.amount_in` and the approval is
/// cleared afterwards. A failed call, a partial fill, or an output below
/// `plan.min_amount_out` is a `SwapSlippage`.
pub fn execute_swap(
    env: &Env,
    pool: &Address,
    config: &PoolConfig,
    plan: &RebalancePlan,
) -> Result<u128, ManagerError> {
    let manager = env.current_contract_address();
    let (token_in, token_out) = if plan.zero_for_one {
        (&config.token0, &config.token1)
    } else {
        (&config.token1, &config.token0)
    };
    let amount_in = u128_to_i128_checked(plan.amount_in)?;
    let amount_out_min = u128_to_i128_checked(plan.min_amount_out)?;

    let in_client = token::Client::new(env, token_in);
    let out_client = token::Client::new(env, token_out);
    let in_before = in_client.balance(&manager);
    let out_before = out_client.balance(&manager);

    let sequence = env.ledger().sequence();
    in_client.approve(&manager, pool, &amount_in, &(sequence + APPROVAL_LEDGERS));

    let args: soroban_sdk::Vec<Val> = vec![
        env,
        manager.clone().into_val(env),
        token_in.clone().into_val(env),
        amount_in.into_val(env),
        amount_out_min.into_val(env),
    ];
    let result = env
        .try_invoke_contract::<SwapResult, soroban_sdk::Error>(pool, &Symbol::new(env, "swap"), args)
        .ok()
        .and_then(|inner| inner.ok());

    in_client.approve(&manager, pool, &0, &sequence);

    let result = result.ok_or(ManagerError::SwapSlippage)?;
    if result.amount_in != amount_in || result.amount_out < amount_out_min {
        return Err(ManagerError::SwapSlippage);
    }

    // Cross-check the reported fill against actual balances
    let spent = in_before - in_client.balance(&manager);
    let received = out_client.balance(&manager) - out_before;
    if spent != amount_in || received < amount_out_min {
        return Err(ManagerError::SwapSlippage);
    }

    Ok(received as u128)
}
