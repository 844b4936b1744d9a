//! Position submission to the registry

use soroban_sdk::{token, vec, Address, Env, IntoVal, Symbol, Val};
use rangekeeper_math::{
    constants::BPS_DENOMINATOR, get_amounts_for_liquidity, get_liquidity_for_amounts,
    get_sqrt_ratio_at_tick, mul_div, u128_to_i128_checked,
};
use rangekeeper_range::TickRange;

use crate::error::ManagerError;
use crate::pool::APPROVAL_LEDGERS;
use crate::types::{MintParams, MintResult, PoolConfig};

/// Liquidity and amounts the registry is expected to consume
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MintQuote {
    pub liquidity: u128,
    pub amount0: u128,
    pub amount1: u128,
    pub amount0_min: u128,
    pub amount1_min: u128,
}

/// Quote the mint of (amount0, amount1) into `range` at `sqrt_price_x96`
pub fn quote_mint(
    env: &Env,
    sqrt_price_x96: u128,
    range: &TickRange,
    amount0: u128,
    amount1: u128,
    slippage_bps: u32,
) -> Result<MintQuote, ManagerError> {
    let sqrt_lower = get_sqrt_ratio_at_tick(range.tick_lower)?;
    let sqrt_upper = get_sqrt_ratio_at_tick(range.tick_upper)?;

    let liquidity =
        get_liquidity_for_amounts(env, sqrt_price_x96, sqrt_lower, sqrt_upper, amount0, amount1)?;
    let (expected0, expected1) =
        get_amounts_for_liquidity(env, sqrt_price_x96, sqrt_lower, sqrt_upper, liquidity, false)?;

    let keep = BPS_DENOMINATOR - slippage_bps as u128;
    Ok(MintQuote {
        liquidity,
        amount0: expected0,
        amount1: expected1,
        amount0_min: mul_div(env, expected0, keep, BPS_DENOMINATOR)?,
        amount1_min: mul_div(env, expected1, keep, BPS_DENOMINATOR)?,
    })
}

/// Submit the mint and re-validate what the registry reports.
///
/// `desired` amounts are what the manager holds; the registry is approved
/// for exactly those and the approvals are cleared before returning.
pub fn submit_mint(
    env: &Env,
    position_manager: &Address,
    pool: &Address,
    config: &PoolConfig,
    recipient: &Address,
    range: &TickRange,
    desired0: u128,
    desired1: u128,
    quote: &MintQuote,
) -> Result<MintResult, ManagerError> {
    if quote.liquidity == 0 {
        return Err(ManagerError::MintBelowMinimum);
    }

    let manager = env.current_contract_address();
    let desired0 = u128_to_i128_checked(desired0)?;
    let desired1 = u128_to_i128_checked(desired1)?;
    let params = MintParams {
        pool: pool.clone(),
        recipient: recipient.clone(),
        tick_lower: range.tick_lower,
        tick_upper: range.tick_upper,
        amount0_desired: desired0,
        amount1_desired: desired1,
        amount0_min: u128_to_i128_checked(quote.amount0_min)?,
        amount1_min: u128_to_i128_checked(quote.amount1_min)?,
    };

    let client0 = token::Client::new(env, &config.token0);
    let client1 = token::Client::new(env, &config.token1);
    let sequence = env.ledger().sequence();
    client0.approve(&manager, position_manager, &desired0, &(sequence + APPROVAL_LEDGERS));
    client1.approve(&manager, position_manager, &desired1, &(sequence + APPROVAL_LEDGERS));

    let args: soroban_sdk::Vec<Val> = vec![env, manager.clone().into_val(env), params.into_val(env)];
    let result = env
        .try_invoke_contract::<MintResult, soroban_sdk::Error>(
            position_manager,
            &Symbol::new(env, "mint_or_increase"),
            args,
        )
        .ok()
        .and_then(|inner| inner.ok());

    client0.approve(&manager, position_manager, &0, &sequence);
    client1.approve(&manager, position_manager, &0, &sequence);

    let result = result.ok_or(ManagerError::MintBelowMinimum)?;
    if result.liquidity == 0
        || result.amount0 < params.amount0_min
        || result.amount1 < params.amount1_min
        || result.amount0 > desired0
        || result.amount1 > desired1
    {
        return Err(ManagerError::MintBelowMinimum);
    }
    Ok(result)
}
