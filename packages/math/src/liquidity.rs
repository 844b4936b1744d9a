// SPDX-License-Identifier: MIT
// Liquidity Calculations (Q64.96)

use soroban_sdk::{Env, U256};
use crate::constants::{Q96, RESOLUTION};
use crate::error::MathError;
use crate::full_math::{div_u256, mul_div, mul_div_rounding_up, mul_div_u256, u256_to_u128};

#[inline]
fn sorted(a: u128, b: u128) -> (u128, u128) {
    if a < b { (a, b) } else { (b, a) }
}

/// Calculate token0 amount for a liquidity and price range
/// amount0 = L * 2^96 * (sqrt_upper - sqrt_lower) / sqrt_upper / sqrt_lower
pub fn get_amount_0_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    if sqrt_lower == 0 {
        return Err(MathError::DivisionByZero);
    }

    let numerator = U256::from_u128(env, liquidity).shl(RESOLUTION);
    let scaled = mul_div_u256(env, &numerator, sqrt_upper - sqrt_lower, sqrt_upper, round_up)?;
    div_u256(env, &scaled, sqrt_lower, round_up)
}

/// Calculate token1 amount for a liquidity and price range
/// amount1 = L * (sqrt_upper - sqrt_lower) / 2^96
pub fn get_amount_1_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);

    if round_up {
        mul_div_rounding_up(env, liquidity, sqrt_upper - sqrt_lower, Q96)
    } else {
        mul_div(env, liquidity, sqrt_upper - sqrt_lower, Q96)
    }
}

/// Calculate liquidity from token0 amount
/// L = amount0 * sqrt_lower * sqrt_upper / 2^96 / (sqrt_upper - sqrt_lower)
pub fn get_liquidity_for_amount0(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    amount0: u128,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    if sqrt_lower == sqrt_upper || amount0 == 0 {
        return Ok(0);
    }

    let intermediate = mul_div_u256(env, &U256::from_u128(env, sqrt_lower), sqrt_upper, Q96, false)?;
    let liquidity = mul_div_u256(env, &intermediate, amount0, sqrt_upper - sqrt_lower, false)?;
    u256_to_u128(&liquidity)
}

/// Calculate liquidity from token1 amount
/// L = amount1 * 2^96 / (sqrt_upper - sqrt_lower)
pub fn get_liquidity_for_amount1(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    amount1: u128,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    if sqrt_lower == sqrt_upper || amount1 == 0 {
        return Ok(0);
    }

    mul_div(env, amount1, Q96, sqrt_upper - sqrt_lower)
}

/// Maximum liquidity the given amounts can back across [sqrt_price_a, sqrt_price_b]
/// at the current price
pub fn get_liquidity_for_amounts(
    env: &Env,
    sqrt_price_current: u128,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    amount0: u128,
    amount1: u128,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);

    if sqrt_price_current <= sqrt_lower {
        // Current price below range - token0 only
        get_liquidity_for_amount0(env, sqrt_lower, sqrt_upper, amount0)
    } else if sqrt_price_current < sqrt_upper {
        // Current price in range - both tokens, the scarcer side binds
        let liquidity0 = get_liquidity_for_amount0(env, sqrt_price_current, sqrt_upper, amount0)?;
        let liquidity1 = get_liquidity_for_amount1(env, sqrt_lower, sqrt_price_current, amount1)?;
        Ok(liquidity0.min(liquidity1))
    } else {
        // Current price above range - token1 only
        get_liquidity_for_amount1(env, sqrt_lower, sqrt_upper, amount1)
    }
}

/// Token amounts represented by `liquidity` across [sqrt_price_a, sqrt_price_b]
/// at the current price
pub fn get_amounts_for_liquidity(
    env: &Env,
    sqrt_price_current: u128,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<(u128, u128), MathError> {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);

    if sqrt_price_current <= sqrt_lower {
        let amount0 = get_amount_0_delta(env, sqrt_lower, sqrt_upper, liquidity, round_up)?;
        Ok((amount0, 0))
    } else if sqrt_price_current < sqrt_upper {
        let amount0 = get_amount_0_delta(env, sqrt_price_current, sqrt_upper, liquidity, round_up)?;
        let amount1 = get_amount_1_delta(env, sqrt_lower, sqrt_price_current, liquidity, round_up)?;
        Ok((amount0, amount1))
    } else {
        let amount1 = get_amount_1_delta(env, sqrt_lower, sqrt_upper, liquidity, round_up)?;
        Ok((0, amount1))
    }
}
