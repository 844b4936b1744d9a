// Required ratio for a range at the current price

use soroban_sdk::{Env, U256};
use rangekeeper_math::{
    constants::{BPS_DENOMINATOR, Q96, REFERENCE_LIQUIDITY},
    get_amounts_for_liquidity, get_sqrt_ratio_at_tick, mul_div_u256, u256_to_u128, MathError,
};
use rangekeeper_range::TickRange;
use crate::types::RequiredRatio;

/// Value `amount` of one token in the other at the spot price.
///
/// zero_for_one: token0 -> token1, amount * P where P = (sqrt_price / 2^96)^2
/// otherwise:    token1 -> token0, amount / P
pub fn quote_at_price(
    env: &Env,
    amount: u128,
    sqrt_price_x96: u128,
    zero_for_one: bool,
) -> Result<u128, MathError> {
    if sqrt_price_x96 == 0 {
        return Err(MathError::DivisionByZero);
    }

    let amount_256 = U256::from_u128(env, amount);
    let quoted = if zero_for_one {
        let step = mul_div_u256(env, &amount_256, sqrt_price_x96, Q96, false)?;
        mul_div_u256(env, &step, sqrt_price_x96, Q96, false)?
    } else {
        let step = mul_div_u256(env, &amount_256, Q96, sqrt_price_x96, false)?;
        mul_div_u256(env, &step, Q96, sqrt_price_x96, false)?
    };

    u256_to_u128(&quoted)
}

/// Token0:token1 proportion needed to add liquidity across `range` at `sqrt_price_x96`.
///
/// At or below the lower bound only token0 is needed; at or above the upper
/// bound only token1. Legs are rounded up so an in-range leg never reads zero.
pub fn solve_required_ratio(
    env: &Env,
    sqrt_price_x96: u128,
    range: &TickRange,
) -> Result<RequiredRatio, MathError> {
    let sqrt_lower = get_sqrt_ratio_at_tick(range.tick_lower)?;
    let sqrt_upper = get_sqrt_ratio_at_tick(range.tick_upper)?;

    let (ratio0, ratio1) = get_amounts_for_liquidity(
        env,
        sqrt_price_x96,
        sqrt_lower,
        sqrt_upper,
        REFERENCE_LIQUIDITY,
        true,
    )?;

    Ok(RequiredRatio {
        ratio0,
        ratio1,
        ratio0_value: quote_at_price(env, ratio0, sqrt_price_x96, true)?,
    })
}

/// Cross products (amount0 * ratio1, amount1 * ratio0); equal when the pair
/// matches the ratio exactly.
pub fn cross_products(
    env: &Env,
    ratio: &RequiredRatio,
    amount0: u128,
    amount1: u128,
) -> (U256, U256) {
    (
        U256::from_u128(env, amount0).mul(&U256::from_u128(env, ratio.ratio1)),
        U256::from_u128(env, amount1).mul(&U256::from_u128(env, ratio.ratio0)),
    )
}

/// Relative distance between the supplied pair and the ratio, in basis points.
/// 0 means the pair already matches; 10000 means it is entirely on the wrong side.
pub fn deviation_bps(
    env: &Env,
    ratio: &RequiredRatio,
    amount0: u128,
    amount1: u128,
) -> Result<u32, MathError> {
    let (lhs, rhs) = cross_products(env, ratio, amount0, amount1);
    if lhs == rhs {
        return Ok(0);
    }

    let (high, low) = if lhs > rhs { (lhs, rhs) } else { (rhs, lhs) };
    let scaled = high
        .sub(&low)
        .mul(&U256::from_u128(env, BPS_DENOMINATOR))
        .div(&high);

    let bps = u256_to_u128(&scaled)?;
    u32::try_from(bps).map_err(|_| MathError::Overflow)
}

/// True when the supplied pair holds more token0 than the ratio calls for
pub fn has_excess_token0(env: &Env, ratio: &RequiredRatio, amount0: u128, amount1: u128) -> bool {
    let (lhs, rhs) = cross_products(env, ratio, amount0, amount1);
    lhs > rhs
}
