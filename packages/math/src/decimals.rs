// SPDX-License-Identifier: MIT
// Decimal normalization between tokens of different precision

use soroban_sdk::{Env, U256};
use crate::constants::MAX_DECIMALS;
use crate::error::MathError;
use crate::full_math::{mul_div_u256, sqrt_u256, u256_to_u128};
use crate::tick_math::is_valid_sqrt_price;

/// Two amounts expressed at the same decimal precision.
///
/// Held in 256 bits: a u128 amount times 10^38 always fits.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NormalizedPair {
    pub amount_a: U256,
    pub amount_b: U256,
    pub decimals: u32,
}

/// Reject decimal counts whose scaling factor would not fit in a u128
#[inline]
pub fn validate_decimals(decimals: u32) -> Result<u32, MathError> {
    if decimals > MAX_DECIMALS {
        return Err(MathError::InvalidDecimals);
    }
    Ok(decimals)
}

/// 10^decimals
pub fn pow10(decimals: u32) -> Result<u128, MathError> {
    validate_decimals(decimals)?;
    Ok(10u128.pow(decimals))
}

/// Rescale `amount` from `from` decimals up to `to` decimals (to >= from)
pub fn scale_up(env: &Env, amount: u128, from: u32, to: u32) -> Result<U256, MathError> {
    validate_decimals(from)?;
    validate_decimals(to)?;
    if to < from {
        return Err(MathError::InvalidDecimals);
    }
    Ok(U256::from_u128(env, amount).mul(&U256::from_u128(env, pow10(to - from)?)))
}

/// Bring two amounts to the larger of their two precisions.
/// Only the lower-precision side is multiplied, so no unit is lost.
/// Fails only on decimal counts above MAX_DECIMALS.
pub fn normalize_pair(
    env: &Env,
    amount_a: u128,
    decimals_a: u32,
    amount_b: u128,
    decimals_b: u32,
) -> Result<NormalizedPair, MathError> {
    let decimals = validate_decimals(decimals_a)?.max(validate_decimals(decimals_b)?);

    Ok(NormalizedPair {
        amount_a: scale_up(env, amount_a, decimals_a, decimals)?,
        amount_b: scale_up(env, amount_b, decimals_b, decimals)?,
        decimals,
    })
}

/// Q64.96 sqrt price for a human price of token1 per token0.
///
/// The price is the rational `price_num / price_den` in whole-token units;
/// raw price = price * 10^decimals1 / 10^decimals0.
pub fn sqrt_price_from_price(
    env: &Env,
    price_num: u128,
    price_den: u128,
    decimals0: u32,
    decimals1: u32,
) -> Result<u128, MathError> {
    if price_den == 0 {
        return Err(MathError::DivisionByZero);
    }
    if price_num == 0 {
        return Err(MathError::PriceOutOfRange);
    }

    let raw_num = price_num
        .checked_mul(pow10(decimals1)?)
        .ok_or(MathError::Overflow)?;
    let raw_den = price_den
        .checked_mul(pow10(decimals0)?)
        .ok_or(MathError::Overflow)?;

    // Keep the shifted numerator inside 256 bits: Q192 when it fits, Q128 otherwise
    let (shift, post_shift) = if raw_num >> 64 == 0 { (192, 0) } else { (128, 32) };

    let ratio = U256::from_u128(env, raw_num)
        .shl(shift)
        .div(&U256::from_u128(env, raw_den));
    let root = sqrt_u256(env, &ratio).shl(post_shift);

    let sqrt_price = u256_to_u128(&root)?;
    if !is_valid_sqrt_price(sqrt_price) {
        return Err(MathError::PriceOutOfRange);
    }
    Ok(sqrt_price)
}

/// Human price of token1 per token0 multiplied by `scale`
pub fn price_from_sqrt_price(
    env: &Env,
    sqrt_price_x96: u128,
    decimals0: u32,
    decimals1: u32,
    scale: u128,
) -> Result<u128, MathError> {
    let factor = pow10(decimals0)?
        .checked_mul(scale)
        .ok_or(MathError::Overflow)?;

    // price_x192 >> 64 keeps 128 fractional bits
    let price_x128 = U256::from_u128(env, sqrt_price_x96)
        .mul(&U256::from_u128(env, sqrt_price_x96))
        .shr(64);
    let scaled = mul_div_u256(env, &price_x128, factor, pow10(decimals1)?, false)?;

    u256_to_u128(&scaled.shr(128))
}
