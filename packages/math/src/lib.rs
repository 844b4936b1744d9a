// RangeKeeper Math Package

#![no_std]

pub mod constants;
pub mod decimals;
pub mod error;
pub mod full_math;
pub mod liquidity;
pub mod tick_math;

pub use constants::*;
pub use error::MathError;

pub use full_math::{
    div_round_up,
    div_u256,
    i128_to_u128_safe,
    mul_div,
    mul_div_rounding_up,
    mul_div_u256,
    sqrt_u256,
    u128_to_i128_checked,
    u256_max,
    u256_to_u128,
};

pub use tick_math::{get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, is_valid_sqrt_price};

pub use liquidity::{
    get_amount_0_delta,
    get_amount_1_delta,
    get_amounts_for_liquidity,
    get_liquidity_for_amount0,
    get_liquidity_for_amount1,
    get_liquidity_for_amounts,
};

pub use decimals::{
    normalize_pair,
    pow10,
    price_from_sqrt_price,
    scale_up,
    sqrt_price_from_price,
    validate_decimals,
    NormalizedPair,
};

/// Round a tick down to the nearest multiple of `spacing` (toward negative infinity)
pub fn snap_tick_to_spacing(tick: i32, spacing: i32) -> Result<i32, MathError> {
    if spacing <= 0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(tick - tick.rem_euclid(spacing))
}
