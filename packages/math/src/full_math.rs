// SPDX-License-Identifier: MIT
// 256-bit intermediate arithmetic for Q64.96 values

use soroban_sdk::{Env, U256};
use crate::error::MathError;

/// Type conversion helpers
#[inline]
pub fn i128_to_u128_safe(x: i128) -> u128 {
    if x <= 0 { 0 } else { x as u128 }
}

#[inline]
pub fn u128_to_i128_checked(x: u128) -> Result<i128, MathError> {
    i128::try_from(x).map_err(|_| MathError::Overflow)
}

#[inline]
pub fn u256_to_u128(x: &U256) -> Result<u128, MathError> {
    x.to_u128().ok_or(MathError::Overflow)
}

/// Largest value representable in a U256
pub fn u256_max(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

/// Calculates floor(a * b / denominator) with a 256-bit product
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    u256_to_u128(&product.div(&U256::from_u128(env, denominator)))
}

/// Calculates ceil(a * b / denominator) with a 256-bit product
pub fn mul_div_rounding_up(
    env: &Env,
    a: u128,
    b: u128,
    denominator: u128,
) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let den = U256::from_u128(env, denominator);
    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = u256_to_u128(&product.div(&den))?;

    if product.rem_euclid(&den) != U256::from_u32(env, 0) {
        result.checked_add(1).ok_or(MathError::Overflow)
    } else {
        Ok(result)
    }
}

/// Calculates a * b / denominator where `a` is already a 256-bit value.
///
/// The quotient is split as (a / d) * b + (a % d) * b / d so that no
/// intermediate exceeds 256 bits whenever the final result does not.
/// Returns `Overflow` instead of trapping when the result would not fit.
pub fn mul_div_u256(
    env: &Env,
    a: &U256,
    b: u128,
    denominator: u128,
    round_up: bool,
) -> Result<U256, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let zero = U256::from_u32(env, 0);
    let den = U256::from_u128(env, denominator);
    let b_256 = U256::from_u128(env, b);
    let max = u256_max(env);

    let quotient = a.div(&den);
    let remainder = a.rem_euclid(&den);

    if b != 0 && quotient > max.div(&b_256) {
        return Err(MathError::Overflow);
    }
    let head = quotient.mul(&b_256);

    // remainder < denominator < 2^128, so this product stays below 2^256
    let tail_product = remainder.mul(&b_256);
    let mut tail = tail_product.div(&den);
    if round_up && tail_product.rem_euclid(&den) != zero {
        tail = tail.add(&U256::from_u32(env, 1));
    }

    if head > max.sub(&tail) {
        return Err(MathError::Overflow);
    }
    Ok(head.add(&tail))
}

/// Divide with rounding up
#[inline]
pub fn div_round_up(numerator: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }
    let result = numerator / denominator;
    if numerator % denominator != 0 {
        Ok(result + 1)
    } else {
        Ok(result)
    }
}

/// Divide a 256-bit value by a u128, optionally rounding up, and narrow to u128
pub fn div_u256(
    env: &Env,
    numerator: &U256,
    denominator: u128,
    round_up: bool,
) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let den = U256::from_u128(env, denominator);
    let result = u256_to_u128(&numerator.div(&den))?;

    if round_up && numerator.rem_euclid(&den) != U256::from_u32(env, 0) {
        result.checked_add(1).ok_or(MathError::Overflow)
    } else {
        Ok(result)
    }
}

/// Integer square root of a 256-bit value (Newton's method from 2^128)
pub fn sqrt_u256(env: &Env, n: &U256) -> U256 {
    let zero = U256::from_u32(env, 0);
    if *n == zero {
        return zero;
    }

    // sqrt(n) < 2^128 for every n < 2^256
    let mut x = U256::from_u32(env, 1).shl(128);
    loop {
        let y = x.add(&n.div(&x)).shr(1);
        if y >= x {
            return x;
        }
        x = y;
    }
}
