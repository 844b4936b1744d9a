// SPDX-License-Identifier: MIT
// Tick <-> sqrt price mapping in Q64.96

use crate::constants::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, Q96};
use crate::error::MathError;

/// sqrt(1.0001^-(2^i)) in Q128, for i = 0..20
const TICK_RATIOS_X128: [u128; 20] = [
    0xfffcb933bd6fad37aa2d162d1a594001,
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x9aa508b5b7a84e1c677de54f3e99bc9,
    0x5d6af8dedb81196699c329225ee604,
    0x2216e584f5fa1ea926041bedfe98,
    0x48a170391f7dc42444e8fa2,
];

const LOW_64: u128 = 0xFFFF_FFFF_FFFF_FFFF;

/// floor(a * b / 2^128) using 64-bit limb decomposition
#[inline]
fn mul_shift_128(a: u128, b: u128) -> u128 {
    let (a_hi, a_lo) = (a >> 64, a & LOW_64);
    let (b_hi, b_lo) = (b >> 64, b & LOW_64);

    let (mid, c1) = (a_hi * b_lo).overflowing_add(a_lo * b_hi);
    let (mid, c2) = mid.overflowing_add((a_lo * b_lo) >> 64);
    let carry = (c1 as u128) + (c2 as u128);

    a_hi * b_hi + (mid >> 64) + (carry << 64)
}

/// floor((2^256 - 1) / divisor) in Q32 form: returns the quotient shifted
/// right by 32 bits and whether any of the dropped low 32 bits were set.
fn invert_q128(divisor: u128) -> (u128, bool) {
    let mut remainder: u128 = 0;
    let mut quotient: u128 = 0;
    let mut low_bits_set = false;

    for bit in (0..256u32).rev() {
        let carry = remainder >> 127;
        remainder = (remainder << 1) | 1;

        let take = carry == 1 || remainder >= divisor;
        if take {
            remainder = remainder.wrapping_sub(divisor);
        }

        if bit >= 32 {
            quotient = (quotient << 1) | take as u128;
        } else if take {
            low_bits_set = true;
        }
    }

    (quotient, low_bits_set)
}

/// Convert tick to sqrt price in Q64.96 format
/// Formula: sqrt(1.0001^tick) * 2^96, rounded up
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<u128, MathError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfRange);
    }

    if tick == 0 {
        return Ok(Q96);
    }

    let abs_tick = tick.unsigned_abs();

    // Q128 product of the per-bit factors; 2^128 itself never survives
    // because at least one bit of a non-zero tick is set.
    let mut ratio: Option<u128> = None;
    for (i, factor) in TICK_RATIOS_X128.iter().enumerate() {
        if abs_tick & (1 << i) != 0 {
            ratio = Some(match ratio {
                Some(r) => mul_shift_128(r, *factor),
                None => *factor,
            });
        }
    }
    let ratio = ratio.ok_or(MathError::TickOutOfRange)?;

    if tick < 0 {
        let rounded = (ratio & 0xFFFF_FFFF != 0) as u128;
        Ok((ratio >> 32) + rounded)
    } else {
        let (quotient, low_bits_set) = invert_q128(ratio);
        quotient
            .checked_add(low_bits_set as u128)
            .ok_or(MathError::Overflow)
    }
}

/// Greatest tick whose sqrt price is less than or equal to `sqrt_price_x96`
pub fn get_tick_at_sqrt_ratio(sqrt_price_x96: u128) -> Result<i32, MathError> {
    if !(MIN_SQRT_RATIO..MAX_SQRT_RATIO).contains(&sqrt_price_x96) {
        return Err(MathError::PriceOutOfRange);
    }

    // Invariant: ratio(lo) <= price < ratio(hi)
    let mut lo = MIN_TICK;
    let mut hi = MAX_TICK;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if get_sqrt_ratio_at_tick(mid)? <= sqrt_price_x96 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Ok(lo)
}

/// True if `sqrt_price_x96` is a usable pool price
#[inline]
pub fn is_valid_sqrt_price(sqrt_price_x96: u128) -> bool {
    (MIN_SQRT_RATIO..MAX_SQRT_RATIO).contains(&sqrt_price_x96)
}
