// Range construction around the current tick

use rangekeeper_math::constants::{MAX_TICK, MAX_WIDTH, MIN_TICK};
use crate::types::{RangeError, TickRange};

/// Round a tick down to a multiple of `tick_spacing` (toward negative infinity)
#[inline]
pub fn floor_to_spacing(tick: i32, tick_spacing: i32) -> Result<i32, RangeError> {
    if tick_spacing <= 0 {
        return Err(RangeError::InvalidTickSpacing);
    }
    Ok(tick - tick.rem_euclid(tick_spacing))
}

/// Lowest multiple of `tick_spacing` not below MIN_TICK
#[inline]
pub fn min_usable_tick(tick_spacing: i32) -> i32 {
    (MIN_TICK / tick_spacing) * tick_spacing
}

/// Highest multiple of `tick_spacing` not above MAX_TICK
#[inline]
pub fn max_usable_tick(tick_spacing: i32) -> i32 {
    (MAX_TICK / tick_spacing) * tick_spacing
}

/// Check a range is well ordered, aligned to spacing and inside the usable bounds
pub fn is_valid_range(range: &TickRange, tick_spacing: i32) -> bool {
    tick_spacing > 0
        && range.tick_lower < range.tick_upper
        && range.tick_lower % tick_spacing == 0
        && range.tick_upper % tick_spacing == 0
        && range.tick_lower >= min_usable_tick(tick_spacing)
        && range.tick_upper <= max_usable_tick(tick_spacing)
}

/// Derive the position range for `width` spacing units around `current_tick`.
///
/// The base is the current tick floored to spacing; the band spans
/// `width` units below the base and `width + 1` units above it, so width 0
/// is the single spacing bucket holding the current tick. Bounds are clamped
/// to the usable tick space and never collapse to an empty band.
pub fn compute_range(
    current_tick: i32,
    width: u32,
    tick_spacing: i32,
) -> Result<TickRange, RangeError> {
    if width >= MAX_WIDTH {
        return Err(RangeError::RangeTooWide);
    }
    if tick_spacing <= 0 {
        return Err(RangeError::InvalidTickSpacing);
    }
    if !(MIN_TICK..=MAX_TICK).contains(&current_tick) {
        return Err(RangeError::TickOutOfRange);
    }

    let min_usable = min_usable_tick(tick_spacing) as i64;
    let max_usable = max_usable_tick(tick_spacing) as i64;
    let spacing = tick_spacing as i64;
    if max_usable - min_usable < spacing {
        return Err(RangeError::InvalidTickSpacing);
    }

    let base = floor_to_spacing(current_tick, tick_spacing)? as i64;
    let offset = width as i64 * spacing;

    let mut lower = (base - offset).max(min_usable);
    let mut upper = (base + offset + spacing).min(max_usable);

    if lower >= upper {
        if upper == max_usable {
            lower = upper - spacing;
        } else {
            upper = lower + spacing;
        }
    }

    // Both bounds lie inside [MIN_TICK, MAX_TICK], so they fit in i32
    Ok(TickRange {
        tick_lower: lower as i32,
        tick_upper: upper as i32,
    })
}
