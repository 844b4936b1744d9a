// SPDX-License-Identifier: MIT
// Math error kinds

/// Failure of a fixed-point or decimal computation
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MathError {
    /// Result does not fit in the target integer width
    Overflow,
    /// Denominator was zero
    DivisionByZero,
    /// Tick outside [MIN_TICK, MAX_TICK]
    TickOutOfRange,
    /// Sqrt price outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO)
    PriceOutOfRange,
    /// Decimal count above MAX_DECIMALS
    InvalidDecimals,
}
