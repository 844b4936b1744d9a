// SPDX-License-Identifier: MIT
// Constants shared by the RangeKeeper packages and contracts.

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Minimum tick whose Q64.96 sqrt price is representable
/// Price at MIN_TICK ≈ 5.42e-20
pub const MIN_TICK: i32 = -443636;

/// Maximum tick whose Q64.96 sqrt price fits in a u128
/// Price at MAX_TICK ≈ 1.84e+19
pub const MAX_TICK: i32 = 443636;

// ============================================================
// SQRT PRICE CONSTANTS (Q64.96 format)
// ============================================================

/// Sqrt price at MIN_TICK, inclusive lower bound for a valid pool price
pub const MIN_SQRT_RATIO: u128 = 18447090764788882728;

/// Sqrt price at MAX_TICK, exclusive upper bound for a valid pool price
pub const MAX_SQRT_RATIO: u128 = 340275971719517849884101479065584693834;

/// Sqrt price for a 1:1 raw price (2^96)
pub const SQRT_PRICE_1_1: u128 = Q96;

// ============================================================
// MATH CONSTANTS
// ============================================================

/// Q96 multiplier (2^96), the scale of every sqrt price
pub const Q96: u128 = 1u128 << 96;

/// Number of fractional bits in a Q64.96 value
pub const RESOLUTION: u32 = 96;

/// Basis point denominator (100% = 10000 bps)
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Largest decimal count whose power of ten fits in a u128
pub const MAX_DECIMALS: u32 = 38;

// ============================================================
// RANGE CONSTANTS
// ============================================================

/// Widths at or above this bound are rejected as too wide
pub const MAX_WIDTH: u32 = 10_000;

// ============================================================
// RATIO CONSTANTS
// ============================================================

/// Liquidity used to evaluate the token ratio a range requires.
/// Large enough to keep both legs well above rounding noise,
/// small enough that no leg overflows at the tick bounds.
pub const REFERENCE_LIQUIDITY: u128 = 1u128 << 64;

// ============================================================
// FEE / SLIPPAGE CONSTANTS
// ============================================================

/// Maximum pool fee accepted by the engine (100% = 10000 bps)
pub const MAX_FEE_BPS: u32 = 10_000;

/// Maximum slippage tolerance configurable on the manager (10%)
pub const MAX_SLIPPAGE_BPS: u32 = 1_000;

/// Maximum rebalance tolerance configurable on the manager (10%)
pub const MAX_TOLERANCE_BPS: u32 = 1_000;

/// Default slippage tolerance applied to swaps and mints (1%)
pub const DEFAULT_SLIPPAGE_BPS: u32 = 100;

/// Default deviation below which no rebalancing swap is made (0.5%)
pub const DEFAULT_TOLERANCE_BPS: u32 = 50;
