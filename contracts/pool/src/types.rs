// Pool Types

use soroban_sdk::{contracttype, Address};

// ============================================================
// POOL CONFIGURATION
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Admin allowed to move the price and the execution haircut
    pub admin: Address,
    /// First token, in creation order
    pub token_a: Address,
    /// Second token, in creation order
    pub token_b: Address,
    /// Token0 address (sorted: token0 < token1)
    pub token0: Address,
    /// Token1 address
    pub token1: Address,
    /// Trading fee in basis points (e.g., 30 = 0.30%)
    pub fee_bps: u32,
    /// Tick spacing for position bounds
    pub tick_spacing: i32,
}

// ============================================================
// POOL STATE
// ============================================================

/// Stored price slot
#[contracttype]
#[derive(Clone, Debug)]
pub struct PriceSlot {
    pub sqrt_price_x96: u128,
    pub tick: i32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Current sqrt price as Q64.96 fixed point
    pub sqrt_price_x96: u128,
    /// Tick reported alongside the price
    pub tick: i32,
    /// Pool balance of token0
    pub reserve0: i128,
    /// Pool balance of token1
    pub reserve1: i128,
}

// ============================================================
// SWAP RESULT
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapResult {
    pub amount_in: i128,
    pub amount_out: i128,
    /// Price after the swap; a spot pool does not move on trades
    pub sqrt_price_x96: u128,
}
