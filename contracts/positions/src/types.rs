//! Position registry type definitions

use soroban_sdk::{contracttype, Address};

// ============================================================
// MINT
// ============================================================

/// Parameters for minting or increasing a position
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintParams {
    /// Pool the liquidity is provided to
    pub pool: Address,
    /// Owner of the position
    pub recipient: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Maximum token0 to consume
    pub amount0_desired: i128,
    /// Maximum token1 to consume
    pub amount1_desired: i128,
    /// Minimum token0 that must be consumed
    pub amount0_min: i128,
    /// Minimum token1 that must be consumed
    pub amount1_min: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintResult {
    pub token_id: u64,
    /// Liquidity added by this call
    pub liquidity: u128,
    /// token0 consumed
    pub amount0: i128,
    /// token1 consumed
    pub amount1: i128,
}

// ============================================================
// POSITION
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub token_id: u64,
    pub owner: Address,
    pub pool: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Total liquidity across every mint into this position
    pub liquidity: u128,
}

// ============================================================
// POOL VIEWS (matching the pool's return types)
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolStateView {
    pub sqrt_price_x96: u128,
    pub tick: i32,
    pub reserve0: i128,
    pub reserve1: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolConfigView {
    pub admin: Address,
    pub token_a: Address,
    pub token_b: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee_bps: u32,
    pub tick_spacing: i32,
}
