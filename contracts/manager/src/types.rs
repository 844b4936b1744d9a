//! Manager type definitions

use soroban_sdk::{contracttype, Address};
use rangekeeper_rebalance::RebalancePlan;

// ============================================================
// MANAGER CONFIG
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManagerConfig {
    /// Admin address
    pub admin: Address,
    /// Position registry receiving mint requests
    pub position_manager: Address,
    /// Accepted shortfall on swap output and on minted amounts, in bps
    pub slippage_bps: u32,
    /// Deviation from the range ratio left without a swap, in bps
    pub rebalance_tolerance_bps: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Config,
    Locked,
}

// ============================================================
// RESULTS
// ============================================================

/// Outcome of `add_liquidity`, in the pool's creation order (token_a, token_b)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityReceipt {
    /// Position id in the registry
    pub token_id: u64,
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Liquidity added by this call
    pub liquidity: u128,
    /// token_a deposited into the position
    pub amount_a: i128,
    /// token_b deposited into the position
    pub amount_b: i128,
    /// token_a returned to the caller
    pub refund_a: i128,
    /// token_b returned to the caller
    pub refund_b: i128,
    /// Whether a rebalancing swap ran
    pub swapped: bool,
}

/// Dry run of `add_liquidity`, in token0/token1 terms
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityPreview {
    pub sqrt_price_x96: u128,
    pub current_tick: i32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub ratio0: u128,
    pub ratio1: u128,
    pub plan: RebalancePlan,
    /// Liquidity if the swap fills at the fee-adjusted spot price
    pub expected_liquidity: u128,
    pub expected_amount0: u128,
    pub expected_amount1: u128,
}

// ============================================================
// HELPER TYPES FOR CROSS-CONTRACT CALLS
// ============================================================

/// Raw pool state (matching the pool's PoolState)
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolState {
    pub sqrt_price_x96: u128,
    pub tick: i32,
    pub reserve0: i128,
    pub reserve1: i128,
}

/// Raw pool config (matching the pool's PoolConfig)
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolConfig {
    pub admin: Address,
    pub token_a: Address,
    pub token_b: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee_bps: u32,
    pub tick_spacing: i32,
}

/// Raw swap result from pool
#[contracttype]
#[derive(Clone, Debug)]
pub struct SwapResult {
    pub amount_in: i128,
    pub amount_out: i128,
    pub sqrt_price_x96: u128,
}

/// Mint request (matching the registry's MintParams)
#[contracttype]
#[derive(Clone, Debug)]
pub struct MintParams {
    pub pool: Address,
    pub recipient: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub amount0_desired: i128,
    pub amount1_desired: i128,
    pub amount0_min: i128,
    pub amount1_min: i128,
}

/// Raw mint result from the registry
#[contracttype]
#[derive(Clone, Debug)]
pub struct MintResult {
    pub token_id: u64,
    pub liquidity: u128,
    pub amount0: i128,
    pub amount1: i128,
}
