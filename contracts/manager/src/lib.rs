#![no_std]

//! # RangeKeeper Liquidity Manager
//!
//! Provisions concentrated liquidity around a pool's current price.
//!
//! ## Flow of `add_liquidity`:
//! 1. Validate inputs, caller balances and approvals
//! 2. Read the pool price once and derive the current tick
//! 3. Build the tick range for the requested width
//! 4. Solve the token ratio the range needs at that price
//! 5. Swap the excess token when the pair is off the ratio by more than the tolerance
//! 6. Mint through the position registry, refund leftovers, emit `LiquidityAdded`
//!
//! ## Functions:
//! - Write (5): initialize, add_liquidity, set_params, set_position_manager, transfer_admin
//! - Read (3): preview_add_liquidity, get_config, is_initialized

use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

use rangekeeper_math::{
    constants::{MAX_SLIPPAGE_BPS, MAX_TOLERANCE_BPS, MAX_WIDTH},
    normalize_pair, u128_to_i128_checked,
};
use rangekeeper_range::{compute_range, TickRange};
use rangekeeper_ratio::{solve_required_ratio, RequiredRatio};
use rangekeeper_rebalance::{apply_haircut, apply_plan, plan_rebalance, RebalanceParams, RebalancePlan};

mod error;
mod events;
mod pool;
mod positions;
mod storage;
mod types;

pub use error::ManagerError;
use events::*;
use pool::{execute_swap, read_pool_config, read_price, PriceReading};
use positions::{quote_mint, submit_mint};
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct LiquidityManager;

/// Validated request in token0/token1 terms, before any custody moves
struct Prepared {
    config: ManagerConfig,
    pool_config: PoolConfig,
    a_is_token0: bool,
    amount0: u128,
    amount1: u128,
    price: PriceReading,
    range: TickRange,
    ratio: RequiredRatio,
    plan: RebalancePlan,
}

#[contractimpl]
impl LiquidityManager {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the manager with its registry and tunables
    pub fn initialize(
        env: Env,
        admin: Address,
        position_manager: Address,
        slippage_bps: u32,
        rebalance_tolerance_bps: u32,
    ) -> Result<(), ManagerError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(ManagerError::AlreadyInitialized);
        }
        validate_params(slippage_bps, rebalance_tolerance_bps)?;

        let config = ManagerConfig {
            admin,
            position_manager,
            slippage_bps,
            rebalance_tolerance_bps,
        };
        write_config(&env, &config);
        set_initialized(&env);

        emit_initialized(&env, &config);

        Ok(())
    }

    // ========================================================
    // LIQUIDITY (Write)
    // ========================================================

    /// Deposit `amount_a` of the pool's token_a and `amount_b` of its token_b
    /// into a range `width` tick-spacings either side of the current price.
    ///
    /// Excess of one token is swapped for the other first. Unconsumed
    /// remainders go back to `caller`, who owns the resulting position.
    pub fn add_liquidity(
        env: Env,
        caller: Address,
        pool: Address,
        amount_a: i128,
        amount_b: i128,
        width: u32,
    ) -> Result<LiquidityReceipt, ManagerError> {
        if !is_initialized(&env) {
            return Err(ManagerError::NotInitialized);
        }
        caller.require_auth();
        acquire_lock(&env)?;

        let receipt = Self::execute_add(&env, &caller, &pool, amount_a, amount_b, width);

        release_lock(&env);
        receipt
    }

    // ========================================================
    // ADMIN (Write)
    // ========================================================

    pub fn set_params(
        env: Env,
        slippage_bps: u32,
        rebalance_tolerance_bps: u32,
    ) -> Result<(), ManagerError> {
        let mut config = read_config(&env)?;
        config.admin.require_auth();

        validate_params(slippage_bps, rebalance_tolerance_bps)?;
        config.slippage_bps = slippage_bps;
        config.rebalance_tolerance_bps = rebalance_tolerance_bps;
        write_config(&env, &config);

        emit_params_updated(&env, slippage_bps, rebalance_tolerance_bps);
        Ok(())
    }

    pub fn set_position_manager(env: Env, position_manager: Address) -> Result<(), ManagerError> {
        let mut config = read_config(&env)?;
        config.admin.require_auth();

        let old = config.position_manager.clone();
        config.position_manager = position_manager;
        write_config(&env, &config);

        emit_position_manager_updated(&env, &old, &config.position_manager);
        Ok(())
    }

    pub fn transfer_admin(env: Env, new_admin: Address) -> Result<(), ManagerError> {
        let mut config = read_config(&env)?;
        config.admin.require_auth();

        let old = config.admin.clone();
        config.admin = new_admin;
        write_config(&env, &config);

        emit_admin_transferred(&env, &old, &config.admin);
        Ok(())
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    /// Run the pricing, range, ratio and planning steps of `add_liquidity`
    /// without moving tokens. Balances and approvals are not checked.
    pub fn preview_add_liquidity(
        env: Env,
        pool: Address,
        amount_a: i128,
        amount_b: i128,
        width: u32,
    ) -> Result<LiquidityPreview, ManagerError> {
        let config = read_config(&env)?;
        check_inputs(amount_a, amount_b, width)?;

        let pool_config = read_pool_config(&env, &pool)?;
        let prepared = Self::prepare(&env, config, &pool, pool_config, amount_a, amount_b, width)?;
        let plan = prepared.plan;

        let filled = if plan.is_needed {
            apply_haircut(&env, plan.expected_out, prepared.pool_config.fee_bps)?
        } else {
            0
        };
        let (held0, held1) = apply_plan(&plan, prepared.amount0, prepared.amount1, filled)?;
        let quote = quote_mint(
            &env,
            prepared.price.sqrt_price_x96,
            &prepared.range,
            held0,
            held1,
            prepared.config.slippage_bps,
        )?;

        Ok(LiquidityPreview {
            sqrt_price_x96: prepared.price.sqrt_price_x96,
            current_tick: prepared.price.tick,
            tick_lower: prepared.range.tick_lower,
            tick_upper: prepared.range.tick_upper,
            ratio0: prepared.ratio.ratio0,
            ratio1: prepared.ratio.ratio1,
            plan,
            expected_liquidity: quote.liquidity,
            expected_amount0: quote.amount0,
            expected_amount1: quote.amount1,
        })
    }

    pub fn get_config(env: Env) -> Result<ManagerConfig, ManagerError> {
        read_config(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn execute_add(
        env: &Env,
        caller: &Address,
        pool: &Address,
        amount_a: i128,
        amount_b: i128,
        width: u32,
    ) -> Result<LiquidityReceipt, ManagerError> {
        check_inputs(amount_a, amount_b, width)?;

        let config = read_config(env)?;
        let pool_config = read_pool_config(env, pool)?;
        let manager = env.current_contract_address();

        // Decimals and funds, in the caller's (token_a, token_b) order
        let client_a = token::Client::new(env, &pool_config.token_a);
        let client_b = token::Client::new(env, &pool_config.token_b);
        let normalized = normalize_pair(
            env,
            amount_a as u128,
            client_a.decimals(),
            amount_b as u128,
            client_b.decimals(),
        )?;
        log!(
            env,
            "normalized deposit",
            normalized.amount_a,
            normalized.amount_b,
            normalized.decimals
        );

        if client_a.balance(caller) < amount_a || client_b.balance(caller) < amount_b {
            return Err(ManagerError::InsufficientBalance);
        }
        if (amount_a > 0 && client_a.allowance(caller, &manager) < amount_a)
            || (amount_b > 0 && client_b.allowance(caller, &manager) < amount_b)
        {
            return Err(ManagerError::InsufficientApproval);
        }

        let prepared = Self::prepare(env, config, pool, pool_config, amount_a, amount_b, width)?;
        let client0 = token::Client::new(env, &prepared.pool_config.token0);
        let client1 = token::Client::new(env, &prepared.pool_config.token1);

        // Custody baseline before anything is pulled
        let baseline0 = client0.balance(&manager);
        let baseline1 = client1.balance(&manager);

        if amount_a > 0 {
            client_a.transfer_from(&manager, caller, &manager, &amount_a);
        }
        if amount_b > 0 {
            client_b.transfer_from(&manager, caller, &manager, &amount_b);
        }

        // Rebalance
        let plan = prepared.plan;
        let (held0, held1) = if plan.is_needed {
            let received = execute_swap(env, pool, &prepared.pool_config, &plan)?;
            emit_rebalanced(
                env,
                caller,
                pool,
                plan.zero_for_one,
                u128_to_i128_checked(plan.amount_in)?,
                u128_to_i128_checked(received)?,
            );
            apply_plan(&plan, prepared.amount0, prepared.amount1, received)?
        } else {
            (prepared.amount0, prepared.amount1)
        };

        // Mint
        let quote = quote_mint(
            env,
            prepared.price.sqrt_price_x96,
            &prepared.range,
            held0,
            held1,
            prepared.config.slippage_bps,
        )?;
        let minted = submit_mint(
            env,
            &prepared.config.position_manager,
            pool,
            &prepared.pool_config,
            caller,
            &prepared.range,
            held0,
            held1,
            &quote,
        )?;

        // Refund
        let refund0 = u128_to_i128_checked(held0)? - minted.amount0;
        let refund1 = u128_to_i128_checked(held1)? - minted.amount1;
        if refund0 > 0 {
            client0.transfer(&manager, caller, &refund0);
        }
        if refund1 > 0 {
            client1.transfer(&manager, caller, &refund1);
        }

        if client0.balance(&manager) != baseline0 || client1.balance(&manager) != baseline1 {
            return Err(ManagerError::CustodyMismatch);
        }

        let (amount_a, amount_b, refund_a, refund_b) = if prepared.a_is_token0 {
            (minted.amount0, minted.amount1, refund0, refund1)
        } else {
            (minted.amount1, minted.amount0, refund1, refund0)
        };

        emit_liquidity_added(
            env,
            caller,
            pool,
            prepared.range.tick_lower,
            prepared.range.tick_upper,
            minted.liquidity,
            amount_a,
            amount_b,
            minted.token_id,
        );

        Ok(LiquidityReceipt {
            token_id: minted.token_id,
            tick_lower: prepared.range.tick_lower,
            tick_upper: prepared.range.tick_upper,
            liquidity: minted.liquidity,
            amount_a,
            amount_b,
            refund_a,
            refund_b,
            swapped: plan.is_needed,
        })
    }

    /// Price read, range, ratio and rebalance plan for a checked request
    fn prepare(
        env: &Env,
        config: ManagerConfig,
        pool: &Address,
        pool_config: PoolConfig,
        amount_a: i128,
        amount_b: i128,
        width: u32,
    ) -> Result<Prepared, ManagerError> {
        let a_is_token0 = pool_config.token_a == pool_config.token0;
        let (amount0, amount1) = if a_is_token0 {
            (amount_a as u128, amount_b as u128)
        } else {
            (amount_b as u128, amount_a as u128)
        };

        let price = read_price(env, pool)?;
        let range = compute_range(price.tick, width, pool_config.tick_spacing)?;
        let ratio = solve_required_ratio(env, price.sqrt_price_x96, &range)?;

        let params = RebalanceParams {
            fee_bps: pool_config.fee_bps,
            tolerance_bps: config.rebalance_tolerance_bps,
            slippage_bps: config.slippage_bps,
        };
        let plan = plan_rebalance(env, amount0, amount1, &ratio, price.sqrt_price_x96, &params)?;
        log!(
            env,
            "rebalance plan",
            plan.deviation_bps,
            plan.is_needed,
            plan.zero_for_one,
            plan.amount_in
        );

        Ok(Prepared {
            config,
            pool_config,
            a_is_token0,
            amount0,
            amount1,
            price,
            range,
            ratio,
            plan,
        })
    }
}

// ========================================================
// HELPER FUNCTIONS
// ========================================================

fn validate_params(slippage_bps: u32, rebalance_tolerance_bps: u32) -> Result<(), ManagerError> {
    if slippage_bps > MAX_SLIPPAGE_BPS || rebalance_tolerance_bps > MAX_TOLERANCE_BPS {
        return Err(ManagerError::InvalidConfig);
    }
    Ok(())
}

/// Width bound, then amount signs, then the both-zero case
fn check_inputs(amount_a: i128, amount_b: i128, width: u32) -> Result<(), ManagerError> {
    if width >= MAX_WIDTH {
        return Err(ManagerError::RangeTooWide);
    }
    if amount_a < 0 || amount_b < 0 {
        return Err(ManagerError::InvalidAmount);
    }
    if amount_a == 0 && amount_b == 0 {
        return Err(ManagerError::ZeroAmounts);
    }
    Ok(())
}
