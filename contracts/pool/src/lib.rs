#![no_std]

//! # RangeKeeper Spot Pool
//!
//! Reference pool for local deployments and tests. It quotes every swap at
//! its current sqrt price, charges its fee on the output and never moves the
//! price on trades. Reserves are the pool's own token balances.
//!
//! ## Functions:
//! - Write (4): initialize, swap, set_sqrt_price, set_execution_haircut
//! - Read (4): is_initialized, get_pool_state, get_pool_config, get_execution_haircut

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use rangekeeper_math::{
    constants::{BPS_DENOMINATOR, MAX_FEE_BPS},
    get_tick_at_sqrt_ratio, is_valid_sqrt_price, mul_div, u128_to_i128_checked,
};
use rangekeeper_ratio::quote_at_price;

// Local modules
mod error;
mod events;
mod storage;
pub mod types;

pub use error::PoolError;
use events::*;
use storage::*;
pub use types::{PoolConfig, PoolState, SwapResult};
use types::PriceSlot;

#[contract]
pub struct SpotPool;

#[contractimpl]
impl SpotPool {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize pool
    ///
    /// # Arguments
    /// * `admin` - Address allowed to set the price and execution haircut
    /// * `token_a` - First token
    /// * `token_b` - Second token
    /// * `fee_bps` - Trading fee in basis points
    /// * `tick_spacing` - Tick spacing for position bounds
    /// * `sqrt_price_x96` - Initial sqrt price of token1 per token0
    pub fn initialize(
        env: Env,
        admin: Address,
        token_a: Address,
        token_b: Address,
        fee_bps: u32,
        tick_spacing: i32,
        sqrt_price_x96: u128,
    ) -> Result<(), PoolError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        if fee_bps == 0 || fee_bps >= MAX_FEE_BPS {
            return Err(PoolError::InvalidFee);
        }
        if tick_spacing <= 0 {
            return Err(PoolError::InvalidTickSpacing);
        }
        if token_a == token_b {
            return Err(PoolError::SameToken);
        }
        let tick = get_tick_at_sqrt_ratio(sqrt_price_x96).map_err(|_| PoolError::InvalidPrice)?;

        let (token0, token1) = if token_a < token_b {
            (token_a.clone(), token_b.clone())
        } else {
            (token_b.clone(), token_a.clone())
        };

        let config = PoolConfig {
            admin,
            token_a,
            token_b,
            token0,
            token1,
            fee_bps,
            tick_spacing,
        };

        write_pool_config(&env, &config);
        write_price(&env, &PriceSlot { sqrt_price_x96, tick });
        write_execution_haircut(&env, 0);
        set_initialized(&env);

        emit_initialized(
            &env,
            &config.token0,
            &config.token1,
            fee_bps,
            tick_spacing,
            sqrt_price_x96,
        );
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    /// Current price, tick and reserves
    pub fn get_pool_state(env: Env) -> Result<PoolState, PoolError> {
        let config = read_pool_config(&env)?;
        let slot = read_price(&env)?;
        let pool_addr = env.current_contract_address();

        Ok(PoolState {
            sqrt_price_x96: slot.sqrt_price_x96,
            tick: slot.tick,
            reserve0: token::Client::new(&env, &config.token0).balance(&pool_addr),
            reserve1: token::Client::new(&env, &config.token1).balance(&pool_addr),
        })
    }

    /// Tokens (creation and sorted order), fee and tick spacing
    pub fn get_pool_config(env: Env) -> Result<PoolConfig, PoolError> {
        read_pool_config(&env)
    }

    pub fn get_execution_haircut(env: Env) -> u32 {
        read_execution_haircut(&env)
    }

    // ========================================================
    // SWAP FUNCTION
    // ========================================================

    /// Execute a swap at the current price.
    ///
    /// The pool pulls `amount_in` from `sender` with `transfer_from`, so the
    /// sender must have approved the pool for at least that amount.
    pub fn swap(
        env: Env,
        sender: Address,
        token_in: Address,
        amount_in: i128,
        amount_out_min: i128,
    ) -> Result<SwapResult, PoolError> {
        sender.require_auth();

        // Validate amount_in early
        if amount_in <= 0 {
            return Err(PoolError::InvalidAmount);
        }

        let config = read_pool_config(&env)?;
        let slot = read_price(&env)?;

        let zero_for_one = if token_in == config.token0 {
            true
        } else if token_in == config.token1 {
            false
        } else {
            return Err(PoolError::InvalidToken);
        };

        let amount_out = Self::quote_output(&env, &config, slot.sqrt_price_x96, amount_in, zero_for_one)?;
        if amount_out == 0 {
            return Err(PoolError::OutputDust);
        }
        if amount_out < amount_out_min {
            return Err(PoolError::SlippageExceeded);
        }

        let (token_in_addr, token_out_addr) = if zero_for_one {
            (&config.token0, &config.token1)
        } else {
            (&config.token1, &config.token0)
        };

        let pool_addr = env.current_contract_address();
        let out_client = token::Client::new(&env, token_out_addr);
        if out_client.balance(&pool_addr) < amount_out {
            return Err(PoolError::InsufficientReserves);
        }

        token::Client::new(&env, token_in_addr).transfer_from(&pool_addr, &sender, &pool_addr, &amount_in);
        out_client.transfer(&pool_addr, &sender, &amount_out);

        emit_swap(&env, &sender, amount_in, amount_out, zero_for_one);

        Ok(SwapResult {
            amount_in,
            amount_out,
            sqrt_price_x96: slot.sqrt_price_x96,
        })
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Move the pool price.
    ///
    /// No range check: drills may push the price to zero or past the tick
    /// space. The reported tick only follows prices that map to a tick.
    pub fn set_sqrt_price(env: Env, sqrt_price_x96: u128) -> Result<(), PoolError> {
        let config = read_pool_config(&env)?;
        config.admin.require_auth();

        let mut slot = read_price(&env)?;
        slot.sqrt_price_x96 = sqrt_price_x96;
        if is_valid_sqrt_price(sqrt_price_x96) {
            slot.tick = get_tick_at_sqrt_ratio(sqrt_price_x96)?;
        }
        write_price(&env, &slot);

        emit_price_set(&env, slot.sqrt_price_x96, slot.tick);
        Ok(())
    }

    /// Shave `haircut_bps` off every swap output on top of the fee
    pub fn set_execution_haircut(env: Env, haircut_bps: u32) -> Result<(), PoolError> {
        let config = read_pool_config(&env)?;
        config.admin.require_auth();

        if haircut_bps as u128 > BPS_DENOMINATOR {
            return Err(PoolError::InvalidHaircut);
        }
        write_execution_haircut(&env, haircut_bps);

        emit_haircut_set(&env, haircut_bps);
        Ok(())
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn quote_output(
        env: &Env,
        config: &PoolConfig,
        sqrt_price_x96: u128,
        amount_in: i128,
        zero_for_one: bool,
    ) -> Result<i128, PoolError> {
        let spot = quote_at_price(env, amount_in as u128, sqrt_price_x96, zero_for_one)?;
        let after_fee = mul_div(
            env,
            spot,
            BPS_DENOMINATOR - config.fee_bps as u128,
            BPS_DENOMINATOR,
        )?;
        let haircut = read_execution_haircut(env) as u128;
        let out = mul_div(env, after_fee, BPS_DENOMINATOR - haircut, BPS_DENOMINATOR)?;
        Ok(u128_to_i128_checked(out)?)
    }
}
