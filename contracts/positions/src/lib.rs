#![no_std]

//! # RangeKeeper Position Registry
//!
//! Mints and tracks concentrated-liquidity positions. A position is keyed by
//! (owner, pool, tick_lower, tick_upper); minting into an existing key
//! increases its liquidity instead of creating a new id.
//!
//! Liquidity is computed from the pool's live price. The consumed amounts
//! are pulled from the payer straight into the pool with `transfer_from`,
//! so the payer must approve this contract first.
//!
//! ## Functions:
//! - Write (1): mint_or_increase
//! - Read (3): get_position, position_id, positions_count

use soroban_sdk::{contract, contractimpl, token, vec, Address, Env, Symbol, TryFromVal, Val};

use rangekeeper_math::{
    get_amounts_for_liquidity, get_liquidity_for_amounts, get_sqrt_ratio_at_tick,
    i128_to_u128_safe, is_valid_sqrt_price, u128_to_i128_checked,
};
use rangekeeper_range::{is_valid_range, TickRange};

mod error;
mod events;
mod storage;
mod types;

pub use error::PositionError;
use events::*;
use storage::*;
pub use types::*;

#[contract]
pub struct PositionRegistry;

#[contractimpl]
impl PositionRegistry {
    // ========================================================
    // WRITE FUNCTIONS
    // ========================================================

    /// Mint a new position or add liquidity to an existing one
    pub fn mint_or_increase(
        env: Env,
        payer: Address,
        params: MintParams,
    ) -> Result<MintResult, PositionError> {
        payer.require_auth();

        if params.amount0_desired < 0
            || params.amount1_desired < 0
            || params.amount0_min < 0
            || params.amount1_min < 0
        {
            return Err(PositionError::InvalidAmount);
        }

        let config: PoolConfigView = read_pool(&env, &params.pool, "get_pool_config")?;
        let state: PoolStateView = read_pool(&env, &params.pool, "get_pool_state")?;

        let range = TickRange {
            tick_lower: params.tick_lower,
            tick_upper: params.tick_upper,
        };
        if !is_valid_range(&range, config.tick_spacing) {
            return Err(PositionError::InvalidTickRange);
        }
        if !is_valid_sqrt_price(state.sqrt_price_x96) {
            return Err(PositionError::InvalidPrice);
        }

        let sqrt_lower = get_sqrt_ratio_at_tick(range.tick_lower)?;
        let sqrt_upper = get_sqrt_ratio_at_tick(range.tick_upper)?;

        let liquidity = get_liquidity_for_amounts(
            &env,
            state.sqrt_price_x96,
            sqrt_lower,
            sqrt_upper,
            i128_to_u128_safe(params.amount0_desired),
            i128_to_u128_safe(params.amount1_desired),
        )?;
        if liquidity == 0 {
            return Err(PositionError::ZeroLiquidity);
        }

        // Rounded down so neither leg exceeds its desired amount
        let (amount0, amount1) = get_amounts_for_liquidity(
            &env,
            state.sqrt_price_x96,
            sqrt_lower,
            sqrt_upper,
            liquidity,
            false,
        )?;
        let amount0 = u128_to_i128_checked(amount0)?;
        let amount1 = u128_to_i128_checked(amount1)?;

        if amount0 < params.amount0_min || amount1 < params.amount1_min {
            return Err(PositionError::SlippageExceeded);
        }

        let registry = env.current_contract_address();
        if amount0 > 0 {
            token::Client::new(&env, &config.token0).transfer_from(&registry, &payer, &params.pool, &amount0);
        }
        if amount1 > 0 {
            token::Client::new(&env, &config.token1).transfer_from(&registry, &payer, &params.pool, &amount1);
        }

        let existing = read_position_id(
            &env,
            &params.recipient,
            &params.pool,
            range.tick_lower,
            range.tick_upper,
        )
        .and_then(|id| read_position(&env, id));

        let (position, is_new) = match existing {
            Some(mut position) => {
                position.liquidity = position
                    .liquidity
                    .checked_add(liquidity)
                    .ok_or(PositionError::Overflow)?;
                (position, false)
            }
            None => (
                Position {
                    token_id: next_token_id(&env),
                    owner: params.recipient.clone(),
                    pool: params.pool.clone(),
                    tick_lower: range.tick_lower,
                    tick_upper: range.tick_upper,
                    liquidity,
                },
                true,
            ),
        };

        write_position(&env, &position);

        let result = MintResult {
            token_id: position.token_id,
            liquidity,
            amount0,
            amount1,
        };

        if is_new {
            write_position_id(&env, &position);
            emit_position_minted(&env, &position, &result);
        } else {
            emit_position_increased(&env, &position, &result);
        }

        Ok(result)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn get_position(env: Env, token_id: u64) -> Option<Position> {
        read_position(&env, token_id)
    }

    pub fn position_id(
        env: Env,
        owner: Address,
        pool: Address,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Option<u64> {
        read_position_id(&env, &owner, &pool, tick_lower, tick_upper)
    }

    pub fn positions_count(env: Env) -> u64 {
        read_count(&env)
    }
}

// ========================================================
// HELPER FUNCTIONS
// ========================================================

/// Call a no-argument pool view, mapping any failure to InvalidPool
fn read_pool<T>(env: &Env, pool: &Address, func: &str) -> Result<T, PositionError>
where
    T: TryFromVal<Env, Val>,
{
    let args: soroban_sdk::Vec<Val> = vec![env];
    match env.try_invoke_contract::<T, soroban_sdk::Error>(pool, &Symbol::new(env, func), args) {
        Ok(Ok(value)) => Ok(value),
        _ => Err(PositionError::InvalidPool),
    }
}
