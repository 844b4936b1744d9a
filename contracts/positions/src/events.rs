//! Position registry events

use soroban_sdk::{Env, Symbol};

use crate::types::{MintResult, Position};

/// Topics: ("PositionMinted", owner)
/// Data: (token_id, pool, tick_lower, tick_upper, liquidity, amount0, amount1)
pub fn emit_position_minted(env: &Env, position: &Position, result: &MintResult) {
    env.events().publish(
        (Symbol::new(env, "PositionMinted"), position.owner.clone()),
        (
            result.token_id,
            position.pool.clone(),
            position.tick_lower,
            position.tick_upper,
            result.liquidity,
            result.amount0,
            result.amount1,
        ),
    );
}

/// Topics: ("PositionIncreased", owner)
/// Data: (token_id, liquidity_added, total_liquidity, amount0, amount1)
pub fn emit_position_increased(env: &Env, position: &Position, result: &MintResult) {
    env.events().publish(
        (Symbol::new(env, "PositionIncreased"), position.owner.clone()),
        (
            result.token_id,
            result.liquidity,
            position.liquidity,
            result.amount0,
            result.amount1,
        ),
    );
}
