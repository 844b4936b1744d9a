//! Position registry storage operations

use soroban_sdk::{contracttype, Address, Env};

use crate::types::Position;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Number of positions ever created
    Count,
    /// Position by token id
    Position(u64),
    /// Token id by (owner, pool, tick_lower, tick_upper)
    PositionId(Address, Address, i32, i32),
}

// ============================================================
// TTL CONFIG
// ============================================================

const PERSISTENT_TTL: u32 = 6_307_200; // ~1 year

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

// ============================================================
// COUNTER
// ============================================================

pub fn read_count(env: &Env) -> u64 {
    env.storage().persistent().get(&DataKey::Count).unwrap_or(0)
}

/// Allocate the next token id (ids start at 1)
pub fn next_token_id(env: &Env) -> u64 {
    let id = read_count(env) + 1;
    env.storage().persistent().set(&DataKey::Count, &id);
    extend_ttl(env, &DataKey::Count);
    id
}

// ============================================================
// POSITIONS
// ============================================================

pub fn read_position(env: &Env, token_id: u64) -> Option<Position> {
    let key = DataKey::Position(token_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_ttl(env, &key);
    }
    result
}

pub fn write_position(env: &Env, position: &Position) {
    let key = DataKey::Position(position.token_id);
    env.storage().persistent().set(&key, position);
    extend_ttl(env, &key);
}

pub fn read_position_id(
    env: &Env,
    owner: &Address,
    pool: &Address,
    tick_lower: i32,
    tick_upper: i32,
) -> Option<u64> {
    let key = DataKey::PositionId(owner.clone(), pool.clone(), tick_lower, tick_upper);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_ttl(env, &key);
    }
    result
}

pub fn write_position_id(env: &Env, position: &Position) {
    let key = DataKey::PositionId(
        position.owner.clone(),
        position.pool.clone(),
        position.tick_lower,
        position.tick_upper,
    );
    env.storage().persistent().set(&key, &position.token_id);
    extend_ttl(env, &key);
}
