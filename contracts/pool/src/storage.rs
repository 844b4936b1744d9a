// Pool storage module

use soroban_sdk::{contracttype, Env};

use crate::error::PoolError;
use crate::types::{PoolConfig, PriceSlot};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Initialization flag
    Initialized,
    /// Pool configuration
    Config,
    /// Current price and tick
    Price,
    /// Extra shortfall applied to swap outputs, in bps
    ExecutionHaircut,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// TTL bump threshold
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_pool_config(env: &Env, config: &PoolConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_pool_config(env: &Env) -> Result<PoolConfig, PoolError> {
    let key = DataKey::Config;
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(PoolError::NotInitialized)?;
    extend_ttl(env, &key);
    Ok(config)
}

// ============================================================
// PRICE
// ============================================================

pub fn write_price(env: &Env, slot: &PriceSlot) {
    env.storage().persistent().set(&DataKey::Price, slot);
    extend_ttl(env, &DataKey::Price);
}

pub fn read_price(env: &Env) -> Result<PriceSlot, PoolError> {
    let key = DataKey::Price;
    let slot = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(PoolError::NotInitialized)?;
    extend_ttl(env, &key);
    Ok(slot)
}

// ============================================================
// EXECUTION HAIRCUT
// ============================================================

pub fn write_execution_haircut(env: &Env, bps: u32) {
    env.storage().persistent().set(&DataKey::ExecutionHaircut, &bps);
    extend_ttl(env, &DataKey::ExecutionHaircut);
}

pub fn read_execution_haircut(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::ExecutionHaircut)
        .unwrap_or(0)
}
