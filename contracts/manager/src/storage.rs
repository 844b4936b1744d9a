//! Manager storage operations

use soroban_sdk::Env;

use crate::error::ManagerError;
use crate::types::{DataKey, ManagerConfig};

// ============================================================
// TTL CONFIG
// ============================================================

const PERSISTENT_TTL: u32 = 6_307_200; // ~1 year

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
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

pub fn write_config(env: &Env, config: &ManagerConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Result<ManagerConfig, ManagerError> {
    let key = DataKey::Config;
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ManagerError::NotInitialized)?;
    extend_ttl(env, &key);
    Ok(config)
}

// ============================================================
// REENTRANCY LOCK
// ============================================================

/// Set the `Locked` flag for the duration of `add_liquidity`.
///
/// The host already refuses a nested call into this contract; the flag
/// holds the same line for any entry the host does let through.
pub fn acquire_lock(env: &Env) -> Result<(), ManagerError> {
    let storage = env.storage().instance();
    if storage.get(&DataKey::Locked).unwrap_or(false) {
        return Err(ManagerError::Reentrant);
    }
    storage.set(&DataKey::Locked, &true);
    Ok(())
}

pub fn release_lock(env: &Env) {
    env.storage().instance().set(&DataKey::Locked, &false);
}
