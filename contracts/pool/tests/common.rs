#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, Address, Env, String};
use rangekeeper_pool::{SpotPool, SpotPoolClient};
use rangekeeper_token::{TestToken, TestTokenClient};

// Test constants
pub const DEFAULT_FEE_BPS: u32 = 30; // 0.30%
pub const DEFAULT_TICK_SPACING: i32 = 60;
pub const DEFAULT_SQRT_PRICE_X96: u128 = 1u128 << 96; // Price = 1.0
pub const DEFAULT_TICK: i32 = 0;

/// Setup pool with default parameters, returning (pool, admin, token_a, token_b)
pub fn setup_pool(env: &Env) -> (SpotPoolClient<'_>, Address, Address, Address) {
    setup_custom_pool(env, DEFAULT_FEE_BPS, DEFAULT_TICK_SPACING, DEFAULT_SQRT_PRICE_X96)
}

/// Setup pool with custom parameters
pub fn setup_custom_pool(
    env: &Env,
    fee_bps: u32,
    tick_spacing: i32,
    sqrt_price_x96: u128,
) -> (SpotPoolClient<'_>, Address, Address, Address) {
    let admin = Address::generate(env);
    let token_a = create_token(env, &admin, 7);
    let token_b = create_token(env, &admin, 7);

    let pool_id = env.register(SpotPool, ());
    let client = SpotPoolClient::new(env, &pool_id);

    client.initialize(&admin, &token_a, &token_b, &fee_bps, &tick_spacing, &sqrt_price_x96);

    (client, admin, token_a, token_b)
}

/// Create a test token with the given decimals
pub fn create_token(env: &Env, admin: &Address, decimals: u32) -> Address {
    let token_id = env.register(TestToken, ());
    TestTokenClient::new(env, &token_id).initialize(
        admin,
        &decimals,
        &String::from_str(env, "Test Token"),
        &String::from_str(env, "TST"),
    );
    token_id
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    TestTokenClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, id: &Address) -> i128 {
    TestTokenClient::new(env, token).balance(id)
}

/// Fund a trader and approve the pool to pull `amount`
pub fn fund_trader(env: &Env, pool: &Address, token: &Address, amount: i128) -> Address {
    let trader = Address::generate(env);
    mint_tokens(env, token, &trader, amount);
    TestTokenClient::new(env, token).approve(&trader, pool, &amount, &1_000);
    trader
}
