#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, Address, Env, String};
use rangekeeper_pool::{SpotPool, SpotPoolClient};
use rangekeeper_positions::{MintParams, PositionRegistry, PositionRegistryClient};
use rangekeeper_token::{TestToken, TestTokenClient};

pub const FEE_BPS: u32 = 30;
pub const TICK_SPACING: i32 = 60;
pub const UNIT_PRICE: u128 = 1u128 << 96;

pub struct Setup<'a> {
    pub registry: PositionRegistryClient<'a>,
    pub pool: SpotPoolClient<'a>,
    pub token0: Address,
    pub token1: Address,
    pub payer: Address,
}

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

pub fn balance(env: &Env, token: &Address, id: &Address) -> i128 {
    TestTokenClient::new(env, token).balance(id)
}

/// Registry plus a unit-price pool, with `payer` funded and approved for 10^9 of each token
pub fn setup(env: &Env) -> Setup<'_> {
    let admin = Address::generate(env);
    let token_a = create_token(env, &admin, 7);
    let token_b = create_token(env, &admin, 7);

    let pool_id = env.register(SpotPool, ());
    let pool = SpotPoolClient::new(env, &pool_id);
    pool.initialize(&admin, &token_a, &token_b, &FEE_BPS, &TICK_SPACING, &UNIT_PRICE);

    let registry_id = env.register(PositionRegistry, ());
    let registry = PositionRegistryClient::new(env, &registry_id);

    let config = pool.get_pool_config();
    let payer = Address::generate(env);
    for token in [&config.token0, &config.token1] {
        let client = TestTokenClient::new(env, token);
        client.mint(&payer, &1_000_000_000);
        client.approve(&payer, &registry_id, &1_000_000_000, &1_000);
    }

    Setup {
        registry,
        pool,
        token0: config.token0,
        token1: config.token1,
        payer,
    }
}

pub fn params(setup: &Setup, tick_lower: i32, tick_upper: i32, amount0: i128, amount1: i128) -> MintParams {
    MintParams {
        pool: setup.pool.address.clone(),
        recipient: setup.payer.clone(),
        tick_lower,
        tick_upper,
        amount0_desired: amount0,
        amount1_desired: amount1,
        amount0_min: 0,
        amount1_min: 0,
    }
}
