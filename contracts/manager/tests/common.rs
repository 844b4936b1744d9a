#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Events},
    Address, Env, String, Symbol, TryFromVal,
};
use rangekeeper_manager::{LiquidityManager, LiquidityManagerClient};
use rangekeeper_math::{pow10, sqrt_price_from_price};
use rangekeeper_pool::{SpotPool, SpotPoolClient};
use rangekeeper_positions::{PositionRegistry, PositionRegistryClient};
use rangekeeper_token::{TestToken, TestTokenClient};

// Test constants
pub const FEE_BPS: u32 = 30; // 0.30%
pub const TICK_SPACING: i32 = 60;
pub const SLIPPAGE_BPS: u32 = 100;
pub const TOLERANCE_BPS: u32 = 50;

pub const DECIMALS_A: u32 = 18;
pub const DECIMALS_B: u32 = 6;
pub const DECIMALS_C: u32 = 8;

/// `amount` whole tokens in smallest units
pub fn units(amount: i128, decimals: u32) -> i128 {
    amount * pow10(decimals).unwrap() as i128
}

pub struct Setup<'a> {
    pub env: &'a Env,
    pub manager: LiquidityManagerClient<'a>,
    pub registry: PositionRegistryClient<'a>,
    pub admin: Address,
    pub user: Address,
    pub token_a: Address,
    pub token_b: Address,
    pub token_c: Address,
    /// token_a / token_b pool
    pub pool_ab: SpotPoolClient<'a>,
    /// token_a / token_c pool
    pub pool_ac: SpotPoolClient<'a>,
}

pub fn create_token(env: &Env, admin: &Address, decimals: u32, symbol: &str) -> Address {
    let token_id = env.register(TestToken, ());
    TestTokenClient::new(env, &token_id).initialize(
        admin,
        &decimals,
        &String::from_str(env, symbol),
        &String::from_str(env, symbol),
    );
    token_id
}

pub fn token<'a>(env: &'a Env, token: &Address) -> TestTokenClient<'a> {
    TestTokenClient::new(env, token)
}

pub fn balance(env: &Env, token: &Address, id: &Address) -> i128 {
    TestTokenClient::new(env, token).balance(id)
}

/// Sqrt price for "1 token_a = num/den token_b", in the pool's sorted order
pub fn pool_sqrt_price(
    env: &Env,
    token_a: &Address,
    token_b: &Address,
    decimals_a: u32,
    decimals_b: u32,
    num: u128,
    den: u128,
) -> u128 {
    if token_a < token_b {
        sqrt_price_from_price(env, num, den, decimals_a, decimals_b).unwrap()
    } else {
        sqrt_price_from_price(env, den, num, decimals_b, decimals_a).unwrap()
    }
}

/// Deploy a pool at "1 token_a = price token_b" and seed it with reserves
pub fn create_pool<'a>(
    env: &'a Env,
    admin: &Address,
    token_a: &Address,
    token_b: &Address,
    decimals_a: u32,
    decimals_b: u32,
    price: u128,
) -> SpotPoolClient<'a> {
    let pool_id = env.register(SpotPool, ());
    let pool = SpotPoolClient::new(env, &pool_id);
    let sqrt_price = pool_sqrt_price(env, token_a, token_b, decimals_a, decimals_b, price, 1);
    pool.initialize(admin, token_a, token_b, &FEE_BPS, &TICK_SPACING, &sqrt_price);

    token(env, token_a).mint(&pool_id, &units(1_000_000, decimals_a));
    token(env, token_b).mint(&pool_id, &units(1_000_000_000, decimals_b));
    pool
}

/// Manager, registry, three tokens and two pools at price 1.
///
/// The user holds 1000 A, 1000 B and 100000 C and has approved nothing.
pub fn setup(env: &Env) -> Setup<'_> {
    env.mock_all_auths();

    let admin = Address::generate(env);
    let user = Address::generate(env);

    let token_a = create_token(env, &admin, DECIMALS_A, "TKA");
    let token_b = create_token(env, &admin, DECIMALS_B, "TKB");
    let token_c = create_token(env, &admin, DECIMALS_C, "TKC");

    let pool_ab = create_pool(env, &admin, &token_a, &token_b, DECIMALS_A, DECIMALS_B, 1);
    let pool_ac = create_pool(env, &admin, &token_a, &token_c, DECIMALS_A, DECIMALS_C, 1);

    let registry_id = env.register(PositionRegistry, ());
    let registry = PositionRegistryClient::new(env, &registry_id);

    let manager_id = env.register(LiquidityManager, ());
    let manager = LiquidityManagerClient::new(env, &manager_id);
    manager.initialize(&admin, &registry_id, &SLIPPAGE_BPS, &TOLERANCE_BPS);

    token(env, &token_a).mint(&user, &units(1_000, DECIMALS_A));
    token(env, &token_b).mint(&user, &units(1_000, DECIMALS_B));
    token(env, &token_c).mint(&user, &units(100_000, DECIMALS_C));

    Setup {
        env,
        manager,
        registry,
        admin,
        user,
        token_a,
        token_b,
        token_c,
        pool_ab,
        pool_ac,
    }
}

impl<'a> Setup<'a> {
    /// Let the manager pull `amount` of `token` from the user
    pub fn approve(&self, token_id: &Address, amount: i128) {
        token(self.env, token_id).approve(&self.user, &self.manager.address, &amount, &1_000);
    }

    /// Move a pool to "1 first = price second" (human units)
    pub fn set_price(&self, pool: &SpotPoolClient, decimals_a: u32, decimals_b: u32, price: u128) {
        let config = pool.get_pool_config();
        let sqrt_price = pool_sqrt_price(
            self.env,
            &config.token_a,
            &config.token_b,
            decimals_a,
            decimals_b,
            price,
            1,
        );
        pool.set_sqrt_price(&sqrt_price);
    }

    /// Manager holds nothing between invocations
    pub fn assert_manager_empty(&self) {
        for token_id in [&self.token_a, &self.token_b, &self.token_c] {
            assert_eq!(balance(self.env, token_id, &self.manager.address), 0);
        }
    }
}

/// Number of events whose first topic is `name`
pub fn count_events(env: &Env, name: &str) -> u32 {
    let wanted = Symbol::new(env, name);
    env.events()
        .all()
        .iter()
        .filter(|(_, topics, _)| {
            topics
                .get(0)
                .and_then(|topic| Symbol::try_from_val(env, &topic).ok())
                .map_or(false, |symbol| symbol == wanted)
        })
        .count() as u32
}
