// Pool events
// All events use compact names to reduce storage/gas costs

use soroban_sdk::{Address, Env, Symbol};

/// Topics: ("PoolInit",)
/// Data: (token0, token1, fee_bps, tick_spacing, sqrt_price_x96)
pub fn emit_initialized(
    env: &Env,
    token0: &Address,
    token1: &Address,
    fee_bps: u32,
    tick_spacing: i32,
    sqrt_price_x96: u128,
) {
    env.events().publish(
        (Symbol::new(env, "PoolInit"),),
        (token0.clone(), token1.clone(), fee_bps, tick_spacing, sqrt_price_x96),
    );
}

/// Topics: ("Swap", sender)
/// Data: (amount_in, amount_out, zero_for_one)
pub fn emit_swap(env: &Env, sender: &Address, amount_in: i128, amount_out: i128, zero_for_one: bool) {
    env.events().publish(
        (Symbol::new(env, "Swap"), sender.clone()),
        (amount_in, amount_out, zero_for_one),
    );
}

/// Topics: ("PriceSet",)
/// Data: (sqrt_price_x96, tick)
pub fn emit_price_set(env: &Env, sqrt_price_x96: u128, tick: i32) {
    env.events().publish((Symbol::new(env, "PriceSet"),), (sqrt_price_x96, tick));
}

/// Topics: ("HaircutSet",)
/// Data: haircut_bps
pub fn emit_haircut_set(env: &Env, haircut_bps: u32) {
    env.events().publish((Symbol::new(env, "HaircutSet"),), haircut_bps);
}
