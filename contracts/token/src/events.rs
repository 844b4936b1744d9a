//! Token events

use soroban_sdk::{Address, Env, Symbol};

pub fn emit_mint(env: &Env, admin: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "mint"), admin.clone(), to.clone()),
        amount,
    );
}

pub fn emit_approve(env: &Env, from: &Address, spender: &Address, amount: i128, expiration_ledger: u32) {
    env.events().publish(
        (Symbol::new(env, "approve"), from.clone(), spender.clone()),
        (amount, expiration_ledger),
    );
}

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        amount,
    );
}

pub fn emit_burn(env: &Env, from: &Address, amount: i128) {
    env.events().publish((Symbol::new(env, "burn"), from.clone()), amount);
}
